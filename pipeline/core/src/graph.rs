//! Adjacency construction and Kahn traversal

use std::collections::{HashMap, VecDeque};
use thiserror::Error;
use crate::id::NodeId;
use crate::record::{Node, Edge};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("graph contains a cycle: {} node(s) never reached in-degree zero", blocked.len())]
pub struct CycleError {
    pub blocked: Vec<NodeId>,
}

/// Directed graph over the distinct identifiers of a node list.
///
/// Identifiers keep the order in which they were first seen. Every key of the
/// adjacency and in-degree tables is one of those identifiers; edges touching
/// anything else are dropped while building.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    successors: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    edge_count: usize,
    dangling_edges: usize,
}

/// Outcome of a single Kahn pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Visit order. A topological order when `blocked` is empty.
    pub order: Vec<NodeId>,
    /// Nodes never visited, in first-seen order: members of a cycle and
    /// nodes only reachable through one.
    pub blocked: Vec<NodeId>,
}

impl Traversal {
    pub fn is_acyclic(&self) -> bool {
        self.blocked.is_empty()
    }
}

impl Graph {
    pub fn build<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Graph::default();

        for node in nodes {
            if graph.index.contains_key(&node.id) {
                continue;
            }
            graph.index.insert(node.id.clone(), graph.ids.len());
            graph.ids.push(node.id);
            graph.successors.push(Vec::new());
            graph.in_degree.push(0);
        }

        for edge in edges {
            let endpoints = (graph.index.get(&edge.source), graph.index.get(&edge.target));
            let (Some(&from), Some(&to)) = endpoints else {
                graph.dangling_edges += 1;
                continue;
            };
            // Parallel edges are kept; each one counts towards the in-degree.
            graph.successors[from].push(to);
            graph.in_degree[to] += 1;
            graph.edge_count += 1;
        }

        graph
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Targets of the outgoing edges of `id`, in insertion order
    pub fn successors(&self, id: &NodeId) -> Option<Vec<&NodeId>> {
        let i = *self.index.get(id)?;
        Some(self.successors[i].iter().map(|&j| &self.ids[j]).collect())
    }

    pub fn in_degree(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).map(|&i| self.in_degree[i])
    }

    /// Number of edges that made it into the adjacency table
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges dropped for naming an unknown node
    pub fn dangling_edges(&self) -> usize {
        self.dangling_edges
    }

    pub fn traverse(&self) -> Traversal {
        let mut remaining = self.in_degree.clone();
        let mut visited = vec![false; self.ids.len()];
        let mut order = Vec::with_capacity(self.ids.len());

        let mut queue: VecDeque<usize> = remaining
            .iter()
            .enumerate()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(i, _)| i)
            .collect();

        while let Some(current) = queue.pop_front() {
            visited[current] = true;
            order.push(self.ids[current].clone());
            for &next in &self.successors[current] {
                remaining[next] -= 1;
                if remaining[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        let blocked = self
            .ids
            .iter()
            .zip(&visited)
            .filter(|&(_, &seen)| !seen)
            .map(|(id, _)| id.clone())
            .collect();

        Traversal { order, blocked }
    }

    pub fn is_acyclic(&self) -> bool {
        self.traverse().is_acyclic()
    }

    pub fn topological_order(&self) -> Result<Vec<NodeId>, CycleError> {
        let traversal = self.traverse();
        if traversal.is_acyclic() {
            Ok(traversal.order)
        } else {
            Err(CycleError { blocked: traversal.blocked })
        }
    }
}
