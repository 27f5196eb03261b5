//! Pipeline graph validation
//!
//! This crate turns a loosely-shaped node/edge description into a typed
//! graph and reports whether it is a directed acyclic graph:
//! - Record extraction from untrusted JSON values
//! - Adjacency and in-degree construction
//! - Kahn's algorithm for cycle detection

pub mod graph;
pub mod id;
pub mod record;
pub mod validator;

pub use graph::{Graph, Traversal, CycleError};
pub use id::NodeId;
pub use record::{Node, Edge, extract_node, extract_edge};
pub use validator::{validate, validate_optional, ValidationReport};
