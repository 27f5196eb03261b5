pub mod health;
pub mod pipelines;
