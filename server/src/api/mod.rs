//! HTTP API for pipeline validation

pub mod routes;
pub mod server;

pub use server::ApiServer;
