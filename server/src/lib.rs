//! Pipeline validation service
//!
//! This crate exposes the pipeline graph validator over HTTP, together with
//! the configuration, CLI and error plumbing of the server binary.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{PipelineError, Result};
