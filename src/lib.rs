pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod mcp;
pub mod models;

pub use error::{Result, TopoError};
pub use graph::{toposort, toposort_with};
pub use models::*;
