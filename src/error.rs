use thiserror::Error;

/// All possible errors in the sorter and its front-ends
#[derive(Error, Debug)]
pub enum TopoError {
    #[error("Cycle detected - topological sort not possible")]
    CycleDetected,

    #[error("Invalid edge list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("MCP error: {0}")]
    Mcp(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TopoError>;
