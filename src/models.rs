use serde::{Deserialize, Serialize};

/// A dependency edge as it appears on the wire: `[from, to]`, meaning
/// `from` must come before `to`.
pub type Edge = (String, String);

/// Successful sort output exposed at the boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortedGraph {
    pub order: Vec<String>,
}
