use crate::error::Result;
use crate::graph;
use crate::models::{Edge, SortedGraph};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Handle the sort command
pub fn handle_sort(file: Option<&Path>, seed: Option<u64>, json: bool) -> Result<()> {
    let input = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let edges: Vec<Edge> = serde_json::from_str(&input)?;
    tracing::debug!(edge_count = edges.len(), "sorting edge list");

    let order = match seed {
        Some(seed) => graph::toposort_with(&edges, &mut fastrand::Rng::with_seed(seed))?,
        None => graph::toposort(&edges)?,
    };

    if json {
        println!("{}", serde_json::to_string(&SortedGraph { order })?);
    } else {
        for node in &order {
            println!("{node}");
        }
    }

    Ok(())
}
