use crate::error::{Result, TopoError};
use indexmap::IndexMap;
use std::hash::Hash;

/// Topologically sort a graph given as a list of `(from, to)` edges,
/// breaking ties with a process-level random generator.
///
/// Equally-valid next nodes are chosen uniformly at random, so repeated
/// calls on the same graph may return different (still valid) orders.
pub fn toposort<N>(edges: &[(N, N)]) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    toposort_with(edges, &mut fastrand::Rng::new())
}

/// Kahn's algorithm with a randomized tie-break drawn from `rng`.
///
/// Nodes are implicitly declared by the edges they appear in. Duplicate
/// edges count independently toward in-degree; a self-loop keeps its node's
/// in-degree above zero forever, so it is always reported as a cycle.
/// A fixed-seed `rng` replays the same order on the same input.
pub fn toposort_with<N>(edges: &[(N, N)], rng: &mut fastrand::Rng) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    // Build adjacency list and in-degree map. Every endpoint gets an entry
    // before any increment, so isolated-from and sink nodes hold explicit
    // zeros.
    let mut adjacency: IndexMap<N, Vec<N>> = IndexMap::new();
    let mut in_degree: IndexMap<N, usize> = IndexMap::new();

    for (u, v) in edges {
        adjacency.entry(v.clone()).or_default();
        in_degree.entry(u.clone()).or_insert(0);
        *in_degree.entry(v.clone()).or_insert(0) += 1;
        adjacency.entry(u.clone()).or_default().push(v.clone());
    }

    // Seed the ready set with in-degree 0 nodes
    let mut ready: Vec<N> = Vec::new();
    for (node, &degree) in &in_degree {
        if degree == 0 {
            ready.push(node.clone());
        }
    }

    // Kahn's algorithm; swap_remove keeps random extraction O(1)
    let mut order: Vec<N> = Vec::with_capacity(in_degree.len());

    while !ready.is_empty() {
        let node = ready.swap_remove(rng.usize(..ready.len()));

        if let Some(successors) = adjacency.get(&node) {
            for succ in successors {
                if let Some(degree) = in_degree.get_mut(succ) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(succ.clone());
                    }
                }
            }
        }

        order.push(node);
    }

    // Any node left unemitted sits on a cycle, directly or behind one
    if order.len() != in_degree.len() {
        return Err(TopoError::CycleDetected);
    }

    Ok(order)
}
