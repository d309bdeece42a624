//! Canonical digraph families on `n` vertices.
//!
//! Each family is built directly in the representation that suits it: the
//! complete digraph as a [`DenseDigraph`], cycles and paths as
//! [`SparseDigraph`]s.  Orders are unsigned, so negative `n` cannot be
//! expressed; `n = 0` is rejected wherever the family needs a vertex to wrap
//! around to or to end on.

use crate::{DenseDigraph, Error, Result, SparseDigraph, Vertex};

/// Every ordered pair `(x, y)`, self-loops included, so `size() == n²`.
/// `n = 0` yields the empty digraph.
#[tracing::instrument(level = "debug")]
pub fn complete_digraph(n: Vertex) -> DenseDigraph {
    DenseDigraph::complete(n)
}

/// A single directed cycle `0 → 1 → … → n-1 → 0`.
///
/// `n = 1` is a lone vertex with a self-loop.  `n = 0` has no vertex to close
/// the cycle on and fails with [`Error::EmptyVertexSet`].
#[tracing::instrument(level = "debug")]
pub fn cycle_digraph(n: Vertex) -> Result<SparseDigraph> {
    if n == 0 {
        tracing::debug!("no vertices to close a cycle on");
        return Err(Error::EmptyVertexSet { family: "cycle" });
    }
    if n == 1 {
        cov_mark::hit!(single_vertex_cycle_is_a_self_loop);
    }
    let adjacency: Vec<Vec<Vertex>> = (0..n)
        .map(|i| {
            let next = (u32::from(i) + 1) % u32::from(n);
            vec![next as Vertex]
        })
        .collect();
    SparseDigraph::from_adjacency_lists(n, adjacency)
}

/// A single directed path `0 → 1 → … → n-1`.
///
/// The last vertex gets an explicit empty out-neighbour list.  `n = 1` is one
/// isolated vertex.  `n = 0` has no last vertex and fails with
/// [`Error::EmptyVertexSet`].
#[tracing::instrument(level = "debug")]
pub fn path_digraph(n: Vertex) -> Result<SparseDigraph> {
    let last = n.checked_sub(1).ok_or_else(|| {
        tracing::debug!("no vertices to end a path on");
        Error::EmptyVertexSet { family: "path" }
    })?;
    if last == 0 {
        cov_mark::hit!(single_vertex_path_is_isolated);
    }
    let mut adjacency: Vec<Option<Vec<Vertex>>> = vec![None; usize::from(n)];
    for i in 0..last {
        adjacency[usize::from(i)] = Some(vec![i + 1]);
    }
    adjacency[usize::from(last)] = Some(Vec::new());
    SparseDigraph::new(n, adjacency)
}
