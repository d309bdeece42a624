//! Unlabeled [directed graphs](https://en.wikipedia.org/wiki/Directed_graph)
//! behind one query surface, [`Digraph`], with two storage strategies:
//!
//! * [`DenseDigraph`] keeps an adjacency matrix (one bit per existing edge in a
//!   roaring bitmap).  Edge tests are `O(1)`; suits dense graphs such as
//!   [`complete_digraph`].
//! * [`SparseDigraph`] keeps one out-neighbour list per vertex.  Memory is
//!   proportional to the number of edges; suits [`cycle_digraph`] and
//!   [`path_digraph`].
//!
//! Vertices are the integers `0..order`.  Graphs are built fully formed and
//! never mutated afterwards, so a `&G` may be shared freely between threads.
//!
//! ## Anti-features
//!
//! * No labels or weights on vertices or edges.
//! * No mutation after construction.
//! * No serde impls and no graph algorithms.

pub mod dense;
pub mod error;
pub mod factory;
pub mod logical_matrix;
pub mod sparse;

/// A vertex index.  Valid vertices of a graph `g` are `0..g.order()`.
pub type Vertex = u16;

/// Read-only queries shared by every digraph representation.
///
/// All vertex arguments must lie in `0..self.order()`; anything else is
/// reported as [`Error::VertexOutOfRange`] and leaves the graph untouched.
pub trait Digraph {
    /// Number of vertices.
    fn order(&self) -> Vertex;

    /// Number of edges.
    fn size(&self) -> usize;

    /// Whether `(x, y)` is an edge.  Direction matters: `(x, y)` and `(y, x)`
    /// are independent.
    fn contains_edge(&self, x: Vertex, y: Vertex) -> Result<bool>;

    /// Every `w` such that `(n, w)` is an edge, in a stable
    /// representation-defined order.
    fn out_neighbours(&self, n: Vertex) -> Result<Vec<Vertex>>;

    /// Every `w` such that `(w, n)` is an edge, in ascending order of `w`.
    fn in_neighbours(&self, n: Vertex) -> Result<Vec<Vertex>>;

    fn iter_vertices(&self) -> std::ops::Range<Vertex> {
        0..self.order()
    }

    /// All edges, grouped by source vertex in ascending order.  Within a
    /// group edges come in [`Digraph::out_neighbours`] order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = (Vertex, Vertex)> + '_> {
        // `u` ranges over `0..order()`, so `out_neighbours(u)` is always `Ok`.
        Box::new(self.iter_vertices().flat_map(move |u| {
            self.out_neighbours(u)
                .into_iter()
                .flatten()
                .map(move |v| (u, v))
        }))
    }

    fn out_degree(&self, n: Vertex) -> Result<usize> {
        Ok(self.out_neighbours(n)?.len())
    }

    fn in_degree(&self, n: Vertex) -> Result<usize> {
        Ok(self.in_neighbours(n)?.len())
    }
}

pub use dense::{arb_dense_digraph, DenseDigraph};
pub use error::{Error, Result};
pub use factory::{complete_digraph, cycle_digraph, path_digraph};
pub use logical_matrix::LogicalMatrix;
pub use sparse::{arb_sparse_digraph, SparseDigraph};
