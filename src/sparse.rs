//! Digraphs represented as [adjacency
//! lists](https://en.wikipedia.org/wiki/Adjacency_list).
//!
//! Each vertex owns the sequence of its out-neighbours exactly as it was
//! supplied: insertion order is kept, duplicates are kept and nothing is
//! sorted.  In-neighbours are not stored; they are recovered by scanning every
//! list, which costs `O(size)`.

use proptest::prelude::*;

use crate::dense::DenseDigraph;
use crate::{Digraph, Error, Result, Vertex};

/// An immutable digraph backed by one out-neighbour list per vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseDigraph {
    adjacency: Vec<Vec<Vertex>>,
}

impl SparseDigraph {
    /// Takes ownership of one entry per vertex: `adjacency[i]` holds the
    /// out-neighbours of vertex `i`.
    ///
    /// An isolated vertex must be given as `Some(vec![])`.  A `None` entry is
    /// rejected with [`Error::MissingAdjacency`] rather than read as empty, as
    /// is a wrong number of entries or a neighbour outside `0..order`.
    #[tracing::instrument(level = "trace", skip(adjacency))]
    pub fn new(order: Vertex, adjacency: Vec<Option<Vec<Vertex>>>) -> Result<Self> {
        check_length(order, adjacency.len())?;
        let adjacency = (0..order)
            .zip(adjacency)
            .map(|(vertex, neighbours)| {
                neighbours.ok_or_else(|| {
                    tracing::debug!(vertex, "adjacency list is absent");
                    Error::MissingAdjacency { vertex }
                })
            })
            .collect::<Result<Vec<Vec<Vertex>>>>()?;
        Self::from_adjacency_lists(order, adjacency)
    }

    /// Like [`SparseDigraph::new`] for callers that have a list for every
    /// vertex already.
    pub fn from_adjacency_lists(order: Vertex, adjacency: Vec<Vec<Vertex>>) -> Result<Self> {
        check_length(order, adjacency.len())?;
        for (from, neighbours) in (0..order).zip(&adjacency) {
            if let Some(&to) = neighbours.iter().find(|to| **to >= order) {
                tracing::debug!(from, to, order, "neighbour is out of range");
                return Err(Error::EdgeOutOfRange { from, to, order });
            }
        }
        Ok(Self { adjacency })
    }

    /// Borrowing counterpart of [`Digraph::out_neighbours`].
    pub fn out_neighbours_slice(&self, n: Vertex) -> Result<&[Vertex]> {
        self.adjacency
            .get(usize::from(n))
            .map(Vec::as_slice)
            .ok_or(Error::VertexOutOfRange {
                vertex: n,
                order: self.order(),
            })
    }

    /// Consume self and return the per-vertex out-neighbour lists.
    pub fn into_adjacency_lists(self) -> Vec<Vec<Vertex>> {
        self.adjacency
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex < self.order() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                order: self.order(),
            })
        }
    }
}

fn check_length(order: Vertex, len: usize) -> Result<()> {
    if len == usize::from(order) {
        Ok(())
    } else {
        tracing::debug!(order, len, "adjacency array has the wrong length");
        Err(Error::AdjacencyLengthMismatch { order, len })
    }
}

impl Digraph for SparseDigraph {
    #[inline]
    fn order(&self) -> Vertex {
        // Constructors guarantee the length fits.
        self.adjacency.len() as Vertex
    }

    /// Stored list entries, duplicates counted.
    fn size(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn contains_edge(&self, x: Vertex, y: Vertex) -> Result<bool> {
        self.check_vertex(y)?;
        Ok(self.out_neighbours_slice(x)?.contains(&y))
    }

    /// Insertion order.
    fn out_neighbours(&self, n: Vertex) -> Result<Vec<Vertex>> {
        Ok(self.out_neighbours_slice(n)?.to_vec())
    }

    /// One entry per occurrence of `n`, in ascending order of the scanned
    /// vertex.
    fn in_neighbours(&self, n: Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(n)?;
        let mut parents = Vec::new();
        for (u, neighbours) in (0..self.order()).zip(&self.adjacency) {
            parents.extend(neighbours.iter().filter(|v| **v == n).map(|_| u));
        }
        Ok(parents)
    }

    fn out_degree(&self, n: Vertex) -> Result<usize> {
        Ok(self.out_neighbours_slice(n)?.len())
    }
}

impl From<&DenseDigraph> for SparseDigraph {
    /// Out-neighbour lists come out ascending.
    fn from(dense: &DenseDigraph) -> Self {
        let matrix = dense.adjacency_matrix();
        let adjacency = (0..dense.order())
            .map(|u| matrix.iter_ones_at_row(u).collect())
            .collect();
        Self { adjacency }
    }
}

/// Random sparse digraphs with `0..max_order` vertices, each holding up to
/// `max_out_degree` out-neighbours (repeats allowed).
pub fn arb_sparse_digraph(max_order: Vertex, max_out_degree: usize) -> BoxedStrategy<SparseDigraph> {
    (0..max_order)
        .prop_flat_map(move |order| {
            // Never sampled when `order == 0`.
            let neighbours = proptest::collection::vec(0..order.max(1), 0..=max_out_degree);
            proptest::collection::vec(neighbours, usize::from(order))
                .prop_map(|adjacency| SparseDigraph { adjacency })
        })
        .boxed()
}
