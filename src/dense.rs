//! Digraphs represented as square [adjacency
//! matrices](https://en.wikipedia.org/wiki/Adjacency_matrix).
//!
//! Cell `(x, y)` is set iff `(x, y)` is an edge.  Edge tests are a single
//! bitmap lookup and neighbour queries scan one row or one column, at the
//! cost of `O(order²)` addressable cells.  The bitmap stores only the set
//! cells, so an edgeless graph costs next to nothing while a complete graph
//! is a single run of ones.

use proptest::prelude::*;

use crate::logical_matrix::LogicalMatrix;
use crate::{Digraph, Error, Result, Vertex};

/// An immutable digraph backed by an adjacency matrix.
#[derive(Clone, PartialEq, Eq)]
pub struct DenseDigraph {
    adjacency_matrix: LogicalMatrix,
}

impl std::fmt::Debug for DenseDigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ones: Vec<(Vertex, Vertex)> = self.adjacency_matrix.iter_ones().collect();
        write!(
            f,
            "DenseDigraph::from_edges_iter({}, vec!{:?}).unwrap()",
            self.order(),
            ones
        )
    }
}

impl DenseDigraph {
    /// Copies a caller-supplied `order × order` boolean matrix.  `rows[x][y]`
    /// is `true` iff `(x, y)` is an edge.
    #[tracing::instrument(level = "trace", skip(rows))]
    pub fn from_matrix(order: Vertex, rows: &[Vec<bool>]) -> Result<Self> {
        let adjacency_matrix = LogicalMatrix::from_rows(order, rows).map_err(|e| {
            tracing::debug!(%e, "rejected adjacency matrix");
            e
        })?;
        Ok(Self { adjacency_matrix })
    }

    /// Construct a digraph from a pre-computed adjacency matrix.
    pub fn from_adjacency_matrix(adjacency_matrix: LogicalMatrix) -> Self {
        Self { adjacency_matrix }
    }

    /// Requires `x < order && y < order` for every edge `(x, y)`.  Repeated
    /// edges collapse into one.
    pub fn from_edges_iter<I: IntoIterator<Item = (Vertex, Vertex)>>(order: Vertex, edges: I) -> Result<Self> {
        let adjacency_matrix = LogicalMatrix::from_iter(order, edges)?;
        Ok(Self { adjacency_matrix })
    }

    /// Every ordered pair is an edge, self-loops included.
    pub fn complete(order: Vertex) -> Self {
        Self {
            adjacency_matrix: LogicalMatrix::filled(order),
        }
    }

    pub fn adjacency_matrix(&self) -> &LogicalMatrix {
        &self.adjacency_matrix
    }

    /// Consume self and return the underlying adjacency matrix.
    pub fn into_adjacency_matrix(self) -> LogicalMatrix {
        self.adjacency_matrix
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

impl Digraph for DenseDigraph {
    #[inline]
    fn order(&self) -> Vertex {
        self.adjacency_matrix.size()
    }

    fn size(&self) -> usize {
        self.adjacency_matrix.count_ones()
    }

    fn contains_edge(&self, x: Vertex, y: Vertex) -> Result<bool> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        Ok(self.adjacency_matrix.contains(x, y))
    }

    /// Ascending, from a left-to-right scan of row `n`.
    fn out_neighbours(&self, n: Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(n)?;
        Ok(self.adjacency_matrix.iter_ones_at_row(n).collect())
    }

    /// Ascending, from a top-to-bottom scan of column `n`.
    fn in_neighbours(&self, n: Vertex) -> Result<Vec<Vertex>> {
        self.check_vertex(n)?;
        Ok(self.adjacency_matrix.iter_ones_at_column(n).collect())
    }

    /// Row-major, straight off the bitmap.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = (Vertex, Vertex)> + '_> {
        Box::new(self.adjacency_matrix.iter_ones())
    }
}

/// Random dense digraphs with `0..max_order` vertices, each cell set with
/// probability one half.
pub fn arb_dense_digraph(max_order: Vertex) -> BoxedStrategy<DenseDigraph> {
    (0..max_order)
        .prop_flat_map(|order| {
            let cells = usize::from(order) * usize::from(order);
            proptest::collection::vec(any::<bool>(), cells).prop_map(move |cells| {
                let mut adjacency_matrix = LogicalMatrix::zeroed(order);
                let width = usize::from(order);
                for (index, _) in cells.iter().enumerate().filter(|(_, cell)| **cell) {
                    adjacency_matrix.insert((index / width) as Vertex, (index % width) as Vertex);
                }
                DenseDigraph::from_adjacency_matrix(adjacency_matrix)
            })
        })
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_rows() -> Vec<Vec<bool>> {
        vec![
            vec![false, true, true],
            vec![false, false, false],
            vec![true, true, false],
        ]
    }

    #[test]
    fn matrix_cells_are_edges() {
        let graph = DenseDigraph::from_matrix(3, &example_rows()).unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.contains_edge(0, 1), Ok(true));
        assert_eq!(graph.contains_edge(1, 0), Ok(false));
        assert_eq!(graph.out_neighbours(0), Ok(vec![1, 2]));
        assert_eq!(graph.out_neighbours(1), Ok(vec![]));
        assert_eq!(graph.in_neighbours(1), Ok(vec![0, 2]));
        assert_eq!(graph.in_neighbours(0), Ok(vec![2]));
    }

    #[test]
    fn out_of_range_vertices_are_reported() {
        let graph = DenseDigraph::from_matrix(3, &example_rows()).unwrap();
        let out_of_range = Err(Error::VertexOutOfRange { vertex: 3, order: 3 });
        assert_eq!(graph.contains_edge(0, 3), out_of_range);
        assert_eq!(graph.contains_edge(3, 0), out_of_range);
        assert_eq!(graph.out_neighbours(3), Err(Error::VertexOutOfRange { vertex: 3, order: 3 }));
        assert_eq!(graph.in_neighbours(7), Err(Error::VertexOutOfRange { vertex: 7, order: 3 }));
        assert_eq!(graph.out_degree(3), Err(Error::VertexOutOfRange { vertex: 3, order: 3 }));
        assert_eq!(graph.in_degree(3), Err(Error::VertexOutOfRange { vertex: 3, order: 3 }));
        assert_eq!(graph.out_degree(2), Ok(2));
        assert_eq!(graph.in_degree(2), Ok(1));
    }

    #[test]
    fn prebuilt_matrix_cannot_hold_cells_outside_the_graph() {
        let mut matrix = LogicalMatrix::zeroed(3);
        assert!(matrix.set(0, 5).is_err());
        assert!(matrix.set(5, 0).is_err());
        let graph = DenseDigraph::from_adjacency_matrix(matrix);
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.contains_edge(1, 2), Ok(false));
        assert_eq!(graph.iter_edges().count(), 0);
    }

    #[test]
    fn empty_matrix_is_the_empty_graph() {
        let graph = DenseDigraph::from_matrix(0, &[]).unwrap();
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.iter_edges().count(), 0);
        assert!(graph.out_neighbours(0).is_err());
    }

    #[test]
    fn misshapen_matrix_is_rejected() {
        let mut rows = example_rows();
        rows[2].pop();
        assert_eq!(
            DenseDigraph::from_matrix(3, &rows),
            Err(Error::MatrixShapeMismatch { order: 3, row: Some(2), len: 2 })
        );
    }

    #[test]
    fn debug_output_rebuilds_the_graph() {
        let graph = DenseDigraph::from_edges_iter(3, vec![(2, 0), (0, 1)]).unwrap();
        assert_eq!(
            format!("{:?}", graph),
            "DenseDigraph::from_edges_iter(3, vec![(0, 1), (2, 0)]).unwrap()"
        );
    }

    proptest! {
        #[test]
        fn size_counts_true_cells(rows in (0..10u16).prop_flat_map(|order| {
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), usize::from(order)), usize::from(order))
        })) {
            let order = rows.len() as Vertex;
            let graph = DenseDigraph::from_matrix(order, &rows)?;
            let true_cells = rows.iter().flatten().filter(|cell| **cell).count();
            prop_assert_eq!(graph.size(), true_cells);
            for x in 0..order {
                for y in 0..order {
                    prop_assert_eq!(graph.contains_edge(x, y)?, rows[usize::from(x)][usize::from(y)]);
                }
            }
        }

        #[test]
        fn queries_are_repeatable(graph in arb_dense_digraph(10)) {
            for u in graph.iter_vertices() {
                prop_assert_eq!(graph.out_neighbours(u)?, graph.out_neighbours(u)?);
                prop_assert_eq!(graph.in_neighbours(u)?, graph.in_neighbours(u)?);
            }
            prop_assert_eq!(graph.size(), graph.iter_edges().count());
        }
    }
}
