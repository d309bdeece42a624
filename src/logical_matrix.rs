use roaring::{MultiOps, RoaringBitmap};

use crate::{Error, Result, Vertex};

/// A zero-indexed square matrix of booleans stored in [row-major
/// order](https://en.wikipedia.org/wiki/Row-_and_column-major_order) as a
/// roaring bitmap with one bit per `true` cell.
#[derive(Clone, Debug)]
pub struct LogicalMatrix {
    size: Vertex,
    matrix: RoaringBitmap,
}

impl Eq for LogicalMatrix {}

impl PartialEq for LogicalMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.matrix == other.matrix
    }
}

// `size * size` never exceeds `u32::MAX` for a `u16` size.
#[inline]
pub(crate) fn index_from_row_column(row: Vertex, column: Vertex, size: Vertex) -> u32 {
    u32::from(row) * u32::from(size) + u32::from(column)
}

#[inline]
pub(crate) fn row_column_from_index(index: u32, size: Vertex) -> (Vertex, Vertex) {
    let size = u32::from(size);
    ((index / size) as Vertex, (index % size) as Vertex)
}

impl LogicalMatrix {
    pub fn zeroed(size: Vertex) -> Self {
        Self {
            size,
            matrix: RoaringBitmap::new(),
        }
    }

    /// Every cell set, the diagonal included.
    pub fn filled(size: Vertex) -> Self {
        let mut matrix = RoaringBitmap::new();
        matrix.insert_range(0..u32::from(size) * u32::from(size));
        Self { size, matrix }
    }

    /// Copies `rows[i][j]` into cell `(i, j)`.  `rows` must be exactly
    /// `size × size`.
    pub fn from_rows(size: Vertex, rows: &[Vec<bool>]) -> Result<Self> {
        if rows.len() != usize::from(size) {
            return Err(Error::MatrixShapeMismatch {
                order: size,
                row: None,
                len: rows.len(),
            });
        }
        let mut matrix = Self::zeroed(size);
        for (i, row) in (0..size).zip(rows) {
            if row.len() != usize::from(size) {
                return Err(Error::MatrixShapeMismatch {
                    order: size,
                    row: Some(i),
                    len: row.len(),
                });
            }
            for (j, _) in (0..size).zip(row).filter(|(_, cell)| **cell) {
                matrix.insert(i, j);
            }
        }
        Ok(matrix)
    }

    /// Requires `i < size && j < size` for every `(i, j)` in `ones`.
    pub fn from_iter<I: IntoIterator<Item = (Vertex, Vertex)>>(size: Vertex, ones: I) -> Result<Self> {
        let mut matrix = Self::zeroed(size);
        for (i, j) in ones {
            matrix.set(i, j)?;
        }
        Ok(matrix)
    }

    #[inline]
    pub fn size(&self) -> Vertex {
        self.size
    }

    fn check_cell(&self, i: Vertex, j: Vertex) -> Result<()> {
        if i < self.size && j < self.size {
            Ok(())
        } else {
            Err(Error::EdgeOutOfRange {
                from: i,
                to: j,
                order: self.size,
            })
        }
    }

    pub fn get(&self, i: Vertex, j: Vertex) -> Result<bool> {
        self.check_cell(i, j)?;
        Ok(self.contains(i, j))
    }

    pub fn set(&mut self, i: Vertex, j: Vertex) -> Result<()> {
        self.check_cell(i, j)?;
        self.insert(i, j);
        Ok(())
    }

    /// Callers check `i < size && j < size`.
    #[inline]
    pub(crate) fn contains(&self, i: Vertex, j: Vertex) -> bool {
        self.matrix.contains(index_from_row_column(i, j, self.size))
    }

    /// Callers check `i < size && j < size`.
    #[inline]
    pub(crate) fn insert(&mut self, i: Vertex, j: Vertex) {
        let index = index_from_row_column(i, j, self.size);
        self.matrix.insert(index);
    }

    pub fn count_ones(&self) -> usize {
        self.matrix.len() as usize
    }

    pub fn iter_ones(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.matrix
            .iter()
            .map(|index| row_column_from_index(index, self.size))
    }

    /// Columns set in row `i`, left to right.
    pub fn iter_ones_at_row(&self, i: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.size).filter(move |j| self.contains(i, *j))
    }

    /// Rows set in column `j`, top to bottom.
    pub fn iter_ones_at_column(&self, j: Vertex) -> impl Iterator<Item = Vertex> {
        let size = self.size;
        let mask = RoaringBitmap::from_iter((0..size).map(|k| index_from_row_column(k, j, size)));
        let ones = [&self.matrix, &mask].intersection();
        ones.into_iter().map(move |index| row_column_from_index(index, size).0)
    }
}

#[cfg(test)]
mod tests {
    use crate::logical_matrix::*;

    #[test]
    fn positive_test_3x3_matrix() {
        let mut matrix = LogicalMatrix::zeroed(3);
        assert_eq!(matrix.get(0, 1), Ok(false));
        assert_eq!(matrix.iter_ones().count(), 0);

        matrix.set(0, 1).unwrap();
        matrix.set(2, 2).unwrap();
        assert_eq!(matrix.get(0, 1), Ok(true));
        assert_eq!(matrix.iter_ones().collect::<Vec<_>>(), vec![(0, 1), (2, 2)]);
        assert_eq!(matrix.count_ones(), 2);
    }

    #[test]
    fn filled_includes_diagonal() {
        let matrix = LogicalMatrix::filled(3);
        assert_eq!(matrix.count_ones(), 9);
        assert!((0..3).all(|i| matrix.get(i, i) == Ok(true)));
        assert_eq!(LogicalMatrix::filled(0).count_ones(), 0);
    }

    #[test]
    fn ones_at_row() {
        let matrix = LogicalMatrix::from_iter(3, vec![(0, 2), (0, 0), (1, 0)]).unwrap();
        assert_eq!(Vec::from_iter(matrix.iter_ones_at_row(0)), vec![0, 2]);
        assert_eq!(Vec::from_iter(matrix.iter_ones_at_row(1)), vec![0]);
        assert_eq!(Vec::from_iter(matrix.iter_ones_at_row(2)), Vec::<Vertex>::new());
    }

    #[test]
    fn ones_at_column() {
        let matrix = LogicalMatrix::from_iter(5, vec![(4, 2), (1, 2), (2, 2), (3, 1)]).unwrap();
        assert_eq!(matrix.iter_ones_at_column(0).count(), 0);
        assert_eq!(Vec::from_iter(matrix.iter_ones_at_column(1)), vec![3]);
        assert_eq!(Vec::from_iter(matrix.iter_ones_at_column(2)), vec![1, 2, 4]);
        assert_eq!(matrix.iter_ones_at_column(4).count(), 0);
    }

    #[test]
    fn from_rows_copies_cells() {
        let rows = vec![vec![false, true], vec![true, true]];
        let matrix = LogicalMatrix::from_rows(2, &rows).unwrap();
        assert_eq!(matrix.iter_ones().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn from_rows_rejects_wrong_shapes() {
        assert_eq!(
            LogicalMatrix::from_rows(2, &[vec![true, true]]),
            Err(Error::MatrixShapeMismatch { order: 2, row: None, len: 1 })
        );
        assert_eq!(
            LogicalMatrix::from_rows(2, &[vec![true, true], vec![true]]),
            Err(Error::MatrixShapeMismatch { order: 2, row: Some(1), len: 1 })
        );
    }

    #[test]
    fn from_iter_rejects_out_of_range() {
        assert_eq!(
            LogicalMatrix::from_iter(2, vec![(0, 2)]),
            Err(Error::EdgeOutOfRange { from: 0, to: 2, order: 2 })
        );
    }

    #[test]
    fn cells_outside_the_matrix_are_rejected() {
        let mut matrix = LogicalMatrix::from_iter(3, vec![(1, 2)]).unwrap();
        assert_eq!(matrix.set(0, 5), Err(Error::EdgeOutOfRange { from: 0, to: 5, order: 3 }));
        assert_eq!(matrix.set(5, 0), Err(Error::EdgeOutOfRange { from: 5, to: 0, order: 3 }));
        assert_eq!(matrix.get(0, 5), Err(Error::EdgeOutOfRange { from: 0, to: 5, order: 3 }));
        assert_eq!(matrix.get(1, 2), Ok(true));
        assert_eq!(matrix.iter_ones().collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(matrix.count_ones(), 1);
    }
}
