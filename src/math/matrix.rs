use serde::{Serialize, Deserialize};

/// Row-major dense matrix.
///
/// Weights of a dense layer are stored as `(input_size, size)`, so a forward
/// pass is a row-vector times matrix product (`x · W`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![0.0; rows * cols]
        }
    }

    /// Builds a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Matrix {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let n_rows = rows.len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        debug_assert_eq!(data.len(), n_rows * cols);
        Matrix { rows: n_rows, cols, data }
    }

    /// True when `data` holds exactly `rows * cols` values.
    pub fn is_consistent(&self) -> bool {
        self.rows.checked_mul(self.cols) == Some(self.data.len())
    }

    /// Row vector times matrix: returns `x · self`, a vector of length `cols`.
    ///
    /// `x.len()` must equal `rows`.
    pub fn left_mul(&self, x: &[f64]) -> Vec<f64> {
        debug_assert_eq!(x.len(), self.rows);
        let mut out = vec![0.0; self.cols];
        for (xi, row) in x.iter().zip(self.data.chunks_exact(self.cols.max(1))) {
            if *xi == 0.0 {
                continue;
            }
            for (o, w) in out.iter_mut().zip(row) {
                *o += xi * w;
            }
        }
        out
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_mul_matches_hand_computation() {
        // [1 2] · [[1 2 3], [4 5 6]] = [9 12 15]
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.left_mul(&[1.0, 2.0]), vec![9.0, 12.0, 15.0]);
        assert_eq!((m.rows, m.cols), (2, 3));
    }

    #[test]
    fn inconsistent_matrix_is_detected() {
        let m = Matrix { rows: 2, cols: 2, data: vec![1.0; 3] };
        assert!(!m.is_consistent());
        let huge = Matrix { rows: usize::MAX, cols: 2, data: vec![] };
        assert!(!huge.is_consistent());
    }
}
