//! Dense row-major matrices
//!
//! Shapes:
//!   (n x k) · (k x m) = (n x m)
//!   outer(a, b)[i][j] = a[i] * b[j]

use crate::error::{PrimerError, PrimerResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Deserialization checks that `data` holds exactly `rows * cols` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Serialized form of [`Matrix`], unchecked
#[derive(Deserialize)]
struct MatrixData {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixData> for Matrix {
    type Error = PrimerError;

    fn try_from(raw: MatrixData) -> PrimerResult<Self> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.data.len()) {
            return Err(PrimerError::shape(
                format!("{}x{} entries", raw.rows, raw.cols),
                format!("{} entries", raw.data.len()),
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

impl Matrix {
    /// Create a rows x cols matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build from nested rows; every row must have the same length
    pub fn from_rows(rows: &[Vec<f64>]) -> PrimerResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PrimerError::shape(
                    format!("{cols} columns"),
                    format!("{} columns in row {i}", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// A single-row matrix
    pub fn row_vector(values: &[f64]) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        }
    }

    /// Entries drawn uniformly from [0, 1)
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Self { rows, cols, data }
    }

    /// Outer product of two vectors: a.len() x b.len()
    pub fn outer(a: &[f64], b: &[f64]) -> Self {
        let mut data = Vec::with_capacity(a.len() * b.len());
        for x in a {
            for y in b {
                data.push(x * y);
            }
        }
        Self {
            rows: a.len(),
            cols: b.len(),
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Row-major entries
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Matrix product self · other
    pub fn matmul(&self, other: &Matrix) -> PrimerResult<Matrix> {
        if self.cols != other.rows {
            return Err(PrimerError::shape(
                format!("{} rows", self.cols),
                format!("{} rows", other.rows),
            ));
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    result.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(result)
    }

    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        result
    }

    /// Apply `f` to every entry
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// self -= scale * other, entry-wise
    pub fn sub_scaled(&mut self, other: &Matrix, scale: f64) -> PrimerResult<()> {
        if self.shape() != other.shape() {
            return Err(PrimerError::shape(
                format!("{:?}", self.shape()),
                format!("{:?}", other.shape()),
            ));
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= scale * b;
        }
        Ok(())
    }
}
