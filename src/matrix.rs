use std::fmt;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Input rows have unequal lengths.
    NotRectangular,
    /// Operand dimensions (or a flat buffer's length) do not match.
    DimensionMismatch,
    /// Left operand's columns do not equal right operand's rows.
    MulDimensions,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::NotRectangular => write!(f, "matrix rows have unequal lengths"),
            MatrixError::DimensionMismatch => write!(f, "matrix dimensions do not match"),
            MatrixError::MulDimensions => {
                write!(f, "matrix dimensions are incompatible for multiplication")
            }
        }
    }
}

impl std::error::Error for MatrixError {}


/// Dense row-major matrix over f64. Sequential, single-purpose: enough
/// arithmetic to post-process bag-of-words vectors, nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix, MatrixError> {
        if rows.is_empty() {
            return Ok(Matrix::zeros(0, 0));
        }
        let cols = rows[0].len();
        if rows.iter().any(|row| row.len() != cols) {
            return Err(MatrixError::NotRectangular);
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            data,
            rows: rows.len(),
            cols,
        })
    }

    pub fn from_flat(data: Vec<f64>, rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch);
        }
        Ok(Matrix { data, rows, cols })
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.data[i * self.cols + j])
    }

    pub fn same_dims(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(
        &self,
        other: &Matrix,
        op: F,
    ) -> Result<Matrix, MatrixError> {
        if !self.same_dims(other) {
            return Err(MatrixError::DimensionMismatch);
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| op(*a, *b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn scalar_mul(&self, scalar: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::MulDimensions);
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * out.cols + j] = sum;
            }
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }
}
