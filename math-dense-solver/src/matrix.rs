//! Shape validation and small dense-matrix helpers

use crate::traits::RealField;
use crate::{Result, SolverError};
use ndarray::{Array1, Array2, s};

/// Check that `m` is square with at least one row, returning its dimension.
pub fn check_square<T: RealField>(m: &Array2<T>) -> Result<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(SolverError::DimensionMismatch {
            expected: rows,
            got: cols,
        });
    }
    if rows == 0 {
        return Err(SolverError::EmptyMatrix);
    }
    Ok(rows)
}

/// Check that a right-hand side matches the system dimension `n`.
pub fn check_rhs<T: RealField>(n: usize, b: &Array1<T>) -> Result<()> {
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(())
}

/// Top-left `size x size` block of `m`.
pub fn leading_submatrix<T: RealField>(m: &Array2<T>, size: usize) -> Array2<T> {
    m.slice(s![..size, ..size]).to_owned()
}

/// `m` with row `row` and column `col` removed.
pub fn minor<T: RealField>(m: &Array2<T>, row: usize, col: usize) -> Array2<T> {
    let (rows, cols) = m.dim();
    Array2::from_shape_fn((rows - 1, cols - 1), |(i, j)| {
        let src_i = if i < row { i } else { i + 1 };
        let src_j = if j < col { j } else { j + 1 };
        m[[src_i, src_j]]
    })
}

/// Owned transpose (standard layout).
pub fn transpose<T: RealField>(m: &Array2<T>) -> Array2<T> {
    m.t().as_standard_layout().into_owned()
}

/// Euclidean norm of the residual `A·x − b`.
pub fn residual_norm<T: RealField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> T {
    let ax = a.dot(x);
    ax.iter()
        .zip(b.iter())
        .map(|(&axi, &bi)| (axi - bi) * (axi - bi))
        .fold(T::zero(), |acc, v| acc + v)
        .sqrt()
}
