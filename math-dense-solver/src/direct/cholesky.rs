//! Cholesky decomposition solver
//!
//! Factorizes a symmetric positive definite matrix as `A = L·Lᵗ`.
//! Positive definiteness is the caller's responsibility; a non-positive
//! radicand is reported as [`SolverError::CholeskyDomain`].

use crate::direct::triangular::{back_substitute, forward_substitute};
use crate::matrix::{check_square, transpose};
use crate::traits::RealField;
use crate::{Result, SolverError};
use ndarray::{Array1, Array2};

/// Cholesky factorization result
#[derive(Debug, Clone)]
pub struct CholeskyFactorization<T: RealField> {
    /// Lower triangular factor
    l: Array2<T>,
}

impl<T: RealField> CholeskyFactorization<T> {
    /// The lower-triangular factor L.
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// The upper-triangular factor Lᵗ.
    pub fn lt(&self) -> Array2<T> {
        transpose(&self.l)
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.l.nrows()
    }

    /// Solve Ax = b via `L·y = b` then `Lᵗ·x = y`.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        let y = forward_substitute(&self.l, b)?;
        back_substitute(&self.lt(), &y)
    }

    /// Determinant = product of diagonal².
    pub fn det(&self) -> T {
        self.l
            .diag()
            .iter()
            .fold(T::one(), |acc, &l_ii| acc * l_ii * l_ii)
    }

    /// Rebuild `L·Lᵗ`.
    pub fn reconstruct(&self) -> Array2<T> {
        self.l.dot(&self.l.t())
    }
}

/// Compute the Cholesky factor of a symmetric positive definite matrix.
///
/// Only the lower triangle of `a` is read.
pub fn cholesky_decompose<T: RealField>(a: &Array2<T>) -> Result<CholeskyFactorization<T>> {
    let n = check_square(a)?;
    let mut l = Array2::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let mut sum = T::zero();
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }

            if i == j {
                let radicand = a[[i, i]] - sum;
                // Also rejects NaN
                if !(radicand > T::zero()) {
                    return Err(SolverError::CholeskyDomain {
                        index: i,
                        radicand: radicand.to_f64_lossy(),
                    });
                }
                l[[i, i]] = radicand.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    Ok(CholeskyFactorization { l })
}
