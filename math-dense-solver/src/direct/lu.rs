//! LU decomposition solver
//!
//! Provides Doolittle factorization `A = L·U` with unit lower-triangular `L`.
//! No pivoting is performed: the input must be pivot-safe in its given row
//! order (e.g. diagonally dominant). A zero pivot aborts the factorization.

use crate::direct::triangular::{back_substitute, forward_substitute};
use crate::matrix::check_square;
use crate::traits::RealField;
use crate::{Result, SolverError};
use ndarray::{Array1, Array2};

/// LU factorization result
///
/// Stores the L and U factors separately
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Unit lower triangular factor
    l: Array2<T>,
    /// Upper triangular factor
    u: Array2<T>,
}

impl<T: RealField> LuFactorization<T> {
    /// The unit lower-triangular factor L.
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// The upper-triangular factor U.
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.u.nrows()
    }

    /// Consume the factorization, returning `(L, U)`.
    pub fn into_parts(self) -> (Array2<T>, Array2<T>) {
        (self.l, self.u)
    }

    /// Solve Ax = b using the pre-computed factors
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        let y = forward_substitute(&self.l, b)?;
        back_substitute(&self.u, &y)
    }

    /// Determinant = product of U's diagonal.
    pub fn det(&self) -> T {
        self.u.diag().iter().fold(T::one(), |acc, &u_ii| acc * u_ii)
    }

    /// Rebuild `L·U`.
    pub fn reconstruct(&self) -> Array2<T> {
        self.l.dot(&self.u)
    }
}

/// Compute the Doolittle LU factorization without pivoting.
///
/// Proceeds column by column: the U entries of column `j` (rows `0..=j`) first,
/// then the L entries below the diagonal, which need `U[j][j]` as divisor.
pub fn lu_decompose<T: RealField>(a: &Array2<T>) -> Result<LuFactorization<T>> {
    let n = check_square(a)?;
    let mut l = Array2::eye(n);
    let mut u = Array2::zeros((n, n));

    for j in 0..n {
        for i in 0..=j {
            let mut sum = T::zero();
            for k in 0..i {
                sum += l[[i, k]] * u[[k, j]];
            }
            u[[i, j]] = a[[i, j]] - sum;
        }

        let pivot = u[[j, j]];
        if pivot == T::zero() {
            log::debug!("Zero pivot at column {} of {}x{} LU factorization", j, n, n);
            return Err(SolverError::SingularOrNeedsPivoting { column: j });
        }

        for i in (j + 1)..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum += l[[i, k]] * u[[k, j]];
            }
            l[[i, j]] = (a[[i, j]] - sum) / pivot;
        }
    }

    Ok(LuFactorization { l, u })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_lu_factors() {
        let a = array![[4.0_f64, 3.0], [6.0, 3.0]];
        let lu = lu_decompose(&a).expect("LU should succeed");

        assert_eq!(lu.l(), &array![[1.0, 0.0], [1.5, 1.0]]);
        assert_eq!(lu.u(), &array![[4.0, 3.0], [0.0, -1.5]]);
        assert_relative_eq!(lu.det(), -6.0);
    }

    #[test]
    fn test_lu_reconstruct() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0],];
        let lu = lu_decompose(&a).expect("Factorization should succeed");

        let reconstructed = lu.reconstruct();
        for i in 0..3 {
            assert_eq!(lu.l()[[i, i]], 1.0);
            for j in 0..3 {
                assert_relative_eq!(reconstructed[[i, j]], a[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_lu_factorize_and_solve() {
        let a = array![[4.0_f64, 1.0, 0.0], [2.0, 5.0, 1.0], [1.0, 0.0, 3.0],];
        let factorization = lu_decompose(&a).expect("Factorization should succeed");

        // Solve multiple RHS
        let b1 = array![1.0_f64, 2.0, 3.0];
        let x1 = factorization.solve(&b1).expect("Solve should succeed");

        let ax1 = a.dot(&x1);
        for i in 0..3 {
            assert_relative_eq!(ax1[i], b1[i], epsilon = 1e-10);
        }

        let b2 = array![4.0_f64, 5.0, 6.0];
        let x2 = factorization.solve(&b2).expect("Solve should succeed");

        let ax2 = a.dot(&x2);
        for i in 0..3 {
            assert_relative_eq!(ax2[i], b2[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_leading_pivot() {
        // Nonsingular, but needs a row swap
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        assert!(matches!(
            lu_decompose(&a),
            Err(SolverError::SingularOrNeedsPivoting { column: 0 })
        ));
    }

    #[test]
    fn test_lu_singular() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0],]; // Singular matrix
        assert!(matches!(
            lu_decompose(&a),
            Err(SolverError::SingularOrNeedsPivoting { column: 1 })
        ));
    }

    #[test]
    fn test_lu_non_square() {
        let a = Array2::<f64>::zeros((3, 2));
        assert!(matches!(
            lu_decompose(&a),
            Err(SolverError::DimensionMismatch { .. })
        ));
    }
}
