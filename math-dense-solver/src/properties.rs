//! Matrix property probes used to pick a factorization
//!
//! - [`is_symmetric`]: exact comparison of mirrored entries
//! - [`is_symmetric_with_tolerance`]: opt-in relative comparison
//! - [`is_positive_definite`]: Sylvester's criterion on leading principal minors

use crate::determinant::{CofactorExpansion, DeterminantStrategy};
use crate::matrix::leading_submatrix;
use crate::traits::RealField;
use ndarray::Array2;

/// Check whether `m` equals its transpose.
///
/// Entries are compared with exact equality, so data carrying rounding noise
/// is reported as non-symmetric. Use [`is_symmetric_with_tolerance`] when that
/// is not wanted. Non-square matrices are never symmetric.
pub fn is_symmetric<T: RealField>(m: &Array2<T>) -> bool {
    let (rows, cols) = m.dim();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in (i + 1)..cols {
            if m[[i, j]] != m[[j, i]] {
                return false;
            }
        }
    }
    true
}

/// Check symmetry up to a relative tolerance.
///
/// A pair passes when `|m[i][j] − m[j][i]| <= tol · max(1, |m[i][j]|, |m[j][i]|)`.
pub fn is_symmetric_with_tolerance<T: RealField>(m: &Array2<T>, tol: T) -> bool {
    let (rows, cols) = m.dim();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in (i + 1)..cols {
            let upper = m[[i, j]];
            let lower = m[[j, i]];
            let scale = T::one().max(upper.abs()).max(lower.abs());
            if !(upper - lower).is_zero_approx(tol * scale) {
                return false;
            }
        }
    }
    true
}

/// Sylvester's criterion with cofactor-expansion determinants.
///
/// Every leading principal minor must be strictly positive; a zero minor fails.
/// See [`is_positive_definite_with`] to use another determinant algorithm.
pub fn is_positive_definite<T: RealField>(m: &Array2<T>) -> bool {
    is_positive_definite_with(m, &CofactorExpansion)
}

/// Sylvester's criterion with a caller-chosen determinant algorithm.
pub fn is_positive_definite_with<T, D>(m: &Array2<T>, strategy: &D) -> bool
where
    T: RealField,
    D: DeterminantStrategy,
{
    let (rows, cols) = m.dim();
    if rows != cols || rows == 0 {
        return false;
    }

    for size in 1..=rows {
        let minor = match strategy.determinant(&leading_submatrix(m, size)) {
            Ok(det) => det,
            Err(_) => return false,
        };
        if !(minor > T::zero()) {
            log::debug!(
                "Leading minor of order {} is {} ({} determinant): not positive definite",
                size,
                minor,
                strategy.name()
            );
            return false;
        }
    }
    true
}
