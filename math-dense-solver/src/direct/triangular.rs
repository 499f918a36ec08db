//! Forward and backward substitution
//!
//! Only the relevant triangle of the operand is read, so a full matrix may be
//! passed and its other half is ignored.

use crate::matrix::{check_rhs, check_square};
use crate::traits::RealField;
use crate::{Result, SolverError};
use ndarray::{Array1, Array2};

/// Solve `L·y = b` for lower-triangular `L`.
///
/// Fails with [`SolverError::SingularTriangularSystem`] on a zero diagonal entry.
pub fn forward_substitute<T: RealField>(l: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let n = check_square(l)?;
    check_rhs(n, b)?;

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let l_ii = l[[i, i]];
        if l_ii == T::zero() {
            return Err(SolverError::SingularTriangularSystem { index: i });
        }
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * y[k];
        }
        y[i] = sum / l_ii;
    }
    Ok(y)
}

/// Solve `U·x = y` for upper-triangular `U`.
///
/// Works the same for a genuine `U` factor and for the transpose of a Cholesky `L`.
pub fn back_substitute<T: RealField>(u: &Array2<T>, y: &Array1<T>) -> Result<Array1<T>> {
    let n = check_square(u)?;
    check_rhs(n, y)?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let u_ii = u[[i, i]];
        if u_ii == T::zero() {
            return Err(SolverError::SingularTriangularSystem { index: i });
        }
        let mut sum = y[i];
        for k in (i + 1)..n {
            sum -= u[[i, k]] * x[k];
        }
        x[i] = sum / u_ii;
    }
    Ok(x)
}
