//! Determinant evaluation
//!
//! Two algorithms are provided behind the [`DeterminantStrategy`] trait:
//! - [`CofactorExpansion`]: recursive Laplace expansion along the first row.
//!   Exact on small integer-valued matrices, but O(n!) so only usable for small n.
//! - [`LuProduct`]: Gaussian elimination with partial pivoting, O(n³).
//!
//! [`DeterminantMethod`] selects one of them at runtime.

use crate::matrix::{check_square, minor};
use crate::traits::RealField;
use crate::Result;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Largest dimension for which [`DeterminantMethod::Auto`] still uses cofactor expansion.
///
/// 8! = 40320 terms per determinant; Sylvester's criterion evaluates n of them.
pub const MAX_COFACTOR_DIM: usize = 8;

/// An algorithm computing the determinant of a square matrix.
pub trait DeterminantStrategy {
    /// Determinant of `m`. Fails only on non-square or empty input.
    fn determinant<T: RealField>(&self, m: &Array2<T>) -> Result<T>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Recursive cofactor expansion along the first row
#[derive(Clone, Copy, Debug, Default)]
pub struct CofactorExpansion;

impl DeterminantStrategy for CofactorExpansion {
    fn determinant<T: RealField>(&self, m: &Array2<T>) -> Result<T> {
        determinant(m)
    }

    fn name(&self) -> &'static str {
        "cofactor"
    }
}

/// Product of pivots from Gaussian elimination with partial pivoting
#[derive(Clone, Copy, Debug, Default)]
pub struct LuProduct;

impl DeterminantStrategy for LuProduct {
    fn determinant<T: RealField>(&self, m: &Array2<T>) -> Result<T> {
        check_square(m)?;
        Ok(pivoted_elimination_det(m))
    }

    fn name(&self) -> &'static str {
        "lu"
    }
}

/// Runtime choice of determinant algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeterminantMethod {
    #[serde(rename = "cofactor")]
    /// Always use cofactor expansion
    CofactorExpansion,
    #[serde(rename = "lu")]
    /// Always use the pivoted elimination product
    LuProduct,
    #[serde(rename = "auto")]
    /// Cofactor expansion up to [`MAX_COFACTOR_DIM`], elimination above
    #[default]
    Auto,
}

impl DeterminantStrategy for DeterminantMethod {
    fn determinant<T: RealField>(&self, m: &Array2<T>) -> Result<T> {
        match self {
            DeterminantMethod::CofactorExpansion => CofactorExpansion.determinant(m),
            DeterminantMethod::LuProduct => LuProduct.determinant(m),
            DeterminantMethod::Auto => {
                if check_square(m)? <= MAX_COFACTOR_DIM {
                    CofactorExpansion.determinant(m)
                } else {
                    LuProduct.determinant(m)
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DeterminantMethod::CofactorExpansion => "cofactor",
            DeterminantMethod::LuProduct => "lu",
            DeterminantMethod::Auto => "auto",
        }
    }
}

/// Determinant of a square matrix by recursive cofactor expansion.
///
/// 1x1 and 2x2 matrices are the base cases; larger matrices expand along
/// row 0: `det(M) = Σ_j (−1)^j · M[0][j] · det(minor(M, 0, j))`.
///
/// The cost is O(n!), see [`MAX_COFACTOR_DIM`].
pub fn determinant<T: RealField>(m: &Array2<T>) -> Result<T> {
    let n = check_square(m)?;
    Ok(cofactor_expansion(m, n))
}

fn cofactor_expansion<T: RealField>(m: &Array2<T>, n: usize) -> T {
    match n {
        1 => m[[0, 0]],
        2 => m[[0, 0]] * m[[1, 1]] - m[[0, 1]] * m[[1, 0]],
        _ => {
            let mut det = T::zero();
            for col in 0..n {
                let entry = m[[0, col]];
                if entry == T::zero() {
                    continue;
                }
                let term = entry * cofactor_expansion(&minor(m, 0, col), n - 1);
                if col % 2 == 0 {
                    det += term;
                } else {
                    det -= term;
                }
            }
            det
        }
    }
}

fn pivoted_elimination_det<T: RealField>(m: &Array2<T>) -> T {
    let n = m.nrows();
    let mut lu = m.clone();
    let mut det = T::one();

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[[k, k]].abs();
        let mut max_row = k;

        for i in (k + 1)..n {
            let val = lu[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val == T::zero() {
            return T::zero();
        }

        if max_row != k {
            for j in 0..n {
                lu.swap([k, j], [max_row, j]);
            }
            det = -det;
        }

        let pivot = lu[[k, k]];
        det *= pivot;

        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    det
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SolverError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_identity_determinant() {
        for n in 1..=6 {
            let id = Array2::<f64>::eye(n);
            assert_eq!(determinant(&id).unwrap(), 1.0, "det(I_{}) should be 1", n);
        }
    }

    #[test]
    fn test_zero_row_determinant() {
        let a = array![[1.0_f64, 2.0, 3.0], [0.0, 0.0, 0.0], [7.0, 8.0, 10.0]];
        assert_eq!(determinant(&a).unwrap(), 0.0);

        let b = array![[2.0_f64, 5.0, 1.0, 3.0], [4.0, 1.0, 0.0, 2.0], [0.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]];
        assert_eq!(determinant(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(determinant(&array![[-7.5_f64]]).unwrap(), -7.5);
        assert_eq!(determinant(&array![[3.0_f64, 7.0], [1.0, -4.0]]).unwrap(), -19.0);
    }

    #[test]
    fn test_cofactor_three_by_three() {
        let a = array![[2.0_f64, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]];
        assert_eq!(determinant(&a).unwrap(), 49.0);
    }

    #[test]
    fn test_strategies_agree() {
        let a = array![
            [1.0_f64, -1.0, 3.0, 2.0],
            [-1.0, 5.0, -5.0, -2.0],
            [3.0, -5.0, 19.0, 3.0],
            [2.0, -2.0, 3.0, 21.0],
        ];
        let cofactor = CofactorExpansion.determinant(&a).unwrap();
        let lu = LuProduct.determinant(&a).unwrap();
        let auto = DeterminantMethod::Auto.determinant(&a).unwrap();

        assert_relative_eq!(cofactor, lu, max_relative = 1e-10);
        assert_eq!(cofactor, auto);
    }

    #[test]
    fn test_lu_product_needs_row_swap() {
        // Zero in the (0, 0) position forces a pivot swap
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        assert_relative_eq!(LuProduct.determinant(&a).unwrap(), -1.0);
        assert_relative_eq!(determinant(&a).unwrap(), -1.0);
    }

    #[test]
    fn test_lu_product_singular() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        assert_eq!(LuProduct.determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_auto_switches_above_limit() {
        let n = MAX_COFACTOR_DIM + 4;
        let a = Array2::from_shape_fn((n, n), |(i, j)| if i == j { 2.0_f64 } else { 0.0 });
        let det = DeterminantMethod::Auto.determinant(&a).unwrap();
        assert_relative_eq!(det, 2.0_f64.powi(n as i32), max_relative = 1e-12);
    }

    #[test]
    fn test_non_square_rejected() {
        let a = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            determinant(&a),
            Err(SolverError::DimensionMismatch { .. })
        ));
        assert!(LuProduct.determinant(&a).is_err());
    }
}
