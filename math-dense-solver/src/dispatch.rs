//! Adaptive solver entry points
//!
//! [`solve`] probes the matrix, picks Cholesky for symmetric positive definite
//! input and Doolittle LU otherwise, then runs the two triangular solves.
//! Every call is independent: factors are built fresh and dropped on return.

use crate::determinant::DeterminantMethod;
use crate::direct::{back_substitute, cholesky_decompose, forward_substitute, lu_decompose};
use crate::matrix::{check_rhs, check_square, residual_norm, transpose};
use crate::properties::{is_positive_definite_with, is_symmetric, is_symmetric_with_tolerance};
use crate::traits::RealField;
use crate::Result;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Factorization used for a solve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMethod {
    #[serde(rename = "cholesky")]
    /// `A = L·Lᵗ`
    Cholesky,
    #[serde(rename = "doolittle")]
    /// `A = L·U`, unit lower `L`
    Doolittle,
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMethod::Cholesky => write!(f, "Cholesky"),
            SolveMethod::Doolittle => write!(f, "Doolittle"),
        }
    }
}

/// How symmetry is tested before choosing Cholesky
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymmetryCheck<T> {
    /// Mirrored entries must be bitwise equal
    Exact,
    /// Mirrored entries may differ by a relative tolerance
    Tolerance(T),
}

/// Dispatcher configuration
#[derive(Debug, Clone)]
pub struct SolverConfig<T> {
    /// Symmetry test used by the probe
    pub symmetry: SymmetryCheck<T>,
    /// Determinant algorithm for Sylvester's criterion
    pub determinant: DeterminantMethod,
    /// Skip the probe and use this factorization
    pub force_method: Option<SolveMethod>,
}

impl<T> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            symmetry: SymmetryCheck::Exact,
            determinant: DeterminantMethod::Auto,
            force_method: None,
        }
    }
}

/// Dispatcher result
#[derive(Debug, Clone)]
pub struct DenseSolution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Factorization that produced `x`
    pub method: SolveMethod,
    /// `‖A·x − b‖₂`
    pub residual: T,
}

/// Decide which factorization `solve_with_config` would use for `a`.
pub fn select_method<T: RealField>(a: &Array2<T>, config: &SolverConfig<T>) -> Result<SolveMethod> {
    let n = check_square(a)?;

    if let Some(method) = config.force_method {
        log::debug!("Factorization forced to {}", method);
        return Ok(method);
    }

    let symmetric = match config.symmetry {
        SymmetryCheck::Exact => is_symmetric(a),
        SymmetryCheck::Tolerance(tol) => is_symmetric_with_tolerance(a, tol),
    };
    let spd = symmetric && is_positive_definite_with(a, &config.determinant);
    log::debug!(
        "Probe of {}x{} matrix: symmetric = {}, positive definite = {}",
        n,
        n,
        symmetric,
        spd
    );

    Ok(if spd {
        SolveMethod::Cholesky
    } else {
        SolveMethod::Doolittle
    })
}

/// Solve `Ax = b` with the default configuration.
pub fn solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    solve_with_config(a, b, &SolverConfig::default()).map(|solution| solution.x)
}

/// Solve `Ax = b`, reporting the factorization used and the residual.
pub fn solve_with_config<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &SolverConfig<T>,
) -> Result<DenseSolution<T>> {
    let n = check_square(a)?;
    check_rhs(n, b)?;

    let method = select_method(a, config)?;
    log::info!("Using {} method for {}x{} system", method, n, n);

    let x = match method {
        SolveMethod::Cholesky => {
            let cholesky = cholesky_decompose(a)?;
            let lt = transpose(cholesky.l());
            let y = forward_substitute(cholesky.l(), b)?;
            back_substitute(&lt, &y)?
        }
        SolveMethod::Doolittle => {
            let (l, u) = lu_decompose(a)?.into_parts();
            let y = forward_substitute(&l, b)?;
            back_substitute(&u, &y)?
        }
    };

    let residual = residual_norm(a, &x, b);
    log::debug!("Residual norm: {:.6e}", residual.to_f64_lossy());

    Ok(DenseSolution {
        x,
        method,
        residual,
    })
}
