//! Dense linear solver with adaptive factorization
//!
//! This crate solves square dense systems `Ax = b` by measuring the matrix first
//! and then picking a factorization:
//!
//! - **Cholesky** (`A = L·Lᵗ`) when `A` is symmetric and positive definite
//! - **Doolittle LU** (`A = L·U`, unit lower `L`, no pivoting) otherwise
//!
//! Both paths finish with one forward and one backward triangular solve.
//!
//! # Features
//!
//! - **Determinants**: recursive cofactor expansion and an O(n³) pivoted product,
//!   behind the [`DeterminantStrategy`] trait
//! - **Matrix properties**: exact (and opt-in tolerant) symmetry, Sylvester's criterion
//! - **Direct factorizations**: Cholesky and Doolittle LU with typed failures
//! - **Configuration**: JSON description of a system and its solver settings
//!
//! # Example
//!
//! ```
//! use math_audio_dense_solver::solve;
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 2.0], [2.0, 3.0]];
//! let b = array![2.0_f64, 1.0];
//!
//! let x = solve(&a, &b).unwrap();
//! assert!((x[0] - 0.5).abs() < 1e-12);
//! assert!(x[1].abs() < 1e-12);
//! ```

pub mod config;
pub mod determinant;
pub mod direct;
pub mod dispatch;
pub mod matrix;
pub mod properties;
pub mod traits;

pub use config::{ConfigError, LinearSystemConfig, SolverSettings};
pub use determinant::{
    CofactorExpansion, DeterminantMethod, DeterminantStrategy, LuProduct, MAX_COFACTOR_DIM,
    determinant,
};
pub use direct::{
    CholeskyFactorization, LuFactorization, back_substitute, cholesky_decompose,
    forward_substitute, lu_decompose,
};
pub use dispatch::{
    DenseSolution, SolveMethod, SolverConfig, SymmetryCheck, select_method, solve,
    solve_with_config,
};
pub use properties::{
    is_positive_definite, is_positive_definite_with, is_symmetric, is_symmetric_with_tolerance,
};
pub use traits::RealField;

/// Error types for dense solver operations
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Matrix is empty (at least a 1x1 system is required)")]
    EmptyMatrix,

    #[error("Cholesky decomposition failed at row {index}: radicand {radicand} is not positive")]
    CholeskyDomain { index: usize, radicand: f64 },

    #[error("Zero pivot in column {column}: matrix is singular or requires pivoting")]
    SingularOrNeedsPivoting { column: usize },

    #[error("Triangular system is singular: zero diagonal at index {index}")]
    SingularTriangularSystem { index: usize },
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
