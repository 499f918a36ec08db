//! Direct solvers for dense linear systems
//!
//! This module provides the factorizations and triangular solves used by the dispatcher:
//! - [`cholesky_decompose`]: `A = L·Lᵗ` for symmetric positive definite matrices
//! - [`lu_decompose`]: Doolittle `A = L·U` without pivoting
//! - [`forward_substitute`] / [`back_substitute`]: triangular solves shared by both

mod cholesky;
mod lu;
mod triangular;

pub use cholesky::{CholeskyFactorization, cholesky_decompose};
pub use lu::{LuFactorization, lu_decompose};
pub use triangular::{back_substitute, forward_substitute};
