//! Core traits for dense linear algebra
//!
//! This module defines the scalar abstraction used throughout the solver library:
//! - [`RealField`]: Trait for real scalar types (`f64`, `f32`)

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used in dense factorizations.
///
/// All algorithms in this crate operate on real-valued matrices. The trait
/// bundles the numeric bounds they need and the conversion used for
/// error reports and logging.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, used by the configuration layer and the CLI)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Display + Send + Sync + 'static
{
    /// Widen to `f64` for reporting
    fn to_f64_lossy(&self) -> f64;

    /// Check if this is approximately zero
    fn is_zero_approx(&self, tol: Self) -> bool {
        self.abs() <= tol
    }
}

impl RealField for f64 {
    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        *self
    }
}

impl RealField for f32 {
    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        f64::from(*self)
    }
}
