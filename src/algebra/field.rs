//! Field capability: a ring with division and real exponentiation.

use crate::algebra::ring::Ring;
use crate::error::VError;

/// A ring whose nonzero elements are invertible.
///
/// Division by the additive identity is an explicit error, never a poison
/// value; the normalized-vector tier relies on this to reject zero-magnitude
/// inputs cleanly.
pub trait Field: Ring {
    /// `self / rhs`.
    ///
    /// Errors with [`VError::DivisionByZero`] when `rhs` equals
    /// [`Ring::zero`].
    fn div(&self, rhs: &Self) -> Result<Self, VError>;

    /// `self` raised to a real exponent.
    ///
    /// Vector magnitudes are computed with exponent `0.5`.
    fn powf(&self, exponent: f64) -> Self;
}
