//! vectorkit: capability traits for generic vector algebra
//!
//! This crate ships no concrete vector type. Instead it defines a small
//! capability hierarchy — [`Ring`] and [`Field`] for scalars, [`Vector`] and
//! [`NormedVector`] for dimensional tuples — plus default algorithms for all
//! derived arithmetic, so a conforming type supplies four items (scalar type,
//! dimension count, component access, and a normalizing constructor) and
//! inherits sums, scaling, piecewise products, magnitudes, unit vectors, and
//! distances. Any two conforming types sharing a scalar interoperate: they can
//! be added, compared, and converted into one another.
//!
//! All operations are pure value computations; failures (mismatched dimension
//! counts, normalizing a zero vector, division by the additive identity) are
//! explicit [`VError`] results, never silent truncation or poison values.

pub mod algebra;
pub mod error;
pub mod vector;

// Re-exports for convenience
pub use algebra::*;
pub use error::*;
pub use vector::*;
