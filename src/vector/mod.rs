//! Vector capability, derived arithmetic tiers, and operator wiring.

pub mod traits;
pub use traits::Vector;

pub mod normed;
pub use normed::NormedVector;

pub mod ops;
