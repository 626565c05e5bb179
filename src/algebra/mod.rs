//! Algebraic scalar capabilities: rings and fields.

pub mod ring;
pub use ring::Ring;

pub mod field;
pub use field::Field;

pub mod scalars;
