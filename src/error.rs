use thiserror::Error;

// Unified error type for vectorkit

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VError {
    #[error("dimension mismatch: left operand has {left} components, right operand has {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("cannot normalize a vector of zero magnitude")]
    ZeroMagnitude,
    #[error("division by the additive identity")]
    DivisionByZero,
}
