//! Ring capability: addition, multiplication, and their identity elements.

/// An element of a ring with `1`.
///
/// Implementations supply the two binary operations, their identity elements,
/// and an explicit negation primitive. Subtraction is derived.
///
/// The identity laws `x.add(&Ring::zero()) == x` and `x.mul(&Ring::one()) == x`
/// must hold for every element, addition must be commutative and associative,
/// and multiplication associative. These laws are not mechanically enforced;
/// the derived vector algebra assumes them.
pub trait Ring: Sized + Clone + PartialEq {
    /// The additive identity.
    fn zero() -> Self;
    /// The multiplicative identity.
    fn one() -> Self;
    /// `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;
    /// `self * rhs`.
    fn mul(&self, rhs: &Self) -> Self;
    /// The additive inverse, `-self`.
    fn neg(&self) -> Self;

    /// `self - rhs`, derived from addition and negation.
    fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }
}
