//! The Vector capability: construction, dimensions, and derived arithmetic.
//!
//! A conforming type supplies four items (scalar type, dimension count,
//! component access, and a normalizing constructor) and inherits the whole
//! elementwise arithmetic tier as default method bodies. Any two conforming
//! types sharing a scalar are compatible: they can be added, compared, and
//! converted into one another, because every derived result is built through
//! [`Vector::from_components`].

use crate::algebra::ring::Ring;
use crate::error::VError;

pub(crate) fn check_dims(left: usize, right: usize) -> Result<(), VError> {
    if left == right {
        Ok(())
    } else {
        Err(VError::DimensionMismatch { left, right })
    }
}

/// A dimensional tuple of scalars with value semantics.
///
/// Every operation is pure: nothing is mutated in place, and each derived
/// vector is a new value. Operations on mismatched dimension counts fail with
/// [`VError::DimensionMismatch`] rather than truncating.
pub trait Vector: Sized + Clone {
    /// The element type.
    type Scalar: Ring;

    /// The number of components. Always equal to the count of scalars the
    /// value was constructed from.
    fn dims(&self) -> usize;

    /// The component at `index` (0-based).
    fn component(&self, index: usize) -> Self::Scalar;

    /// The single normalizing constructor.
    ///
    /// `components` must yield exactly as many scalars as the constructed
    /// value's dimension count. All default algorithms build their results
    /// through this path, which is what allows conversion between concrete
    /// vector types sharing a scalar.
    fn from_components<I: IntoIterator<Item = Self::Scalar>>(components: I) -> Self;

    /// The components in index order.
    fn components(&self) -> impl Iterator<Item = Self::Scalar> {
        (0..self.dims()).map(|i| self.component(i))
    }

    /// Rebuilds this vector as another compatible concrete type.
    fn to_vector<W: Vector<Scalar = Self::Scalar>>(&self) -> W {
        W::from_components(self.components())
    }

    /// Elementwise sum with a vector of the same type.
    ///
    /// Errors with [`VError::DimensionMismatch`] when the counts differ.
    fn sum(&self, rhs: &Self) -> Result<Self, VError> {
        self.sum_into(rhs)
    }

    /// Elementwise sum with any compatible vector, producing the concrete
    /// type `W` chosen by the caller.
    fn sum_into<V, W>(&self, rhs: &V) -> Result<W, VError>
    where
        V: Vector<Scalar = Self::Scalar>,
        W: Vector<Scalar = Self::Scalar>,
    {
        check_dims(self.dims(), rhs.dims())?;
        Ok(W::from_components(
            self.components()
                .zip(rhs.components())
                .map(|(a, b)| a.add(&b)),
        ))
    }

    /// Elementwise multiplication by a scalar.
    fn scale(&self, scalar: &Self::Scalar) -> Self {
        Self::from_components(self.components().map(|c| c.mul(scalar)))
    }

    /// Elementwise (Hadamard) product with a vector of the same type.
    ///
    /// Errors with [`VError::DimensionMismatch`] when the counts differ.
    fn piecewise_mul(&self, rhs: &Self) -> Result<Self, VError> {
        self.piecewise_mul_into(rhs)
    }

    /// Elementwise product with any compatible vector, producing `W`.
    fn piecewise_mul_into<V, W>(&self, rhs: &V) -> Result<W, VError>
    where
        V: Vector<Scalar = Self::Scalar>,
        W: Vector<Scalar = Self::Scalar>,
    {
        check_dims(self.dims(), rhs.dims())?;
        Ok(W::from_components(
            self.components()
                .zip(rhs.components())
                .map(|(a, b)| a.mul(&b)),
        ))
    }

    /// The vector of equal magnitude pointing the opposite direction.
    ///
    /// Negation comes from the ring contract (`one().neg()`), so this is
    /// available for any scalar, not only floating types.
    fn negative(&self) -> Self {
        self.scale(&<Self::Scalar as Ring>::one().neg())
    }

    /// Elementwise difference, `self - rhs`.
    ///
    /// Errors with [`VError::DimensionMismatch`] when the counts differ.
    fn difference(&self, rhs: &Self) -> Result<Self, VError> {
        self.difference_into(rhs)
    }

    /// Elementwise difference with any compatible vector, producing `W`.
    fn difference_into<V, W>(&self, rhs: &V) -> Result<W, VError>
    where
        V: Vector<Scalar = Self::Scalar>,
        W: Vector<Scalar = Self::Scalar>,
    {
        check_dims(self.dims(), rhs.dims())?;
        Ok(W::from_components(
            self.components()
                .zip(rhs.components())
                .map(|(a, b)| a.sub(&b)),
        ))
    }

    /// Sum of squared components, accumulated in index order from the
    /// additive identity.
    fn squared_magnitude(&self) -> Self::Scalar {
        self.components()
            .fold(<Self::Scalar as Ring>::zero(), |acc, c| acc.add(&c.mul(&c)))
    }

    /// Value equality against any compatible vector: equal dimension counts,
    /// then pairwise equal components in index order. Short-circuits to
    /// `false` on a count mismatch.
    fn eq_vector<V: Vector<Scalar = Self::Scalar>>(&self, rhs: &V) -> bool {
        if self.dims() != rhs.dims() {
            return false;
        }
        self.components().zip(rhs.components()).all(|(a, b)| a == b)
    }
}
