//! The normed tier: magnitude, unit vectors, and distances.
//!
//! Available automatically for any [`Vector`] whose scalar is a [`Field`],
//! since the square root comes from [`Field::powf`]. The length type is the
//! scalar type; vectors measuring their length in some other type do not get
//! this tier.

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::VError;
use crate::vector::traits::{Vector, check_dims};

/// Derived metric quantities for vectors over a field.
pub trait NormedVector: Vector
where
    Self::Scalar: Field,
{
    /// The Euclidean magnitude, `squared_magnitude ^ 0.5`.
    fn magnitude(&self) -> Self::Scalar {
        self.squared_magnitude().powf(0.5)
    }

    /// Alias of [`NormedVector::magnitude`].
    fn length(&self) -> Self::Scalar {
        self.magnitude()
    }

    /// The unit vector pointing in this vector's direction.
    ///
    /// Errors with [`VError::ZeroMagnitude`] when the magnitude is the
    /// additive identity; a division failure in the scalar field propagates
    /// as [`VError::DivisionByZero`].
    fn unit(&self) -> Result<Self, VError> {
        let magnitude = self.magnitude();
        if magnitude == <Self::Scalar as Ring>::zero() {
            return Err(VError::ZeroMagnitude);
        }
        Ok(self.scale(&<Self::Scalar as Ring>::one().div(&magnitude)?))
    }

    /// Alias of [`NormedVector::unit`].
    fn normalized(&self) -> Result<Self, VError> {
        self.unit()
    }

    /// The magnitude of `rhs - self`.
    ///
    /// Errors with [`VError::DimensionMismatch`] when the counts differ.
    fn distance_to(&self, rhs: &Self) -> Result<Self::Scalar, VError> {
        Ok(rhs.difference(self)?.magnitude())
    }

    /// Distance to any compatible vector, converted into `Self` first.
    ///
    /// Errors with [`VError::DimensionMismatch`] when the counts differ; the
    /// check precedes the conversion so a fixed-size constructor is never fed
    /// the wrong number of components.
    fn distance_to_vector<V: Vector<Scalar = Self::Scalar>>(
        &self,
        rhs: &V,
    ) -> Result<Self::Scalar, VError> {
        check_dims(rhs.dims(), self.dims())?;
        self.distance_to(&rhs.to_vector::<Self>())
    }
}

impl<V: Vector> NormedVector for V where V::Scalar: Field {}
