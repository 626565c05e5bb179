//! Ring and Field conformances for the primitive numeric types.
//!
//! Floating types get the full Field tier via `num_traits::Float`; signed
//! integers get the Ring tier only, which unlocks elementwise vector
//! arithmetic but not magnitudes.

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::VError;
use num_traits::Float;

macro_rules! impl_float_scalar {
    ($($t:ty),*) => { $(
        impl Ring for $t {
            fn zero() -> Self {
                <$t as num_traits::Zero>::zero()
            }
            fn one() -> Self {
                <$t as num_traits::One>::one()
            }
            fn add(&self, rhs: &Self) -> Self {
                self + rhs
            }
            fn mul(&self, rhs: &Self) -> Self {
                self * rhs
            }
            fn neg(&self) -> Self {
                -self
            }
        }

        impl Field for $t {
            fn div(&self, rhs: &Self) -> Result<Self, VError> {
                if *rhs == <$t as num_traits::Zero>::zero() {
                    return Err(VError::DivisionByZero);
                }
                Ok(self / rhs)
            }
            fn powf(&self, exponent: f64) -> Self {
                Float::powf(*self, exponent as $t)
            }
        }
    )* };
}

impl_float_scalar!(f32, f64);

macro_rules! impl_int_scalar {
    ($($t:ty),*) => { $(
        impl Ring for $t {
            fn zero() -> Self {
                0
            }
            fn one() -> Self {
                1
            }
            fn add(&self, rhs: &Self) -> Self {
                self + rhs
            }
            fn mul(&self, rhs: &Self) -> Self {
                self * rhs
            }
            fn neg(&self) -> Self {
                -self
            }
        }
    )* };
}

impl_int_scalar!(i8, i16, i32, i64, i128);
