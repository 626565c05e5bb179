//! Operator wiring for conforming vector types.
//!
//! Rust's orphan rule rules out blanket `impl Add for V: Vector`, so a
//! conforming type invokes [`impl_vector_ops!`] once to connect the std
//! operator traits to the named trait methods, and [`impl_vector_cross_ops!`]
//! per compatible pairing for mixed-type operands.

/// Implements `+`, `-`, unary `-`, `*` (piecewise and scalar, both operand
/// orders), and `==` for a concrete [`Vector`](crate::vector::Vector) type.
///
/// `$ty` is the conforming type, `$scalar` its scalar type.
///
/// # Panics
///
/// The generated `+`, `-`, and piecewise `*` panic on mismatched dimension
/// counts, with the [`VError`](crate::error::VError) display message. Callers
/// needing a recoverable path use the named methods
/// ([`sum`](crate::vector::Vector::sum), etc.), which return `Result`.
#[macro_export]
macro_rules! impl_vector_ops {
    ($ty:ty, $scalar:ty) => {
        impl ::core::ops::Add for $ty {
            type Output = $ty;
            fn add(self, rhs: $ty) -> $ty {
                match $crate::vector::Vector::sum(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Sub for $ty {
            type Output = $ty;
            fn sub(self, rhs: $ty) -> $ty {
                match $crate::vector::Vector::difference(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Mul for $ty {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                match $crate::vector::Vector::piecewise_mul(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Mul<$scalar> for $ty {
            type Output = $ty;
            fn mul(self, rhs: $scalar) -> $ty {
                $crate::vector::Vector::scale(&self, &rhs)
            }
        }

        impl ::core::ops::Mul<$ty> for $scalar {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                $crate::vector::Vector::scale(&rhs, &self)
            }
        }

        impl ::core::ops::Neg for $ty {
            type Output = $ty;
            fn neg(self) -> $ty {
                $crate::vector::Vector::negative(&self)
            }
        }

        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &$ty) -> bool {
                $crate::vector::Vector::eq_vector(self, other)
            }
        }
    };
}

/// Implements mixed-type `+`, `-`, piecewise `*`, and `==` for two compatible
/// [`Vector`](crate::vector::Vector) types sharing a scalar.
///
/// The result type of each binary operator is the left operand's type; a call
/// site wanting the other result type uses the explicit
/// [`sum_into`](crate::vector::Vector::sum_into)-style methods.
///
/// # Panics
///
/// Same dimension-mismatch behavior as [`impl_vector_ops!`].
#[macro_export]
macro_rules! impl_vector_cross_ops {
    ($a:ty, $b:ty) => {
        impl ::core::ops::Add<$b> for $a {
            type Output = $a;
            fn add(self, rhs: $b) -> $a {
                match $crate::vector::Vector::sum_into::<$b, $a>(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Add<$a> for $b {
            type Output = $b;
            fn add(self, rhs: $a) -> $b {
                match $crate::vector::Vector::sum_into::<$a, $b>(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Sub<$b> for $a {
            type Output = $a;
            fn sub(self, rhs: $b) -> $a {
                match $crate::vector::Vector::difference_into::<$b, $a>(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Sub<$a> for $b {
            type Output = $b;
            fn sub(self, rhs: $a) -> $b {
                match $crate::vector::Vector::difference_into::<$a, $b>(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Mul<$b> for $a {
            type Output = $a;
            fn mul(self, rhs: $b) -> $a {
                match $crate::vector::Vector::piecewise_mul_into::<$b, $a>(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::ops::Mul<$a> for $b {
            type Output = $b;
            fn mul(self, rhs: $a) -> $b {
                match $crate::vector::Vector::piecewise_mul_into::<$a, $b>(&self, &rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl ::core::cmp::PartialEq<$b> for $a {
            fn eq(&self, other: &$b) -> bool {
                $crate::vector::Vector::eq_vector(self, other)
            }
        }

        impl ::core::cmp::PartialEq<$a> for $b {
            fn eq(&self, other: &$a) -> bool {
                $crate::vector::Vector::eq_vector(self, other)
            }
        }
    };
}
