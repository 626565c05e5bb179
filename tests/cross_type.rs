//! Cross-type interop tests: two concrete vector types sharing a scalar can
//! be added, compared, converted, and measured against each other.

use approx::assert_abs_diff_eq;
use vectorkit::{NormedVector, VError, Vector, impl_vector_cross_ops, impl_vector_ops};

#[derive(Clone, Debug)]
struct Pair([f64; 2]);

impl Vector for Pair {
    type Scalar = f64;

    fn dims(&self) -> usize {
        2
    }

    fn component(&self, index: usize) -> f64 {
        self.0[index]
    }

    fn from_components<I: IntoIterator<Item = f64>>(components: I) -> Self {
        let mut it = components.into_iter();
        let x = it.next().expect("pair needs two components");
        let y = it.next().expect("pair needs two components");
        assert!(it.next().is_none(), "pair needs exactly two components");
        Pair([x, y])
    }
}

impl_vector_ops!(Pair, f64);

#[derive(Clone, Debug)]
struct DynVec(Vec<f64>);

impl Vector for DynVec {
    type Scalar = f64;

    fn dims(&self) -> usize {
        self.0.len()
    }

    fn component(&self, index: usize) -> f64 {
        self.0[index]
    }

    fn from_components<I: IntoIterator<Item = f64>>(components: I) -> Self {
        DynVec(components.into_iter().collect())
    }
}

impl_vector_ops!(DynVec, f64);

impl_vector_cross_ops!(Pair, DynVec);

#[test]
fn mixed_operands_add_in_both_orders() {
    let p = Pair([1.0, 2.0]);
    let d = DynVec(vec![10.0, 20.0]);
    // Left operand picks the result type.
    let as_pair: Pair = p.clone() + d.clone();
    let as_dyn: DynVec = d + p;
    assert_eq!(as_pair, Pair([11.0, 22.0]));
    assert_eq!(as_dyn, DynVec(vec![11.0, 22.0]));
    assert_eq!(as_pair, as_dyn);
}

#[test]
fn explicit_target_type_overrides_operand_order() {
    let p = Pair([1.0, 2.0]);
    let d = DynVec(vec![10.0, 20.0]);
    let into_dyn: DynVec = p.sum_into(&d).unwrap();
    assert_eq!(into_dyn, DynVec(vec![11.0, 22.0]));
    let into_pair: Pair = d.piecewise_mul_into(&p).unwrap();
    assert_eq!(into_pair, Pair([10.0, 40.0]));
}

#[test]
fn equality_crosses_concrete_types() {
    let p = Pair([1.0, 2.0]);
    assert_eq!(p, DynVec(vec![1.0, 2.0]));
    assert_eq!(DynVec(vec![1.0, 2.0]), p);
    assert_ne!(p, DynVec(vec![1.0, 2.0, 3.0]));
    assert_ne!(p, DynVec(vec![1.0, 3.0]));
}

#[test]
fn conversion_round_trip_preserves_arithmetic() {
    let a = Pair([3.0, -4.0]);
    let b = Pair([5.0, 6.0]);
    // Detour through DynVec, sum back into Pair.
    let detour: DynVec = a.to_vector();
    let via_dyn: Pair = detour.sum_into(&b).unwrap();
    let direct = a.sum(&b).unwrap();
    assert_eq!(via_dyn, direct);
}

#[test]
fn distance_to_a_compatible_vector() {
    let p = Pair([1.0, 2.0]);
    let d = DynVec(vec![3.0, 4.0]);
    let dist = p.distance_to_vector(&d).unwrap();
    assert_abs_diff_eq!(dist, 8.0f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn distance_to_mismatched_compatible_vector_errs() {
    let p = Pair([1.0, 2.0]);
    let d = DynVec(vec![3.0, 4.0, 5.0]);
    assert_eq!(
        p.distance_to_vector(&d),
        Err(VError::DimensionMismatch { left: 3, right: 2 })
    );
}

#[test]
fn mixed_subtraction_and_piecewise_product() {
    let p = Pair([5.0, 7.0]);
    let d = DynVec(vec![1.0, 2.0]);
    assert_eq!(p.clone() - d.clone(), Pair([4.0, 5.0]));
    assert_eq!(d.clone() - p.clone(), DynVec(vec![-4.0, -5.0]));
    assert_eq!(p * d, Pair([5.0, 14.0]));
}
