use vectorkit::{NormedVector, Vector, impl_vector_ops};

#[derive(Clone, Debug)]
struct Vec3([f64; 3]);

impl Vector for Vec3 {
    type Scalar = f64;

    fn dims(&self) -> usize {
        3
    }

    fn component(&self, index: usize) -> f64 {
        self.0[index]
    }

    fn from_components<I: IntoIterator<Item = f64>>(components: I) -> Self {
        let mut it = components.into_iter();
        let v = Vec3([
            it.next().expect("three components"),
            it.next().expect("three components"),
            it.next().expect("three components"),
        ]);
        assert!(it.next().is_none(), "exactly three components");
        v
    }
}

impl_vector_ops!(Vec3, f64);

fn main() {
    let v = Vec3([3.0, 4.0, 12.0]);
    println!("v = {:?}, |v| = {}", v, v.magnitude());

    let u = v.unit().unwrap();
    println!("unit = {:?}, |unit| = {}", u, u.magnitude());

    let w = Vec3([1.0, 1.0, 1.0]);
    println!("v + w      = {:?}", v.clone() + w.clone());
    println!("v - w      = {:?}", v.clone() - w.clone());
    println!("v ⊙ w      = {:?}", v.clone() * w.clone());
    println!("2v         = {:?}", 2.0 * v.clone());
    println!("d(v, w)    = {}", v.distance_to(&w).unwrap());

    match Vec3([0.0, 0.0, 0.0]).unit() {
        Ok(_) => unreachable!(),
        Err(e) => println!("zero vector: {}", e),
    }
}
