//! # Vector behaviour through the public interface
use trimat::Vector;


/// Vector of `i32` values starting at index `0`.
fn from_values(values: &[i32]) -> Vector<i32> {
    Vector::from_values(values.to_vec(), 0).unwrap()
}

/// Vector of size `5` with some nonzero values.
fn sparse_five() -> Vector<i32> {
    let mut v = Vector::new(5).unwrap();
    v[0] = 7;
    v[2] = 6;
    v[4] = 5;
    v
}

/// Vector of size `7` with some nonzero values.
fn sparse_seven() -> Vector<i32> {
    let mut v = Vector::new(7).unwrap();
    v[1] = 5;
    v[3] = 8;
    v
}
