//! # Bounds-checked vectors and upper-triangular matrices
//!
//! A `Vector` is a fixed-size sequence of values that is addressed starting at an arbitrary start
//! index. A `Matrix` is a square matrix that only stores its entries on and above the diagonal, by
//! storing row `i` as a `Vector` that starts at column `i`.
//!
//! Every construction, index access and binary operation validates its arguments and reports
//! violations as an `Error`, before any value is written.
#![warn(missing_docs)]

pub mod error;
pub mod linear_algebra;

pub use error::{Error, Result};
pub use linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use linear_algebra::matrix::{Matrix, RowMut};
pub use linear_algebra::vector::Vector;
