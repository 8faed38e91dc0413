//! # Linear algebra primitives
//!
//! A dense `Vector` that is addressed starting from an arbitrary start index, and an
//! upper-triangular `Matrix` that stores row `i` as a `Vector` starting at column `i`.

pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements a `Vector` can be created with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest dimension a `Matrix` can be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
