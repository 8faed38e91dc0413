//! # Matrix behaviour through the public interface
use trimat::Matrix;

/// # Construction, indexing, assignment and arithmetic
mod test;

/// Matrix with all entries on and above the diagonal equal to `value`.
fn constant(value: i32, size: usize) -> Matrix<i32> {
    Matrix::from_rows((0..size).map(|i| vec![value; size - i]).collect()).unwrap()
}
