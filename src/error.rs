//! # Error reporting for container operations
//!
//! Every fallible operation in this crate validates its arguments before touching any storage and
//! reports the first violation it finds as an `Error`. Nothing is clamped or recovered from.
use thiserror::Error;

/// Shorthand for results of fallible container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` describes why a construction, an index access or a binary operation was rejected.
///
/// The values that caused the rejection are carried along, such that the message shown to the end
/// user is self-contained.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// The requested number of elements is negative or exceeds the capacity bound of the
    /// container.
    #[error("invalid size {size}, expected a value in 0..={max}")]
    InvalidSize {
        /// Size that was requested.
        size: isize,
        /// Largest size the container accepts.
        max: usize,
    },
    /// The requested start index is negative.
    #[error("invalid start index {0}, expected a non-negative value")]
    InvalidStartIndex(isize),
    /// An element, row or column was addressed outside of the valid range.
    ///
    /// The valid range is `start..end`.
    #[error("index {index} out of range {start}..{end}")]
    IndexOutOfRange {
        /// Index that was used.
        index: isize,
        /// Smallest valid index.
        start: usize,
        /// One past the largest valid index.
        end: usize,
    },
    /// Both operands of a binary operation need to be of the same size.
    #[error("size mismatch: left operand has size {left}, right operand has size {right}")]
    SizeMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}

impl Error {
    /// Check that two operands can be combined element by element.
    pub(crate) fn check_sizes(left: usize, right: usize) -> Result<()> {
        if left == right {
            Ok(())
        } else {
            log::debug!("rejecting binary operation on sizes {} and {}", left, right);
            Err(Error::SizeMismatch { left, right })
        }
    }

    /// Check that a requested size is in `0..=max`, and convert it.
    pub(crate) fn check_size(size: isize, max: usize) -> Result<usize> {
        match usize::try_from(size) {
            Ok(size) if size <= max => Ok(size),
            _ => {
                log::debug!("rejecting size {} (maximum is {})", size, max);
                Err(Error::InvalidSize { size, max })
            }
        }
    }

    /// Map an index in `start..start + len` to an offset in `0..len`.
    pub(crate) fn check_index(index: isize, start: usize, len: usize) -> Result<usize> {
        let end = start + len;
        match usize::try_from(index) {
            Ok(index) if start <= index && index < end => Ok(index - start),
            _ => {
                log::debug!("rejecting index {} outside of {}..{}", index, start, end);
                Err(Error::IndexOutOfRange { index, start, end })
            }
        }
    }
}
