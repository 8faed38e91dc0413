//! # Dense vector with a start index
//!
//! Wrapping a `Vec` such that it has a size fixed at creation, and such that its elements are
//! addressed by a logical index that starts at an arbitrary non-negative offset. A vector of size
//! `3` with start index `2` has valid indices `2`, `3` and `4`.
//!
//! Arithmetic between two vectors pairs elements by position, not by logical index: the first
//! element of the left operand is combined with the first element of the right operand, whatever
//! their start indices are.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Range, Sub};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::linear_algebra::MAX_VECTOR_SIZE;
use crate::linear_algebra::traits::Element;

/// Uses a `Vec` as underlying data structure. Size and start index are fixed at creation, but can
/// be replaced as a whole by assigning another vector.
#[derive(Debug)]
pub struct Vector<F> {
    data: Vec<F>,
    start_index: usize,
}

impl<F: Element> Vector<F> {
    /// Create a vector of zeros, addressed starting from index `0`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, at most `MAX_VECTOR_SIZE`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `size` is negative or too large.
    pub fn new(size: isize) -> Result<Self>
    where
        F: Zero,
    {
        Self::with_start_index(size, 0)
    }

    /// Create a vector of zeros, addressed starting from index `start_index`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: Smallest valid index.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `size` is negative or too large, `InvalidStartIndex` if `start_index` is
    /// negative. The size is checked first.
    pub fn with_start_index(size: isize, start_index: isize) -> Result<Self>
    where
        F: Zero,
    {
        let size = Error::check_size(size, MAX_VECTOR_SIZE)?;
        let start_index = check_start_index(start_index)?;
        log::trace!("creating vector of size {} starting at {}", size, start_index);

        Ok(Self { data: vec![F::zero(); size], start_index })
    }

    /// Create a vector from the provided values.
    ///
    /// # Arguments
    ///
    /// * `data`: Values in logical order, the first one being addressed by `start_index`.
    /// * `start_index`: Smallest valid index.
    ///
    /// # Errors
    ///
    /// Same as `with_start_index`.
    pub fn from_values(data: Vec<F>, start_index: isize) -> Result<Self> {
        let size = isize::try_from(data.len()).unwrap_or(isize::MAX);
        Error::check_size(size, MAX_VECTOR_SIZE)?;
        let start_index = check_start_index(start_index)?;

        Ok(Self { data, start_index })
    }

    /// Number of elements in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Smallest valid index.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// All valid indices, in order.
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.start_index + self.len()
    }

    /// Retrieve the value at a logical index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start_index..start_index + len`.
    pub fn get(&self, index: isize) -> Result<&F> {
        let offset = Error::check_index(index, self.start_index, self.len())?;

        Ok(&self.data[offset])
    }

    /// Retrieve the value at a logical index for modification.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start_index..start_index + len`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut F> {
        let offset = Error::check_index(index, self.start_index, self.len())?;

        Ok(&mut self.data[offset])
    }

    /// Set the value at a logical index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start_index..start_index + len`, in which case the
    /// vector is not modified.
    pub fn set(&mut self, index: isize, value: F) -> Result<()> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Iterate over the values of this vector in logical order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate mutably over the values of this vector in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, F> {
        self.data.iter_mut()
    }

    /// Replace size, start index and values of this vector by those of `source`.
    ///
    /// The borrow of `self` being exclusive, `source` can never be `self`; assigning a vector to
    /// itself amounts to `v.assign(&v.clone())`, which leaves it unchanged.
    pub fn assign(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// Add `scalar` to every element.
    ///
    /// The result has the same size and start index as this vector.
    pub fn add_scalar(&self, scalar: &F) -> Self
    where
        for<'r> &'r F: Add<&'r F, Output = F>,
    {
        self.map(|value| value + scalar)
    }

    /// Subtract `scalar` from every element.
    ///
    /// The result has the same size and start index as this vector.
    pub fn subtract_scalar(&self, scalar: &F) -> Self
    where
        for<'r> &'r F: Sub<&'r F, Output = F>,
    {
        self.map(|value| value - scalar)
    }

    /// Multiply every element by `scalar`.
    ///
    /// The result has the same size and start index as this vector.
    pub fn multiply_scalar(&self, scalar: &F) -> Self
    where
        for<'r> &'r F: Mul<&'r F, Output = F>,
    {
        self.map(|value| value * scalar)
    }

    /// Element-wise sum, pairing elements by position.
    ///
    /// The result takes the start index of `self`.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors are not of equal size.
    pub fn add(&self, other: &Self) -> Result<Self>
    where
        for<'r> &'r F: Add<&'r F, Output = F>,
    {
        self.zip_map(other, |left, right| left + right)
    }

    /// Element-wise difference, pairing elements by position.
    ///
    /// The result takes the start index of `self`.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors are not of equal size.
    pub fn subtract(&self, other: &Self) -> Result<Self>
    where
        for<'r> &'r F: Sub<&'r F, Output = F>,
    {
        self.zip_map(other, |left, right| left - right)
    }

    /// Compute the inner product with another vector, pairing elements by position.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors are not of equal size.
    pub fn dot(&self, other: &Self) -> Result<F>
    where
        F: Zero + AddAssign<F>,
        for<'r> &'r F: Mul<&'r F, Output = F>,
    {
        Error::check_sizes(self.len(), other.len())?;

        let mut total = F::zero();
        for (left, right) in self.data.iter().zip_eq(&other.data) {
            total += left * right;
        }

        Ok(total)
    }

    fn map(&self, f: impl Fn(&F) -> F) -> Self {
        Self {
            data: self.data.iter().map(f).collect(),
            start_index: self.start_index,
        }
    }

    fn zip_map(&self, other: &Self, f: impl Fn(&F, &F) -> F) -> Result<Self> {
        Error::check_sizes(self.len(), other.len())?;

        Ok(Self {
            data: self.data.iter().zip_eq(&other.data).map(|(left, right)| f(left, right)).collect(),
            start_index: self.start_index,
        })
    }

    fn offset(&self, index: usize) -> usize {
        match index.checked_sub(self.start_index) {
            Some(offset) if offset < self.len() => offset,
            _ => panic!("index {} out of range {:?}", index, self.indices()),
        }
    }
}

fn check_start_index(start_index: isize) -> Result<usize> {
    usize::try_from(start_index).map_err(|_| {
        log::debug!("rejecting start index {}", start_index);
        Error::InvalidStartIndex(start_index)
    })
}

impl<F: Clone> Clone for Vector<F> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index }
    }

    /// Reuses the allocation of `self` where possible.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

/// Vectors are equal when their values are; the start index is not compared.
impl<F: PartialEq> PartialEq for Vector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<F: Eq> Eq for Vector<F> {}

/// Panics when `index` is out of range, use `get` for a checked alternative.
impl<F: Element> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[self.offset(index)]
    }
}

/// Panics when `index` is out of range, use `get_mut` for a checked alternative.
impl<F: Element> IndexMut<usize> for Vector<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.data[offset]
    }
}

impl<'a, F: Element> Add<&'a F> for &'a Vector<F>
where
    for<'r> &'r F: Add<&'r F, Output = F>,
{
    type Output = Vector<F>;

    fn add(self, scalar: &'a F) -> Self::Output {
        self.add_scalar(scalar)
    }
}

impl<'a, F: Element> Sub<&'a F> for &'a Vector<F>
where
    for<'r> &'r F: Sub<&'r F, Output = F>,
{
    type Output = Vector<F>;

    fn sub(self, scalar: &'a F) -> Self::Output {
        self.subtract_scalar(scalar)
    }
}

impl<'a, F: Element> Mul<&'a F> for &'a Vector<F>
where
    for<'r> &'r F: Mul<&'r F, Output = F>,
{
    type Output = Vector<F>;

    fn mul(self, scalar: &'a F) -> Self::Output {
        self.multiply_scalar(scalar)
    }
}

impl<'a, F> IntoIterator for &'a Vector<F> {
    type Item = &'a F;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<F: Display> Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }

        Ok(())
    }
}
