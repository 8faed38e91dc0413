//! # Upper-triangular matrix
//!
//! A square matrix of dimension `n` that only stores the entries on and above the diagonal. Row
//! `i` is a `Vector` of length `n - i` with start index `i`, such that the row is addressed with
//! the same column indices as the full square matrix, while the entries below the diagonal take no
//! space and can't be addressed.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Deref, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::Itertools;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::linear_algebra::MAX_MATRIX_SIZE;
use crate::linear_algebra::traits::Element;
use crate::linear_algebra::vector::Vector;

/// Uses a `Vec` of row vectors as underlying data structure. Dimension is fixed at creation, but
/// can be replaced as a whole by assigning another matrix.
#[derive(Debug, Eq, PartialEq)]
pub struct Matrix<F> {
    rows: Vec<Vector<F>>,
}

impl<F: Element> Matrix<F> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at most `MAX_MATRIX_SIZE`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `size` is negative or too large.
    pub fn new(size: isize) -> Result<Self>
    where
        F: Zero,
    {
        let size = Error::check_size(size, MAX_MATRIX_SIZE)?;
        log::trace!("creating upper-triangular matrix of size {}", size);

        let rows = (0..size)
            .map(|i| Vector::with_start_index((size - i) as isize, i as isize))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_checked_rows(rows))
    }

    /// Create a matrix from the entries on and above the diagonal.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row `i` contains the values of columns `i` up to the dimension, so the first row
    /// is as long as there are rows and the last row has a single value.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if there are too many rows, `SizeMismatch` if a row is not of the expected
    /// length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self> {
        let size = rows.len();
        Error::check_size(isize::try_from(size).unwrap_or(isize::MAX), MAX_MATRIX_SIZE)?;

        let rows = rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                Error::check_sizes(row.len(), size - i)?;
                Vector::from_values(row, i as isize)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_checked_rows(rows))
    }

    fn from_checked_rows(rows: Vec<Vector<F>>) -> Self {
        let matrix = Self { rows };
        debug_assert!(matrix.is_upper_triangular_layout());

        matrix
    }

    /// Number of rows, which equals the number of columns.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Retrieve a row.
    ///
    /// Row `i` is addressed by the column indices `i..len`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` is not in `0..len`.
    pub fn row(&self, row: isize) -> Result<&Vector<F>> {
        let i = Error::check_index(row, 0, self.len())?;

        Ok(&self.rows[i])
    }

    /// Retrieve a row for modification of its values.
    ///
    /// The row can't be resized or moved through the returned handle.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` is not in `0..len`.
    pub fn row_mut(&mut self, row: isize) -> Result<RowMut<'_, F>> {
        let i = Error::check_index(row, 0, self.len())?;

        Ok(RowMut { row: &mut self.rows[i] })
    }

    /// Retrieve the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` is not in `0..len` or `column` is not in `row..len`.
    pub fn get(&self, row: isize, column: isize) -> Result<&F> {
        self.row(row)?.get(column)
    }

    /// Retrieve the value at coordinate (`row`, `column`) for modification.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` is not in `0..len` or `column` is not in `row..len`.
    pub fn get_mut(&mut self, row: isize, column: isize) -> Result<&mut F> {
        let i = Error::check_index(row, 0, self.len())?;

        self.rows[i].get_mut(column)
    }

    /// Set the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` is not in `0..len` or `column` is not in `row..len`, in which
    /// case the matrix is not modified.
    pub fn set(&mut self, row: isize, column: isize, value: F) -> Result<()> {
        *self.get_mut(row, column)? = value;

        Ok(())
    }

    /// Iterate over the rows, starting with the longest one.
    pub fn rows(&self) -> Iter<'_, Vector<F>> {
        self.rows.iter()
    }

    /// Replace the dimension and all rows of this matrix by those of `source`.
    ///
    /// As with `Vector::assign`, `source` can't be `self`.
    pub fn assign(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the matrices are not of equal dimension.
    pub fn add(&self, other: &Self) -> Result<Self>
    where
        for<'r> &'r F: Add<&'r F, Output = F>,
    {
        self.zip_rows(other, |left, right| left.add(right))
    }

    /// Entry-wise difference.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the matrices are not of equal dimension.
    pub fn subtract(&self, other: &Self) -> Result<Self>
    where
        for<'r> &'r F: Sub<&'r F, Output = F>,
    {
        self.zip_rows(other, |left, right| left.subtract(right))
    }

    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Vector<F>, &Vector<F>) -> Result<Vector<F>>,
    ) -> Result<Self> {
        Error::check_sizes(self.len(), other.len())?;

        // Rows of equal index have equal length, so combining them can't fail
        let rows = self.rows.iter()
            .zip_eq(&other.rows)
            .map(|(left, right)| f(left, right))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_checked_rows(rows))
    }

    fn is_upper_triangular_layout(&self) -> bool {
        let size = self.len();
        self.rows.iter()
            .enumerate()
            .all(|(i, row)| row.start_index() == i && row.len() == size - i)
    }
}

impl<F: Clone> Clone for Matrix<F> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }

    /// Reuses the row allocations of `self` where possible.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

/// Panics when `row` is out of range, use `row` for a checked alternative.
impl<F: Element> Index<usize> for Matrix<F> {
    type Output = Vector<F>;

    fn index(&self, row: usize) -> &Self::Output {
        assert!(row < self.len(), "row {} out of range 0..{}", row, self.len());

        &self.rows[row]
    }
}

/// Mutable access to the values of a single matrix row.
///
/// Unlike a `&mut Vector`, this handle can't be used to replace the row, such that the length and
/// start index of every row stay consistent with the dimension of the matrix.
#[derive(Debug)]
pub struct RowMut<'a, F> {
    row: &'a mut Vector<F>,
}

impl<'a, F: Element> RowMut<'a, F> {
    /// Retrieve the value at a column for modification.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `column` is before the diagonal or past the last column.
    pub fn get_mut(&mut self, column: isize) -> Result<&mut F> {
        self.row.get_mut(column)
    }

    /// Set the value at a column.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `column` is before the diagonal or past the last column.
    pub fn set(&mut self, column: isize, value: F) -> Result<()> {
        self.row.set(column, value)
    }

    /// Iterate mutably over the stored values of this row, starting at the diagonal.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, F> {
        self.row.iter_mut()
    }
}

impl<'a, F> Deref for RowMut<'a, F> {
    type Target = Vector<F>;

    fn deref(&self) -> &Self::Target {
        &*self.row
    }
}

impl<'a, F: Element> Index<usize> for RowMut<'a, F> {
    type Output = F;

    fn index(&self, column: usize) -> &Self::Output {
        &self.row[column]
    }
}

impl<'a, F: Element> IndexMut<usize> for RowMut<'a, F> {
    fn index_mut(&mut self, column: usize) -> &mut Self::Output {
        &mut self.row[column]
    }
}

/// Writes the full square, with zeros below the diagonal, one row per line.
impl<F: Display + Zero> Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let zero = F::zero();
        for (i, row) in self.rows.iter().enumerate() {
            for _ in 0..i {
                write!(f, "{} ", zero)?;
            }
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
