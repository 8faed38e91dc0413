//! # Traits for elements of the containers
//!
//! Containers only require their elements to be comparable, clonable and printable. Arithmetic
//! operations add the bounds they need on top of that, always in terms of references such that no
//! element is cloned more often than necessary (this matters for big rationals).
use std::fmt::{Debug, Display};

/// Element of a `Vector` or `Matrix` type.
///
/// This is an alias for the traits that are needed to derive a few practical traits for the
/// aforementioned types.
pub trait Element: PartialEq + Clone + Display + Debug {}

impl<T: PartialEq + Clone + Display + Debug> Element for T {}
