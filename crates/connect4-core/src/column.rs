//! Validated column references.

use crate::COLUMNS;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing a [`Column`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ColumnError {
    #[error("illegal column index {0}: expected 0..{}", COLUMNS)]
    IllegalColumnIndex(i32),
}

/// A column of the board, guaranteed to be in `0..COLUMNS`.
///
/// Range checking happens once, at construction. Code holding a `Column`
/// never needs to re-validate it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(u8);

impl Column {
    /// Creates a column from a signed index.
    pub const fn new(index: i32) -> Result<Self, ColumnError> {
        if index >= 0 && (index as usize) < COLUMNS {
            Ok(Column(index as u8))
        } else {
            Err(ColumnError::IllegalColumnIndex(index))
        }
    }

    /// Creates a column from an unsigned index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < COLUMNS {
            Some(Column(index as u8))
        } else {
            None
        }
    }

    /// Returns the index (0-based, left to right).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over every column, left to right.
    pub fn all() -> impl Iterator<Item = Column> {
        (0..COLUMNS as u8).map(Column)
    }

    /// Returns the notation character for this column.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<i32> for Column {
    type Error = ColumnError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Column::new(index)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column({})", self.0)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
