//! Board storage and gravity-based insertion.

use crate::endgame::{self, Endgame};
use connect4_core::{Color, Column, Pawn, BOARD_DIMENSION, COLUMNS, ROWS};
use thiserror::Error;

/// Errors that can occur when operating on a [`Board`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("column {0} is full")]
    ColumnFull(Column),

    #[error("position ({column}, {row}) is outside the board")]
    IndexOutOfRange { column: usize, row: usize },
}

/// Where a pawn landed and what it did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Column the pawn was dropped into.
    pub column: Column,
    /// Row the pawn came to rest on (0 is the bottom row).
    pub row: usize,
    /// Outcome of the move.
    pub endgame: Endgame,
}

/// A Connect Four board.
///
/// Cells are stored row-major from the bottom row up: the cell at
/// `(column, row)` lives at index `column + row * COLUMNS`. The board only
/// ever gains pawns; within a column the occupied cells always form a
/// contiguous run starting at row 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Pawn; BOARD_DIMENSION],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts board coordinates to a flat cell index.
#[inline]
pub(crate) const fn index_of(column: usize, row: usize) -> usize {
    column + row * COLUMNS
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Board {
            cells: [Pawn::Empty; BOARD_DIMENSION],
        }
    }

    /// Returns true if every cell holds a pawn.
    pub fn full(&self) -> bool {
        self.cells.iter().all(|pawn| !pawn.is_empty())
    }

    /// Returns the pawn at the given coordinates.
    ///
    /// Row 0 is the bottom row.
    pub fn pawn_at(&self, column: usize, row: usize) -> Result<Pawn, BoardError> {
        if column >= COLUMNS || row >= ROWS {
            return Err(BoardError::IndexOutOfRange { column, row });
        }
        Ok(self.cells[index_of(column, row)])
    }

    /// Returns the pawn stored at a flat index.
    #[inline]
    pub(crate) fn cell(&self, index: usize) -> Pawn {
        self.cells[index]
    }

    /// Returns the number of pawns stacked in a column.
    pub fn column_height(&self, column: Column) -> usize {
        (0..ROWS)
            .take_while(|&row| !self.cells[index_of(column.index(), row)].is_empty())
            .count()
    }

    /// Returns true if no more pawns fit in the column.
    pub fn is_column_full(&self, column: Column) -> bool {
        !self.cells[index_of(column.index(), ROWS - 1)].is_empty()
    }

    /// Iterates over the columns that can still accept a pawn, left to right.
    pub fn playable_columns(&self) -> impl Iterator<Item = Column> + '_ {
        Column::all().filter(|&column| !self.is_column_full(column))
    }

    /// Returns the total number of pawns on the board.
    pub fn pawn_count(&self) -> usize {
        self.cells.iter().filter(|pawn| !pawn.is_empty()).count()
    }

    /// Finds the lowest empty row of a column, walking up from row 0.
    fn landing_row(&self, column: Column) -> Option<usize> {
        let mut index = column.index();
        for row in 0..ROWS {
            if self.cells[index].is_empty() {
                return Some(row);
            }
            index += COLUMNS;
        }
        None
    }

    /// Drops a pawn into a column and reports the outcome of the move.
    ///
    /// Fails with [`BoardError::ColumnFull`] without touching the board if
    /// the column has no room left.
    pub fn add_pawn(&mut self, color: Color, column: Column) -> Result<Endgame, BoardError> {
        self.drop_pawn(color, column).map(|placement| placement.endgame)
    }

    /// Like [`add_pawn`](Board::add_pawn), but also returns the landing row.
    pub fn drop_pawn(&mut self, color: Color, column: Column) -> Result<Placement, BoardError> {
        let Some(row) = self.landing_row(column) else {
            tracing::debug!(column = column.index(), %color, "rejected drop into full column");
            return Err(BoardError::ColumnFull(column));
        };

        self.cells[index_of(column.index(), row)] = color.pawn();
        tracing::trace!(column = column.index(), row, %color, "pawn dropped");

        let endgame = endgame::evaluate(self, column, row);
        if endgame.is_win() {
            tracing::debug!(column = column.index(), row, %color, ?endgame, "winning move");
        }

        Ok(Placement {
            column,
            row,
            endgame,
        })
    }
}
