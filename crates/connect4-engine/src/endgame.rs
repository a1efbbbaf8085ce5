//! Four-in-a-row detection.
//!
//! After a pawn lands, four line families are checked in order, stopping at
//! the first alignment found:
//!
//! 1. the played column (stride `COLUMNS`)
//! 2. the landing row (stride `1`)
//! 3. every anti-diagonal of the board (stride `COLUMNS - 1`)
//! 4. the main diagonals through the landing cell (stride `COLUMNS + 1`)
//!
//! Each window of [`LINE_LENGTH`] cells is summed; a sum of `+4` is a red
//! line, `-4` a yellow one.

use crate::board::{index_of, Board};
use connect4_core::{Color, Column, COLUMNS, LINE_LENGTH, ROWS};

/// Outcome of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endgame {
    /// No line of four was formed.
    NotWin,
    /// Red completed a line of four.
    RedWin,
    /// Yellow completed a line of four.
    YellowWin,
}

impl Endgame {
    /// Classifies the sum of a window of [`LINE_LENGTH`] cells.
    #[inline]
    pub const fn from_sum(sum: i8) -> Self {
        const FULL: i8 = LINE_LENGTH as i8;
        match sum {
            FULL => Endgame::RedWin,
            s if s == -FULL => Endgame::YellowWin,
            _ => Endgame::NotWin,
        }
    }

    /// Returns true if the move won the game.
    #[inline]
    pub const fn is_win(self) -> bool {
        !matches!(self, Endgame::NotWin)
    }

    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Endgame::NotWin => None,
            Endgame::RedWin => Some(Color::Red),
            Endgame::YellowWin => Some(Color::Yellow),
        }
    }
}

impl std::fmt::Display for Endgame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endgame::NotWin => write!(f, "no win"),
            Endgame::RedWin => write!(f, "Red wins"),
            Endgame::YellowWin => write!(f, "Yellow wins"),
        }
    }
}

/// Evaluates the move that just landed at `(column, row)`.
pub(crate) fn evaluate(board: &Board, column: Column, row: usize) -> Endgame {
    column_win(board, column)
        .or_else(|| row_win(board, row))
        .or_else(|| anti_diagonal_win(board))
        .or_else(|| main_diagonal_win(board, column.index(), row))
        .unwrap_or(Endgame::NotWin)
}

/// Sums the window of [`LINE_LENGTH`] cells starting at `start`.
#[inline]
fn window_sum(board: &Board, start: usize, stride: usize) -> i8 {
    (0..LINE_LENGTH)
        .map(|k| board.cell(start + k * stride).value())
        .sum()
}

/// Returns the first winning window among `starts`.
fn first_win(board: &Board, starts: impl Iterator<Item = usize>, stride: usize) -> Option<Endgame> {
    starts
        .map(|start| Endgame::from_sum(window_sum(board, start, stride)))
        .find(|endgame| endgame.is_win())
}

fn column_win(board: &Board, column: Column) -> Option<Endgame> {
    let starts = (0..=ROWS - LINE_LENGTH).map(|row| index_of(column.index(), row));
    first_win(board, starts, COLUMNS)
}

/// Only the landing row can hold a new horizontal line.
fn row_win(board: &Board, row: usize) -> Option<Endgame> {
    let starts = (0..=COLUMNS - LINE_LENGTH).map(|column| index_of(column, row));
    first_win(board, starts, 1)
}

/// Scans every anti-diagonal window on the board. Windows start at their
/// bottom-right cell and step one column left per row.
fn anti_diagonal_win(board: &Board) -> Option<Endgame> {
    let starts = (0..=ROWS - LINE_LENGTH).flat_map(|row| {
        (LINE_LENGTH - 1..COLUMNS).map(move |column| index_of(column, row))
    });
    first_win(board, starts, COLUMNS - 1)
}

/// Checks the main-diagonal windows passing through `(column, row)`.
/// Windows start at their bottom-left cell; those reaching past an edge are
/// dropped before summing.
fn main_diagonal_win(board: &Board, column: usize, row: usize) -> Option<Endgame> {
    let starts = (0..LINE_LENGTH).filter_map(|offset| {
        let start_column = column.checked_sub(offset)?;
        let start_row = row.checked_sub(offset)?;
        let fits = start_column + LINE_LENGTH <= COLUMNS && start_row + LINE_LENGTH <= ROWS;
        fits.then(|| index_of(start_column, start_row))
    });
    first_win(board, starts, COLUMNS + 1)
}
