//! Move-list notation parsing and formatting.
//!
//! A game is written as the sequence of columns played, one zero-based digit
//! per move. Whitespace and commas between moves are ignored, so `"3344"`,
//! `"3 3 4 4"` and `"3,3,4,4"` all describe the same game.

use crate::{Column, ColumnError};
use thiserror::Error;

/// Errors that can occur when parsing a move list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid character '{0}' in move list")]
    InvalidCharacter(char),

    #[error("invalid move: {0}")]
    IllegalColumn(#[from] ColumnError),
}

/// Parses a move list into columns.
///
/// An empty or separator-only string yields an empty list.
pub fn parse_moves(s: &str) -> Result<Vec<Column>, NotationError> {
    let mut moves = Vec::with_capacity(s.len());
    for c in s.chars() {
        if c.is_whitespace() || c == ',' {
            continue;
        }
        let digit = c.to_digit(10).ok_or(NotationError::InvalidCharacter(c))?;
        moves.push(Column::new(digit as i32)?);
    }
    Ok(moves)
}

/// Formats columns as a space-separated move list.
pub fn format_moves(moves: &[Column]) -> String {
    moves
        .iter()
        .map(|c| c.to_char().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
