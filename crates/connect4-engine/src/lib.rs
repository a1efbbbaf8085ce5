//! Connect Four rules engine.
//!
//! This crate provides:
//! - [`Board`] - flat cell storage with gravity-based insertion
//! - [`Endgame`] - the outcome of a move, computed after every insertion
//! - [`RenderStyle`] - text rendering of a board for console output
//!
//! # Architecture
//!
//! Cells live in a single array indexed by `column + row * COLUMNS`, row 0
//! at the bottom. Every line orientation then becomes a fixed stride through
//! that array: `COLUMNS` for columns, `1` for rows, `COLUMNS - 1` and
//! `COLUMNS + 1` for the two diagonals. Pawns carry signed values
//! (`Red = +1`, `Yellow = -1`, `Empty = 0`), so a line of four is detected
//! by summing a window and comparing the result with `±4`.
//!
//! # Example
//!
//! ```
//! use connect4_core::{Color, Column};
//! use connect4_engine::{Board, Endgame};
//!
//! let mut board = Board::new();
//! let column = Column::new(3).unwrap();
//! for _ in 0..3 {
//!     assert_eq!(board.add_pawn(Color::Red, column).unwrap(), Endgame::NotWin);
//! }
//! assert_eq!(board.add_pawn(Color::Red, column).unwrap(), Endgame::RedWin);
//! ```

mod board;
mod endgame;
mod render;

pub use board::{Board, BoardError, Placement};
pub use endgame::Endgame;
pub use render::RenderStyle;
