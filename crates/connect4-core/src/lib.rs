//! Core types for Connect Four.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`Pawn`] for cell contents and [`Color`] for the two players
//! - [`Column`], a validated drop slot
//! - Board dimension constants ([`COLUMNS`], [`ROWS`], [`BOARD_DIMENSION`])
//! - Move-list notation parsing and formatting

mod column;
pub mod notation;
mod pawn;

pub use column::{Column, ColumnError};
pub use notation::{format_moves, parse_moves, NotationError};
pub use pawn::{Color, Pawn};

/// Number of columns on the board.
pub const COLUMNS: usize = 7;

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Total number of cells on the board.
pub const BOARD_DIMENSION: usize = COLUMNS * ROWS;

/// Number of aligned pawns needed to win.
pub const LINE_LENGTH: usize = 4;
