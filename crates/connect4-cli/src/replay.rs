//! Scripted replay of a move list.
//!
//! Colors alternate starting from the configured first player. The replay
//! stops at the first winning move; any move listed after it is an error, as
//! is a move into a full column.

use connect4_core::{parse_moves, Color, Column, NotationError};
use connect4_engine::{Board, BoardError, Endgame};
use thiserror::Error;

/// Errors that can occur while replaying a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("move {number} ({color} in column {column}): {source}")]
    IllegalMove {
        number: usize,
        color: Color,
        column: Column,
        source: BoardError,
    },

    #[error("{extra} move(s) listed after {winner} won on move {number}")]
    MovesAfterWin {
        winner: Color,
        number: usize,
        extra: usize,
    },
}

/// How a replayed game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// A move completed a line of four.
    Won { winner: Color, moves: usize },
    /// Every cell was filled without a line of four.
    Full { moves: usize },
    /// The move list ran out before the game ended.
    Unfinished { moves: usize, to_move: Color },
}

impl std::fmt::Display for ReplayOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayOutcome::Won { winner, moves } => write!(f, "{} wins after {} moves", winner, moves),
            ReplayOutcome::Full { moves } => write!(f, "board full after {} moves, no winner", moves),
            ReplayOutcome::Unfinished { moves, to_move } => {
                write!(f, "game in progress after {} moves, {} to move", moves, to_move)
            }
        }
    }
}

/// Replays `moves` on a fresh board.
pub fn replay(moves: &[Column], first: Color) -> Result<(Board, ReplayOutcome), ReplayError> {
    let mut board = Board::new();
    let mut color = first;

    for (i, &column) in moves.iter().enumerate() {
        let number = i + 1;
        let endgame = board
            .add_pawn(color, column)
            .map_err(|source| ReplayError::IllegalMove {
                number,
                color,
                column,
                source,
            })?;

        if let Some(winner) = endgame.winner() {
            let extra = moves.len() - number;
            if extra > 0 {
                return Err(ReplayError::MovesAfterWin {
                    winner,
                    number,
                    extra,
                });
            }
            tracing::info!(%winner, moves = number, "game won");
            return Ok((board, ReplayOutcome::Won { winner, moves: number }));
        }
        debug_assert_eq!(endgame, Endgame::NotWin);
        color = color.opposite();
    }

    let outcome = if board.full() {
        ReplayOutcome::Full { moves: moves.len() }
    } else {
        ReplayOutcome::Unfinished {
            moves: moves.len(),
            to_move: color,
        }
    };
    tracing::info!(%outcome, "replay finished");
    Ok((board, outcome))
}

/// Parses and replays a move list written in notation.
pub fn replay_notation(notation: &str, first: Color) -> Result<(Board, ReplayOutcome), ReplayError> {
    let moves = parse_moves(notation)?;
    replay(&moves, first)
}
