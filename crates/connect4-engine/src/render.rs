//! Text rendering of a board.

use crate::Board;
use connect4_core::{Column, Pawn, COLUMNS, ROWS};
use std::fmt;

/// Characters used to draw each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub red: char,
    pub yellow: char,
    pub empty: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            red: Pawn::Red.to_char(),
            yellow: Pawn::Yellow.to_char(),
            empty: Pawn::Empty.to_char(),
        }
    }
}

impl RenderStyle {
    /// Returns the symbol for a cell.
    pub const fn symbol(&self, pawn: Pawn) -> char {
        match pawn {
            Pawn::Red => self.red,
            Pawn::Yellow => self.yellow,
            Pawn::Empty => self.empty,
        }
    }
}

impl Board {
    /// Renders the board top row first, followed by a line of column indices.
    ///
    /// ```
    /// use connect4_core::{Color, Column};
    /// use connect4_engine::{Board, RenderStyle};
    ///
    /// let mut board = Board::new();
    /// board.add_pawn(Color::Red, Column::new(0).unwrap()).unwrap();
    /// let text = board.render(&RenderStyle::default());
    /// assert!(text.ends_with("R . . . . . .\n0 1 2 3 4 5 6"));
    /// ```
    pub fn render(&self, style: &RenderStyle) -> String {
        let mut lines = Vec::with_capacity(ROWS + 1);
        for row in (0..ROWS).rev() {
            let line = (0..COLUMNS)
                .map(|column| {
                    let pawn = self.pawn_at(column, row).unwrap_or_default();
                    style.symbol(pawn).to_string()
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line);
        }
        lines.push(
            Column::all()
                .map(|column| column.to_char().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        );
        lines.join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect4_core::Color;

    #[test]
    fn empty_board() {
        let expected = "\
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
0 1 2 3 4 5 6";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn pawns_are_drawn_bottom_up() {
        let mut board = Board::new();
        board.add_pawn(Color::Red, Column::new(3).unwrap()).unwrap();
        board.add_pawn(Color::Yellow, Column::new(3).unwrap()).unwrap();
        board.add_pawn(Color::Yellow, Column::new(6).unwrap()).unwrap();

        let lines: Vec<String> = board.to_string().lines().map(String::from).collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[ROWS - 1], ". . . R . . Y");
        assert_eq!(lines[ROWS - 2], ". . . Y . . .");
    }

    #[test]
    fn custom_style() {
        let mut board = Board::new();
        board.add_pawn(Color::Yellow, Column::new(0).unwrap()).unwrap();
        let style = RenderStyle {
            red: 'x',
            yellow: 'o',
            empty: '_',
        };
        let text = board.render(&style);
        assert!(text.contains("o _ _ _ _ _ _\n0 1 2 3 4 5 6"));
        assert!(text.starts_with("_ _ _ _ _ _ _"));
    }
}
