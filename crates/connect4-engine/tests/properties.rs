//! Property tests over random move sequences.

use connect4_core::{Color, Column, Pawn, COLUMNS, LINE_LENGTH, ROWS};
use connect4_engine::{Board, BoardError, Endgame};
use proptest::prelude::*;

/// Scans every line of four on the board, in every direction.
fn brute_force_winner(board: &Board) -> Endgame {
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];
    for column in 0..COLUMNS as isize {
        for row in 0..ROWS as isize {
            for (dc, dr) in DIRECTIONS {
                let mut sum = 0i8;
                let mut inside = true;
                for k in 0..LINE_LENGTH as isize {
                    let (c, r) = (column + k * dc, row + k * dr);
                    if c < 0 || r < 0 {
                        inside = false;
                        break;
                    }
                    match board.pawn_at(c as usize, r as usize) {
                        Ok(pawn) => sum += pawn.value(),
                        Err(_) => {
                            inside = false;
                            break;
                        }
                    }
                }
                if inside {
                    let endgame = Endgame::from_sum(sum);
                    if endgame.is_win() {
                        return endgame;
                    }
                }
            }
        }
    }
    Endgame::NotWin
}

fn snapshot(board: &Board) -> Vec<Pawn> {
    (0..ROWS)
        .flat_map(|row| (0..COLUMNS).map(move |column| (column, row)))
        .map(|(column, row)| board.pawn_at(column, row).unwrap())
        .collect()
}

fn columns() -> impl Strategy<Value = Vec<Column>> {
    prop::collection::vec(
        (0..COLUMNS).prop_map(|i| Column::from_index(i).unwrap()),
        0..80,
    )
}

proptest! {
    #[test]
    fn reported_win_matches_brute_force(moves in columns()) {
        let mut board = Board::new();
        let mut color = Color::Red;
        for column in moves {
            let Ok(endgame) = board.add_pawn(color, column) else {
                continue;
            };
            prop_assert_eq!(endgame, brute_force_winner(&board));
            if endgame.is_win() {
                prop_assert_eq!(endgame.winner(), Some(color));
                break;
            }
            color = color.opposite();
        }
    }

    #[test]
    fn pawns_land_on_top_of_their_column(moves in columns()) {
        let mut board = Board::new();
        let mut color = Color::Red;
        for column in moves {
            let height = board.column_height(column);
            match board.drop_pawn(color, column) {
                Ok(placement) => {
                    prop_assert_eq!(placement.row, height);
                    prop_assert_eq!(board.column_height(column), height + 1);
                    for row in 0..placement.row {
                        prop_assert!(!board.pawn_at(column.index(), row).unwrap().is_empty());
                    }
                }
                Err(err) => {
                    prop_assert_eq!(err, BoardError::ColumnFull(column));
                    prop_assert_eq!(height, ROWS);
                }
            }
            color = color.opposite();
        }
    }

    #[test]
    fn placed_pawns_never_change(moves in columns()) {
        let mut board = Board::new();
        let mut color = Color::Red;
        for column in moves {
            let before = snapshot(&board);
            let result = board.add_pawn(color, column);
            let after = snapshot(&board);

            let changed = before
                .iter()
                .zip(&after)
                .filter(|(old, new)| old != new)
                .count();
            for (old, new) in before.iter().zip(&after) {
                if !old.is_empty() {
                    prop_assert_eq!(old, new);
                }
            }
            prop_assert_eq!(changed, usize::from(result.is_ok()));
            color = color.opposite();
        }
    }

    #[test]
    fn full_iff_every_cell_taken(moves in columns()) {
        let mut board = Board::new();
        let mut color = Color::Yellow;
        for column in moves {
            let _ = board.add_pawn(color, column);
            color = color.opposite();
            prop_assert_eq!(board.full(), board.pawn_count() == COLUMNS * ROWS);
        }
    }
}
