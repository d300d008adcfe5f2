//! Board setup from piece-letter diagrams.
//!
//! A diagram is eight rows of eight characters, row 0 (rank 8) first.
//! Upper-case letters are light pieces, lower-case dark, `.` is empty.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Piece};

pub fn parse_diagram(rows: &[&str]) -> ChessResult<Board> {
    if rows.len() != 8 {
        return Err(ChessError::InvalidDiagram(format!(
            "expected 8 rows, got {}",
            rows.len()
        )));
    }

    let mut board: Board = [[None; 8]; 8];
    for (row, text) in rows.iter().enumerate() {
        let cells: Vec<char> = text.chars().collect();
        if cells.len() != 8 {
            return Err(ChessError::InvalidDiagram(format!(
                "row {row} has {} cells: {text:?}",
                cells.len()
            )));
        }
        for (col, cell) in cells.into_iter().enumerate() {
            board[row][col] = match cell {
                '.' => None,
                other => Some(Piece::from_symbol(other).ok_or_else(|| {
                    ChessError::InvalidDiagram(format!("unknown piece {other:?} in row {row}"))
                })?),
            };
        }
    }

    Ok(board)
}

/// Test shorthand: position with no castling rights.
#[cfg(test)]
pub(crate) fn state_from_rows(
    rows: [&str; 8],
    side_to_move: crate::game_state::chess_types::Color,
) -> crate::game_state::game_state::GameState {
    crate::game_state::game_state::GameState::from_diagram(
        &rows,
        side_to_move,
        crate::game_state::castle_rights::CastleRights::none(),
    )
    .expect("test diagram should parse")
}
