//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by game logic, coordinate
//! parsing and position setup. Input-shaped variants (`InvalidAlgebraicString`,
//! `InvalidDiagram`, ...) are suitable for showing to a user; `IllegalMove`
//! means the caller proposed a ply outside the current legal set and the
//! board was left untouched.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The proposed ply is not in the legal move set for the side to move.
    ///
    /// Payload: human readable move text.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A move was built from a square that holds no piece.
    #[error("no piece on start square {0}")]
    EmptyStartSquare(Square),

    /// Pawns may only promote to a queen, rook, bishop or knight.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    /// Row/column pair outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i16, col: i16 },

    /// A coordinate string such as `e4` or `e2e4` failed to parse.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// A board diagram was malformed.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    /// A position must hold exactly one king per color.
    #[error("{color} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },
}

#[cfg(test)]
mod tests {
    use super::ChessError;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            ChessError::EmptyStartSquare(Square::new(4, 4)).to_string(),
            "no piece on start square e4"
        );
        assert_eq!(
            ChessError::KingCount {
                color: Color::Dark,
                count: 0
            }
            .to_string(),
            "Black has 0 kings, expected exactly one"
        );
    }
}
