//! Coordinate move text (`e2e4`, `e7e8q`).
//!
//! Parsing only yields the squares and optional promotion letter; whether the
//! ply is en passant, a castle or a promotion is settled by
//! `GameState::resolve_move` against the legal set.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraicString(text.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;

    let promotion = match text.chars().nth(4) {
        None => None,
        Some(letter) => Some(char_to_promotion(letter)?),
    };

    Ok((start, end, promotion))
}

#[inline]
pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.coordinate_text()
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match PieceKind::from_letter(ch) {
        Some(kind) if kind.is_promotion_choice() => Ok(kind),
        Some(kind) => Err(ChessError::InvalidPromotionPiece(kind)),
        None => Err(ChessError::InvalidAlgebraicString(ch.to_string())),
    }
}
