//! Pseudo-legal move generation for a whole side.
//!
//! Scans the board row-major and dispatches each piece of the requested
//! color to its kind's generator. Own-king safety is not checked here and
//! castling is left to `castle_moves`.

use crate::game_state::chess_types::{piece_at, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

pub fn generate_pseudo_legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let mut out = Vec::<Move>::with_capacity(64);
    for square in Square::all() {
        match piece_at(game_state.board(), square) {
            Some(piece) if piece.color == color => {
                generate_piece_moves(game_state, square, piece, &mut out)
            }
            _ => {}
        }
    }
    out
}

#[inline]
pub fn generate_piece_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}
