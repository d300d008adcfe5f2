//! Helpers shared by the per-kind generators.

use crate::game_state::chess_types::{piece_at, Board, Piece, PieceKind, Square};
use crate::moves::chess_move::Move;

/// Row/column step pairs.
pub type Direction = (i8, i8);

/// True when `square` holds a piece of the other color than `piece`.
#[inline]
pub fn holds_enemy(board: &Board, square: Square, piece: Piece) -> bool {
    matches!(piece_at(board, square), Some(other) if other.color != piece.color)
}

/// True when `square` holds a piece of the same color as `piece`.
#[inline]
pub fn holds_friend(board: &Board, square: Square, piece: Piece) -> bool {
    matches!(piece_at(board, square), Some(other) if other.color == piece.color)
}

/// Walks each direction until the edge, stopping before a friendly piece
/// and on (including) an enemy piece.
pub fn push_ray_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            if holds_friend(board, to, piece) {
                break;
            }
            out.push(plain_move(board, from, to, piece));
            if holds_enemy(board, to, piece) {
                break;
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// Single-step moves for fixed offset pieces (knight, king).
pub fn push_offset_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[Direction],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if !holds_friend(board, to, piece) {
            out.push(plain_move(board, from, to, piece));
        }
    }
}

#[inline]
pub fn plain_move(board: &Board, from: Square, to: Square, piece: Piece) -> Move {
    Move::for_piece(from, to, piece, board, PieceKind::Queen, false, false)
}
