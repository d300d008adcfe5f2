//! Attack and check detection.
//!
//! A square is attacked by a color when one of its pieces could capture onto
//! it: pawn diagonals, knight and king offsets, or an unobstructed rook/bishop
//! ray. Pawn pushes never attack. Nothing here touches the side to move.

use crate::game_state::chess_types::{piece_at, Board, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::Direction;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state.board(), game_state.king_location(color), color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    !attackers_to_square(board, square, attacker_color, true).is_empty()
}

/// Squares and kinds of every `attacker_color` piece attacking `square`.
/// With `first_only` the scan stops after the first hit.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
    first_only: bool,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::<(Square, PieceKind)>::new();

    // An attacking pawn sits one row "behind" the square from its own view.
    let pawn = Piece::new(attacker_color, PieceKind::Pawn);
    for d_col in [-1i8, 1i8] {
        if let Some(from) = square.offset(-attacker_color.pawn_step(), d_col) {
            if piece_at(board, from) == Some(pawn) {
                attackers.push((from, PieceKind::Pawn));
                if first_only {
                    return attackers;
                }
            }
        }
    }

    let steppers: [(&[Direction], PieceKind); 2] = [
        (&KNIGHT_OFFSETS, PieceKind::Knight),
        (&KING_OFFSETS, PieceKind::King),
    ];
    for (offsets, kind) in steppers {
        let target = Piece::new(attacker_color, kind);
        for &(d_row, d_col) in offsets {
            let Some(from) = square.offset(d_row, d_col) else {
                continue;
            };
            if piece_at(board, from) == Some(target) {
                attackers.push((from, kind));
                if first_only {
                    return attackers;
                }
            }
        }
    }

    let sliders: [(&[Direction], PieceKind); 2] = [
        (&ROOK_DIRECTIONS, PieceKind::Rook),
        (&BISHOP_DIRECTIONS, PieceKind::Bishop),
    ];
    for (directions, line_kind) in sliders {
        for &(d_row, d_col) in directions {
            let mut cursor = square.offset(d_row, d_col);
            while let Some(from) = cursor {
                if let Some(piece) = piece_at(board, from) {
                    if piece.color == attacker_color
                        && (piece.kind == line_kind || piece.kind == PieceKind::Queen)
                    {
                        attackers.push((from, piece.kind));
                        if first_only {
                            return attackers;
                        }
                    }
                    break;
                }
                cursor = from.offset(d_row, d_col);
            }
        }
    }

    attackers
}
