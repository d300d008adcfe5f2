use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{push_offset_moves, Direction};
use crate::moves::chess_move::Move;

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Single-step king moves. Castling lives in `castle_moves` so that attack
/// probing never recurses into it.
pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    push_offset_moves(game_state.board(), from, king, &KING_OFFSETS, out);
}
