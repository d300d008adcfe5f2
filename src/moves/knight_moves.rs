use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{push_offset_moves, Direction};
use crate::moves::chess_move::Move;

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    knight: Piece,
    out: &mut Vec<Move>,
) {
    push_offset_moves(game_state.board(), from, knight, &KNIGHT_OFFSETS, out);
}
