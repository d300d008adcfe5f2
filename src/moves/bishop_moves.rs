use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{push_ray_moves, Direction};
use crate::moves::chess_move::Move;

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    bishop: Piece,
    out: &mut Vec<Move>,
) {
    push_ray_moves(game_state.board(), from, bishop, &BISHOP_DIRECTIONS, out);
}
