use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::generate_rook_moves;

/// Union of rook rays and bishop rays.
pub fn generate_queen_moves(game_state: &GameState, from: Square, queen: Piece, out: &mut Vec<Move>) {
    generate_rook_moves(game_state, from, queen, out);
    generate_bishop_moves(game_state, from, queen, out);
}
