//! Legal move generation.
//!
//! Generates pseudo-legal moves plus castles for the side to move, then keeps
//! only those that do not leave the mover's own king attacked. Each candidate
//! is simulated with apply/undo on the live state, so the state (including
//! castling rights and their log) is unchanged when this returns.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal_generator::generate_pseudo_legal_moves;
use crate::moves::castle_moves::generate_castle_moves;
use crate::moves::chess_move::Move;

pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let mover = game_state.side_to_move();
    let rights_before = game_state.castle_rights();

    let mut candidates = generate_pseudo_legal_moves(game_state, mover);
    generate_castle_moves(game_state, mover, &mut candidates);

    let mut legal = Vec::<Move>::with_capacity(candidates.len());
    for mv in candidates {
        apply_move(game_state, &mv);
        let exposes_king = is_king_in_check(game_state, mover);
        undo_move(game_state);

        if !exposes_king {
            legal.push(mv);
        }
    }

    debug_assert_eq!(game_state.castle_rights(), rights_before);
    legal
}

#[cfg(test)]
mod tests {
    use super::generate_legal_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::board_diagram::state_from_rows;

    #[test]
    fn start_position_has_sixteen_pawn_and_four_knight_moves() {
        let mut game = GameState::new();
        let moves = generate_legal_moves(&mut game);
        assert_eq!(moves.len(), 20);
        let pawn = moves
            .iter()
            .filter(|mv| mv.piece_moved.kind == PieceKind::Pawn)
            .count();
        assert_eq!(pawn, 16);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn pinned_bishop_cannot_leave_the_file() {
        let mut game = state_from_rows(
            [
                "....r..k", //
                "........",
                "........",
                "........",
                "........",
                "........",
                "....B...",
                "....K...",
            ],
            Color::Light,
        );
        let moves = generate_legal_moves(&mut game);
        assert!(moves.iter().all(|mv| mv.piece_moved.kind == PieceKind::King));
        // d1, f1, d2, f2 are free; e2 is the bishop's own square
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let mut game = state_from_rows(
            [
                ".......k", //
                "........",
                "........",
                "........",
                "........",
                "........",
                "r.......",
                "....K...",
            ],
            Color::Light,
        );
        let moves = generate_legal_moves(&mut game);
        let mut targets: Vec<String> = moves.iter().map(|mv| mv.end.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["d1", "f1"]);
    }
}
