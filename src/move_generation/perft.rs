//! Perft: counts leaf positions reachable at a fixed depth, with a breakdown
//! of the last ply's move types. Used as the move generator's regression
//! suite and benchmark.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Walks every legal line `depth` plies deep. The state is restored on
/// return.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        apply_move(game_state, &mv);

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(mv.is_capture());
            total.en_passant += usize::from(mv.is_en_passant);
            total.castles += usize::from(mv.is_castle);
            total.promotions += usize::from(mv.is_pawn_promotion);
            if game_state.in_check() {
                total.checks += 1;
                if generate_legal_moves(game_state).is_empty() {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft(game_state, depth - 1));
        }

        undo_move(game_state);
    }

    total
}

/// Node count below each root move, keyed by coordinate text.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in generate_legal_moves(game_state) {
        apply_move(game_state, &mv);
        out.push((mv.coordinate_text(), perft(game_state, depth - 1).nodes));
        undo_move(game_state);
    }
    out
}
