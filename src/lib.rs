//! Crate root module declarations for the Plum chess rules engine.
//!
//! Exposes the game state, per-piece move generation, legality filtering,
//! apply/undo, perft and the small text helpers used by the terminal front
//! end, so binaries, benches and tests share stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod castle_rights;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod castle_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
    pub mod pseudo_legal_generator;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_diagram;
    pub mod long_algebraic;
    pub mod render_game_state;
}
