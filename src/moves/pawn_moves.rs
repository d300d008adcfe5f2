use crate::game_state::chess_types::{piece_at, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::holds_enemy;
use crate::moves::chess_move::Move;

/// Pawn pushes, double pushes from the start row, diagonal captures and en
/// passant onto the current target square. A move onto the last row is
/// emitted once per promotion choice.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let board = game_state.board();
    let step = pawn.color.pawn_step();

    let Some(one_step) = from.offset(step, 0) else {
        return;
    };

    if piece_at(board, one_step).is_none() {
        push_pawn_move(game_state, from, one_step, pawn, false, out);

        if from.row == pawn.color.pawn_start_row() {
            if let Some(two_step) = from.offset(2 * step, 0) {
                if piece_at(board, two_step).is_none() {
                    push_pawn_move(game_state, from, two_step, pawn, false, out);
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(step, d_col) else {
            continue;
        };
        if holds_enemy(board, to, pawn) {
            push_pawn_move(game_state, from, to, pawn, false, out);
        } else if pawn.color == game_state.side_to_move()
            && game_state.en_passant_square() == Some(to)
        {
            push_pawn_move(game_state, from, to, pawn, true, out);
        }
    }
}

fn push_pawn_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    pawn: Piece,
    is_en_passant: bool,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    if to.row == pawn.color.promotion_row() {
        for promotion in PieceKind::PROMOTION_CHOICES {
            out.push(Move::for_piece(from, to, pawn, board, promotion, false, false));
        }
    } else {
        out.push(Move::for_piece(
            from,
            to,
            pawn,
            board,
            PieceKind::Queen,
            is_en_passant,
            false,
        ));
    }
}
