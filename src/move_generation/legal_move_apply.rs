//! Reversible move application.
//!
//! `apply_move` and `undo_move` are exact inverses for any move generated
//! from the current position: board, turn, king locations, castling rights,
//! en-passant target and captured pieces all return to their prior values.
//! Neither function checks legality.

use crate::game_state::chess_types::{set_piece, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &mut GameState, mv: &Move) {
    let mover = mv.piece_moved.color;

    set_piece(&mut game_state.board, mv.start, None);
    if let (Some(square), Some(captured)) = (mv.capture_square(), mv.piece_captured) {
        set_piece(&mut game_state.board, square, None);
        game_state.pieces_captured.push(captured);
    }
    set_piece(&mut game_state.board, mv.end, Some(mv.piece_moved));
    game_state.move_log.push(*mv);

    if mv.is_pawn_promotion {
        set_piece(
            &mut game_state.board,
            mv.end,
            Some(Piece::new(mover, mv.promotion_kind)),
        );
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(mv);
        set_piece(&mut game_state.board, rook_from, None);
        set_piece(
            &mut game_state.board,
            rook_to,
            Some(Piece::new(mover, PieceKind::Rook)),
        );
    }

    update_castle_rights(game_state, mv);

    game_state.en_passant_log.push(game_state.en_passant_square);
    game_state.en_passant_square = if mv.is_double_pawn_push() {
        Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
    } else {
        None
    };

    game_state.recompute_king_locations();
    game_state.side_to_move = game_state.side_to_move.opposite();
}

/// Rolls back the most recent ply. Returns `None` when the log is empty.
pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.move_log.pop()?;

    set_piece(&mut game_state.board, mv.start, Some(mv.piece_moved));
    set_piece(&mut game_state.board, mv.end, None);
    if let Some(square) = mv.capture_square() {
        set_piece(&mut game_state.board, square, mv.piece_captured);
        game_state.pieces_captured.pop();
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        set_piece(&mut game_state.board, rook_to, None);
        set_piece(
            &mut game_state.board,
            rook_from,
            Some(Piece::new(mv.piece_moved.color, PieceKind::Rook)),
        );
    }

    // The first entry is the game's starting rights and is never popped.
    if game_state.castle_rights_log.len() > 1 {
        game_state.castle_rights_log.pop();
    }
    if let Some(previous) = game_state.castle_rights_log.last() {
        game_state.castle_rights = *previous;
    }

    game_state.en_passant_square = game_state.en_passant_log.pop().flatten();

    game_state.recompute_king_locations();
    game_state.side_to_move = game_state.side_to_move.opposite();

    Some(mv)
}

/// Rook origin and destination for a castle move.
pub fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start.row;
    if mv.is_kingside_castle() {
        (Square::new(row, 7), Square::new(row, 5))
    } else {
        (Square::new(row, 0), Square::new(row, 3))
    }
}

fn update_castle_rights(game_state: &mut GameState, mv: &Move) {
    let mut rights = game_state.castle_rights;
    let mover = mv.piece_moved.color;

    match mv.piece_moved.kind {
        PieceKind::King => rights.revoke_both(mover),
        PieceKind::Rook if mv.start.row == mover.back_row() => {
            rights.revoke_for_rook_corner(mv.start)
        }
        _ => {}
    }

    // Capturing a rook on its home corner also removes its right.
    rights.revoke_for_rook_corner(mv.end);

    game_state.castle_rights = rights;
    game_state.castle_rights_log.push(rights);
}

#[cfg(test)]
mod tests {
    use super::{apply_move, undo_move};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::Move;

    fn find(game: &mut GameState, text: &str) -> Move {
        game.get_valid_moves()
            .into_iter()
            .find(|mv| mv.coordinate_text() == text)
            .unwrap_or_else(|| panic!("{text} should be legal"))
    }

    #[test]
    fn double_push_sets_and_undo_clears_en_passant_target() {
        let mut game = GameState::new();
        let before = game.clone();
        let mv = find(&mut game, "e2e4");

        apply_move(&mut game, &mv);
        assert_eq!(game.en_passant_square(), Some(Square::new(5, 4)));
        assert_eq!(game.side_to_move(), Color::Dark);
        assert_eq!(game.castle_rights_log().len(), 2);

        assert_eq!(undo_move(&mut game), Some(mv));
        assert_eq!(game, before);
    }

    #[test]
    fn undo_on_fresh_game_is_a_no_op() {
        let mut game = GameState::new();
        assert_eq!(undo_move(&mut game), None);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn castle_moves_rook_and_revokes_rights() {
        let mut game = GameState::from_diagram(
            &[
                "r...k..r", //
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "R...K..R",
            ],
            Color::Light,
            CastleRights::all(),
        )
        .expect("diagram should parse");
        let before = game.clone();

        let castle = find(&mut game, "e1c1");
        assert!(castle.is_castle);
        apply_move(&mut game, &castle);

        let rook = Some(Piece::new(Color::Light, PieceKind::Rook));
        assert_eq!(piece_at(game.board(), Square::new(7, 3)), rook);
        assert_eq!(piece_at(game.board(), Square::new(7, 0)), None);
        assert_eq!(game.king_location(Color::Light), Square::new(7, 2));
        assert!(!game.castle_rights().kingside(Color::Light));
        assert!(!game.castle_rights().queenside(Color::Light));
        assert!(game.castle_rights().kingside(Color::Dark));

        undo_move(&mut game);
        assert_eq!(game, before);
    }

    #[test]
    fn capturing_a_home_rook_revokes_its_right() {
        let mut game = GameState::from_diagram(
            &[
                "r...k..r", //
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "R...K..R",
            ],
            Color::Light,
            CastleRights::all(),
        )
        .expect("diagram should parse");

        let capture = find(&mut game, "h1h8");
        apply_move(&mut game, &capture);
        assert!(!game.castle_rights().kingside(Color::Light));
        assert!(!game.castle_rights().kingside(Color::Dark));
        assert!(game.castle_rights().queenside(Color::Dark));
        assert_eq!(
            game.pieces_captured(),
            &[Piece::new(Color::Dark, PieceKind::Rook)]
        );

        undo_move(&mut game);
        assert!(game.castle_rights().kingside(Color::Dark));
        assert!(game.pieces_captured().is_empty());
    }

    #[test]
    fn promotion_replaces_pawn_and_undo_restores_it() {
        let mut game = GameState::from_diagram(
            &[
                "....k...", //
                ".P......",
                "........",
                "........",
                "........",
                "........",
                "........",
                "....K...",
            ],
            Color::Light,
            CastleRights::none(),
        )
        .expect("diagram should parse");
        let before = game.clone();

        let promote = find(&mut game, "b7b8n");
        apply_move(&mut game, &promote);
        assert_eq!(
            piece_at(game.board(), Square::new(0, 1)),
            Some(Piece::new(Color::Light, PieceKind::Knight))
        );

        undo_move(&mut game);
        assert_eq!(game, before);
    }
}
