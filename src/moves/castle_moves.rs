//! Castle generation, kept apart from the king's step generator.
//!
//! Each side is checked independently. A castle is emitted when the right is
//! still held, king and rook sit on their home squares, every square between
//! them is empty, and none of the king's origin, pass-through or destination
//! squares is attacked.

use crate::game_state::chess_types::{piece_at, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::Move;

const KING_HOME_COL: u8 = 4;

pub fn generate_castle_moves(game_state: &GameState, color: Color, out: &mut Vec<Move>) {
    let board = game_state.board();
    let row = color.back_row();
    let king_from = Square::new(row, KING_HOME_COL);
    let king = Piece::new(color, PieceKind::King);
    let enemy = color.opposite();

    if piece_at(board, king_from) != Some(king) {
        return;
    }
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    let rights = game_state.castle_rights();
    if rights.kingside(color) && side_is_clear(game_state, color, 7, &[5, 6], &[5, 6]) {
        out.push(castle_move(game_state, king_from, Square::new(row, 6), king));
    }
    if rights.queenside(color) && side_is_clear(game_state, color, 0, &[1, 2, 3], &[3, 2]) {
        out.push(castle_move(game_state, king_from, Square::new(row, 2), king));
    }
}

fn side_is_clear(
    game_state: &GameState,
    color: Color,
    rook_col: u8,
    between_cols: &[u8],
    king_path_cols: &[u8],
) -> bool {
    let board = game_state.board();
    let row = color.back_row();

    if piece_at(board, Square::new(row, rook_col)) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }
    if between_cols
        .iter()
        .any(|&col| piece_at(board, Square::new(row, col)).is_some())
    {
        return false;
    }
    !king_path_cols
        .iter()
        .any(|&col| is_square_attacked(board, Square::new(row, col), color.opposite()))
}

fn castle_move(game_state: &GameState, from: Square, to: Square, king: Piece) -> Move {
    Move::for_piece(from, to, king, game_state.board(), PieceKind::Queen, false, true)
}

#[cfg(test)]
mod tests {
    use super::generate_castle_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn castles(rows: [&str; 8], color: Color) -> Vec<String> {
        let game = GameState::from_diagram(&rows, color, CastleRights::all())
            .expect("diagram should parse");
        let mut moves = Vec::new();
        generate_castle_moves(&game, color, &mut moves);
        assert!(moves.iter().all(|mv| mv.is_castle));
        moves.iter().map(|mv| mv.coordinate_text()).collect()
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        let rows = [
            "r...k..r", //
            "pppppppp",
            "........",
            "........",
            "........",
            "........",
            "PPPPPPPP",
            "R...K..R",
        ];
        assert_eq!(castles(rows, Color::Light), vec!["e1g1", "e1c1"]);
        assert_eq!(castles(rows, Color::Dark), vec!["e8g8", "e8c8"]);
    }

    #[test]
    fn pieces_between_block_castling() {
        let rows = [
            "rn..k.nr", //
            "pppppppp",
            "........",
            "........",
            "........",
            "........",
            "PPPPPPPP",
            "R...KB.R",
        ];
        assert_eq!(castles(rows, Color::Light), vec!["e1c1"]);
        assert!(castles(rows, Color::Dark).is_empty());
    }

    #[test]
    fn attacked_squares_block_castling() {
        // rook on f8 covers f1, so only the kingside is lost.
        let pass_through = [
            "....kr..", //
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ];
        assert_eq!(castles(pass_through, Color::Light), vec!["e1c1"]);

        let in_check = [
            "....r..k", //
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ];
        assert!(castles(in_check, Color::Light).is_empty());

        // only the destination is covered: g8 rook on g1, c8 rook on c1.
        let kingside_target = [
            "....k.r.", //
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ];
        assert_eq!(castles(kingside_target, Color::Light), vec!["e1c1"]);

        let queenside_target = [
            "..r.k...", //
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ];
        assert_eq!(castles(queenside_target, Color::Light), vec!["e1g1"]);

        // b1 may be attacked; only the king's path matters.
        let b_file = [
            ".r.....k", //
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K...",
        ];
        assert_eq!(castles(b_file, Color::Light), vec!["e1c1"]);
    }

    #[test]
    fn lost_rights_are_respected() {
        let rows = [
            "r...k..r", //
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ];
        let rights = CastleRights {
            light_kingside: false,
            light_queenside: true,
            dark_kingside: true,
            dark_queenside: false,
        };
        let game = GameState::from_diagram(&rows, Color::Light, rights).expect("diagram should parse");
        let mut moves = Vec::new();
        generate_castle_moves(&game, Color::Light, &mut moves);
        generate_castle_moves(&game, Color::Dark, &mut moves);
        let texts: Vec<String> = moves.iter().map(|mv| mv.coordinate_text()).collect();
        assert_eq!(texts, vec!["e1c1", "e8g8"]);
    }
}
