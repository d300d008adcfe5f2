//! Terminal board renderer.
//!
//! Creates a human-readable board view for the terminal front end, tests and
//! diagnostics. Row 0 (rank 8) is printed first.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::row_to_rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    #[default]
    Unicode,
    Ascii,
}

/// Render the board, marking the checked king (if any) with `*` after it.
pub fn render_game_state(game_state: &GameState, glyphs: Glyphs) -> String {
    let checked = game_state.checked_king_square();
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        out.push(row_to_rank(row));
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::new(row, col);
            match game_state.piece_at(square) {
                Some(piece) => out.push(piece_glyph(piece, glyphs)),
                None => out.push(empty_glyph(glyphs)),
            }

            if checked == Some(square) {
                out.push('*');
            } else if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(row_to_rank(row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Two-symbol codes per square (`wP`, `bK`, `--`), row 0 first.
pub fn board_codes(game_state: &GameState) -> Vec<Vec<String>> {
    game_state
        .board()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or_else(|| EMPTY_CODE.to_owned(), Piece::code))
                .collect()
        })
        .collect()
}

fn empty_glyph(glyphs: Glyphs) -> char {
    match glyphs {
        Glyphs::Unicode => '·',
        Glyphs::Ascii => '.',
    }
}

fn piece_glyph(piece: Piece, glyphs: Glyphs) -> char {
    if glyphs == Glyphs::Ascii {
        return piece.symbol();
    }
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{board_codes, render_game_state, Glyphs};
    use crate::game_state::game_state::GameState;

    #[test]
    fn ascii_start_position() {
        let text = render_game_state(&GameState::new(), Glyphs::Ascii);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[4], "5 . . . . . . . . 5");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }

    #[test]
    fn checked_king_is_marked() {
        let mut game = GameState::new();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.play(text).expect("move should be legal");
        }
        let text = render_game_state(&game, Glyphs::Ascii);
        assert!(text.lines().nth(8).is_some_and(|line| line.contains("K*")));
    }

    #[test]
    fn codes_use_two_symbols() {
        let codes = board_codes(&GameState::new());
        assert_eq!(codes[0][4], "bK");
        assert_eq!(codes[7][3], "wQ");
        assert_eq!(codes[4][4], "--");
    }
}
