//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! `(row, col)` squares. Row 0 is rank 8, column 0 is file `a`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// File letter for a column.
#[inline]
pub fn col_to_file(col: u8) -> char {
    char::from(b'a' + col)
}

/// Rank digit for a row.
#[inline]
pub fn row_to_rank(row: u8) -> char {
    char::from(b'8' - row)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", col_to_file(square.col), row_to_rank(square.row))
}

/// Square for raw coordinates, failing when they leave the board.
pub fn checked_square(row: i16, col: i16) -> ChessResult<Square> {
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return Err(ChessError::OutOfBounds { row, col });
    }
    Ok(Square::new(row as u8, col as u8))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, checked_square, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::new(7, 7));
        assert_eq!(square_to_algebraic(Square::new(0, 0)), "a8");
        assert_eq!(square_to_algebraic(Square::new(4, 4)), "e4");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert_eq!(
            checked_square(8, 0),
            Err(ChessError::OutOfBounds { row: 8, col: 0 })
        );
    }
}
