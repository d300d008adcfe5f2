//! The `Move` value object describing a single ply.
//!
//! A move reads its moved and captured pieces from a board snapshot when it
//! is built, never when it is applied. En-passant and castle flags are given
//! by the caller; the constructor does not infer them from geometry.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{piece_at, Board, Piece, PieceKind, Square};
use crate::utils::algebraic::checked_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the pawn beside the mover, not the (empty)
    /// destination square.
    pub piece_captured: Option<Piece>,
    /// Only meaningful when `is_pawn_promotion`; normalised to Queen otherwise.
    pub promotion_kind: PieceKind,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_pawn_promotion: bool,
}

impl Move {
    /// Plain move with no special flags, promoting to a queen if it reaches
    /// the last rank.
    pub fn new(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        Self::build(start, end, board, PieceKind::Queen, false, false)
    }

    /// Full constructor used by collaborators that have already classified
    /// the ply.
    pub fn build(
        start: Square,
        end: Square,
        board: &Board,
        promotion_kind: PieceKind,
        is_en_passant: bool,
        is_castle: bool,
    ) -> ChessResult<Self> {
        let start = checked_square(i16::from(start.row), i16::from(start.col))?;
        let end = checked_square(i16::from(end.row), i16::from(end.col))?;
        if !promotion_kind.is_promotion_choice() {
            return Err(ChessError::InvalidPromotionPiece(promotion_kind));
        }
        let piece_moved = piece_at(board, start).ok_or(ChessError::EmptyStartSquare(start))?;
        Ok(Self::for_piece(
            start,
            end,
            piece_moved,
            board,
            promotion_kind,
            is_en_passant,
            is_castle,
        ))
    }

    /// Constructor for generators, which already know the moving piece.
    pub(crate) fn for_piece(
        start: Square,
        end: Square,
        piece_moved: Piece,
        board: &Board,
        promotion_kind: PieceKind,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Self {
        let piece_captured = if is_en_passant {
            piece_at(board, Square::new(start.row, end.col))
        } else {
            piece_at(board, end)
        };

        let is_pawn_promotion = piece_moved.kind == PieceKind::Pawn
            && end.row == piece_moved.color.promotion_row();

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            promotion_kind: if is_pawn_promotion {
                promotion_kind
            } else {
                PieceKind::Queen
            },
            is_en_passant,
            is_castle,
            is_pawn_promotion,
        }
    }

    /// Square of the piece taken by this move, if any.
    pub fn capture_square(&self) -> Option<Square> {
        self.piece_captured?;
        if self.is_en_passant {
            Some(Square::new(self.start.row, self.end.col))
        } else {
            Some(self.end)
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// True for a pawn advancing two rows from its start rank.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    /// True when the castle moved the king toward the h-file rook.
    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.end.col > self.start.col
    }

    /// Coordinate text such as `e2e4` or `e7e8q`.
    pub fn coordinate_text(&self) -> String {
        let mut out = format!("{}{}", self.start, self.end);
        if self.is_pawn_promotion {
            out.push(self.promotion_kind.letter().to_ascii_lowercase());
        }
        out
    }
}

/// Renders as `e2 to e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
