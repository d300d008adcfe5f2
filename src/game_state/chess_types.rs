//! Core value types shared by the board model and move generation.
//!
//! The board is a plain 8x8 mailbox indexed `[row][col]`. Row 0 is the dark
//! (black) back rank and row 7 is the light (white) back rank, so light pawns
//! advance toward row 0.

use std::fmt;

pub use crate::game_state::castle_rights::CastleRights;
pub use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn advance for this color.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row pawns of this color start on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Farthest row for this color's pawns, where they promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Row holding this color's king and rooks at the start of a game.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, strongest first.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Upper-case letter used in piece codes and diagrams.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A colored piece. Empty squares are `None` on the [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Two-symbol piece code such as `wP` or `bK`.
    pub fn code(self) -> String {
        let color = match self.color {
            Color::Light => 'w',
            Color::Dark => 'b',
        };
        format!("{color}{}", self.kind.letter())
    }

    /// Diagram letter: upper case for light, lower case for dark.
    pub fn symbol(self) -> char {
        match self.color {
            Color::Light => self.kind.letter(),
            Color::Dark => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        let kind = PieceKind::from_letter(symbol)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self { color, kind })
    }
}

/// Code printed for an empty square.
pub const EMPTY_CODE: &str = "--";

/// A `(row, col)` board coordinate, both in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Callers must pass coordinates in `0..=7`; see [`Square::try_new`].
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Square shifted by `(d_row, d_col)`, or `None` when it leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// All 64 squares in row-major scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// Piece placement, indexed `[row][col]`.
pub type Board = [[Option<Piece>; 8]; 8];

#[inline]
pub fn piece_at(board: &Board, square: Square) -> Option<Piece> {
    board[square.row as usize][square.col as usize]
}

#[inline]
pub fn set_piece(board: &mut Board, square: Square, piece: Option<Piece>) {
    board[square.row as usize][square.col as usize] = piece;
}

/// Standard starting placement.
pub fn starting_board() -> Board {
    const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    let mut board: Board = [[None; 8]; 8];
    for col in 0..8 {
        board[0][col] = Some(Piece::new(Color::Dark, BACK_RANK[col]));
        board[1][col] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
        board[6][col] = Some(Piece::new(Color::Light, PieceKind::Pawn));
        board[7][col] = Some(Piece::new(Color::Light, BACK_RANK[col]));
    }
    board
}
