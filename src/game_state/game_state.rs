//! Mailbox game state for one game of chess.
//!
//! `GameState` owns the board, turn, cached king locations, en-passant target,
//! castling rights with their per-ply history, the move log and the captured
//! pieces. One instance is meant to live across many games; call
//! [`GameState::reset`] between them.
//!
//! Check, checkmate and stalemate are derived on demand and never stored.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::pseudo_legal_generator::generate_pseudo_legal_moves;
use crate::moves::castle_moves::generate_castle_moves;
use crate::moves::chess_move::Move;
use crate::utils::board_diagram::parse_diagram;
use crate::utils::long_algebraic::parse_coordinate_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // Derived from `board` after every mutation; indexed by `Color::index`.
    pub(crate) king_locations: [Square; 2],

    pub(crate) en_passant_square: Option<Square>,
    pub(crate) en_passant_log: Vec<Option<Square>>,

    // `castle_rights_log` starts with the game's initial rights and gains one
    // entry per applied ply; its last entry always equals `castle_rights`.
    pub(crate) castle_rights: CastleRights,
    pub(crate) castle_rights_log: Vec<CastleRights>,

    pub(crate) move_log: Vec<Move>,
    pub(crate) pieces_captured: Vec<Piece>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(starting_board(), Color::Light, CastleRights::all())
    }
}

impl GameState {
    /// Standard starting position, light to move.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Position from eight rows of piece letters (`.` for empty), row 0 first.
    /// Exactly one king per color is required.
    pub fn from_diagram(
        rows: &[&str],
        side_to_move: Color,
        castle_rights: CastleRights,
    ) -> ChessResult<Self> {
        let board = parse_diagram(rows)?;
        for color in [Color::Light, Color::Dark] {
            let king = Piece::new(color, PieceKind::King);
            let count = Square::all()
                .filter(|sq| piece_at(&board, *sq) == Some(king))
                .count();
            if count != 1 {
                return Err(ChessError::KingCount { color, count });
            }
        }
        Ok(Self::with_board(board, side_to_move, castle_rights))
    }

    fn with_board(board: Board, side_to_move: Color, castle_rights: CastleRights) -> Self {
        let mut game_state = Self {
            board,
            side_to_move,
            king_locations: [Square::new(7, 4), Square::new(0, 4)],
            en_passant_square: None,
            en_passant_log: Vec::new(),
            castle_rights,
            castle_rights_log: vec![castle_rights],
            move_log: Vec::new(),
            pieces_captured: Vec::new(),
        };
        game_state.recompute_king_locations();
        game_state
    }

    /// Reinitialises board, logs, rights and turn for a new game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // --- Read-only views for the front end ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `None` for empty squares and for squares off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        piece_at(&self.board, square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn castle_rights_log(&self) -> &[CastleRights] {
        &self.castle_rights_log
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// One entry per capture, oldest first.
    #[inline]
    pub fn pieces_captured(&self) -> &[Piece] {
        &self.pieces_captured
    }

    // --- Generation and probing ---

    /// Pseudo-legal moves for the side to move, in board scan order.
    /// Castles are not included.
    pub fn get_possible_moves(&self) -> Vec<Move> {
        generate_pseudo_legal_moves(self, self.side_to_move)
    }

    /// Castles currently available to the side to move.
    pub fn get_castle_moves(&self) -> Vec<Move> {
        let mut out = Vec::new();
        generate_castle_moves(self, self.side_to_move, &mut out);
        out
    }

    /// Every legal move for the side to move. Takes `&mut self` because each
    /// candidate is simulated and rolled back; the state is unchanged on
    /// return.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    #[inline]
    pub fn square_under_attack(&self, square: Square, attacker: Color) -> bool {
        is_square_attacked(&self.board, square, attacker)
    }

    /// True when the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    /// King square of the side to move when it is in check.
    pub fn checked_king_square(&self) -> Option<Square> {
        self.in_check()
            .then(|| self.king_location(self.side_to_move))
    }

    pub fn status(&mut self) -> GameStatus {
        GameStatus::of(self)
    }

    // --- Mutation ---

    /// Commits `mv` if it is in the current legal set.
    pub fn move_piece(&mut self, mv: Move) -> ChessResult<()> {
        if !self.get_valid_moves().contains(&mv) {
            return Err(ChessError::IllegalMove(mv.to_string()));
        }
        apply_move(self, &mv);
        Ok(())
    }

    /// Rolls back exactly one ply; `None` when nothing has been played.
    pub fn undo_move(&mut self) -> Option<Move> {
        undo_move(self)
    }

    /// Matches a proposed start/end pair against the legal set, filling in
    /// en-passant, castle and promotion details. `promotion` defaults to a
    /// queen and is ignored for non-promoting moves.
    pub fn resolve_move(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        let wanted = promotion.unwrap_or(PieceKind::Queen);
        self.get_valid_moves()
            .into_iter()
            .filter(|mv| mv.start == start && mv.end == end)
            .find(|mv| !mv.is_pawn_promotion || mv.promotion_kind == wanted)
            .ok_or_else(|| ChessError::IllegalMove(format!("{start} to {end}")))
    }

    /// Parses coordinate text such as `e2e4` or `e7e8n`, resolves it and
    /// commits it.
    pub fn play(&mut self, text: &str) -> ChessResult<Move> {
        let (start, end, promotion) = parse_coordinate_move(text)?;
        let mv = self.resolve_move(start, end, promotion)?;
        apply_move(self, &mv);
        Ok(mv)
    }

    /// Full-board scan for both kings.
    pub(crate) fn recompute_king_locations(&mut self) {
        for square in Square::all() {
            if let Some(Piece {
                color,
                kind: PieceKind::King,
            }) = piece_at(&self.board, square)
            {
                self.king_locations[color.index()] = square;
            }
        }
    }
}
