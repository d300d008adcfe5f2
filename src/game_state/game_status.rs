//! Game outcome derived from the current position.
//!
//! No legal moves while in check is checkmate for the side to move; no legal
//! moves otherwise is stalemate.

use std::fmt;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn of(game_state: &mut GameState) -> Self {
        if !game_state.get_valid_moves().is_empty() {
            return GameStatus::InProgress;
        }
        if game_state.in_check() {
            GameStatus::Checkmate {
                winner: game_state.side_to_move().opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("In progress"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate: {winner} won"),
            GameStatus::Stalemate => f.write_str("Stalemate: it's a tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn fools_mate_is_checkmate_for_dark() {
        let mut game = GameState::new();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            assert_eq!(game.status(), GameStatus::InProgress);
            game.play(text).expect("fool's mate move should be legal");
        }

        assert!(game.get_valid_moves().is_empty());
        assert!(game.in_check());
        assert_eq!(game.checked_king_square(), Some(Square::new(7, 4)));
        let status = game.status();
        assert_eq!(status, GameStatus::Checkmate { winner: Color::Dark });
        assert!(status.is_over());
        assert_eq!(status.to_string(), "Checkmate: Black won");
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let mut game = GameState::from_diagram(
            &[
                "k.......", //
                "..Q.....",
                ".K......",
                "........",
                "........",
                "........",
                "........",
                "........",
            ],
            Color::Dark,
            CastleRights::none(),
        )
        .expect("diagram should parse");

        assert!(game.get_valid_moves().is_empty());
        assert!(!game.in_check());
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert_eq!(game.status().to_string(), "Stalemate: it's a tie");
    }
}
