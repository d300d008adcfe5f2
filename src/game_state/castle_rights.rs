//! Castling availability record.
//!
//! Rights only ever move from `true` to `false` over a game. `GameState`
//! keeps one record per applied ply so undo can restore the previous one.

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastleRights {
    pub const fn all() -> Self {
        Self {
            light_kingside: true,
            light_queenside: true,
            dark_kingside: true,
            dark_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            light_kingside: false,
            light_queenside: false,
            dark_kingside: false,
            dark_queenside: false,
        }
    }

    #[inline]
    pub const fn kingside(&self, color: Color) -> bool {
        match color {
            Color::Light => self.light_kingside,
            Color::Dark => self.dark_kingside,
        }
    }

    #[inline]
    pub const fn queenside(&self, color: Color) -> bool {
        match color {
            Color::Light => self.light_queenside,
            Color::Dark => self.dark_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::Light => self.light_kingside = false,
            Color::Dark => self.dark_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::Light => self.light_queenside = false,
            Color::Dark => self.dark_queenside = false,
        }
    }

    pub fn revoke_both(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }

    /// Revokes the right tied to a rook home corner, if `square` is one.
    pub fn revoke_for_rook_corner(&mut self, square: Square) {
        for color in [Color::Light, Color::Dark] {
            if square.row != color.back_row() {
                continue;
            }
            match square.col {
                0 => self.revoke_queenside(color),
                7 => self.revoke_kingside(color),
                _ => {}
            }
        }
    }

    /// True when every right held by `self` is also held by `earlier`.
    pub fn is_subset_of(&self, earlier: &CastleRights) -> bool {
        (!self.light_kingside || earlier.light_kingside)
            && (!self.light_queenside || earlier.light_queenside)
            && (!self.dark_kingside || earlier.dark_kingside)
            && (!self.dark_queenside || earlier.dark_queenside)
    }
}

#[cfg(test)]
mod tests {
    use super::CastleRights;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn rook_corners_map_to_matching_rights() {
        let mut rights = CastleRights::all();
        rights.revoke_for_rook_corner(Square::new(7, 7));
        assert!(!rights.kingside(Color::Light));
        assert!(rights.queenside(Color::Light));

        rights.revoke_for_rook_corner(Square::new(0, 0));
        assert!(!rights.queenside(Color::Dark));
        assert!(rights.kingside(Color::Dark));

        rights.revoke_for_rook_corner(Square::new(4, 0));
        assert!(rights.is_subset_of(&CastleRights::all()));
        assert!(!CastleRights::all().is_subset_of(&rights));
    }

    #[test]
    fn revoke_both_clears_one_color_only() {
        let mut rights = CastleRights::all();
        rights.revoke_both(Color::Dark);
        assert_eq!(
            rights,
            CastleRights {
                light_kingside: true,
                light_queenside: true,
                dark_kingside: false,
                dark_queenside: false,
            }
        );
    }
}
