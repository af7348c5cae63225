use crate::PromotionChooser;
use crate::game_state::{Color, PieceKind, Square};

/// Piece a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Promotion {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    /// Interpret a player's answer by its first non-blank character.
    ///
    /// `Q`, `R`, `B` and `N` (either case) select a piece; anything else,
    /// including an empty answer, selects the queen.
    pub fn from_input(input: &str) -> Self {
        match input.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('R') => Promotion::Rook,
            Some('B') => Promotion::Bishop,
            Some('N') => Promotion::Knight,
            _ => Promotion::Queen,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }
}

impl From<Promotion> for PieceKind {
    fn from(promotion: Promotion) -> Self {
        promotion.kind()
    }
}

/// A fixed answer, used for every promotion.
impl PromotionChooser for Promotion {
    fn choose(&mut self, _color: Color, _square: Square) -> Promotion {
        *self
    }
}
