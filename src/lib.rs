use game_logic::GameEngine;
use game_state::{Color, Square};
use promotion::Promotion;

pub mod console;
pub mod error;
pub mod game_logic;
pub mod game_state;
pub mod promotion;

pub use error::EngineError;

/// Trait for asking the player which piece a pawn promotes to.
///
/// Called synchronously while a promoting move completes, before the
/// turn passes. Abstracts over an interactive prompt, scripted answers
/// in tests, and a fixed choice.
pub trait PromotionChooser {
    /// Pick the promotion piece for the `color` pawn arriving on `square`.
    fn choose(&mut self, color: Color, square: Square) -> Promotion;
}

/// Trait for showing the game to the players.
///
/// Mirrors [`PromotionChooser`] on the output side of the turn loop.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the current position.
    fn show(&mut self, engine: &GameEngine) -> Result<(), Self::Error>;
}
