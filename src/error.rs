use thiserror::Error;

use crate::game_state::Color;

/// Conditions the rules engine reports instead of answering wrongly.
///
/// Move rejection is not an error: [`crate::game_logic::GameEngine::try_move`]
/// answers `false` for an illegal move and never says why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate outside `0..=7` was supplied.
    #[error("coordinate ({file}, {rank}) is off the board")]
    InvalidCoordinate { file: u8, rank: u8 },

    /// The board holds no king of the queried color.
    #[error("no {0} king on the board")]
    NoKingFound(Color),
}
