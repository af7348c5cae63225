pub mod attacks;
pub mod engine;
pub mod rules;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use engine::{GameEngine, GameStatus, Move};
pub use rules::Rules;
