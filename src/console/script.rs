use std::collections::VecDeque;

use thiserror::Error;

use crate::PromotionChooser;
use crate::game_logic::Move;
use crate::game_state::{Color, Square};
use crate::promotion::Promotion;

/// Error when parsing a move script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid move in script: '{0}'")]
pub struct ScriptError(String);

/// A queue of moves written as square pairs, e.g. `"e2e4 e7e5 g1f3"`.
///
/// New script can be appended at any time; moves are handed out in
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveScript {
    pending: VecDeque<Move>,
}

impl MoveScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole script.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut parsed = Self::new();
        parsed.push_script(script)?;
        Ok(parsed)
    }

    /// Parse and queue additional moves.
    ///
    /// Format:
    /// - A move is two square names, written together (`e2e4`) or
    ///   separated by a hyphen (`e2-e4`)
    /// - Whitespace, commas and periods separate moves
    ///
    /// On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ScriptError> {
        let moves = script
            .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
            .filter(|token| !token.is_empty())
            .map(parse_move)
            .collect::<Result<Vec<_>, _>>()?;
        self.pending.extend(moves);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain all pending moves, calling `on_move` for each.
    ///
    /// Stops early, leaving the rest queued, when `on_move` returns `false`.
    pub fn drain<F>(&mut self, mut on_move: F) -> bool
    where
        F: FnMut(Move) -> bool,
    {
        while let Some(mv) = self.pending.pop_front() {
            if !on_move(mv) {
                return false;
            }
        }
        true
    }
}

impl Iterator for MoveScript {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.pending.pop_front()
    }
}

fn parse_move(token: &str) -> Result<Move, ScriptError> {
    let error = || ScriptError(token.to_string());
    let squares = token.replace('-', "");
    if !squares.is_ascii() || squares.len() != 4 {
        return Err(error());
    }
    let (from, to) = squares.split_at(2);
    let from: Square = from.parse().map_err(|_| error())?;
    let to: Square = to.parse().map_err(|_| error())?;
    Ok(Move::new(from, to))
}

/// Promotion answers given in advance, consumed one per promotion.
///
/// Answers are interpreted like typed input; once they run out every
/// promotion is to a queen.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPromotions {
    answers: VecDeque<String>,
}

impl ScriptedPromotions {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not used yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PromotionChooser for ScriptedPromotions {
    fn choose(&mut self, _color: Color, _square: Square) -> Promotion {
        self.answers
            .pop_front()
            .map_or(Promotion::Queen, |answer| Promotion::from_input(&answer))
    }
}
