use super::validator;
use crate::game_state::{Board, Color, Square};

/// Whether any piece of `defender`'s opponent attacks `square`.
///
/// Probes every enemy piece through the move rules instead of keeping an
/// attack map, so it costs a full board scan per call.
pub fn is_attacked(board: &Board, square: Square, defender: Color) -> bool {
    attackers(board, square, defender).next().is_some()
}

/// Squares of the enemy pieces attacking `square`.
pub fn attackers(board: &Board, square: Square, defender: Color) -> impl Iterator<Item = Square> + '_ {
    board
        .pieces()
        .filter(move |(_, piece)| piece.color == defender.opposite())
        .filter(move |(from, _)| validator::attacks(board, *from, square))
        .map(|(from, _)| from)
}
