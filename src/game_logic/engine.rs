use std::fmt;

use log::{debug, info, trace};

use super::{Rules, attacks, validator};
use crate::PromotionChooser;
use crate::error::EngineError;
use crate::game_state::{Board, Color, Piece, PieceKind, Square};
use crate::promotion::Promotion;

/// A move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Displays as the two square names, e.g. "e2e4".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Situation of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given color is in check but has an escape.
    Check(Color),
    Checkmate { winner: Color },
}

/// Two-player rules engine: board, en-passant target and side to move.
///
/// Values are cheap to copy; speculative moves are played on a clone so
/// the committed game is never touched.
#[derive(Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Color,
    /// Square a pawn passed over with a double step on the previous move.
    en_passant: Option<Square>,
    rules: Rules,
}

impl GameEngine {
    /// A new game from the standard starting position with classic rules.
    #[inline]
    pub fn new() -> Self {
        Self::with_rules(Rules::classic())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self::from_parts(Board::standard(), Color::White, None, rules)
    }

    /// Creates an engine from an arbitrary position.
    pub fn from_parts(board: Board, turn: Color, en_passant: Option<Square>, rules: Rules) -> Self {
        Self {
            board,
            turn,
            en_passant,
            rules,
        }
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color whose move it is.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Whether the side to move may play `from` → `to`.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if !self
            .board
            .piece_at(from)
            .is_some_and(|piece| piece.color == self.turn)
        {
            return false;
        }
        if !validator::is_pseudo_legal(&self.board, self.en_passant, from, to) {
            return false;
        }

        if self.rules.castling_requires_safe_path
            && validator::castling_rook(&self.board, from, to).is_some()
            && !self.is_castling_path_safe(from, to)
        {
            return false;
        }

        if self.rules.forbid_self_check {
            let mut after = self.clone();
            after.apply(from, to, &mut Promotion::Queen);
            // A side without a king cannot be left in check.
            if after.is_check(self.turn).unwrap_or(false) {
                return false;
            }
        }

        true
    }

    /// Play a move, promoting to a queen if a pawn reaches the last rank.
    ///
    /// Returns `false` and leaves the game untouched if the move is illegal.
    #[inline]
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        self.try_move_with(from, to, &mut Promotion::Queen)
    }

    /// Play a move, asking `chooser` for the piece if a pawn promotes.
    ///
    /// Returns `false` and leaves the game untouched if the move is illegal.
    pub fn try_move_with(&mut self, from: Square, to: Square, chooser: &mut impl PromotionChooser) -> bool {
        if !self.is_legal(from, to) {
            debug!("{} move {from}{to} rejected", self.turn);
            return false;
        }

        debug!("{} plays {from}{to}", self.turn);
        self.apply(from, to, chooser);
        true
    }

    /// Every legal move of the side to move.
    ///
    /// A promotion is listed once, whatever piece it ends up as.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == self.turn)
            .flat_map(|(from, _)| Square::all().map(move |to| Move::new(from, to)))
            .filter(|mv| self.is_legal(mv.from, mv.to))
            .collect()
    }

    /// Whether `square` is attacked by the opponent of `defender`.
    ///
    /// Ignores whose turn it is.
    #[inline]
    pub fn is_attacked(&self, square: Square, defender: Color) -> bool {
        attacks::is_attacked(&self.board, square, defender)
    }

    /// Whether `color`'s king is attacked.
    pub fn is_check(&self, color: Color) -> Result<bool, EngineError> {
        let king = self
            .board
            .find_king(color)
            .ok_or(EngineError::NoKingFound(color))?;
        Ok(self.is_attacked(king, color))
    }

    /// Whether `color` is in check and no move of theirs escapes it.
    ///
    /// A color that is not in check is never checkmated, so stalemate
    /// answers `false`. Tries every `(from, to)` pair on a copy of the game
    /// with `color` to move.
    pub fn is_checkmate(&self, color: Color) -> Result<bool, EngineError> {
        if !self.is_check(color)? {
            return Ok(false);
        }

        let probe = Self {
            turn: color,
            ..self.clone()
        };
        for (from, _) in self.board.pieces().filter(|(_, piece)| piece.color == color) {
            for to in Square::all() {
                if !probe.is_legal(from, to) {
                    continue;
                }
                let mut after = probe.clone();
                after.apply(from, to, &mut Promotion::Queen);
                if !after.is_check(color)? {
                    trace!("{color} escapes check with {from}{to}");
                    return Ok(false);
                }
            }
        }

        debug!("{color} is checkmated");
        Ok(true)
    }

    /// Check and checkmate status of the side to move.
    pub fn status(&self) -> Result<GameStatus, EngineError> {
        let side = self.turn;
        if !self.is_check(side)? {
            Ok(GameStatus::Ongoing)
        } else if self.is_checkmate(side)? {
            Ok(GameStatus::Checkmate {
                winner: side.opposite(),
            })
        } else {
            Ok(GameStatus::Check(side))
        }
    }

    /// Castling may not start in, cross or land on an attacked square.
    fn is_castling_path_safe(&self, from: Square, to: Square) -> bool {
        let step = if to.file() > from.file() { 1 } else { -1 };
        [Some(from), from.offset(step, 0), Some(to)]
            .into_iter()
            .flatten()
            .all(|square| !self.is_attacked(square, self.turn))
    }

    /// Make an already validated move and hand the turn over.
    fn apply(&mut self, from: Square, to: Square, chooser: &mut impl PromotionChooser) {
        let Some(piece) = self.board.piece_at(from) else {
            return;
        };
        let en_passant = self.en_passant.take();
        let is_pawn = piece.kind == PieceKind::Pawn;

        if is_pawn
            && from.file() != to.file()
            && self.board.is_empty(to)
            && en_passant == Some(to)
            && let Some(victim) = validator::en_passant_victim(from, to)
        {
            self.board.take(victim);
            debug!("en passant removes pawn on {victim}");
        }

        // The rook lands on the square the king crosses.
        if let Some(rook) = validator::castling_rook(&self.board, from, to)
            && let Some(rook_to) = from.offset(if to.file() > from.file() { 1 } else { -1 }, 0)
        {
            self.board.relocate(rook, rook_to);
            info!("{} castles, rook {rook} to {rook_to}", piece.color);
        }

        self.board.relocate(from, to);

        if is_pawn && to.rank() == piece.color.promotion_rank() {
            let promotion = chooser.choose(piece.color, to);
            self.board.set(
                to,
                Some(Piece {
                    kind: promotion.kind(),
                    color: piece.color,
                    has_moved: true,
                }),
            );
            info!("{} pawn on {to} promoted to {:?}", piece.color, promotion.kind());
        }

        if is_pawn && (to.rank() as i8 - from.rank() as i8).abs() == 2 {
            self.en_passant = from.offset(0, piece.color.pawn_direction());
        }

        self.turn = self.turn.opposite();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field(
                "en_passant",
                &format_args!("{}", self.en_passant.map_or("-".to_string(), |s| s.to_string())),
            )
            .field("rules", &self.rules)
            .finish()
    }
}
