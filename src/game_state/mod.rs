pub mod board;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::EngineError;

pub use board::Board;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board as a `(file, rank)` pair, both in `0..=7`.
///
/// (0, 0) is White's queen-rook corner, a1 in algebraic naming;
/// (7, 7) is h8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square, rejecting coordinates off the board.
    pub const fn new(file: u8, rank: u8) -> Result<Self, EngineError> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Ok(Self { file, rank })
        } else {
            Err(EngineError::InvalidCoordinate { file, rank })
        }
    }

    /// Creates a square from signed coordinates, `None` when off the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// File index, 0 for the a-file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank index, 0 for White's back rank.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// All 64 squares, rank by rank starting at a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { file, rank }))
    }
}

/// Parse a square name like "e4" into a Square.
///
/// # Examples
/// ```
/// # use console_chess::game_state::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!((square.file(), square.rank()), (4, 3));
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength);
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile);
        }
        let rank = rank.to_digit(10).ok_or(SquareParseError::BadRank)?;
        if !(1..=8).contains(&rank) {
            return Err(SquareParseError::BadRank);
        }

        Ok(Square {
            file: file as u8 - b'a',
            rank: rank as u8 - 1,
        })
    }
}

/// Display square by name (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// Error type for parsing square names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareParseError {
    /// Square name must be exactly 2 characters
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    /// File must be a letter from a-h
    #[error("file must be a-h")]
    BadFile,
    /// Rank must be a digit from 1-8
    #[error("rank must be 1-8")]
    BadRank,
}

/// Side of a piece or player. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the pieces of this color start on.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank this color's pawns start on.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

/// Type of a chess piece, independent of its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Uppercase letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set once the piece has been relocated. Consulted for castling
    /// and the pawn double step.
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// The same piece with `has_moved` set.
    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    /// Whether this is a `color` piece of the given kind.
    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Single-character symbol: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}
