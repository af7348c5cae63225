use std::fmt;

use super::{BOARD_SIZE, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid of squares, each empty or holding one piece.
///
/// Indexed `[rank][file]`. The board enforces no chess rules; it only
/// stores what the rules engine puts on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                board.squares[color.back_rank() as usize][file] = Some(Piece::new(kind, color));
                board.squares[color.pawn_home_rank() as usize][file] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place (or clear) a square, returning what was there.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.rank() as usize][square.file() as usize],
            piece,
        )
    }

    /// Clear a square, returning what was there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Move whatever stands on `from` to `to`, marking it as moved.
    ///
    /// Enforces nothing: any piece on `to` is overwritten and an empty
    /// `from` simply empties `to`. Returns the overwritten piece.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from).map(Piece::moved);
        self.set(to, moving)
    }

    /// Occupied squares with their pieces, rank by rank from a1.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// First king of `color` in a1..h8 order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(square, _)| square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// One line per rank, rank 8 first, `.` for empty squares.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE as usize).rev() {
            let row: String = self.squares[rank]
                .iter()
                .map(|square| square.map_or('.', |piece| piece.symbol()))
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
