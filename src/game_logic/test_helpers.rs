use shakmaty::fen::Fen;

use super::{GameEngine, Rules};
use crate::game_state::{Board, Color, Piece, PieceKind, Square};

pub fn sq(name: &str) -> Square {
    name.parse().expect("test square is invalid")
}

/// Board and en-passant target described by a FEN string.
///
/// Pawns off their home rank count as moved; kings and rooks count as
/// unmoved only where the castling field still allows it.
pub fn board_from_fen(fen: &str) -> (Board, Option<Square>) {
    let setup = fen.parse::<Fen>().expect("invalid FEN").into_setup();
    let mut board = Board::empty();

    for square in Square::all() {
        let theirs: shakmaty::Square = square.to_string().parse().expect("square names agree");
        let Some(piece) = setup.board.piece_at(theirs) else {
            continue;
        };

        let color = match piece.color {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        };
        let kind = match piece.role {
            shakmaty::Role::King => PieceKind::King,
            shakmaty::Role::Queen => PieceKind::Queen,
            shakmaty::Role::Rook => PieceKind::Rook,
            shakmaty::Role::Bishop => PieceKind::Bishop,
            shakmaty::Role::Knight => PieceKind::Knight,
            shakmaty::Role::Pawn => PieceKind::Pawn,
        };
        let has_moved = match kind {
            PieceKind::Pawn => square.rank() != color.pawn_home_rank(),
            PieceKind::Rook => !setup.castling_rights.contains(theirs),
            PieceKind::King => !Square::all()
                .filter(|s| s.rank() == color.back_rank())
                .filter_map(|s| s.to_string().parse::<shakmaty::Square>().ok())
                .any(|s| setup.castling_rights.contains(s)),
            _ => false,
        };

        board.set(square, Some(Piece { kind, color, has_moved }));
    }

    let en_passant = setup.ep_square.map(|s| sq(&s.to_string()));
    (board, en_passant)
}

impl GameEngine {
    pub fn from_fen(fen: &str) -> Self {
        Self::from_fen_with_rules(fen, Rules::classic())
    }

    pub fn from_fen_with_rules(fen: &str, rules: Rules) -> Self {
        let turn = if fen.split_whitespace().nth(1) == Some("b") {
            Color::Black
        } else {
            Color::White
        };
        let (board, en_passant) = board_from_fen(fen);
        Self::from_parts(board, turn, en_passant, rules)
    }
}

pub fn assert_piece(engine: &GameEngine, square: &str, kind: PieceKind, color: Color) {
    let found = engine.piece_at(sq(square));
    assert!(
        found.is_some_and(|piece| piece.is(kind, color)),
        "Expected {color} {kind:?} at {square}, found {found:?}"
    );
}

pub fn assert_empty(engine: &GameEngine, square: &str) {
    let found = engine.piece_at(sq(square));
    assert_eq!(found, None, "Expected empty at {square}, found {found:?}");
}
