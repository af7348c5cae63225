#![allow(dead_code)]

use console_chess::game_logic::{GameEngine, Rules};
use console_chess::game_state::{Board, Color, Piece, PieceKind, Square};
use shakmaty::fen::Fen;

pub fn sq(name: &str) -> Square {
    name.parse().expect("test square is invalid")
}

/// Helper: create an engine from a FEN string.
///
/// Kings and rooks count as unmoved only where the castling field allows
/// it; pawns off their home rank count as moved.
pub fn engine_from_fen(fen: &str, rules: Rules) -> GameEngine {
    let setup = fen.parse::<Fen>().expect("valid FEN").into_setup();
    let mut board = Board::empty();

    for (square, theirs) in Square::all().map(|s| (s, s.to_string().parse::<shakmaty::Square>())) {
        let theirs = theirs.expect("square names agree");
        let Some(piece) = setup.board.piece_at(theirs) else {
            continue;
        };
        let color = if piece.color == shakmaty::Color::White {
            Color::White
        } else {
            Color::Black
        };
        let kind = match piece.role {
            shakmaty::Role::King => PieceKind::King,
            shakmaty::Role::Queen => PieceKind::Queen,
            shakmaty::Role::Rook => PieceKind::Rook,
            shakmaty::Role::Bishop => PieceKind::Bishop,
            shakmaty::Role::Knight => PieceKind::Knight,
            shakmaty::Role::Pawn => PieceKind::Pawn,
        };
        let castling_squares = setup
            .castling_rights
            .into_iter()
            .filter(|s| s.rank() == theirs.rank())
            .count();
        let has_moved = match kind {
            PieceKind::Pawn => square.rank() != color.pawn_home_rank(),
            PieceKind::Rook => !setup.castling_rights.contains(theirs),
            PieceKind::King => square.rank() != color.back_rank() || castling_squares == 0,
            _ => false,
        };
        board.set(square, Some(Piece { kind, color, has_moved }));
    }

    let turn = if setup.turn == shakmaty::Color::White {
        Color::White
    } else {
        Color::Black
    };
    let en_passant = setup.ep_square.map(|s| sq(&s.to_string()));
    GameEngine::from_parts(board, turn, en_passant, rules)
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
