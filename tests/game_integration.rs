mod common;

use common::{assert_empty, assert_piece, engine_from_fen, sq};
use console_chess::EngineError;
use console_chess::console::{MoveScript, ScriptedPromotions};
use console_chess::game_logic::{GameEngine, GameStatus, Move, Rules};
use console_chess::game_state::{Board, Color, PieceKind, Square};
use test_case::test_case;

/// Helper: play every move of a script, failing on the first rejection.
fn play(engine: &mut GameEngine, script: &str) {
    let mut moves = MoveScript::parse(script).expect("valid script");
    let finished = moves.drain(|mv| engine.try_move(mv.from, mv.to));
    assert!(finished, "script {script:?} stopped early in {engine:?}");
}

// ---------------------------------------------------------------
// Starting position
// ---------------------------------------------------------------

#[test]
fn new_game_is_quiet() {
    let engine = GameEngine::new();

    assert_eq!(engine.is_check(Color::White), Ok(false));
    assert_eq!(engine.is_check(Color::Black), Ok(false));
    assert_eq!(engine.is_checkmate(Color::White), Ok(false));
    assert_eq!(engine.en_passant_target(), None);
}

#[test]
fn white_has_sixteen_pawn_and_four_knight_moves() {
    let engine = GameEngine::new();
    let moves = engine.legal_moves();

    let by_kind = |kind| {
        moves
            .iter()
            .filter(|mv| engine.piece_at(mv.from).is_some_and(|p| p.kind == kind))
            .count()
    };
    assert_eq!(moves.len(), 20);
    assert_eq!(by_kind(PieceKind::Pawn), 16);
    assert_eq!(by_kind(PieceKind::Knight), 4);
}

#[test]
fn no_piece_may_stay_put() {
    let mut engine = GameEngine::new();
    play(&mut engine, "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6");

    for square in Square::all() {
        assert!(!engine.try_move(square, square), "{square}");
    }
}

// ---------------------------------------------------------------
// Moves and captures
// ---------------------------------------------------------------

#[test]
fn capture_round_trip() {
    let mut engine = GameEngine::new();
    play(&mut engine, "e2e4 d7d5 e4d5 d8d5 b1c3");

    assert_piece(&engine, "d5", PieceKind::Queen, Color::Black);
    assert_empty(&engine, "d8");
    assert_empty(&engine, "e4");
    assert_eq!(engine.board().pieces().count(), 30);
    assert!(engine.try_move(sq("d5"), sq("a2")));
    assert_piece(&engine, "a2", PieceKind::Queen, Color::Black);
    assert_eq!(engine.board().pieces().count(), 29);
}

#[test]
fn moved_piece_is_marked() {
    let mut engine = GameEngine::new();
    play(&mut engine, "g1f3");

    let knight = engine.piece_at(sq("f3")).expect("knight on f3");
    assert!(knight.has_moved);
    assert!(!engine.piece_at(sq("b1")).expect("knight on b1").has_moved);
}

#[test_case("a1", "a4"; "rook")]
#[test_case("c1", "a3"; "bishop")]
#[test_case("d1", "d3"; "queen")]
#[test_case("e1", "e2"; "king onto own pawn")]
fn sliders_cannot_pass_pieces(from: &str, to: &str) {
    let mut engine = GameEngine::new();
    let before = engine.clone();

    assert!(!engine.try_move(sq(from), sq(to)));
    assert_eq!(engine, before);
}

#[test]
fn path_blocked_by_enemy_piece() {
    let engine = engine_from_fen("4k3/8/8/8/8/8/8/R2n2K1 w - - 0 1", Rules::classic());

    assert!(engine.is_legal(sq("a1"), sq("d1")));
    assert!(!engine.is_legal(sq("a1"), sq("e1")));
}

// ---------------------------------------------------------------
// Pawn specials
// ---------------------------------------------------------------

#[test]
fn double_step_is_available_once() {
    let mut engine = GameEngine::new();
    play(&mut engine, "e2e3 e7e6");

    assert!(!engine.is_legal(sq("e3"), sq("e5")));
    assert!(engine.is_legal(sq("d2"), sq("d4")));
}

#[test]
fn en_passant_on_the_next_move() {
    let mut engine = GameEngine::new();
    play(&mut engine, "h2h3 d7d5 h3h4 d5d4 e2e4");

    assert_eq!(engine.en_passant_target(), Some(sq("e3")));
    assert!(engine.try_move(sq("d4"), sq("e3")));
    assert_piece(&engine, "e3", PieceKind::Pawn, Color::Black);
    assert_empty(&engine, "e4");
    assert_empty(&engine, "d4");
}

#[test]
fn en_passant_lapses_after_another_move() {
    let mut engine = GameEngine::new();
    play(&mut engine, "h2h3 d7d5 h3h4 d5d4 e2e4 a7a6 a2a3");

    assert!(!engine.try_move(sq("d4"), sq("e3")));
    assert_piece(&engine, "e4", PieceKind::Pawn, Color::White);
}

#[test]
fn promotion_asks_for_the_piece() {
    let mut engine = GameEngine::new();
    play(&mut engine, "a2a4 b7b5 a4b5 a7a6 b5a6 c8b7 a6a7 e7e6");

    let mut answers = ScriptedPromotions::new(["R"]);
    assert!(engine.try_move_with(sq("a7"), sq("b8"), &mut answers));

    assert_piece(&engine, "b8", PieceKind::Rook, Color::White);
    assert_empty(&engine, "a7");
    assert_eq!(answers.remaining(), 0);
}

#[test]
fn black_promotes_downwards() {
    let mut engine = engine_from_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1", Rules::classic());

    let mut answers = ScriptedPromotions::new(["b"]);
    assert!(engine.try_move_with(sq("a2"), sq("a1"), &mut answers));

    assert_piece(&engine, "a1", PieceKind::Bishop, Color::Black);
}

// ---------------------------------------------------------------
// Castling
// ---------------------------------------------------------------

#[test]
fn castling_moves_king_and_rook() {
    let mut engine = GameEngine::new();
    play(&mut engine, "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 e1g1 f8c5");

    assert_piece(&engine, "g1", PieceKind::King, Color::White);
    assert_piece(&engine, "f1", PieceKind::Rook, Color::White);
    assert_empty(&engine, "h1");
    assert!(engine.try_move(sq("f1"), sq("e1")));
}

#[test]
fn castling_forfeited_by_rook_round_trip() {
    let mut engine = GameEngine::new();
    play(&mut engine, "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 h1g1 a7a6 g1h1 a6a5");

    assert!(!engine.try_move(sq("e1"), sq("g1")));
    assert_piece(&engine, "e1", PieceKind::King, Color::White);
}

#[test]
fn castling_blocked_by_pieces_between() {
    let engine = GameEngine::new();

    assert!(!engine.is_legal(sq("e1"), sq("g1")));
    assert!(!engine.is_legal(sq("e1"), sq("c1")));
}

// ---------------------------------------------------------------
// Check and checkmate
// ---------------------------------------------------------------

#[test_case(Rules::classic(); "classic")]
#[test_case(Rules::strict(); "strict")]
fn fools_mate(rules: Rules) {
    let mut engine = GameEngine::with_rules(rules);
    play(&mut engine, "f2f3 e7e5 g2g4 d8h4");

    assert_eq!(engine.is_checkmate(Color::White), Ok(true));
    assert_eq!(engine.is_checkmate(Color::Black), Ok(false));
    assert_eq!(
        engine.status(),
        Ok(GameStatus::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn back_rank_mate() {
    let mut engine = engine_from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", Rules::classic());
    play(&mut engine, "a1a8");

    assert_eq!(engine.is_checkmate(Color::Black), Ok(true));
    assert_eq!(engine.is_checkmate(Color::White), Ok(false));
}

#[test]
fn capturing_the_checker_escapes() {
    let mut engine = engine_from_fen("r5k1/5ppp/8/8/8/8/5PPP/1R4K1 w - - 0 1", Rules::classic());
    play(&mut engine, "b1b8");

    assert_eq!(engine.status(), Ok(GameStatus::Check(Color::Black)));
    play(&mut engine, "a8b8");
    assert_eq!(engine.status(), Ok(GameStatus::Ongoing));
    assert_eq!(engine.board().pieces().count(), 9);
}

#[test_case("6k1/5pQp/8/8/8/8/1B6/6K1 b - - 0 1", true; "queen defended by bishop")]
#[test_case("6k1/5pQp/8/8/8/8/8/6K1 b - - 0 1", false; "king takes the queen")]
fn queen_on_g7(fen: &str, mate: bool) {
    let engine = engine_from_fen(fen, Rules::classic());

    assert_eq!(engine.is_check(Color::Black), Ok(true));
    assert_eq!(engine.is_checkmate(Color::Black), Ok(mate));
}

#[test]
fn classic_rules_allow_moving_into_check() {
    let fen = "4k3/8/8/8/8/8/3r4/4K3 w - - 0 1";
    let mut classic = engine_from_fen(fen, Rules::classic());
    let mut strict = engine_from_fen(fen, Rules::strict());

    assert!(classic.try_move(sq("e1"), sq("d1")));
    assert_eq!(classic.is_check(Color::White), Ok(true));
    assert!(!strict.try_move(sq("e1"), sq("d1")));
    assert!(strict.try_move(sq("e1"), sq("d2")));
}

#[test]
fn missing_king_is_an_error() {
    let mut board = Board::standard();
    assert!(board.take(sq("e8")).is_some());
    let engine = GameEngine::from_parts(board, Color::White, None, Rules::classic());

    assert_eq!(engine.is_check(Color::Black), Err(EngineError::NoKingFound(Color::Black)));
    assert_eq!(engine.status(), Ok(GameStatus::Ongoing));
}

#[test]
fn invalid_coordinates_are_rejected() {
    assert_eq!(
        Square::new(8, 3),
        Err(EngineError::InvalidCoordinate { file: 8, rank: 3 })
    );
    assert!(Square::new(7, 7).is_ok());
}

#[test]
fn legal_moves_are_all_playable() {
    let mut engine = GameEngine::new();
    play(&mut engine, "e2e4 e7e5 g1f3 b8c6");

    for Move { from, to } in engine.legal_moves() {
        let mut copy = engine.clone();
        assert!(copy.try_move(from, to), "{from}{to}");
        assert_eq!(copy.turn(), Color::Black);
    }
}
