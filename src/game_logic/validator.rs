//! Per-piece movement rules.
//!
//! Everything here is turn-agnostic: the piece standing on `from` is the
//! mover, whatever color it is. Turn order and king safety are layered on
//! top by [`super::GameEngine`].

use crate::game_state::{Board, Color, Piece, PieceKind, Square};

/// Whether the piece on `from` may move to `to` by its movement pattern.
///
/// Checks, in order: `from` is occupied, `from != to`, `to` does not hold
/// a piece of the mover's color, then the per-kind rule.
pub fn is_pseudo_legal(board: &Board, en_passant: Option<Square>, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if from == to || board.piece_at(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => can_pawn_move(board, en_passant, piece, from, to),
        PieceKind::Knight => can_knight_move(from, to),
        PieceKind::Bishop => can_bishop_move(board, from, to),
        PieceKind::Rook => can_rook_move(board, from, to),
        PieceKind::Queen => can_queen_move(board, from, to),
        PieceKind::King => can_king_step(from, to) || castling_rook(board, from, to).is_some(),
    }
}

/// Whether the piece on `from` attacks `target`.
///
/// For a target holding an enemy piece this agrees with
/// [`is_pseudo_legal`]. An empty target is probed as if an enemy stood on
/// it: pawns attack diagonally only, and castling never attacks.
pub fn attacks(board: &Board, from: Square, target: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if from == target || board.piece_at(target).is_some_and(|p| p.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_pawn_capture_step(piece.color, from, target),
        PieceKind::Knight => can_knight_move(from, target),
        PieceKind::Bishop => can_bishop_move(board, from, target),
        PieceKind::Rook => can_rook_move(board, from, target),
        PieceKind::Queen => can_queen_move(board, from, target),
        PieceKind::King => can_king_step(from, target),
    }
}

/// True if every square strictly between `from` and `to` is empty.
///
/// The squares must share a rank, file or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    debug_assert!(
        d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs(),
        "{from} and {to} are not on a line"
    );
    let step = (d_file.signum(), d_rank.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if square == to {
            break;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }
    true
}

/// If `from` → `to` is a castling move by an unmoved king, the square of
/// the rook it castles with.
///
/// The rook must be an unmoved rook of the king's color in the corner the
/// king travels towards, with nothing standing between the two.
pub fn castling_rook(board: &Board, from: Square, to: Square) -> Option<Square> {
    let king = board.piece_at(from)?;
    let (d_file, d_rank) = deltas(from, to);
    if king.kind != PieceKind::King || king.has_moved || d_file.abs() != 2 || d_rank != 0 {
        return None;
    }

    let rook_file = if d_file > 0 { 7 } else { 0 };
    let rook_square = Square::new(rook_file, from.rank()).ok()?;
    let rook = board.piece_at(rook_square)?;
    (rook.is(PieceKind::Rook, king.color) && !rook.has_moved && is_path_clear(board, from, rook_square))
        .then_some(rook_square)
}

/// Square of the pawn removed when a pawn on `from` captures en passant
/// onto `to`: same file as `to`, same rank as `from`.
pub fn en_passant_victim(from: Square, to: Square) -> Option<Square> {
    let (d_file, _) = deltas(from, to);
    from.offset(d_file, 0)
}

fn can_pawn_move(board: &Board, en_passant: Option<Square>, pawn: Piece, from: Square, to: Square) -> bool {
    let direction = pawn.color.pawn_direction();
    let (d_file, d_rank) = deltas(from, to);

    if d_file == 0 {
        if !board.is_empty(to) {
            return false;
        }
        if d_rank == direction {
            return true;
        }
        return d_rank == 2 * direction
            && !pawn.has_moved
            && from
                .offset(0, direction)
                .is_some_and(|middle| board.is_empty(middle));
    }

    if !is_pawn_capture_step(pawn.color, from, to) {
        return false;
    }
    match board.piece_at(to) {
        Some(target) => target.color != pawn.color,
        None => {
            en_passant == Some(to)
                && en_passant_victim(from, to)
                    .and_then(|victim| board.piece_at(victim))
                    .is_some_and(|victim| victim.is(PieceKind::Pawn, pawn.color.opposite()))
        }
    }
}

fn is_pawn_capture_step(color: Color, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    d_file.abs() == 1 && d_rank == color.pawn_direction()
}

fn can_knight_move(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    matches!((d_file.abs(), d_rank.abs()), (1, 2) | (2, 1))
}

fn can_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    d_file.abs() == d_rank.abs() && is_path_clear(board, from, to)
}

fn can_rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    (d_file == 0 || d_rank == 0) && is_path_clear(board, from, to)
}

fn can_queen_move(board: &Board, from: Square, to: Square) -> bool {
    can_rook_move(board, from, to) || can_bishop_move(board, from, to)
}

fn can_king_step(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    d_file.abs() <= 1 && d_rank.abs() <= 1
}

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file() as i8 - from.file() as i8,
        to.rank() as i8 - from.rank() as i8,
    )
}
