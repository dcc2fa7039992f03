//! Pseudo-legal move generation and the legality filter.
//!
//! Pipeline:
//!   1. Generate pseudo-legal moves per piece geometry (ignoring king safety).
//!   2. Filter: apply each candidate to a board clone and discard it if the
//!      mover's own king is attacked on the result.
//!
//! Check detection and legality are plain functions over `(board, colour)`,
//! callable without a `Game` and independent of whose turn it officially is.

use crate::engine::board::Board;
use crate::engine::types::{Color, Move, Piece, PieceType, Square};

// =========================================================================
// Direction tables
// =========================================================================

/// The four orthogonal directions (rook).
const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal directions (bishop).
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight compass directions (king, queen).
const COMPASS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight knight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

// =========================================================================
// Pseudo-legal generation
// =========================================================================

/// All pseudo-legal moves for `piece` standing on `from`.
///
/// The piece need not actually occupy `from` on `board` — callers may probe
/// hypothetically. Pseudo-legal means the move respects geometry, board
/// edges, and blocking, but may still leave the mover's own king attacked;
/// that filtering is [`legal_moves_from`]'s job. The returned order carries
/// no meaning.
pub fn pseudo_legal_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    if !from.is_on_board() {
        return moves;
    }
    match piece.kind {
        PieceType::King => leaper_moves(board, from, piece.color, &COMPASS, &mut moves),
        PieceType::Knight => leaper_moves(board, from, piece.color, &KNIGHT_JUMPS, &mut moves),
        PieceType::Queen => slider_moves(board, from, piece.color, &COMPASS, &mut moves),
        PieceType::Rook => slider_moves(board, from, piece.color, &ORTHOGONAL, &mut moves),
        PieceType::Bishop => slider_moves(board, from, piece.color, &DIAGONAL, &mut moves),
        PieceType::Pawn => pawn_moves(board, from, piece.color, &mut moves),
    }
    moves
}

/// Fixed-offset movers (king, knight): one step per offset, blocked only by
/// an own-colour occupant at the destination.
fn leaper_moves(
    board: &Board,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        let to = from.offset(dr, dc);
        if !to.is_on_board() {
            continue;
        }
        match board.piece_at(to) {
            Some(p) if p.color == us => {}
            _ => moves.push(Move::new(from, to)),
        }
    }
}

/// Sliding movers (queen, rook, bishop): walk each direction, emitting empty
/// squares until the first occupant — included iff enemy — or the edge.
fn slider_moves(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut to = from.offset(dr, dc);
        while to.is_on_board() {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(p) => {
                    if p.color != us {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            to = to.offset(dr, dc);
        }
    }
}

// =========================================================================
// Pawn moves
// =========================================================================

fn pawn_moves(board: &Board, from: Square, us: Color, moves: &mut Vec<Move>) {
    let (dir, start_row, promo_row): (i8, i8, i8) = match us {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // Single push onto an empty square only.
    let ahead = from.offset(dir, 0);
    if ahead.is_on_board() && board.piece_at(ahead).is_none() {
        push_pawn_move(from, ahead, promo_row, moves);

        // Double push from the start row, both squares empty.
        if from.row == start_row {
            let two = from.offset(dir * 2, 0);
            if two.is_on_board() && board.piece_at(two).is_none() {
                moves.push(Move::new(from, two));
            }
        }
    }

    // Diagonal captures, enemy occupants only — never onto an empty square.
    for dc in [-1, 1] {
        let target = from.offset(dir, dc);
        if let Some(p) = board.piece_at(target) {
            if p.color != us {
                push_pawn_move(from, target, promo_row, moves);
            }
        }
    }
}

/// Emit a pawn move, expanded into the four promotion variants when the
/// destination is the far back rank.
fn push_pawn_move(from: Square, to: Square, promo_row: i8, moves: &mut Vec<Move>) {
    if to.row == promo_row {
        for &kind in &PieceType::PROMOTABLE {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

// =========================================================================
// Attack and check predicates
// =========================================================================

/// Whether any piece of colour `by` has a pseudo-legal move ending on `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board.pieces().any(|(sq, piece)| {
        piece.color == by
            && pseudo_legal_moves(board, sq, piece)
                .iter()
                .any(|m| m.to == target)
    })
}

/// Whether `color`'s king is attacked.
///
/// A board with no king of `color` is not in check — the defensive default
/// for externally loaded positions, not a normal game state.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, !color),
        None => false,
    }
}

// =========================================================================
// Legality filter
// =========================================================================

/// Apply `mv` to `board`: vacate the start square and write the moved piece —
/// or, for a promotion, a new piece of the promoted kind — to the destination.
///
/// Shared by simulation and commit so the two can never diverge. A vacant
/// start square leaves the board unchanged.
pub fn apply_move(board: &mut Board, mv: Move) {
    if let Some(piece) = board.piece_at(mv.from) {
        let placed = match mv.promotion {
            Some(kind) => Piece::new(piece.color, kind),
            None => piece,
        };
        board.set(mv.from, None);
        board.set(mv.to, Some(placed));
    }
}

/// All legal moves for the piece on `from`: the pseudo-legal candidates that
/// do not leave the mover's own king attacked afterwards.
///
/// Empty when `from` is vacant or off the board. Never mutates `board` —
/// each candidate is simulated on a clone.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    pseudo_legal_moves(board, from, piece)
        .into_iter()
        .filter(|&mv| {
            let mut copy = board.clone();
            apply_move(&mut copy, mv);
            !is_in_check(&copy, piece.color)
        })
        .collect()
}

/// Whether any piece of `color` has at least one legal move.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .any(|(sq, piece)| piece.color == color && !legal_moves_from(board, sq).is_empty())
}

// =========================================================================
// Tests
// =========================================================================
