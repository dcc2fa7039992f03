//! The game aggregate: turn state, legal-move filtering, terminal detection.
//!
//! `Game` owns one `Board` and the turn colour. Queries never mutate the
//! live board; `make_move` validates against a clone and only commits once
//! every gate passes, so a rejected move leaves the game exactly as it was.

use tracing::debug;

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{ChessError, Color, GameStatus, Move, PieceType, Square};

/// A chess game: one board plus whose turn it is.
///
/// No history and no cached status — checkmate and stalemate are recomputed
/// on demand from the current board and turn.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    // -----------------------------------------------------------------
    // Construction and trusted state entry points
    // -----------------------------------------------------------------

    /// A fresh game from the standard opening position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::starting(),
            turn: Color::White,
        }
    }

    /// The live board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board wholesale, e.g. when loading a saved position.
    ///
    /// Trusted entry point: the argument is not validated, and the caller is
    /// responsible for supplying an internally consistent position.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Whose turn it is.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Set the side to move directly. Trusted entry point, like `set_board`.
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    // -----------------------------------------------------------------
    // Legal moves
    // -----------------------------------------------------------------

    /// Legal moves for the piece on `from`, regardless of whose turn it is.
    ///
    /// Fails soft: an empty result when the square is vacant or off the
    /// board. Never mutates the live board.
    pub fn valid_moves(&self, from: Square) -> Vec<Move> {
        movegen::legal_moves_from(&self.board, from)
    }

    // -----------------------------------------------------------------
    // Make move
    // -----------------------------------------------------------------

    /// Play `mv` for the side to move.
    ///
    /// Validation order: malformed coordinates or promotion kind, vacant
    /// start square, wrong side, membership in the legal set, then a final
    /// post-move self-check gate. On any rejection the board and turn are
    /// untouched; on success the move is committed and the turn flips.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessError> {
        if !mv.from.is_on_board()
            || !mv.to.is_on_board()
            || matches!(mv.promotion, Some(PieceType::Pawn | PieceType::King))
        {
            return Err(ChessError::MalformedMove { mv });
        }

        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(ChessError::NoPieceAtSource { square: mv.from })?;

        if piece.color != self.turn {
            debug!(%mv, turn = %self.turn, "rejected: wrong side");
            return Err(ChessError::WrongTurn {
                square: mv.from,
                turn: self.turn,
            });
        }

        if !self.valid_moves(mv.from).contains(&mv) {
            debug!(%mv, "rejected: not in the legal set");
            return Err(ChessError::MoveNotLegal { mv });
        }

        // Apply on a clone and re-verify king safety before committing, so a
        // rejection at this last gate still leaves the live board untouched.
        let mut next = self.board.clone();
        movegen::apply_move(&mut next, mv);
        if movegen::is_in_check(&next, self.turn) {
            debug!(%mv, color = %self.turn, "rejected: self-check");
            return Err(ChessError::SelfCheck { color: self.turn });
        }

        self.board = next;
        self.turn = !self.turn;
        debug!(%mv, next = %self.turn, "move committed");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Check, checkmate, stalemate
    // -----------------------------------------------------------------

    /// Whether `color`'s king is currently attacked on the live board.
    pub fn is_in_check(&self, color: Color) -> bool {
        movegen::is_in_check(&self.board, color)
    }

    /// In check, with no legal move available.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !movegen::has_any_legal_move(&self.board, color)
    }

    /// Not in check, but no legal move available.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !movegen::has_any_legal_move(&self.board, color)
    }

    /// Status summary for the side to move.
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        if !movegen::has_any_legal_move(&self.board, self.turn) {
            if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else if in_check {
            GameStatus::Check
        } else {
            GameStatus::Active
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
