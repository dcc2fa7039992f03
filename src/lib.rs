//! A chess rules engine: board model, per-piece move generation, turn
//! enforcement, and check / checkmate / stalemate detection.
//!
//! The crate exposes a purely programmatic interface — no I/O, wire format,
//! or move notation of its own. A host (UI, server, persistence layer)
//! drives a [`Game`], queries occupancy and legal moves, and submits moves;
//! every rejection is a typed [`ChessError`] and leaves the game untouched.
//!
//! Legality is decided by simulation: pseudo-legal candidates are applied to
//! a board clone and discarded when the mover's own king would be attacked
//! afterwards. The same check predicate drives checkmate and stalemate
//! detection.

pub mod engine;

pub use engine::board::Board;
pub use engine::game::Game;
pub use engine::types::{ChessError, Color, GameStatus, Move, Piece, PieceType, Square};
