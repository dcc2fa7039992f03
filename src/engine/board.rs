//! The 8×8 board: a mailbox grid of optional pieces.
//!
//! `Board` owns its cells, so the derived `Clone` is a fully independent
//! deep copy — the legality filter relies on this to simulate moves without
//! touching the live position.

use std::fmt;

use crate::engine::types::{Color, Piece, PieceType, Square};

/// An 8×8 grid mapping squares to optional pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// `squares[row][col]`, row 0 = White's back rank.
    squares: [[Option<Piece>; 8]; 8],
}

/// Back-rank piece order from file a to file h.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    /// An empty board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// A board set up with the standard opening layout.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Clear all 64 cells, then place the 32 standard pieces. Idempotent.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for col in 0..8usize {
            self.squares[0][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
            self.squares[1][col] = Some(Piece::new(Color::White, PieceType::Pawn));
            self.squares[6][col] = Some(Piece::new(Color::Black, PieceType::Pawn));
            self.squares[7][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
        }
    }

    /// The occupant of `square`, or `None` when vacant or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    /// Overwrite the cell at `square`; `None` clears it.
    ///
    /// `square` must be on the board.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(square.is_on_board(), "off-board write: {square:?}");
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Iterate over all occupied squares as `(Square, Piece)` pairs.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|piece| (sq, piece))
            })
        })
    }

    /// The square of the king of `color`, if one is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, p)| p.kind == PieceType::King && p.color == color)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8i8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8i8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(p) => write!(f, "{}", p.to_char())?,
                    None => write!(f, ".")?,
                }
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
