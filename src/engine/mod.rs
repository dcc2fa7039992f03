pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::Board;
pub use game::Game;
pub use movegen::{
    has_any_legal_move, is_in_check, is_square_attacked, legal_moves_from, pseudo_legal_moves,
};
pub use types::*;
