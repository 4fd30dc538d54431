mod board;

pub use board::{Board, Player, COLS, ROWS};
