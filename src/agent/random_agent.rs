use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::agent::Agent;
use crate::{Board, Player};

pub struct RandomAgent {
    board: Board,
}

impl RandomAgent {
    #[allow(dead_code)]
    pub fn new() -> Self {
        RandomAgent { board: Board::new() }
    }
}

impl Agent for RandomAgent {
    fn inform_move(&mut self, col: usize, player: Player) {
        self.board.make_move(col, player);
    }

    fn get_move(&mut self) -> Option<usize> {
        self.board.legal_moves().choose(&mut thread_rng()).copied()
    }
}
