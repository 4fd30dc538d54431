use crate::agent::Agent;
use crate::minimax::{get_ai_move, get_ai_move_threaded, DEFAULT_MAX_DEPTH};
use crate::{Board, Player};

pub struct MinimaxAgent {
    board: Board,
    me: Player,
    max_depth: u32,
    threaded: bool,
}

impl MinimaxAgent {
    #[allow(dead_code)]
    pub fn new(me: Player, max_depth: u32, threaded: bool) -> Self {
        MinimaxAgent {
            board: Board::new(),
            me,
            max_depth,
            threaded,
        }
    }

    #[allow(dead_code)]
    pub fn with_default_depth(me: Player, threaded: bool) -> Self {
        MinimaxAgent::new(me, DEFAULT_MAX_DEPTH, threaded)
    }
}

impl Agent for MinimaxAgent {
    fn inform_move(&mut self, col: usize, player: Player) {
        let applied = self.board.make_move(col, player);
        debug_assert!(applied, "Agent was informed of an illegal move");
    }

    fn get_move(&mut self) -> Option<usize> {
        if self.threaded {
            get_ai_move_threaded(&self.board, self.me, !self.me, self.max_depth).map(|result| result.col)
        } else {
            get_ai_move(&mut self.board, self.me, !self.me, self.max_depth)
        }
    }
}
