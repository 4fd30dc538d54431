use crate::Player;

pub trait Agent {
    /// Tells the agent about a move that was played, by either side.
    fn inform_move(&mut self, col: usize, player: Player);

    /// Asks the agent for its next move; None if the board admits no move.
    fn get_move(&mut self) -> Option<usize>;
}
