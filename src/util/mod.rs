use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::{Board, Player};

/// Plays up to `num_moves` random legal moves onto the board, alternating players,
/// stopping early on a win or a full board. Useful for reaching midgame positions.
#[allow(dead_code)]
pub fn advance_random(board: &mut Board, num_moves: usize, starting_player: Player) {
    let mut current_player = starting_player;

    for _ in 0..num_moves {
        if board.check_win(current_player) || board.check_win(!current_player) || board.is_full() {
            break;
        }

        let col = *board
            .legal_moves()
            .choose(&mut thread_rng())
            .expect("non-full board has a legal move");

        board.make_move(col, current_player);
        current_player = !current_player;
    }
}
