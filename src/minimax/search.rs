use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use threadpool::ThreadPool;

use crate::{Board, Player, COLS};

pub type Score = i32;

pub const WIN_SCORE: Score = 1000;
pub const SCORE_MIN: Score = -100_000;
pub const SCORE_MAX: Score = 100_000;

pub const DEFAULT_MAX_DEPTH: u32 = 5;

const LOG_STATS: bool = false;

/*====================================================================================================================*/

/// +1000 if the AI side has four in a row, -1000 if the human side does, 0 otherwise.
pub fn evaluate(board: &Board, ai_player: Player, human_player: Player) -> Score {
    if board.check_win(ai_player) {
        WIN_SCORE
    } else if board.check_win(human_player) {
        -WIN_SCORE
    } else {
        0
    }
}

/// Lowest column that completes four in a row for `player` right away, if any.
#[allow(dead_code)]
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    let mut board = board.clone();

    for col in 0..COLS {
        if !board.make_move(col, player) {
            continue;
        }

        let wins = board.check_win(player);
        board.undo_move(col);

        if wins {
            return Some(col);
        }
    }

    None
}

/*====================================================================================================================*/

struct MinimaxWorker {
    total_nodes_visited: u64,

    start_t: Instant,
}

impl MinimaxWorker {
    pub fn new() -> Self {
        MinimaxWorker {
            total_nodes_visited: 0,
            start_t: Instant::now(),
        }
    }

    fn current_nps(&self) -> f64 {
        self.total_nodes_visited as f64 / self.start_t.elapsed().as_secs_f64()
    }

    /// Depth-first alpha-beta search, mutating `board` in place and restoring it before returning.
    /// Every make_move below is paired with an undo_move on all paths, including the cutoff break.
    fn minimax(
        &mut self,
        board: &mut Board,
        remaining_depth: u32,
        maximizing: bool,
        ai_player: Player,
        human_player: Player,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.total_nodes_visited += 1;

        let score = evaluate(board, ai_player, human_player);

        if remaining_depth == 0 || score == WIN_SCORE || score == -WIN_SCORE || board.is_full() {
            return score;
        }

        let mut alpha = alpha;
        let mut beta = beta;

        if maximizing {
            let mut max_eval = SCORE_MIN;

            for col in 0..COLS {
                if !board.make_move(col, ai_player) {
                    continue;
                }

                let eval = self.minimax(board, remaining_depth - 1, false, ai_player, human_player, alpha, beta);
                board.undo_move(col);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);

                if beta <= alpha {
                    // beta cutoff
                    break;
                }
            }

            max_eval
        } else {
            let mut min_eval = SCORE_MAX;

            for col in 0..COLS {
                if !board.make_move(col, human_player) {
                    continue;
                }

                let eval = self.minimax(board, remaining_depth - 1, true, ai_player, human_player, alpha, beta);
                board.undo_move(col);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);

                if beta <= alpha {
                    // alpha cutoff
                    break;
                }
            }

            min_eval
        }
    }
}

/*====================================================================================================================*/

/// Sequential root search with `max_depth` total plies of lookahead.
/// Ties keep the first (lowest) column. Returns None if the board admits no move.
pub fn get_ai_move(board: &mut Board, ai_player: Player, human_player: Player, max_depth: u32) -> Option<usize> {
    assert!(max_depth > 0, "Called get_ai_move with zero search depth");

    let mut worker = MinimaxWorker::new();

    let mut best_score = SCORE_MIN;
    let mut best_col = None;

    for col in 0..COLS {
        if !board.make_move(col, ai_player) {
            continue;
        }

        let score = worker.minimax(
            board,
            max_depth - 1,
            false,
            ai_player,
            human_player,
            SCORE_MIN,
            SCORE_MAX,
        );
        board.undo_move(col);

        if score > best_score || best_col.is_none() {
            best_score = score;
            best_col = Some(col);
        }
    }

    if LOG_STATS {
        println!("--------------------------------------------");
        println!("* Sequential minimax finished at depth {}", max_depth);
        println!("* Best column {:?} with score {}", best_col, best_score);
        println!("* NPS: {:.2e}", worker.current_nps());
        println!("--------------------------------------------\n");
    }

    best_col
}

/*====================================================================================================================*/

pub struct ThreadedSearchResult {
    pub col: usize,
    pub score: Score,
    pub elapsed: Duration,
}

/// Root-parallel search: one worker per legal root column, each on its own copy of the board.
/// The private copies are what make the in-place mutate/undo recursion safe across workers.
/// Returns None if the board admits no move.
pub fn get_ai_move_threaded(
    board: &Board,
    ai_player: Player,
    human_player: Player,
    max_depth: u32,
) -> Option<ThreadedSearchResult> {
    assert!(max_depth > 0, "Called get_ai_move_threaded with zero search depth");

    let legal_moves = board.legal_moves();

    if legal_moves.is_empty() {
        return None;
    }

    let start_t = Instant::now();

    let pool = ThreadPool::new(legal_moves.len());
    let results = Arc::new(Mutex::new(Vec::with_capacity(legal_moves.len())));

    for col in legal_moves {
        let mut worker_board = board.clone();
        let results = Arc::clone(&results);

        pool.execute(move || {
            worker_board.make_move(col, ai_player);

            let mut worker = MinimaxWorker::new();
            let score = worker.minimax(
                &mut worker_board,
                max_depth - 1,
                false,
                ai_player,
                human_player,
                SCORE_MIN,
                SCORE_MAX,
            );

            // the lock is held only for the push, never during the search
            results.lock().unwrap().push((col, score, worker.total_nodes_visited));
        });
    }

    pool.join();

    let mut results = results.lock().unwrap().clone();

    // reduce only after the join, sorted by column, so ties always resolve
    // to the lowest column no matter which worker finished first
    results.sort_unstable();

    let mut best_col = results[0].0;
    let mut best_score = results[0].1;
    let mut total_nodes = 0;

    for &(col, score, nodes) in results.iter() {
        total_nodes += nodes;

        if score > best_score {
            best_score = score;
            best_col = col;
        }
    }

    let elapsed = start_t.elapsed();

    if LOG_STATS {
        println!("--------------------------------------------");
        println!("* Threaded minimax finished at depth {}", max_depth);
        println!("* Best column {} with score {}", best_col, best_score);
        println!("* {} workers, {} nodes in {:?}", results.len(), total_nodes, elapsed);
        println!("--------------------------------------------\n");
    }

    Some(ThreadedSearchResult {
        col: best_col,
        score: best_score,
        elapsed,
    })
}

/*====================================================================================================================*/
