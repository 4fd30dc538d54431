mod search;

pub use search::{
    evaluate, find_winning_move, get_ai_move, get_ai_move_threaded, Score, ThreadedSearchResult, DEFAULT_MAX_DEPTH,
    WIN_SCORE,
};
