use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::{thread_rng, Rng};
use threadpool::ThreadPool;

mod agent;
mod game;
mod minimax;
mod util;

use agent::Agent;
pub use game::{Board, Player, COLS, ROWS};
use minimax::{get_ai_move_threaded, DEFAULT_MAX_DEPTH};

fn single_ply(
    board: &mut Board,
    playing_agent: &mut impl Agent,
    opponent_agent: &mut impl Agent,
    player: Player,
    print: bool,
) {
    if print {
        println!("{}\n", board);
    }

    let start_time = std::time::Instant::now();

    let player_move = playing_agent
        .get_move()
        .expect("Agent was asked to move on a full board");

    let dur = start_time.elapsed();

    if print {
        println!("{} plays column {} after {:?}\n", player, player_move, dur);
    }

    if !board.is_valid_move(player_move) {
        panic!("Invalid move {} in position \n{}\n\n", player_move, board);
    }

    playing_agent.inform_move(player_move, player);
    opponent_agent.inform_move(player_move, player);
    board.make_move(player_move, player);
}

fn game_loop(board: Board, red_agent: impl Agent, yellow_agent: impl Agent, print: bool) -> (Board, Option<Player>) {
    use Player::{Red, Yellow};

    let mut board = board;
    let mut red_agent = red_agent;
    let mut yellow_agent = yellow_agent;

    let mut current_player = Red;

    loop {
        match current_player {
            Red => single_ply(&mut board, &mut red_agent, &mut yellow_agent, Red, print),
            Yellow => single_ply(&mut board, &mut yellow_agent, &mut red_agent, Yellow, print),
        }

        if board.check_win(current_player) {
            return (board, Some(current_player));
        }

        if board.is_full() {
            return (board, None);
        }

        current_player = !current_player;
    }
}

#[allow(dead_code)]
pub fn play_game<RedAgent, YellowAgent>(red_agent: RedAgent, yellow_agent: YellowAgent)
where
    RedAgent: Agent,
    YellowAgent: Agent,
{
    let board = Board::new();

    let (board, winner) = game_loop(board, red_agent, yellow_agent, true);

    println!("\nFinal board:\n\n{}\n", board);

    match winner {
        Some(player) => println!("{} won.", player),
        None => println!("Draw."),
    }
}

#[allow(dead_code)]
pub fn test_agents<RedAgent, YellowAgent>(
    red_agent_builder: &dyn Fn() -> RedAgent,
    yellow_agent_builder: &dyn Fn() -> YellowAgent,
    num_runs: usize,
) where
    RedAgent: Agent + Send + 'static,
    YellowAgent: Agent + Send + 'static,
{
    let num_workers = num_cpus::get();

    let red_wins = Arc::new(AtomicU64::new(0));
    let yellow_wins = Arc::new(AtomicU64::new(0));
    let draws = Arc::new(AtomicU64::new(0));

    let pool = ThreadPool::new(num_workers);

    for _ in 0..num_runs {
        let board = Board::new();

        let red_agent = red_agent_builder();
        let yellow_agent = yellow_agent_builder();

        let red_wins = Arc::clone(&red_wins);
        let yellow_wins = Arc::clone(&yellow_wins);
        let draws = Arc::clone(&draws);

        pool.execute(move || {
            let (_, winner) = game_loop(board, red_agent, yellow_agent, false);

            match winner {
                Some(Player::Red) => red_wins.fetch_add(1, Ordering::Release),
                Some(Player::Yellow) => yellow_wins.fetch_add(1, Ordering::Release),
                None => draws.fetch_add(1, Ordering::Release),
            };
        });
    }

    pool.join();

    println!("Red wins:    {}", red_wins.load(Ordering::Acquire));
    println!("Draws:       {}", draws.load(Ordering::Acquire));
    println!("Yellow wins: {}", yellow_wins.load(Ordering::Acquire));
}

/*====================================================================================================================*/

fn read_trimmed_line() -> String {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).expect("Failed to read from stdin");
    line.trim().to_lowercase()
}

/// Coin flip decides who starts; the human plays Red either way.
fn coin_flip_start() -> Player {
    print!("Guess heads or tails to start (type heads/tails): ");
    std::io::stdout().flush().expect("Failed to flush stdout");

    let mut guess = read_trimmed_line();
    while guess != "heads" && guess != "tails" {
        print!("Please type 'heads' or 'tails': ");
        std::io::stdout().flush().expect("Failed to flush stdout");
        guess = read_trimmed_line();
    }

    // 0 heads, 1 tails
    let coin_flip = thread_rng().gen_range(0..2);
    let player_guess = if guess == "heads" { 0 } else { 1 };

    println!("Coin flip result: {}", if coin_flip == 0 { "heads" } else { "tails" });

    if player_guess == coin_flip {
        println!("You go first.");
        Player::Red
    } else {
        println!("AI goes first.");
        Player::Yellow
    }
}

fn read_human_move(board: &Board) -> usize {
    loop {
        print!("Your move (column 0-6): ");
        std::io::stdout().flush().expect("Failed to flush stdout");

        match read_trimmed_line().parse::<usize>() {
            Ok(col) if board.is_valid_move(col) => return col,
            Ok(col) => println!("Column {} is full or out of range, try again.", col),
            Err(_) => println!("That's not a column number, try again."),
        }
    }
}

fn play_console_game() {
    let human_player = Player::Red;
    let ai_player = Player::Yellow;

    let mut current_player = coin_flip_start();
    let mut board = Board::new();

    loop {
        println!("\n{}\n", board);

        let col = if current_player == human_player {
            read_human_move(&board)
        } else {
            // the is_full check below guarantees a legal root column exists
            let result = get_ai_move_threaded(&board, ai_player, human_player, DEFAULT_MAX_DEPTH)
                .expect("Non-full board has a legal move");
            println!("AI placed in column {} after {:?}", result.col, result.elapsed);
            result.col
        };

        board.make_move(col, current_player);

        if board.check_win(current_player) {
            println!("\n{}\n", board);
            if current_player == human_player {
                println!("You win!");
            } else {
                println!("AI wins!");
            }
            return;
        }

        if board.is_full() {
            println!("\n{}\n", board);
            println!("Draw.");
            return;
        }

        current_player = !current_player;
    }
}

fn main() {
    /* AI vs AI instead of the console game:

    let red_agent = agent::MinimaxAgent::with_default_depth(Player::Red, false);
    let yellow_agent = agent::MinimaxAgent::with_default_depth(Player::Yellow, true);
    play_game(red_agent, yellow_agent);

    test_agents(
        &|| agent::MinimaxAgent::new(Player::Red, 4, true),
        &|| agent::RandomAgent::new(),
        20,
    ); */

    play_console_game();
}

/*====================================================================================================================*/
