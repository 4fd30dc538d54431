use std::fmt::Display;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Red,
    Yellow,
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

/*====================================================================================================================*/

/// 6x7 grid, row 0 at the top. Invariant: occupied cells in a column are contiguous from the bottom row up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Player>; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_none()
    }

    /// Drops a piece into the lowest empty cell of the column.
    /// Returns false without touching the board if the column is out of range or full.
    pub fn make_move(&mut self, col: usize, player: Player) -> bool {
        if !self.is_valid_move(col) {
            return false;
        }

        for row in (0..ROWS).rev() {
            if self.cells[row][col].is_none() {
                self.cells[row][col] = Some(player);
                return true;
            }
        }

        false
    }

    /// Clears the topmost occupied cell of the column; no-op if the column is empty.
    /// Callers must pair every undo_move with a preceding make_move on the same column in LIFO order.
    pub fn undo_move(&mut self, col: usize) {
        for row in 0..ROWS {
            if self.cells[row][col].is_some() {
                self.cells[row][col] = None;
                return;
            }
        }
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    pub fn has_legal_move(&self) -> bool {
        (0..COLS).any(|col| self.is_valid_move(col))
    }

    pub fn is_full(&self) -> bool {
        !self.has_legal_move()
    }

    /// Scans the whole board for four in a row in any orientation.
    pub fn check_win(&self, player: Player) -> bool {
        let p = Some(player);

        // horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                if self.cells[row][col] == p
                    && self.cells[row][col + 1] == p
                    && self.cells[row][col + 2] == p
                    && self.cells[row][col + 3] == p
                {
                    return true;
                }
            }
        }

        // vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                if self.cells[row][col] == p
                    && self.cells[row + 1][col] == p
                    && self.cells[row + 2][col] == p
                    && self.cells[row + 3][col] == p
                {
                    return true;
                }
            }
        }

        // diagonal down-right
        for row in 0..=ROWS - 4 {
            for col in 0..=COLS - 4 {
                if self.cells[row][col] == p
                    && self.cells[row + 1][col + 1] == p
                    && self.cells[row + 2][col + 2] == p
                    && self.cells[row + 3][col + 3] == p
                {
                    return true;
                }
            }
        }

        // diagonal up-right
        for row in 3..ROWS {
            for col in 0..=COLS - 4 {
                if self.cells[row][col] == p
                    && self.cells[row - 1][col + 1] == p
                    && self.cells[row - 2][col + 2] == p
                    && self.cells[row - 3][col + 3] == p
                {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let c = match self.cells[row][col] {
                    None => '.',
                    Some(Player::Red) => 'R',
                    Some(Player::Yellow) => 'Y',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }

        for col in 0..COLS {
            write!(f, " {}", col)?;
        }

        Ok(())
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use crate::{Board, Player, COLS, ROWS};

    #[test]
    fn test_board_new_is_empty() {
        let board = Board::new();

        for row in 0..ROWS {
            for col in 0..COLS {
                assert!(board.get(row, col).is_none());
            }
        }

        assert!(board.has_legal_move());
        assert!(!board.is_full());
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_make_move_fills_from_bottom() {
        let mut board = Board::new();

        assert!(board.make_move(3, Player::Red));
        assert_eq!(board.get(ROWS - 1, 3), Some(Player::Red));

        assert!(board.make_move(3, Player::Yellow));
        assert_eq!(board.get(ROWS - 2, 3), Some(Player::Yellow));

        // column not full, no win yet
        assert!(board.is_valid_move(3));
        assert!(!board.check_win(Player::Red));
    }

    #[test]
    fn test_make_move_out_of_range_is_rejected() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(!board.make_move(COLS, Player::Red));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_column_rejects_seventh_move() {
        let mut board = Board::new();

        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::Red } else { Player::Yellow };
            assert!(board.make_move(0, player));
        }

        let before = board.clone();

        assert!(!board.is_valid_move(0));
        assert!(!board.make_move(0, Player::Red));
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_restores_prior_state() {
        let mut board = Board::new();
        board.make_move(2, Player::Red);
        board.make_move(2, Player::Yellow);
        board.make_move(4, Player::Red);

        let before = board.clone();

        board.make_move(2, Player::Red);
        board.undo_move(2);

        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_on_empty_column_is_noop() {
        let mut board = Board::new();
        board.make_move(1, Player::Red);

        let before = board.clone();
        board.undo_move(5);

        assert_eq!(board, before);
    }

    #[test]
    fn test_gravity_invariant_under_legal_play() {
        let mut board = Board::new();
        let moves = [3, 3, 4, 2, 4, 4, 0, 6, 3, 3, 3, 3, 1, 0];

        let mut player = Player::Red;
        for &col in moves.iter() {
            if board.make_move(col, player) {
                player = !player;
            }
        }

        // no occupied cell below an empty cell
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.get(row, col).is_some() {
                    assert!(board.get(row + 1, col).is_some(), "floating piece in column {}", col);
                }
            }
        }
    }

    #[test]
    fn test_check_win_horizontal() {
        let mut board = Board::new();
        for col in 0..4 {
            board.make_move(col, Player::Red);
        }

        assert!(board.check_win(Player::Red));
        assert!(!board.check_win(Player::Yellow));
    }

    #[test]
    fn test_check_win_vertical() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.make_move(5, Player::Yellow);
        }

        assert!(board.check_win(Player::Yellow));
        assert!(!board.check_win(Player::Red));
    }

    #[test]
    fn test_check_win_transposition_symmetry() {
        // horizontal line in the bottom row ...
        let mut horizontal = Board::new();
        for col in 0..4 {
            horizontal.make_move(col, Player::Red);
        }

        // ... and the same line mirrored into a single column
        let mut vertical = Board::new();
        for _ in 0..4 {
            vertical.make_move(0, Player::Red);
        }

        assert_eq!(horizontal.check_win(Player::Red), vertical.check_win(Player::Red));
    }

    #[test]
    fn test_check_win_diagonal_down_right() {
        let mut board = Board::new();

        // staircase from column 0 (tallest) to column 3
        board.make_move(0, Player::Yellow);
        board.make_move(0, Player::Yellow);
        board.make_move(0, Player::Yellow);
        board.make_move(0, Player::Red);

        board.make_move(1, Player::Yellow);
        board.make_move(1, Player::Yellow);
        board.make_move(1, Player::Red);

        board.make_move(2, Player::Yellow);
        board.make_move(2, Player::Red);

        board.make_move(3, Player::Red);

        assert!(board.check_win(Player::Red));
        assert!(!board.check_win(Player::Yellow));
    }

    #[test]
    fn test_check_win_diagonal_up_right() {
        let mut board = Board::new();

        // staircase from column 0 (lowest) to column 3
        board.make_move(0, Player::Red);

        board.make_move(1, Player::Yellow);
        board.make_move(1, Player::Red);

        board.make_move(2, Player::Yellow);
        board.make_move(2, Player::Yellow);
        board.make_move(2, Player::Red);

        board.make_move(3, Player::Yellow);
        board.make_move(3, Player::Yellow);
        board.make_move(3, Player::Yellow);
        board.make_move(3, Player::Red);

        assert!(board.check_win(Player::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.make_move(col, Player::Red);
        }

        assert!(!board.check_win(Player::Red));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();

        for col in 0..COLS {
            for i in 0..ROWS {
                let player = if (col + i) % 2 == 0 { Player::Red } else { Player::Yellow };
                assert!(board.make_move(col, player));
            }
        }

        assert!(board.is_full());
        assert!(!board.has_legal_move());
        assert!(board.legal_moves().is_empty());
    }
}
