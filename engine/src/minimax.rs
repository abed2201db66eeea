use crate::board::Board;
use crate::types::{Mark, Outcome};
use crate::win_detector::evaluate;

pub const COMPUTER_WIN_SCORE: i32 = 10;
pub const HUMAN_WIN_SCORE: i32 = -10;

const MAX_DEPTH: usize = 9;

/// Exhaustive game-tree opponent for the unbeatable difficulty. No
/// pruning and no caching; the 3x3 tree is small enough for a full
/// search on every call. Stateless, so one instance can serve any
/// number of games.
///
/// Like the heuristic player, it never mutates the caller's board;
/// the board passed in is cloned and only the clone is touched during
/// the search.
pub struct MinimaxPlayer;

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Terminal valuation: +10 if the computer holds a winning line,
    /// -10 if the human does, 0 otherwise. Depth-independent.
    pub fn score(&self, board: &Board) -> i32 {
        match evaluate(board) {
            Outcome::ComputerWin(_) => COMPUTER_WIN_SCORE,
            Outcome::HumanWin(_) => HUMAN_WIN_SCORE,
            Outcome::Draw | Outcome::Ongoing => 0,
        }
    }

    /// Minimax value of the position with the given side to move.
    /// Decided positions return their score immediately; a full board
    /// or the depth cap scores 0.
    pub fn search(&self, board: &mut Board, depth: usize, maximizing: bool) -> i32 {
        let score = self.score(board);
        if score != 0 {
            return score;
        }

        if board.is_full() || depth >= MAX_DEPTH {
            return 0;
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for cell in board.available_cells() {
                board.set(cell, Mark::Computer);
                let eval = self.search(board, depth + 1, false);
                board.set(cell, Mark::Empty);
                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for cell in board.available_cells() {
                board.set(cell, Mark::Human);
                let eval = self.search(board, depth + 1, true);
                board.set(cell, Mark::Empty);
                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }

    /// Best computer cell by exhaustive search. Only strictly better
    /// scores replace the current candidate, so among equal moves the
    /// lowest-numbered cell wins (cell 1 on an empty board).
    pub fn choose_move(&self, board: &Board) -> Result<usize, String> {
        if evaluate(board) != Outcome::Ongoing {
            return Err("Game is already decided".to_string());
        }

        let mut board = board.clone();
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for cell in board.available_cells() {
            board.set(cell, Mark::Computer);
            let score = self.search(&mut board, 0, false);
            board.set(cell, Mark::Empty);

            if score > best_score {
                best_score = score;
                best_move = Some(cell);
            }
        }

        best_move.ok_or_else(|| "No empty cells left on the board".to_string())
    }
}
