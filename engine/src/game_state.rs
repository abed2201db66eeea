use rand::Rng;

use crate::board::Board;
use crate::types::{FirstPlayerMode, Line, Mark, Outcome};
use crate::win_detector::evaluate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    ComputerWon,
    HumanWon,
    Draw,
}

/// One game of tic-tac-toe. Owns the board; both decision engines only
/// ever see it by reference and every move goes through `place_mark`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_human_move: Option<usize>,
    pub winning_line: Option<Line>,
}

impl GameState {
    pub fn new(first_player_mode: FirstPlayerMode) -> Self {
        let current_mark = match first_player_mode {
            FirstPlayerMode::Human => Mark::Human,
            FirstPlayerMode::Computer => Mark::Computer,
            FirstPlayerMode::Random => {
                if rand::rng().random() {
                    Mark::Human
                } else {
                    Mark::Computer
                }
            }
        };

        Self {
            board: Board::new(),
            current_mark,
            status: GameStatus::InProgress,
            last_human_move: None,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if !Board::is_valid_cell(cell) {
            return Err(format!("Cell {} is out of range", cell));
        }

        if !self.board.is_empty_cell(cell) {
            return Err(format!("Cell {} is already marked", cell));
        }

        self.board.set(cell, mark);
        if mark == Mark::Human {
            self.last_human_move = Some(cell);
        }

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::Human {
            Mark::Computer
        } else {
            Mark::Human
        };
    }

    fn check_game_over(&mut self) {
        match evaluate(&self.board) {
            Outcome::ComputerWin(line) => {
                self.status = GameStatus::ComputerWon;
                self.winning_line = Some(line);
            }
            Outcome::HumanWin(line) => {
                self.status = GameStatus::HumanWon;
                self.winning_line = Some(line);
            }
            Outcome::Draw => {
                self.status = GameStatus::Draw;
            }
            Outcome::Ongoing => {}
        }
    }
}
