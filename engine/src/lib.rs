mod board;
mod bot;
pub mod config;
mod game_state;
mod heuristic;
pub mod logger;
mod minimax;
mod ranking;
mod types;
mod win_detector;

pub use board::Board;
pub use bot::{Bot, BotType};
pub use game_state::{GameState, GameStatus};
pub use heuristic::HeuristicPlayer;
pub use minimax::{COMPUTER_WIN_SCORE, HUMAN_WIN_SCORE, MinimaxPlayer};
pub use ranking::{CellRanking, cell_priority};
pub use types::{BOARD_SIZE, CELL_COUNT, FirstPlayerMode, Line, Mark, Outcome, Position};
pub use win_detector::{LINES, check_win, evaluate, line_counts};
