use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::heuristic::HeuristicPlayer;
use crate::minimax::MinimaxPlayer;

/// Which decision engine drives the computer. `Heuristic` is the
/// normal difficulty, `Minimax` the unbeatable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Heuristic,
    Minimax,
}

/// The computer opponent for one game. Holds the heuristic's ranking
/// state; the minimax engine is stateless.
pub enum Bot {
    Heuristic(HeuristicPlayer),
    Minimax(MinimaxPlayer),
}

impl Bot {
    pub fn new(bot_type: BotType) -> Self {
        match bot_type {
            BotType::Heuristic => Bot::Heuristic(HeuristicPlayer::new()),
            BotType::Minimax => Bot::Minimax(MinimaxPlayer::new()),
        }
    }

    pub fn bot_type(&self) -> BotType {
        match self {
            Bot::Heuristic(_) => BotType::Heuristic,
            Bot::Minimax(_) => BotType::Minimax,
        }
    }

    /// Picks the computer's next cell for the current position. The
    /// caller applies the move through `GameState::place_mark`.
    pub fn calculate_move(&mut self, state: &GameState) -> Result<usize, String> {
        if state.is_over() {
            return Err("Game is already over".to_string());
        }

        match self {
            Bot::Heuristic(player) => player.choose_move(&state.board, state.last_human_move),
            Bot::Minimax(player) => player.choose_move(&state.board),
        }
    }
}
