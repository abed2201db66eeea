use crate::board::Board;
use crate::ranking::CellRanking;
use crate::types::{Mark, Outcome};
use crate::win_detector::{LINES, evaluate, line_counts};

/// Corner pairs that make the listed opposite corner a strong reply
/// when the computer already holds both. Deliberately limited to these
/// four patterns; this is not general fork detection.
const FORK_PATTERNS: [([usize; 2], usize); 4] = [
    ([2, 4], 1),
    ([2, 6], 3),
    ([6, 8], 9),
    ([8, 4], 7),
];

/// Rule-based opponent for the normal difficulty. Rules are evaluated
/// in a fixed order, first match wins: complete an own line, block the
/// human's line, take a fork corner, then fall back to the
/// highest-ranked free cell.
///
/// The player never mutates the board it is given; the caller applies
/// the returned cell. The internal ranking is the only state carried
/// between calls, so one instance serves exactly one game.
pub struct HeuristicPlayer {
    ranking: CellRanking,
}

impl Default for HeuristicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicPlayer {
    pub fn new() -> Self {
        Self {
            ranking: CellRanking::new(),
        }
    }

    /// Picks the computer's next cell. `opponent_cell` is the cell the
    /// human just claimed (`None` when the computer opens the game); it
    /// is purged from the fallback ranking before any rule runs. The
    /// returned cell is guaranteed to be empty on the given board.
    pub fn choose_move(
        &mut self,
        board: &Board,
        opponent_cell: Option<usize>,
    ) -> Result<usize, String> {
        if evaluate(board) != Outcome::Ongoing {
            return Err("Game is already decided".to_string());
        }

        if let Some(cell) = opponent_cell {
            self.ranking.remove(cell);
        }

        let choice = find_completing_cell(board, Mark::Computer)
            .or_else(|| find_completing_cell(board, Mark::Human))
            .or_else(|| find_fork_cell(board));

        // The rule scans do not look at the target cell itself, so the
        // result still has to be validated before it is returned.
        let choice = match choice {
            Some(cell) if Some(cell) != opponent_cell && board.is_empty_cell(cell) => cell,
            _ => self.pop_fallback(board)?,
        };

        self.ranking.remove(choice);
        Ok(choice)
    }

    fn pop_fallback(&mut self, board: &Board) -> Result<usize, String> {
        while let Some(cell) = self.ranking.pop_best() {
            if board.is_empty_cell(cell) {
                return Ok(cell);
            }
        }
        Err("No empty cells left in the ranking".to_string())
    }
}

/// The empty cell of a line where `mark` already holds the other two
/// cells, if any. Uses per-side counts, so a line containing any
/// opposing mark never matches.
fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    for line in LINES {
        let (computer, human, empty) = line_counts(board, line);
        let (own, other) = match mark {
            Mark::Computer => (computer, human),
            Mark::Human => (human, computer),
            Mark::Empty => return None,
        };

        if own == 2 && other == 0 && empty == 1 {
            return line.cells.iter().copied().find(|&c| board.is_empty_cell(c));
        }
    }
    None
}

fn find_fork_cell(board: &Board) -> Option<usize> {
    for (pair, target) in FORK_PATTERNS {
        if pair.iter().all(|&c| board.mark_at(c) == Mark::Computer) {
            return Some(target);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(cell, mark) in marks {
            board.set(cell, mark);
        }
        board
    }

    #[test]
    fn test_completes_own_line() {
        // Cells 1 and 2 are the computer's; cell 3 finishes the row.
        let board = board_with(&[
            (1, Mark::Computer),
            (2, Mark::Computer),
            (5, Mark::Human),
        ]);
        let mut player = HeuristicPlayer::new();
        assert_eq!(player.choose_move(&board, Some(5)), Ok(3));
    }

    #[test]
    fn test_blocks_human_line() {
        let board = board_with(&[
            (1, Mark::Human),
            (2, Mark::Human),
            (5, Mark::Computer),
        ]);
        let mut player = HeuristicPlayer::new();
        assert_eq!(player.choose_move(&board, Some(2)), Ok(3));
    }

    #[test]
    fn test_win_beats_block() {
        // Both sides threaten; the computer finishes its own line.
        let board = board_with(&[
            (4, Mark::Computer),
            (5, Mark::Computer),
            (1, Mark::Human),
            (2, Mark::Human),
        ]);
        let mut player = HeuristicPlayer::new();
        assert_eq!(player.choose_move(&board, Some(2)), Ok(6));
    }

    #[test]
    fn test_mixed_line_is_not_a_threat() {
        // Human holds 1 and 3 but the computer already sits on 2.
        let board = board_with(&[
            (1, Mark::Human),
            (3, Mark::Human),
            (2, Mark::Computer),
        ]);
        let mut player = HeuristicPlayer::new();
        // No rule fires; fallback takes the center.
        assert_eq!(player.choose_move(&board, Some(3)), Ok(5));
    }

    #[test]
    fn test_fork_pattern_takes_opposite_corner() {
        // Human's pair sits on a line the computer already broke, so no
        // block fires and the {2,4} fork pattern picks cell 1.
        let board = board_with(&[
            (2, Mark::Computer),
            (4, Mark::Computer),
            (5, Mark::Human),
            (6, Mark::Human),
        ]);
        let mut player = HeuristicPlayer::new();
        assert_eq!(player.choose_move(&board, Some(6)), Ok(1));
    }

    #[test]
    fn test_fallback_prefers_center() {
        let board = board_with(&[(1, Mark::Human)]);
        let mut player = HeuristicPlayer::new();
        assert_eq!(player.choose_move(&board, Some(1)), Ok(5));
    }

    #[test]
    fn test_fallback_skips_claimed_cells() {
        let board = board_with(&[(1, Mark::Human), (5, Mark::Computer)]);
        let mut player = HeuristicPlayer::new();
        player.choose_move(&board_with(&[(1, Mark::Human)]), Some(1)).ok();
        // Center already spent on the first move; next best is a corner.
        let choice = player.choose_move(&board, None).unwrap();
        assert!(board.is_empty_cell(choice));
        assert_eq!(choice, 3);
    }

    #[test]
    fn test_occupied_fork_target_falls_back() {
        // Fork pattern {2,4} points at cell 1, but the human holds it.
        let board = board_with(&[
            (2, Mark::Computer),
            (4, Mark::Computer),
            (1, Mark::Human),
            (6, Mark::Human),
        ]);
        let mut player = HeuristicPlayer::new();
        let choice = player.choose_move(&board, Some(6)).unwrap();
        assert!(board.is_empty_cell(choice));
        assert_eq!(choice, 5);
    }

    #[test]
    fn test_decided_board_is_rejected() {
        let board = board_with(&[
            (1, Mark::Human),
            (2, Mark::Human),
            (3, Mark::Human),
        ]);
        let mut player = HeuristicPlayer::new();
        assert!(player.choose_move(&board, Some(3)).is_err());
    }

    #[test]
    fn test_full_drawn_board_is_rejected() {
        // X O X / X O O / O X X
        let board = Board::from_rows([
            [Mark::Human, Mark::Computer, Mark::Human],
            [Mark::Human, Mark::Computer, Mark::Computer],
            [Mark::Computer, Mark::Human, Mark::Human],
        ]);
        let mut player = HeuristicPlayer::new();
        assert!(player.choose_move(&board, Some(9)).is_err());
    }

    #[test]
    fn test_returned_cell_is_always_empty_over_a_full_game() {
        let mut board = Board::new();
        let mut player = HeuristicPlayer::new();
        let mut human_cell = None;

        // Human plays the lowest free cell every turn; the engine must
        // keep producing empty cells until the game decides.
        loop {
            if evaluate(&board) != Outcome::Ongoing {
                break;
            }
            let cell = player.choose_move(&board, human_cell).unwrap();
            assert!(board.is_empty_cell(cell));
            board.set(cell, Mark::Computer);

            if evaluate(&board) != Outcome::Ongoing {
                break;
            }
            let human = board.available_cells()[0];
            board.set(human, Mark::Human);
            human_cell = Some(human);
        }
    }
}
