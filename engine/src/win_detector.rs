use crate::board::Board;
use crate::types::{Line, Mark, Outcome};

/// The 8 winning triples in scan order: rows top to bottom, columns
/// left to right, main diagonal, anti diagonal. When a board somehow
/// carries more than one completed line, the first one in this order
/// is reported.
pub const LINES: [Line; 8] = [
    Line::new([1, 2, 3]),
    Line::new([4, 5, 6]),
    Line::new([7, 8, 9]),
    Line::new([1, 4, 7]),
    Line::new([2, 5, 8]),
    Line::new([3, 6, 9]),
    Line::new([1, 5, 9]),
    Line::new([3, 5, 7]),
];

/// Per-side occupancy of a line: (computer, human, empty).
pub fn line_counts(board: &Board, line: Line) -> (usize, usize, usize) {
    let mut computer = 0;
    let mut human = 0;
    let mut empty = 0;
    for cell in line.cells {
        match board.mark_at(cell) {
            Mark::Computer => computer += 1,
            Mark::Human => human += 1,
            Mark::Empty => empty += 1,
        }
    }
    (computer, human, empty)
}

pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let (computer, human, _) = line_counts(board, line);
        if computer == 3 {
            return Outcome::ComputerWin(line);
        }
        if human == 3 {
            return Outcome::HumanWin(line);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    match evaluate(board) {
        Outcome::ComputerWin(_) => Some(Mark::Computer),
        Outcome::HumanWin(_) => Some(Mark::Human),
        Outcome::Draw | Outcome::Ongoing => None,
    }
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
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[
            (1, Mark::Computer),
            (2, Mark::Computer),
            (3, Mark::Computer),
            (4, Mark::Human),
            (5, Mark::Human),
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::ComputerWin(Line::new([1, 2, 3]))
        );
        assert_eq!(check_win(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[
            (2, Mark::Human),
            (5, Mark::Human),
            (8, Mark::Human),
            (1, Mark::Computer),
            (3, Mark::Computer),
        ]);
        assert_eq!(evaluate(&board), Outcome::HumanWin(Line::new([2, 5, 8])));
    }

    #[test]
    fn test_diagonal_win_reports_line() {
        let board = board_with(&[
            (1, Mark::Computer),
            (5, Mark::Computer),
            (9, Mark::Computer),
            (2, Mark::Human),
            (3, Mark::Human),
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::ComputerWin(Line::new([1, 5, 9]))
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[
            (3, Mark::Human),
            (5, Mark::Human),
            (7, Mark::Human),
        ]);
        assert_eq!(evaluate(&board), Outcome::HumanWin(Line::new([3, 5, 7])));
    }

    #[test]
    fn test_full_board_no_line_is_draw() {
        // X O X / X O O / O X X
        let board = Board::from_rows([
            [Mark::Human, Mark::Computer, Mark::Human],
            [Mark::Human, Mark::Computer, Mark::Computer],
            [Mark::Computer, Mark::Human, Mark::Human],
        ]);
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_double_win_takes_first_line_in_scan_order() {
        // Unreachable under alternating play, but must not crash.
        let board = board_with(&[
            (1, Mark::Computer),
            (2, Mark::Computer),
            (3, Mark::Computer),
            (7, Mark::Computer),
            (8, Mark::Computer),
            (9, Mark::Computer),
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::ComputerWin(Line::new([1, 2, 3]))
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_with(&[(1, Mark::Computer), (5, Mark::Human)]);
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn test_line_counts() {
        let board = board_with(&[(1, Mark::Computer), (2, Mark::Human)]);
        assert_eq!(line_counts(&board, Line::new([1, 2, 3])), (1, 1, 1));
        assert_eq!(line_counts(&board, Line::new([4, 5, 6])), (0, 0, 3));
    }
}
