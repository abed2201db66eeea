use crate::types::{BOARD_SIZE, CELL_COUNT, Mark};

/// The 3x3 grid, stored flat in row-major order. All public accessors
/// take 1-based cell numbers; `rows`/`from_rows` give the matrix view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, &mark) in row_cells.iter().enumerate() {
                cells[row * BOARD_SIZE + col] = mark;
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn rows(&self) -> [[Mark; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, &mark) in self.cells.iter().enumerate() {
            rows[i / BOARD_SIZE][i % BOARD_SIZE] = mark;
        }
        rows
    }

    /// Cell must be in `1..=9`.
    pub fn mark_at(&self, cell: usize) -> Mark {
        self.cells[cell - 1]
    }

    /// Cell must be in `1..=9`.
    pub fn set(&mut self, cell: usize, mark: Mark) {
        self.cells[cell - 1] = mark;
    }

    pub fn is_valid_cell(cell: usize) -> bool {
        (1..=CELL_COUNT).contains(&cell)
    }

    pub fn is_empty_cell(&self, cell: usize) -> bool {
        Self::is_valid_cell(cell) && self.mark_at(cell) == Mark::Empty
    }

    pub fn available_cells(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (i, &mark) in self.cells.iter().enumerate() {
            if mark == Mark::Empty {
                moves.push(i + 1);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }
}
