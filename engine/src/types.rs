use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Cell content. The computer plays O, the human plays X.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    Computer,
    Human,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Computer => Some(Mark::Human),
            Mark::Human => Some(Mark::Computer),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Computer => 'O',
            Mark::Human => 'X',
        }
    }
}

/// Zero-based board coordinates. Cells are also addressable by their
/// 1-based number in row-major order:
///
/// ```text
/// [1] [2] [3]
/// [4] [5] [6]
/// [7] [8] [9]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_cell(cell: usize) -> Option<Position> {
        if !(1..=CELL_COUNT).contains(&cell) {
            return None;
        }
        Some(Self {
            row: (cell - 1) / BOARD_SIZE,
            col: (cell - 1) % BOARD_SIZE,
        })
    }

    pub fn to_cell(&self) -> usize {
        self.row * BOARD_SIZE + self.col + 1
    }
}

/// One of the 8 winning triples, stored as 1-based cell numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub cells: [usize; 3],
}

impl Line {
    pub const fn new(cells: [usize; 3]) -> Self {
        Self { cells }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    ComputerWin(Line),
    HumanWin(Line),
    Draw,
    Ongoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Human,
    Computer,
    Random,
}
