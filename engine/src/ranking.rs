use crate::types::CELL_COUNT;

/// How many of the 8 winning lines pass through each cell:
/// center 4, corners 3, edges 2.
pub fn cell_priority(cell: usize) -> u8 {
    match cell {
        5 => 4,
        1 | 3 | 7 | 9 => 3,
        _ => 2,
    }
}

#[derive(Clone, Copy, Debug)]
struct CellSlot {
    cell: usize,
    priority: u8,
    removed: bool,
}

/// Fallback ranking over the 9 cells, owned by a single game. Cells are
/// removed as either side claims them; `pop_best` yields the remaining
/// cell with the highest priority, ties broken by ascending cell number.
#[derive(Clone, Debug)]
pub struct CellRanking {
    slots: [CellSlot; CELL_COUNT],
}

impl Default for CellRanking {
    fn default() -> Self {
        Self::new()
    }
}

impl CellRanking {
    pub fn new() -> Self {
        let mut slots = [CellSlot {
            cell: 0,
            priority: 0,
            removed: false,
        }; CELL_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            let cell = i + 1;
            slot.cell = cell;
            slot.priority = cell_priority(cell);
        }
        Self { slots }
    }

    /// Idempotent; out-of-range cells are ignored.
    pub fn remove(&mut self, cell: usize) {
        if let Some(slot) = self.slots.get_mut(cell.wrapping_sub(1)) {
            slot.removed = true;
        }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.slots
            .get(cell.wrapping_sub(1))
            .is_some_and(|slot| !slot.removed)
    }

    pub fn pop_best(&mut self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.removed {
                continue;
            }
            match best {
                Some(b) if self.slots[b].priority >= slot.priority => {}
                _ => best = Some(i),
            }
        }

        let index = best?;
        self.slots[index].removed = true;
        Some(self.slots[index].cell)
    }
}
