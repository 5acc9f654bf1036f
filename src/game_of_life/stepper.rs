//! Generation stepping and the double buffer that feeds it

use super::{Grid, Rule};
use tracing::trace;

/// Compute the next generation of `source` into `dest`.
///
/// `source` is only read; every cell of `dest` is overwritten. Returns
/// `true` if any cell of `dest` differs from the same cell in `source`.
pub fn step_into(rule: Rule, source: &Grid, dest: &mut Grid) -> bool {
    if dest.size() != source.size() {
        *dest = Grid::new(source.size());
    }

    let mut changed = false;
    for (row, col) in source.positions() {
        let next = rule.next_state(source, row, col);
        changed |= next != source.get(row, col);
        *dest.cell_mut(row, col) = next;
    }

    trace!(changed, living = dest.living_count(), "stepped generation");
    changed
}

/// Compute the next generation into a freshly allocated grid
pub fn step(rule: Rule, source: &Grid) -> (Grid, bool) {
    let mut next = Grid::new(source.size());
    let changed = step_into(rule, source, &mut next);
    (next, changed)
}

/// Two grids whose current/next roles swap after every generation
#[derive(Debug, Clone)]
pub struct WorldBuffers {
    buffers: [Grid; 2],
    current: usize,
}

impl WorldBuffers {
    /// Start from a generation-0 grid; the spare buffer is sized to match
    pub fn new(initial: Grid) -> Self {
        let spare = Grid::new(initial.size());
        Self {
            buffers: [initial, spare],
            current: 0,
        }
    }

    /// The authoritative grid for the current generation
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// Step the current grid into the other buffer, then swap roles
    pub fn advance(&mut self, rule: Rule) -> bool {
        let [first, second] = &mut self.buffers;
        let (source, dest) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        let changed = step_into(rule, source, dest);
        self.current = 1 - self.current;
        changed
    }

    /// Consume the pair and keep only the current grid
    pub fn into_current(self) -> Grid {
        let [first, second] = self.buffers;
        if self.current == 0 {
            first
        } else {
            second
        }
    }
}
