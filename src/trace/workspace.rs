//! Scratch cost grid for one shortest-path trace.
//!
//! Each worker owns its own grid; [`CostGrid::reset`] is called before every
//! trace so no state leaks between candidate rows.

/// Cost of a cell no trace has reached yet.
pub const UNREACHED: f32 = f32::INFINITY;

/// Dense `columns × height` array of path costs for the traced band.
///
/// Column indices are absolute image columns in `[x0, x0 + columns)`.
pub struct CostGrid {
    x0: usize,
    columns: usize,
    height: usize,
    costs: Vec<f32>,
}

impl CostGrid {
    pub fn new(x0: usize, columns: usize, height: usize) -> Self {
        Self {
            x0,
            columns,
            height,
            costs: vec![UNREACHED; columns * height],
        }
    }

    /// Refill every cell with [`UNREACHED`].
    pub fn reset(&mut self) {
        self.costs.fill(UNREACHED);
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when absolute column `x` lies inside the grid.
    pub fn covers(&self, x: usize) -> bool {
        x >= self.x0 && x < self.x0 + self.columns
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.covers(x) && y < self.height);
        y * self.columns + (x - self.x0)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.costs[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cost: f32) {
        let i = self.idx(x, y);
        self.costs[i] = cost;
    }
}
