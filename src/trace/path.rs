//! Bounded-slope shortest path over the implicit pixel grid.
//!
//! Nodes are `(x, y)` pixels. From `(x, y)` a trace may step to column
//! `x ± 1` at rows `y - 1`, `y` or `y + 1`; straight steps cost `1`, diagonal
//! steps `√2`, and landing on a pixel adds `k · (value + 1)`, i.e. `0` on ink
//! and `k` on paper. Column `d` steps away from the start can only be reached
//! at rows `y0 ± d`, so each sweep relaxes just that window.
use super::workspace::CostGrid;
use crate::image::BinaryImage;
use serde::Serialize;

pub const STRAIGHT_COST: f32 = 1.0;
pub const DIAGONAL_COST: f32 = 1.414_213_56;

/// One traced row per column over `[x_start, x_start + ys.len())`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub x_start: usize,
    pub ys: Vec<usize>,
}

impl Path {
    /// Row at absolute column `x`, if the path covers it.
    pub fn y_at(&self, x: usize) -> Option<usize> {
        x.checked_sub(self.x_start)
            .and_then(|i| self.ys.get(i))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// Last covered column (inclusive).
    pub fn x_end(&self) -> usize {
        self.x_start + self.ys.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<usize> {
        self.ys.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.ys.last().copied()
    }

    /// `(x, y)` pairs, left to right.
    pub fn columns(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ys
            .iter()
            .enumerate()
            .map(move |(i, &y)| (self.x_start + i, y))
    }

    /// True when both paths stay within one row of each other on every
    /// column in `[x0, x1]`.
    pub fn hugs(&self, other: &Path, x0: usize, x1: usize) -> bool {
        (x0..=x1).all(|x| match (self.y_at(x), other.y_at(x)) {
            (Some(a), Some(b)) => a.abs_diff(b) <= 1,
            _ => false,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceDirection {
    LeftToRight,
    RightToLeft,
}

impl TraceDirection {
    /// Column one step further along the trace from `x`.
    #[inline]
    fn advance(self, x: usize, d: usize) -> usize {
        match self {
            TraceDirection::LeftToRight => x + d,
            TraceDirection::RightToLeft => x - d,
        }
    }
}

/// Trace the cheapest bounded-slope path from `(from_x, y0)` to column `to_x`.
///
/// `grid` must cover every column between `from_x` and `to_x`; it is reset
/// before use. The end row is the cheapest row of the far column (smallest
/// row on ties). The path is then walked back towards `from_x`, each step
/// moving to the cell of {same row, row above, row below} with the lowest
/// accumulated cost, checked in that order.
pub fn shortest_path(
    image: &BinaryImage,
    grid: &mut CostGrid,
    from_x: usize,
    to_x: usize,
    y0: usize,
    pixel_weight: f32,
) -> Path {
    debug_assert!(grid.covers(from_x) && grid.covers(to_x));
    debug_assert!(y0 < image.h && grid.height() == image.h);

    let dir = if to_x >= from_x {
        TraceDirection::LeftToRight
    } else {
        TraceDirection::RightToLeft
    };
    let steps = from_x.abs_diff(to_x);
    let h = image.h;

    grid.reset();
    grid.set(from_x, y0, 0.0);

    for d in 1..=steps {
        let x = dir.advance(from_x, d);
        let prev = dir.advance(from_x, d - 1);
        let (lo, hi) = window(y0, d, h);
        for y in lo..=hi {
            let best = cheapest_step(grid, prev, y, h);
            grid.set(x, y, best + image.get(x, y).path_weight(pixel_weight));
        }
    }

    let (lo, hi) = window(y0, steps, h);
    let mut y = lo;
    let mut end_cost = grid.get(to_x, lo);
    for cand in lo + 1..=hi {
        let c = grid.get(to_x, cand);
        if c < end_cost {
            end_cost = c;
            y = cand;
        }
    }

    let x_start = from_x.min(to_x);
    let mut ys = vec![0usize; steps + 1];
    ys[to_x - x_start] = y;
    for d in (1..=steps).rev() {
        let prev = dir.advance(from_x, d - 1);
        y = cheapest_cell(grid, prev, y, h);
        ys[prev - x_start] = y;
    }

    Path { x_start, ys }
}

#[inline]
fn window(y0: usize, d: usize, h: usize) -> (usize, usize) {
    (y0.saturating_sub(d), (y0 + d).min(h - 1))
}

/// Relaxation: lowest cost of reaching row `y` from column `prev` by a
/// straight or diagonal step, step cost included.
#[inline]
fn cheapest_step(grid: &CostGrid, prev: usize, y: usize, h: usize) -> f32 {
    let mut best = grid.get(prev, y) + STRAIGHT_COST;
    if y > 0 {
        best = best.min(grid.get(prev, y - 1) + DIAGONAL_COST);
    }
    if y + 1 < h {
        best = best.min(grid.get(prev, y + 1) + DIAGONAL_COST);
    }
    best
}

/// Backtracking: row among `y`, `y - 1`, `y + 1` (in that order, strict `<`)
/// holding the lowest accumulated cost in column `prev`. Step costs are not
/// added here.
#[inline]
fn cheapest_cell(grid: &CostGrid, prev: usize, y: usize, h: usize) -> usize {
    let mut best_y = y;
    let mut best = grid.get(prev, y);
    if y > 0 && grid.get(prev, y - 1) < best {
        best = grid.get(prev, y - 1);
        best_y = y - 1;
    }
    if y + 1 < h && grid.get(prev, y + 1) < best {
        best_y = y + 1;
    }
    best_y
}
