//! Coarse staff-line localisation from the row projection histogram.
//!
//! A vertical slice of threshold positions `x ∈ [slice_start·W, slice_end·W)`
//! is swept; for each `x`, rows whose projection count reaches `x` are
//! "inside" a line and each inside→outside transition advances the line
//! slot. A row keeps the slot of the first `x` that marked it.
use crate::histogram::ProjectionHistogram;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping `row -> line slot` for rows that belong to a staff line.
///
/// Slots increase monotonically down the page; slot `5k` is the first line
/// of the `k`-th staff when the page holds only complete five-line staffs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StaffLineMap {
    slots: BTreeMap<usize, usize>,
}

impl StaffLineMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.slots.contains_key(&row)
    }

    pub fn slot(&self, row: usize) -> Option<usize> {
        self.slots.get(&row).copied()
    }

    /// Record `row -> slot` unless the row is already mapped.
    pub fn insert_if_absent(&mut self, row: usize, slot: usize) {
        self.slots.entry(row).or_insert(slot);
    }

    /// Mapped `(row, slot)` pairs, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots.iter().map(|(&r, &s)| (r, s))
    }

    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Contiguous runs of mapped rows as inclusive `(first, last)` pairs.
    pub fn bands(&self) -> Vec<(usize, usize)> {
        let mut bands: Vec<(usize, usize)> = Vec::new();
        for row in self.rows() {
            match bands.last_mut() {
                Some((_, last)) if *last + 1 == row => *last = row,
                _ => bands.push((row, row)),
            }
        }
        bands
    }
}

pub fn locate_staff_lines(
    hist: &ProjectionHistogram,
    width: usize,
    slice_start: f32,
    slice_end: f32,
) -> StaffLineMap {
    // a zero threshold would mark every row
    let x0 = ((slice_start * width as f32) as usize).max(1);
    let x1 = ((slice_end * width as f32) as usize).min(width);
    let mut map = StaffLineMap::new();

    for x in x0..x1 {
        let mut connected = false;
        let mut slot = 0usize;
        for (y, &count) in hist.counts().iter().enumerate() {
            if count >= x {
                map.insert_if_absent(y, slot);
                connected = true;
            } else if connected {
                slot += 1;
                connected = false;
            }
        }
    }

    debug!(
        "locate_staff_lines slice=[{}, {}) mapped_rows={} bands={}",
        x0,
        x1,
        map.len(),
        map.bands().len()
    );
    map
}
