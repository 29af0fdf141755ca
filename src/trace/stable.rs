//! Stable-path extraction.
//!
//! For every candidate row a forward (left→right) trace is run; its end row
//! seeds a backward (right→left) trace. A forward trace is *stable* when both
//! traces agree one column in from each end of the band and it runs over ink
//! for at least `min_ink_fraction` of its columns. Several neighbouring
//! start rows converge onto the same physical line, so consecutive stable
//! traces that stay within one row of each other are grouped and the median
//! member represents the line.
use super::options::TraceOptions;
use super::path::{shortest_path, Path};
use super::workspace::CostGrid;
use crate::image::BinaryImage;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Accepted paths, one per detected staff line, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StablePathSet {
    paths: Vec<Path>,
}

impl StablePathSet {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[Path] {
        &self.paths
    }
}

impl<'a> IntoIterator for &'a StablePathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Counters describing one tracer run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStats {
    pub band_start: usize,
    pub band_end: usize,
    pub candidate_rows: usize,
    pub forward_traces: usize,
    pub backward_traces: usize,
    pub backward_reused: usize,
    pub stable_candidates: usize,
    pub sparse_rejected: usize,
    pub accepted_paths: usize,
}

pub struct StablePathTracer {
    options: TraceOptions,
}

impl StablePathTracer {
    pub fn new(options: TraceOptions) -> Self {
        Self { options }
    }

    pub fn trace(&self, image: &BinaryImage) -> (StablePathSet, TraceStats) {
        let (x0, x1) = self.options.band(image.w);
        let (row_lo, row_hi) = self.options.candidate_rows(image.h);
        let mut stats = TraceStats {
            band_start: x0,
            band_end: x1,
            ..Default::default()
        };
        let Some((inner_left, inner_right)) = self
            .options
            .stability_columns(image.w)
            .filter(|_| row_lo < row_hi)
        else {
            debug!(
                "StablePathTracer::trace nothing to trace band=[{}, {}) rows=[{}, {})",
                x0, x1, row_lo, row_hi
            );
            return (StablePathSet::default(), stats);
        };
        let (left, right) = (x0, x1 - 1);
        let k = self.options.pixel_weight;
        let columns = x1 - x0;
        let rows: Vec<usize> = (row_lo..row_hi).collect();
        stats.candidate_rows = rows.len();

        let forward = run_traces(image, &rows, x0, columns, |grid, y| {
            shortest_path(image, grid, left, right, y, k)
        });
        stats.forward_traces = forward.len();

        let mut end_rows: Vec<usize> = forward.iter().filter_map(Path::last).collect();
        end_rows.sort_unstable();
        end_rows.dedup();
        let backward: BTreeMap<usize, Path> = end_rows
            .iter()
            .copied()
            .zip(run_traces(image, &end_rows, x0, columns, |grid, y| {
                shortest_path(image, grid, right, left, y, k)
            }))
            .collect();
        stats.backward_traces = backward.len();
        stats.backward_reused = forward.len() - backward.len();

        let mut accepted = Vec::new();
        let mut group: Vec<Path> = Vec::new();
        for fwd in forward {
            let Some(bwd) = fwd.last().and_then(|end| backward.get(&end)) else {
                continue;
            };
            let stable = fwd.y_at(inner_left) == bwd.y_at(inner_left)
                && fwd.y_at(inner_right) == bwd.y_at(inner_right);
            if !stable {
                continue;
            }
            stats.stable_candidates += 1;
            let ink = fwd
                .columns()
                .filter(|&(x, y)| image.is_foreground(x, y))
                .count();
            if (ink as f32) < self.options.min_ink_fraction * fwd.len() as f32 {
                stats.sparse_rejected += 1;
                continue;
            }
            let same_line = group
                .last()
                .is_some_and(|prev| prev.hugs(&fwd, inner_left, inner_right));
            if !same_line {
                close_group(&mut group, &mut accepted);
            }
            group.push(fwd);
        }
        close_group(&mut group, &mut accepted);
        stats.accepted_paths = accepted.len();

        debug!(
            "StablePathTracer::trace rows={} backward={} reused={} stable={} accepted={}",
            stats.candidate_rows,
            stats.backward_traces,
            stats.backward_reused,
            stats.stable_candidates,
            stats.accepted_paths
        );
        (StablePathSet { paths: accepted }, stats)
    }
}

/// Move the median member of `group` into `accepted`.
fn close_group(group: &mut Vec<Path>, accepted: &mut Vec<Path>) {
    if group.is_empty() {
        return;
    }
    let mid = (group.len() - 1) / 2;
    accepted.push(group.swap_remove(mid));
    group.clear();
}

/// Run `trace` once per start row, each worker owning its own cost grid.
fn run_traces<F>(
    image: &BinaryImage,
    rows: &[usize],
    x0: usize,
    columns: usize,
    trace: F,
) -> Vec<Path>
where
    F: Fn(&mut CostGrid, usize) -> Path + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        rows.par_iter()
            .map_init(|| CostGrid::new(x0, columns, image.h), |grid, &y| trace(grid, y))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut grid = CostGrid::new(x0, columns, image.h);
        rows.iter().map(|&y| trace(&mut grid, y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Sample;

    fn staff(w: usize, h: usize, rows: &[usize], thickness: usize) -> BinaryImage {
        let mut img = BinaryImage::blank(w, h).unwrap();
        for &r in rows {
            for y in r..r + thickness {
                for x in 0..w {
                    img.set(x, y, Sample::Foreground);
                }
            }
        }
        img
    }

    #[test]
    fn one_path_per_thin_line() {
        let img = staff(80, 100, &[30, 40, 50, 60, 70], 1);
        let tracer = StablePathTracer::new(TraceOptions::default());
        let (paths, stats) = tracer.trace(&img);
        assert_eq!(paths.len(), 5);
        for (path, row) in paths.iter().zip([30, 40, 50, 60, 70]) {
            assert_eq!(path.len(), 80);
            assert!(path.ys.iter().all(|&y| y == row));
        }
        assert_eq!(stats.accepted_paths, 5);
        assert_eq!(stats.stable_candidates, 15);
        assert!(stats.backward_reused > 0);
    }

    #[test]
    fn thick_line_is_represented_by_its_centre() {
        let img = staff(60, 60, &[20], 3);
        let (paths, _) = StablePathTracer::new(TraceOptions::default()).trace(&img);
        assert_eq!(paths.len(), 1);
        let path = &paths.as_slice()[0];
        assert!(path.ys[1..path.len() - 1].iter().all(|&y| y == 21));
    }

    #[test]
    fn blank_image_has_no_stable_paths() {
        // straight traces over paper agree both ways but carry no ink
        let img = BinaryImage::blank(50, 40).unwrap();
        let (paths, stats) = StablePathTracer::new(TraceOptions::default()).trace(&img);
        assert!(paths.is_empty());
        assert_eq!(stats.sparse_rejected, stats.stable_candidates);
        assert!(stats.sparse_rejected > 0);
    }

    #[test]
    fn narrow_band_yields_nothing() {
        let img = staff(2, 40, &[20], 1);
        let (paths, stats) = StablePathTracer::new(TraceOptions::default()).trace(&img);
        assert!(paths.is_empty());
        assert_eq!(stats.candidate_rows, 0);
    }

    #[test]
    fn margin_band_traces_inner_columns_only() {
        let img = staff(100, 60, &[30], 1);
        let opts = TraceOptions {
            band_margin: 0.25,
            ..Default::default()
        };
        let (paths, stats) = StablePathTracer::new(opts).trace(&img);
        assert_eq!((stats.band_start, stats.band_end), (25, 75));
        assert_eq!(paths.len(), 1);
        let path = &paths.as_slice()[0];
        assert_eq!(path.x_start, 25);
        assert_eq!(path.x_end(), 74);
    }
}
