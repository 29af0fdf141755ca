//! Staff-line removal.
//!
//! Two strategies are provided:
//! - [`erase_along_paths`] walks every stable path and clears the vertical
//!   ink run under it when the run is no thicker than the estimated staff
//!   line (times a tolerance). Thicker runs are symbols crossing the line and
//!   are kept.
//! - [`erase_by_line_map`] clears each coarse line band column by column
//!   wherever the rows just above and below the band are paper.
//!
//! Both are idempotent: erased samples are background, so a second pass finds
//! nothing left to clear.
use crate::image::{BinaryImage, Sample};
use crate::staff::StaffLineMap;
use crate::trace::StablePathSet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EraseStrategy {
    #[default]
    StablePaths,
    LineMap,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraseStats {
    pub erased_pixels: usize,
    pub erased_runs: usize,
    pub preserved_runs: usize,
}

/// Clear the ink run straddling each path wherever it looks like bare staff
/// line, i.e. `run <= thickness * tolerance`.
pub fn erase_along_paths(
    image: &mut BinaryImage,
    paths: &StablePathSet,
    thickness: usize,
    tolerance: f32,
) -> EraseStats {
    let max_run = thickness as f32 * tolerance;
    let mut stats = EraseStats::default();
    for path in paths {
        for (x, y) in path.columns() {
            if x >= image.w || y >= image.h || !image.is_foreground(x, y) {
                continue;
            }
            let (top, bottom) = vertical_run(image, x, y);
            let run = bottom - top + 1;
            if run as f32 <= max_run {
                for yy in top..=bottom {
                    image.set(x, yy, Sample::Background);
                }
                stats.erased_pixels += run;
                stats.erased_runs += 1;
            } else {
                stats.preserved_runs += 1;
            }
        }
    }
    stats
}

/// Clear every coarse line band in the columns where it is isolated.
///
/// The band is widened by one row on each side (clamped to the image); a
/// column is cleared only when both widened edge rows are background.
pub fn erase_by_line_map(image: &mut BinaryImage, map: &StaffLineMap) -> EraseStats {
    let mut stats = EraseStats::default();
    for (first, last) in map.bands() {
        let top = first.saturating_sub(1);
        let bottom = (last + 1).min(image.h - 1);
        for x in 0..image.w {
            if image.is_foreground(x, top) || image.is_foreground(x, bottom) {
                stats.preserved_runs += 1;
                continue;
            }
            let mut cleared = 0;
            for y in top..=bottom {
                if image.is_foreground(x, y) {
                    image.set(x, y, Sample::Background);
                    cleared += 1;
                }
            }
            if cleared > 0 {
                stats.erased_pixels += cleared;
                stats.erased_runs += 1;
            }
        }
    }
    stats
}

/// Inclusive extent of the foreground run in column `x` containing row `y`.
fn vertical_run(image: &BinaryImage, x: usize, y: usize) -> (usize, usize) {
    let mut top = y;
    while top > 0 && image.is_foreground(x, top - 1) {
        top -= 1;
    }
    let mut bottom = y;
    while bottom + 1 < image.h && image.is_foreground(x, bottom + 1) {
        bottom += 1;
    }
    (top, bottom)
}
