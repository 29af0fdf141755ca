use super::locator::StaffLineMap;
use serde::Serialize;

pub const LINES_PER_STAFF: usize = 5;

/// Staff geometry estimated from the coarse line map.
///
/// All values are in pixels or counts; zero thickness/spacing means the map
/// held fewer than two lines and the estimate is not meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMetrics {
    pub line_thickness: usize,
    pub line_spacing: usize,
    pub total_lines: usize,
    pub staff_count: usize,
}

impl StaffMetrics {
    pub fn is_reliable(&self) -> bool {
        self.total_lines > 1
    }
}

/// Single top-to-bottom scan of the line map.
///
/// Spacing is the distance between the first rows of consecutive lines,
/// skipping the jump into a new staff (slots that are multiples of five).
pub fn estimate_metrics(map: &StaffLineMap) -> StaffMetrics {
    let mut last_slot: Option<usize> = None;
    let mut last_line_row = 0usize;
    let mut thickness_px = 0usize;
    let mut spacing_sum = 0usize;
    let mut total_lines = 0usize;

    for (row, slot) in map.iter() {
        thickness_px += 1;
        if last_slot != Some(slot) {
            total_lines += 1;
            if slot % LINES_PER_STAFF != 0 {
                spacing_sum += row.saturating_sub(last_line_row);
            }
            last_line_row = row;
            last_slot = Some(slot);
        }
    }

    let (line_thickness, line_spacing) = if total_lines > 1 {
        (thickness_px / total_lines, spacing_sum / (total_lines - 1))
    } else {
        (0, 0)
    };

    StaffMetrics {
        line_thickness,
        line_spacing,
        total_lines,
        staff_count: total_lines / LINES_PER_STAFF,
    }
}
