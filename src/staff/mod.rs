//! Coarse staff structure: line map and the metrics derived from it.

pub mod locator;
pub mod metrics;

pub use locator::{locate_staff_lines, StaffLineMap};
pub use metrics::{estimate_metrics, StaffMetrics, LINES_PER_STAFF};
