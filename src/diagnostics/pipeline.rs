use crate::diagnostics::TimingBreakdown;
use crate::erase::{EraseStats, EraseStrategy};
use crate::staff::{StaffLineMap, StaffMetrics};
use crate::trace::{StablePathSet, TraceStats};
use crate::types::LowConfidence;
use serde::Serialize;

/// Result produced by [`StaffDetector::process`](crate::StaffDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffReport {
    pub metrics: StaffMetrics,
    pub line_map: StaffLineMap,
    pub paths: StablePathSet,
    pub findings: Vec<LowConfidence>,
    pub trace: PipelineTrace,
}

impl StaffReport {
    /// True when no low-confidence condition was raised.
    pub fn is_confident(&self) -> bool {
        self.findings.is_empty()
    }
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub locator: LocatorStage,
    pub tracer: TraceStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub foreground_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorStage {
    pub elapsed_ms: f64,
    pub histogram_peak: usize,
    pub mapped_rows: usize,
    pub bands: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStage {
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub stats: TraceStats,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EraseOutcome {
    Erased {
        strategy: EraseStrategy,
        stats: EraseStats,
    },
    Refused {
        reason: LowConfidence,
    },
}

impl EraseOutcome {
    pub fn is_erased(&self) -> bool {
        matches!(self, EraseOutcome::Erased { .. })
    }
}

/// Result of [`StaffDetector::remove_staff_lines`](crate::StaffDetector::remove_staff_lines).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalReport {
    #[serde(flatten)]
    pub report: StaffReport,
    pub outcome: EraseOutcome,
}
