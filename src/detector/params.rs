//! Parameter types configuring the detector stages.
//!
//! Defaults: a 45–65 % histogram slice for the coarse locator, `k = 5`
//! background weight for the tracer and a 10 % thickness tolerance for
//! removal.

use crate::erase::EraseStrategy;
use crate::trace::TraceOptions;
use serde::Deserialize;

/// Detector-wide parameters controlling the pipeline.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct StaffParams {
    pub locator: LocatorParams,
    pub trace: TraceOptions,
    pub erase: EraseParams,
}

/// Histogram slice swept by the coarse locator, as fractions of the width.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorParams {
    pub slice_start: f32,
    pub slice_end: f32,
}

impl Default for LocatorParams {
    fn default() -> Self {
        Self {
            slice_start: 0.45,
            slice_end: 0.65,
        }
    }
}

/// Staff-line removal settings.
///
/// - `strategy`: stable-path or line-map based erasure.
/// - `thickness_tolerance`: a run is erased when `run <= thickness * tolerance`.
/// - `min_stable_paths`: fewer paths than this refuse path-based erasure.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EraseParams {
    pub strategy: EraseStrategy,
    pub thickness_tolerance: f32,
    pub min_stable_paths: usize,
}

impl Default for EraseParams {
    fn default() -> Self {
        Self {
            strategy: EraseStrategy::StablePaths,
            thickness_tolerance: 1.1,
            min_stable_paths: 5,
        }
    }
}
