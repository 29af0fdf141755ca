#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Algorithm stages, usable on their own.
pub mod erase;
pub mod histogram;
pub mod staff;
pub mod trace;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{StaffDetector, StaffParams};
pub use crate::diagnostics::{EraseOutcome, PipelineTrace, RemovalReport, StaffReport};
pub use crate::error::{Result, StaffError};
pub use crate::image::{BinaryImage, Polarity, Sample};
pub use crate::staff::{StaffLineMap, StaffMetrics};
pub use crate::trace::{Path, StablePathSet};
pub use crate::types::LowConfidence;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{BinaryImage, ImageU8, Polarity, Sample};
    pub use crate::{StaffDetector, StaffParams, StaffReport};
}
