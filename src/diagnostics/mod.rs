//! Report data model returned by the detector.
//!
//! [`StaffReport`] bundles the staff metrics, the coarse line map and the
//! stable path set together with a [`PipelineTrace`] describing every stage
//! that ran. [`RemovalReport`] extends it with the outcome of line erasure.

pub mod pipeline;
pub mod timing;

pub use pipeline::{
    EraseOutcome, InputDescriptor, LocatorStage, PipelineTrace, RemovalReport,
    StaffReport, TraceStage,
};
pub use timing::{StageTiming, TimingBreakdown};
