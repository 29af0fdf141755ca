//! Detector pipeline driving staff analysis end-to-end.
//!
//! The [`StaffDetector`] exposes a simple API: feed a binarized image and get
//! the staff metrics, the coarse line map and the stable path set, with
//! detailed diagnostics. [`StaffDetector::remove_staff_lines`] additionally
//! erases the traced lines in place.
//!
//! Typical usage:
//! ```no_run
//! use staff_detector::{BinaryImage, StaffDetector, StaffParams};
//!
//! # fn example(mut image: BinaryImage) {
//! let detector = StaffDetector::new(StaffParams::default());
//! let removal = detector.remove_staff_lines(&mut image);
//! println!(
//!     "staffs={} erased={}",
//!     removal.report.metrics.staff_count,
//!     removal.outcome.is_erased()
//! );
//! # }
//! ```
use super::params::StaffParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    EraseOutcome, InputDescriptor, LocatorStage, PipelineTrace, RemovalReport, StaffReport,
    TimingBreakdown, TraceStage,
};
use crate::erase::{erase_along_paths, erase_by_line_map, EraseStrategy};
use crate::histogram::ProjectionHistogram;
use crate::image::BinaryImage;
use crate::staff::{estimate_metrics, locate_staff_lines};
use crate::trace::StablePathTracer;
use crate::types::LowConfidence;
use log::{debug, warn};
use std::time::Instant;

pub struct StaffDetector {
    params: StaffParams,
    tracer: StablePathTracer,
}

impl StaffDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: StaffParams) -> Self {
        let tracer = StablePathTracer::new(params.trace.clone());
        Self { params, tracer }
    }

    pub fn params(&self) -> &StaffParams {
        &self.params
    }

    /// Locate, measure and trace the staff lines of `image`.
    pub fn process(&self, image: &BinaryImage) -> StaffReport {
        debug!("StaffDetector::process start w={} h={}", image.w, image.h);
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let locate_start = Instant::now();
        let hist = timings.measure("histogram", || ProjectionHistogram::from_image(image));
        let line_map = timings.measure("locate", || {
            locate_staff_lines(
                &hist,
                image.w,
                self.params.locator.slice_start,
                self.params.locator.slice_end,
            )
        });
        let metrics = timings.measure("metrics", || estimate_metrics(&line_map));
        let locator = LocatorStage {
            elapsed_ms: elapsed_ms(locate_start),
            histogram_peak: hist.max(),
            mapped_rows: line_map.len(),
            bands: line_map.bands().len(),
        };
        debug!(
            "StaffDetector::process metrics thickness={} spacing={} lines={} staffs={}",
            metrics.line_thickness, metrics.line_spacing, metrics.total_lines, metrics.staff_count
        );

        let trace_start = Instant::now();
        let (paths, stats) = self.tracer.trace(image);
        let trace_ms = elapsed_ms(trace_start);
        timings.push("trace", trace_ms);

        let mut findings = Vec::new();
        if metrics.total_lines < 2 {
            findings.push(LowConfidence::TooFewLines {
                found: metrics.total_lines,
            });
        }
        let required = self.params.erase.min_stable_paths;
        if paths.len() < required {
            findings.push(LowConfidence::TooFewStablePaths {
                found: paths.len(),
                required,
            });
        }
        if metrics.total_lines != paths.len() {
            findings.push(LowConfidence::LineCountMismatch {
                coarse: metrics.total_lines,
                stable: paths.len(),
            });
        }
        for finding in &findings {
            warn!("StaffDetector::process low confidence: {finding}");
        }

        timings.total_ms = elapsed_ms(total_start);
        StaffReport {
            metrics,
            line_map,
            paths,
            findings,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: image.w,
                    height: image.h,
                    foreground_pixels: hist.counts().iter().sum(),
                },
                timings,
                locator,
                tracer: TraceStage {
                    elapsed_ms: trace_ms,
                    stats,
                },
            },
        }
    }

    /// Erase staff lines described by `report` from `image`, using the
    /// configured strategy. Weak evidence refuses the erasure and leaves the
    /// image untouched.
    pub fn erase(&self, image: &mut BinaryImage, report: &StaffReport) -> EraseOutcome {
        let params = &self.params.erase;
        let strategy = params.strategy;
        let refusal = match strategy {
            EraseStrategy::StablePaths if report.paths.len() < params.min_stable_paths => {
                Some(LowConfidence::TooFewStablePaths {
                    found: report.paths.len(),
                    required: params.min_stable_paths,
                })
            }
            EraseStrategy::StablePaths if report.metrics.line_thickness == 0 => {
                Some(LowConfidence::MissingThickness)
            }
            EraseStrategy::LineMap if report.metrics.total_lines < 2 => {
                Some(LowConfidence::TooFewLines {
                    found: report.metrics.total_lines,
                })
            }
            _ => None,
        };
        if let Some(reason) = refusal {
            warn!("StaffDetector::erase refused: {reason}");
            return EraseOutcome::Refused { reason };
        }

        let stats = match strategy {
            EraseStrategy::StablePaths => erase_along_paths(
                image,
                &report.paths,
                report.metrics.line_thickness,
                params.thickness_tolerance,
            ),
            EraseStrategy::LineMap => erase_by_line_map(image, &report.line_map),
        };
        debug!(
            "StaffDetector::erase strategy={:?} erased_pixels={} erased_runs={} preserved_runs={}",
            strategy, stats.erased_pixels, stats.erased_runs, stats.preserved_runs
        );
        EraseOutcome::Erased { strategy, stats }
    }

    /// Run [`process`](Self::process) and then [`erase`](Self::erase) in place.
    pub fn remove_staff_lines(&self, image: &mut BinaryImage) -> RemovalReport {
        let mut report = self.process(image);
        let start = Instant::now();
        let outcome = self.erase(image, &report);
        report.trace.timings.push("erase", elapsed_ms(start));
        RemovalReport { report, outcome }
    }
}
