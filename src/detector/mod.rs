//! Staff detector orchestrating the histogram → locator → metrics chain and
//! the stable-path tracer.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`StaffDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{EraseParams, LocatorParams, StaffParams};
pub use pipeline::StaffDetector;
