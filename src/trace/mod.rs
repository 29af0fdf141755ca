//! Staff-line tracing with bidirectionally stable shortest paths.
//!
//! - `workspace` – per-trace [`CostGrid`] scratch buffer.
//! - `path` – the bounded-slope dynamic-programming trace.
//! - `stable` – forward/backward agreement and per-line grouping.

pub mod options;
pub mod path;
pub mod stable;
pub mod workspace;

pub use options::TraceOptions;
pub use path::{shortest_path, Path, TraceDirection};
pub use stable::{StablePathSet, StablePathTracer, TraceStats};
pub use workspace::CostGrid;
