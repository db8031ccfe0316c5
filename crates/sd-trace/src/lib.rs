//! Trace collection for the slamdiff harness.
//!
//! Runs one implementation over a shared input script and world grid and
//! normalizes its output into per-frame records. Two flavors sit behind
//! one `TraceSource` capability: spawning an external trace executable
//! and parsing its stdout, or replaying the in-process reference
//! simulation. Callers depend on the capability, not the variant.

mod error;
mod process;
mod replay;

pub use error::TraceError;
pub use process::ProcessTraceSource;
pub use replay::ReplayTraceSource;

use std::path::Path;

use sd_compare::record::Trace;

/// A runnable implementation yielding one record per input token.
pub trait TraceSource {
    /// Collect the full trace for the given input script and world grid.
    ///
    /// Blocks until the run completes. Records come back ordered by
    /// strictly increasing frame index from 0 with no gaps; any failure
    /// to produce them aborts the comparison run.
    fn collect(&self, inputs: &Path, world_grid: &Path) -> Result<Trace, TraceError>;
}
