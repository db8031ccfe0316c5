//! Cross-implementation trace comparison for the slamdiff harness.
//!
//! Provides normalized per-frame records, lock-step comparison under
//! configurable tolerances, and pairwise reporting.

pub mod compare;
pub mod record;
pub mod report;
