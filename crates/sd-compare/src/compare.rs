//! Lock-step trace comparison under configurable tolerances.
//!
//! Mismatches are data, not errors: every detected problem lands in the
//! verdict's failure list so a run reports all divergent frames instead of
//! stopping at the first one.

use serde::{Deserialize, Serialize};

use crate::record::FrameRecord;

/// Tolerances for one pairwise comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Per-axis absolute pose tolerance. Sup-norm: any single axis over
    /// the limit fails the frame. Theta compares without wraparound.
    pub pose_tolerance: f64,
    /// Max allowed `|left.changed - right.changed|` per frame.
    pub max_changed_diff: u64,
    /// Treat any fingerprint mismatch as a failure instead of a soft
    /// signal.
    pub strict_hash: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            pose_tolerance: 1e-6,
            max_changed_diff: 40,
            strict_hash: false,
        }
    }
}

/// Outcome of one pairwise comparison. Derived and stateless; the caller
/// decides pass/fail from `failures`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonVerdict {
    /// Human-readable descriptions of every detected mismatch, in frame
    /// order.
    pub failures: Vec<String>,
    /// Frames whose fingerprints differed, regardless of strictness.
    pub hash_mismatch_count: usize,
    /// Largest per-frame changed-pixel delta seen.
    pub changed_diff_max: u64,
    /// Mean changed-pixel delta over all compared positions.
    pub changed_diff_mean: f64,
}

impl ComparisonVerdict {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Serialize to a JSON string for machine-readable reports.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

/// Compare two traces in lock-step by position.
///
/// A length mismatch short-circuits with a single failure; an index
/// mismatch at a position skips that position's remaining checks. The
/// changed-pixel statistics aggregate over every index-matched position,
/// failure or not, and are 0 when nothing was compared.
pub fn compare_traces(
    left: &[FrameRecord],
    right: &[FrameRecord],
    config: &CompareConfig,
) -> ComparisonVerdict {
    if left.len() != right.len() {
        return ComparisonVerdict {
            failures: vec![format!(
                "frame-count mismatch: left={} right={}",
                left.len(),
                right.len()
            )],
            hash_mismatch_count: 0,
            changed_diff_max: 0,
            changed_diff_mean: 0.0,
        };
    }

    let mut failures = Vec::new();
    let mut hash_mismatch_count = 0;
    let mut changed_diff_max: u64 = 0;
    let mut changed_diff_sum: u64 = 0;
    let mut compared_positions: usize = 0;

    for (position, (l, r)) in left.iter().zip(right).enumerate() {
        if l.frame != r.frame {
            failures.push(format!(
                "frame index mismatch at position {position}: left={} right={}",
                l.frame, r.frame
            ));
            continue;
        }

        if l.hash != r.hash {
            hash_mismatch_count += 1;
            if config.strict_hash {
                failures.push(format!(
                    "frame {}: hash mismatch left={} right={}",
                    l.frame, l.hash, r.hash
                ));
            }
        }

        let changed_diff = l.changed.abs_diff(r.changed);
        changed_diff_sum += changed_diff;
        changed_diff_max = changed_diff_max.max(changed_diff);
        compared_positions += 1;
        if changed_diff > config.max_changed_diff {
            failures.push(format!(
                "frame {}: changed-pixels diff={changed_diff} exceeds max={} (left={}, right={})",
                l.frame, config.max_changed_diff, l.changed, r.changed
            ));
        }

        let dx = (l.pose[0] - r.pose[0]).abs();
        let dy = (l.pose[1] - r.pose[1]).abs();
        let dtheta = (l.pose[2] - r.pose[2]).abs();
        if dx > config.pose_tolerance || dy > config.pose_tolerance || dtheta > config.pose_tolerance
        {
            failures.push(format!(
                "frame {}: pose mismatch left={:?} right={:?} tol={}",
                l.frame, l.pose, r.pose, config.pose_tolerance
            ));
        }
    }

    let changed_diff_mean = if compared_positions == 0 {
        0.0
    } else {
        changed_diff_sum as f64 / compared_positions as f64
    };

    ComparisonVerdict {
        failures,
        hash_mismatch_count,
        changed_diff_max,
        changed_diff_mean,
    }
}
