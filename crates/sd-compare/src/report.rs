//! Pairwise reports: one-line summaries and labeled failures.

use crate::compare::{CompareConfig, ComparisonVerdict};
use crate::record::FrameRecord;

/// Summary of one pairwise comparison, tagged with a label such as
/// `native-vs-reference`.
#[derive(Debug, Clone)]
pub struct PairReport {
    pub label: String,
    pub frames: usize,
    pub left_first_hash: String,
    pub left_last_hash: String,
    pub right_first_hash: String,
    pub right_last_hash: String,
    pub verdict: ComparisonVerdict,
}

impl PairReport {
    pub fn new(
        label: &str,
        left: &[FrameRecord],
        right: &[FrameRecord],
        verdict: ComparisonVerdict,
    ) -> Self {
        let (left_first_hash, left_last_hash) = edge_hashes(left);
        let (right_first_hash, right_last_hash) = edge_hashes(right);
        Self {
            label: label.to_string(),
            frames: left.len(),
            left_first_hash,
            left_last_hash,
            right_first_hash,
            right_last_hash,
            verdict,
        }
    }

    /// Print the `[label] key=value` summary lines to stdout.
    pub fn print_summary(&self, config: &CompareConfig) {
        println!("[{}] frames={}", self.label, self.frames);
        println!(
            "[{}] left_first_hash={} left_last_hash={} right_first_hash={} right_last_hash={}",
            self.label,
            self.left_first_hash,
            self.left_last_hash,
            self.right_first_hash,
            self.right_last_hash
        );
        println!(
            "[{}] hash_mismatch_frames={}/{} strict_hash={}",
            self.label, self.verdict.hash_mismatch_count, self.frames, config.strict_hash
        );
        println!(
            "[{}] changed_diff_max={} changed_diff_mean={:.3} allowed_max={}",
            self.label,
            self.verdict.changed_diff_max,
            self.verdict.changed_diff_mean,
            config.max_changed_diff
        );
    }

    /// The verdict's failures, each prefixed with the pair label.
    pub fn labeled_failures(&self) -> Vec<String> {
        self.verdict
            .failures
            .iter()
            .map(|failure| format!("[{}] {failure}", self.label))
            .collect()
    }
}

fn edge_hashes(trace: &[FrameRecord]) -> (String, String) {
    let first = trace.first().map_or_else(|| "-".to_string(), |r| r.hash.clone());
    let last = trace.last().map_or_else(|| "-".to_string(), |r| r.hash.clone());
    (first, last)
}
