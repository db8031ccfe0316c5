//! External-process trace capture.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use sd_compare::record::{FrameRecord, Trace};

use crate::{TraceError, TraceSource};

/// Runs a trace program and parses the per-frame records off its stdout.
///
/// Covers both external flavors: a natively compiled executable invoked
/// directly, and a web-compiled build hosted by a companion scripting
/// runtime. Either way the program receives
/// `--inputs <path> --world-grid <path>` and must exit 0.
#[derive(Debug, Clone)]
pub struct ProcessTraceSource {
    program: OsString,
    leading_args: Vec<OsString>,
    display: String,
}

impl ProcessTraceSource {
    /// A natively compiled trace executable.
    pub fn native(exe: &Path) -> Self {
        Self {
            program: exe.into(),
            leading_args: Vec::new(),
            display: exe.display().to_string(),
        }
    }

    /// A script hosted by a runtime, e.g. `node trace.js --inputs ...`.
    pub fn scripted(runtime: &str, script: &Path) -> Self {
        Self {
            program: runtime.into(),
            leading_args: vec![script.into()],
            display: format!("{runtime} {}", script.display()),
        }
    }
}

impl TraceSource for ProcessTraceSource {
    fn collect(&self, inputs: &Path, world_grid: &Path) -> Result<Trace, TraceError> {
        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .arg("--inputs")
            .arg(inputs)
            .arg("--world-grid")
            .arg(world_grid)
            .output()
            .map_err(|source| TraceError::Spawn { program: self.display.clone(), source })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(TraceError::ExecutionFailed {
                program: self.display.clone(),
                status: output.status,
                stdout,
                stderr,
            });
        }

        let mut frames = Vec::new();
        for raw_line in stdout.lines() {
            let line = raw_line.trim();
            // anything that is not a single-line record object is treated
            // as incidental log output
            if !line.starts_with('{') {
                continue;
            }
            let record: FrameRecord = serde_json::from_str(line)
                .map_err(|source| TraceError::BadRecord { line: line.to_string(), source })?;
            frames.push(record);
        }

        if frames.is_empty() {
            return Err(TraceError::NoFrames {
                program: self.display.clone(),
                stdout,
                stderr,
            });
        }
        Ok(frames)
    }
}
