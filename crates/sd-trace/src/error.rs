//! Trace collection errors.

use std::process::ExitStatus;

use thiserror::Error;

use sd_core::script::ScriptError;
use sd_core::sim::WorldGridError;

/// Why a trace could not be collected.
///
/// Divergent *content* is never an error here; that belongs to the
/// comparison verdict. These abort the run and are not retried — a
/// transient retry would mask exactly the nondeterminism bugs the
/// harness exists to catch.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}\nSTDOUT:\n{stdout}\nSTDERR:\n{stderr}")]
    ExecutionFailed {
        program: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("{program} produced no frame records\nSTDOUT:\n{stdout}\nSTDERR:\n{stderr}")]
    NoFrames {
        program: String,
        stdout: String,
        stderr: String,
    },

    #[error("bad frame record line {line:?}: {source}")]
    BadRecord {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    World(#[from] WorldGridError),
}
