//! Differential comparison driver.
//!
//! Collects one trace per implementation over the shared input script and
//! world grid, compares them pairwise, and reports a single PASS/FAIL
//! status. Exit codes: 2 for configuration problems caught before any
//! trace runs, 1 for runtime failures or comparison mismatches, 0 when
//! every pair agrees.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use sd_compare::compare::{CompareConfig, compare_traces};
use sd_compare::record::Trace;
use sd_compare::report::PairReport;
use sd_trace::{ProcessTraceSource, ReplayTraceSource, TraceSource};

/// Compare native, reference, and optionally web-compiled simulation
/// traces over one scripted run.
#[derive(Parser, Debug)]
#[command(name = "slamdiff")]
#[command(version, about = "Differential trace comparison for SLAM simulator ports", long_about = None)]
struct Args {
    /// Path to the compiled native trace executable
    #[arg(long = "native-exe")]
    native_exe: PathBuf,

    /// Root of the reference implementation checkout; validated when
    /// given (the in-process reference needs no assets from it)
    #[arg(long = "reference-root")]
    reference_root: Option<PathBuf>,

    /// Input script: one control token per line
    #[arg(long = "inputs")]
    inputs: PathBuf,

    /// Shared world-grid file used by every implementation
    #[arg(long = "world-grid")]
    world_grid: PathBuf,

    /// Absolute per-axis tolerance for pose comparison
    #[arg(long = "pose-tol", default_value_t = 1e-6)]
    pose_tol: f64,

    /// Max allowed per-frame absolute difference in changed-pixel count
    #[arg(long = "max-changed-diff", default_value_t = 40)]
    max_changed_diff: u64,

    /// Fail on any frame hash mismatch (off by default: the hash is a
    /// soft signal, the changed-pixel delta is the gate)
    #[arg(long = "strict-hash")]
    strict_hash: bool,

    /// Optional web-compiled trace script run under the companion runtime
    #[arg(long = "web-trace-js")]
    web_trace_js: Option<PathBuf>,

    /// Runtime hosting the web-compiled trace script
    #[arg(long = "web-runtime", default_value = "node")]
    web_runtime: String,
}

const MAX_PRINTED_FAILURES: usize = 80;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(message) = check_configuration(&args) {
        eprintln!("error: {message}");
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

/// Eager path validation: nothing is allowed to run with a broken setup.
fn check_configuration(args: &Args) -> Result<(), String> {
    if !args.native_exe.exists() {
        return Err(format!(
            "native trace executable not found: {}",
            args.native_exe.display()
        ));
    }
    if let Some(root) = &args.reference_root {
        if !root.exists() {
            return Err(format!("reference root not found: {}", root.display()));
        }
    }
    if !args.inputs.exists() {
        return Err(format!("input script not found: {}", args.inputs.display()));
    }
    if !args.world_grid.exists() {
        return Err(format!("world grid not found: {}", args.world_grid.display()));
    }
    if let Some(js) = &args.web_trace_js {
        if !js.exists() {
            return Err(format!("web trace script not found: {}", js.display()));
        }
    }
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let config = CompareConfig {
        pose_tolerance: args.pose_tol,
        max_changed_diff: args.max_changed_diff,
        strict_hash: args.strict_hash,
    };

    // traces are collected to completion one at a time, reference first
    let reference = ReplayTraceSource::new()
        .collect(&args.inputs, &args.world_grid)
        .context("reference replay failed")?;
    let native = ProcessTraceSource::native(&args.native_exe)
        .collect(&args.inputs, &args.world_grid)
        .context("native trace failed")?;

    let mut failures = Vec::new();
    report_pair("native-vs-reference", &native, &reference, &config, &mut failures);

    if let Some(js) = &args.web_trace_js {
        let web = ProcessTraceSource::scripted(&args.web_runtime, js)
            .collect(&args.inputs, &args.world_grid)
            .context("web trace failed")?;
        report_pair("web-vs-reference", &web, &reference, &config, &mut failures);
        report_pair("web-vs-native", &web, &native, &config, &mut failures);
    }

    if failures.is_empty() {
        println!("status=PASS");
        return Ok(true);
    }

    println!("status=FAIL");
    for line in failures.iter().take(MAX_PRINTED_FAILURES) {
        println!("{line}");
    }
    if failures.len() > MAX_PRINTED_FAILURES {
        println!("... and {} more mismatches", failures.len() - MAX_PRINTED_FAILURES);
    }
    Ok(false)
}

/// Compare one pair, print its summary, and append its labeled failures.
fn report_pair(
    label: &str,
    left: &Trace,
    right: &Trace,
    config: &CompareConfig,
    failures: &mut Vec<String>,
) {
    let verdict = compare_traces(left, right, config);
    let report = PairReport::new(label, left, right, verdict);
    report.print_summary(config);
    failures.extend(report.labeled_failures());
}
