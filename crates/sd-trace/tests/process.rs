//! External-process capture driven through `/bin/sh` stand-in scripts.

#![cfg(unix)]

use std::fs;
use std::path::PathBuf;

use serial_test::serial;

use sd_trace::{ProcessTraceSource, TraceError, TraceSource};

fn write_script(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sd_proc_{name}_{}.sh", std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

fn dummy_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
#[serial]
fn parses_record_lines_and_ignores_log_noise() {
    let script = write_script(
        "happy",
        r#"echo "starting trace"
echo '{"frame":0,"hash":"00000000000000aa","changed":5,"pose":[10.0,10.0,0.0]}'
echo "some intermediate log"
echo '  {"frame":1,"hash":"00000000000000bb","changed":7,"pose":[10.0,9.5,-1.5]}'
echo "done"
"#,
    );

    let source = ProcessTraceSource::scripted("sh", &script);
    let trace = source.collect(&dummy_path("inputs.txt"), &dummy_path("world.txt")).unwrap();

    assert_eq!(trace.len(), 2);
    assert_eq!(trace[0].frame, 0);
    assert_eq!(trace[0].changed, 5);
    assert_eq!(trace[1].frame, 1);
    assert_eq!(trace[1].pose, [10.0, 9.5, -1.5]);

    fs::remove_file(script).unwrap();
}

#[test]
#[serial]
fn passes_inputs_and_world_grid_flags() {
    // emits a record only when the expected flags arrive in order, so a
    // regression in argument passing surfaces as NoFrames
    let script = write_script(
        "flags",
        r#"if [ "$1" = "--inputs" ] && [ "$3" = "--world-grid" ]; then
  echo "{\"frame\":0,\"hash\":\"00000000000000aa\",\"changed\":0,\"pose\":[0.0,0.0,0.0]}"
fi
"#,
    );

    let source = ProcessTraceSource::scripted("sh", &script);
    let trace = source.collect(&dummy_path("inputs.txt"), &dummy_path("world.txt")).unwrap();
    assert_eq!(trace.len(), 1);

    fs::remove_file(script).unwrap();
}

#[test]
#[serial]
fn nonzero_exit_carries_both_streams() {
    let script = write_script(
        "failing",
        r#"echo "partial output"
echo "boom" >&2
exit 3
"#,
    );

    let source = ProcessTraceSource::scripted("sh", &script);
    let err = source.collect(&dummy_path("inputs.txt"), &dummy_path("world.txt")).unwrap_err();

    match err {
        TraceError::ExecutionFailed { stdout, stderr, .. } => {
            assert!(stdout.contains("partial output"));
            assert!(stderr.contains("boom"));
        }
        other => panic!("expected ExecutionFailed, got {other:?}"),
    }

    fs::remove_file(script).unwrap();
}

#[test]
#[serial]
fn zero_records_is_an_error() {
    let script = write_script("silent", "echo \"only logs here\"\n");

    let source = ProcessTraceSource::scripted("sh", &script);
    let err = source.collect(&dummy_path("inputs.txt"), &dummy_path("world.txt")).unwrap_err();
    assert!(matches!(err, TraceError::NoFrames { .. }));

    fs::remove_file(script).unwrap();
}

#[test]
#[serial]
fn malformed_record_line_is_an_error() {
    let script = write_script("badjson", "echo '{\"frame\": not json}'\n");

    let source = ProcessTraceSource::scripted("sh", &script);
    let err = source.collect(&dummy_path("inputs.txt"), &dummy_path("world.txt")).unwrap_err();

    match err {
        TraceError::BadRecord { line, .. } => assert!(line.starts_with('{')),
        other => panic!("expected BadRecord, got {other:?}"),
    }

    fs::remove_file(script).unwrap();
}

#[test]
#[serial]
fn missing_executable_is_a_spawn_error() {
    let source = ProcessTraceSource::native(&PathBuf::from("/nonexistent/slam-trace"));
    let err = source.collect(&dummy_path("inputs.txt"), &dummy_path("world.txt")).unwrap_err();
    assert!(matches!(err, TraceError::Spawn { .. }));
}
