//! Integration tests for the pebbled host runtime

use input_types::IterSource;
use pebbled::{read_script, HostRuntime, HostRuntimeConfig, HostRuntimeError, RenderMode};
use std::io::{self, Write};
use std::process::Command;
use tempfile::NamedTempFile;

fn script_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_scripted_blob_session() {
    let file = script_file(
        r#"
        # Store a blob, list it and read it back
        "create notes buy milk"
        Enter
        "ls"
        Enter
        "cat notes"
        Enter
    "#,
    );

    let config = HostRuntimeConfig {
        script: Some(read_script(file.path()).unwrap()),
        render: RenderMode::Final,
        ..HostRuntimeConfig::default()
    };
    let mut runtime = HostRuntime::new(config).unwrap();
    let mut out = Vec::new();
    runtime.run(&mut out).unwrap();

    let frame = String::from_utf8(out).unwrap();
    assert!(frame.contains("pebble> ls\nnotes\n"));
    assert!(frame.contains("pebble> cat notes\nbuy milk\n"));
    assert_eq!(runtime.session().lines_dispatched(), 3);

    let report = runtime.report();
    assert_eq!(report.live, 1);
    assert_eq!(report.blobs[0].size, "buy milk".len());
}

#[test]
fn test_missing_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.keys");

    let err = read_script(&missing).unwrap_err();
    assert!(matches!(err, HostRuntimeError::ScriptRead { .. }));
    assert!(err.to_string().contains("absent.keys"));
}

#[test]
fn test_explicit_input_source() {
    let events = input_types::text_events("echo from host\n").collect::<Vec<_>>();
    let config = HostRuntimeConfig {
        render: RenderMode::Never,
        ..HostRuntimeConfig::default()
    };
    let mut runtime = HostRuntime::with_input(config, Box::new(IterSource::new(events)));
    runtime.run(&mut io::sink()).unwrap();

    let screen = runtime.session().sink().render_text();
    assert!(screen.contains("pebble> echo from host\nfrom host\npebble> _"));
}

#[test]
fn test_binary_runs_script_and_dumps_store() {
    let file = script_file("\"create a hi\"\nEnter\n");

    let output = Command::new(env!("CARGO_BIN_EXE_pebbled"))
        .arg("--script")
        .arg(file.path())
        .args(["--render", "never", "--dump-store"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["live"], 1);
    assert_eq!(json["blobs"][0]["name"], "a");
}

#[test]
fn test_binary_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pebbled"))
        .args(["--render", "final"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"echo piped\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pebble> echo piped\npiped\n"));
}

#[test]
fn test_binary_rejects_bad_script() {
    let file = script_file("Escape\n");

    let output = Command::new(env!("CARGO_BIN_EXE_pebbled"))
        .arg("--script")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid key name at line 1: Escape"));
}
