#![cfg(unix)]

use chd_core::{ConversionJob, SystemProfile};
use chd_infra::{ChdmanRunner, RunError, RunObserver};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Writing a script while another test thread forks can leave the write fd
// open in the child and fail exec with ETXTBSY.
static EXEC_LOCK: Mutex<()> = Mutex::new(());

fn fake_chdman(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("chdman");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

#[derive(Default)]
struct Recorder {
    percents: Vec<f32>,
    last_tail: String,
}

impl RunObserver for Recorder {
    fn on_progress(&mut self, percent: f32) {
        self.percents.push(percent);
    }

    fn on_output(&mut self, tail: &str) {
        self.last_tail = tail.to_string();
    }
}

#[test]
fn success_passes_arguments_and_ends_at_complete() {
    let _guard = EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().expect("tempdir");
    let args_file = dir.path().join("args.txt");
    let tool = fake_chdman(
        dir.path(),
        &format!(
            "echo \"$@\" > '{}'\nprintf 'Compressing, 5'\nprintf '0.0%% complete... \\r'\nexit 0",
            args_file.display()
        ),
    );
    let input = dir.path().join("Game.iso");
    let job = ConversionJob::beside_source(&input, SystemProfile::PlayStation2).expect("job");
    let runner = ChdmanRunner::new(&tool).with_log_path(None);

    let mut rec = Recorder::default();
    let outcome = runner.run(&job, &mut rec).expect("run");

    assert!(outcome.success());
    assert!(rec.percents.contains(&50.0), "got {:?}", rec.percents);
    assert_eq!(rec.percents.last(), Some(&100.0));
    assert!(rec.last_tail.contains("50.0% complete"));

    let args = fs::read_to_string(&args_file).expect("args");
    assert_eq!(
        args.trim(),
        format!(
            "createdvd -i {} -o {}",
            input.display(),
            dir.path().join("Game.chd").display()
        )
    );
}

#[test]
fn success_without_any_percentage_still_reports_complete() {
    let _guard = EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().expect("tempdir");
    let tool = fake_chdman(dir.path(), "echo 'nothing to see'\nexit 0");
    let job = ConversionJob::beside_source(dir.path().join("a.cue"), SystemProfile::Saturn)
        .expect("job");

    let mut seen = Vec::new();
    let outcome = ChdmanRunner::new(&tool)
        .with_log_path(None)
        .run(&job, &mut |p: f32| seen.push(p))
        .expect("run");

    assert!(outcome.success());
    assert_eq!(seen, vec![100.0]);
}

#[test]
fn non_zero_exit_is_failure_without_forced_complete() {
    let _guard = EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().expect("tempdir");
    let tool = fake_chdman(dir.path(), "printf 'Compressing, 10%%'\nexit 1");
    let job = ConversionJob::beside_source(dir.path().join("a.cue"), SystemProfile::PlayStation)
        .expect("job");

    let mut rec = Recorder::default();
    let outcome = ChdmanRunner::new(&tool)
        .with_log_path(None)
        .run(&job, &mut rec)
        .expect("run");

    assert!(!outcome.success());
    assert_eq!(outcome.exit_code, Some(1));
    assert!(rec.percents.contains(&10.0));
    assert!(!rec.percents.contains(&100.0));
}

#[test]
fn stderr_is_merged_and_logged() {
    let _guard = EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("chd_output.log");
    let tool = fake_chdman(dir.path(), "printf 'Compressing, 33%%\\r' 1>&2\nexit 0");
    let job = ConversionJob::beside_source(dir.path().join("b.gdi"), SystemProfile::Dreamcast)
        .expect("job");

    let mut rec = Recorder::default();
    let outcome = ChdmanRunner::new(&tool)
        .with_log_path(Some(log_path.clone()))
        .run(&job, &mut rec)
        .expect("run");

    assert!(outcome.success());
    assert!(rec.percents.contains(&33.0));

    let log = fs::read_to_string(&log_path).expect("log");
    assert!(log.contains("createcd -i"));
    assert!(log.contains("Compressing, 33%"));
    assert!(log.contains("=== exit code 0"));
}

#[test]
fn missing_tool_is_reported_before_launch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let job = ConversionJob::beside_source(dir.path().join("a.cue"), SystemProfile::Saturn)
        .expect("job");

    let mut seen = Vec::new();
    let err = ChdmanRunner::new(dir.path().join("chdman"))
        .with_log_path(None)
        .run(&job, &mut |p: f32| seen.push(p))
        .expect_err("no tool");

    assert!(matches!(err, RunError::ToolNotFound(_)));
    assert!(seen.is_empty());
}
