use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::{tempdir, TempDir};

const PRIOQ: &str = env!("CARGO_BIN_EXE_prioq");

fn script(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn run_path(path: &Path, args: &[&str]) -> Output {
    Command::new(PRIOQ).args(args).arg(path).output().unwrap()
}

fn run_stdin(text: &str, args: &[&str]) -> Output {
    let mut child = Command::new(PRIOQ)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(text.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn text_output_from_stdin() {
    let output = run_stdin(
        "enqueue 1 Low\nenqueue 3 Medium\nenqueue 5 High\nlen\ndequeue\ndrain\ndequeue\n",
        &[],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "# length: 3\n\
         High\n\
         Medium\n\
         Low\n\
         # The queue is empty.\n\
         # enqueued: 3\n\
         # dequeued: 3\n\
         # empty: 1\n\
         # remaining: 0\n\
         # status Completed for <stdin>\n"
    );
}

#[test]
fn strict_empty_dequeue_fails_after_statistics() {
    let dir = tempdir().unwrap();
    let path = script(&dir, "s.txt", "enqueue 1 a\ndequeue\ndequeue\nlen\n");
    let output = run_path(&path, &["--strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!(
            "a\n\
             # enqueued: 1\n\
             # dequeued: 1\n\
             # empty: 1\n\
             # remaining: 0\n\
             # The queue is empty.\n\
             # status EmptyQueue for {}\n",
            path.display()
        )
    );
}

#[test]
fn silent_output_keeps_only_status() {
    let dir = tempdir().unwrap();
    let path = script(&dir, "quiet.txt", "enqueue 2 b\nenqueue 3 c\ndrain\nlen\n");
    let output = run_path(&path, &["--output", "silent"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!("# status Completed for {}\n", path.display())
    );
}

#[test]
fn input_error_stops_before_replay() {
    let output = run_stdin("enqueue 1 first\ndequeue\nenqueue x 1\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "# input error in <stdin>: line 3: invalid priority `x`\n\
         # status InputError\n"
    );
}

#[test]
fn missing_file_is_os_error() {
    let dir = tempdir().unwrap();
    let output = run_path(&dir.path().join("nope.txt"), &[]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("# failed to read "));
    assert!(text.ends_with("# status OSError\n"));
}

#[test]
fn empty_file_completes() {
    let dir = tempdir().unwrap();
    let path = script(&dir, "empty.txt", "");
    let output = run_path(&path, &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!(
            "# enqueued: 0\n\
             # dequeued: 0\n\
             # empty: 0\n\
             # remaining: 0\n\
             # status Completed for {}\n",
            path.display()
        )
    );
}

#[test]
fn scan_queue_matches_heap_queue() {
    let dir = tempdir().unwrap();
    let path = script(
        &dir,
        "ties.txt",
        "enqueue 2 First\nenqueue 2 Second\nenqueue 7 Top\n\
         dequeue\nenqueue 2 Third\ndequeue\nlen\ndrain\n",
    );
    let heap = run_path(&path, &["--queue", "heap"]);
    let scan = run_path(&path, &["--queue", "scan"]);
    assert_eq!(heap.status.code(), Some(0));
    assert_eq!(stdout(&heap), stdout(&scan));
    assert!(stdout(&heap).starts_with("Top\nFirst\n# length: 2\nSecond\nThird\n"));
}
