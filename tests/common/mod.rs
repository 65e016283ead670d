#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

/// Linear history 0 -> 1 -> 2 with the curhead marker on state 2, so the
/// current state is 1. No timestamps, which keeps every label and header
/// deterministic.
pub const LINEAR_HISTORY: &str = r#"{
    "document": "notes.txt",
    "seq_last": 2,
    "seq_cur": 2,
    "entries": [
        {"seq": 1, "time": false},
        {"seq": 2, "time": false, "curhead": true}
    ],
    "snapshots": {
        "0": ["hello"],
        "1": ["hello", "world"],
        "2": ["hello", "there"]
    }
}"#;

/// Branched history: state 1 has the children 3 (main line, current) and
/// 2 (an abandoned branch).
pub const BRANCHED_HISTORY: &str = r#"{
    "document": "notes.txt",
    "seq_last": 3,
    "seq_cur": 3,
    "entries": [
        {"seq": 1, "time": false},
        {"seq": 3, "time": false, "alt": [{"seq": 2, "time": false}]}
    ],
    "snapshots": {
        "0": ["a"],
        "1": ["a", "b"],
        "2": ["a", "c"],
        "3": ["a", "d"]
    }
}"#;

#[fixture]
pub fn history_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

pub fn write_history(dir: &TempDir, raw: &str) -> std::path::PathBuf {
    let file = dir.child("history.json");
    file.write_str(raw)
        .expect("failed to write history document");
    file.path().to_path_buf()
}

pub fn rundo_command(history: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("rundo").expect("rundo binary should build");
    cmd.arg("--file").arg(history).args(args);
    cmd
}
