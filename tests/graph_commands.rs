mod common;

use assert_fs::TempDir;
use common::{BRANCHED_HISTORY, LINEAR_HISTORY, history_dir, rundo_command, write_history};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn graph_renders_a_linear_history_newest_first(history_dir: TempDir) {
    let history = write_history(&history_dir, LINEAR_HISTORY);

    rundo_command(&history, &["graph"])
        .assert()
        .success()
        .stdout(predicate::eq(
            " o  [2]   Original -wo+ther-ld+e\n \
             @  [1]   Original   +\\nworld\n \
             o  [0]   Original     +hello\n",
        ));
}

#[rstest]
fn graph_marks_the_current_state_with_an_at_sign(history_dir: TempDir) {
    let history = write_history(&history_dir, LINEAR_HISTORY);

    // the curhead marker sits on state 2, so state 1 is current
    rundo_command(&history, &["graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" @  [1]"))
        .stdout(predicate::str::contains(" o  [2]"));
}

#[rstest]
fn graph_draws_branch_edges(history_dir: TempDir) {
    let history = write_history(&history_dir, BRANCHED_HISTORY);

    rundo_command(&history, &["graph"])
        .assert()
        .success()
        .stdout(predicate::eq(
            " @  [3]   Original       -b+d\n \
             | o  [2]   Original       -b+c\n \
             |/\n \
             o  [1]   Original       +\\nb\n \
             o  [0]   Original         +a\n",
        ));
}

#[rstest]
fn verbose_graphs_connect_nodes_with_bars(history_dir: TempDir) {
    let history = write_history(&history_dir, LINEAR_HISTORY);

    rundo_command(&history, &["graph", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::eq(
            " o  [2]   Original -wo+ther-ld+e\n \
             |\n \
             @  [1]   Original   +\\nworld\n \
             |\n \
             o  [0]   Original     +hello\n",
        ));
}

#[rstest]
fn graph_fails_cleanly_on_a_missing_document(history_dir: TempDir) {
    let missing = history_dir.path().join("absent.json");

    rundo_command(&missing, &["graph"]).assert().failure();
}
