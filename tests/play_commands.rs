mod common;

use assert_fs::TempDir;
use common::{BRANCHED_HISTORY, LINEAR_HISTORY, history_dir, rundo_command, write_history};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn play_walks_from_the_current_state_to_the_target(history_dir: TempDir) {
    let history = write_history(&history_dir, LINEAR_HISTORY);

    // state 1 is current
    rundo_command(&history, &["play", "0"])
        .assert()
        .success()
        .stdout(predicate::eq("undo to 1\nundo to 0\n"));
}

#[rstest]
fn play_walks_branch_lines_through_their_fork_point(history_dir: TempDir) {
    let history = write_history(&history_dir, BRANCHED_HISTORY);

    rundo_command(&history, &["play", "0"])
        .assert()
        .success()
        .stdout(predicate::eq("undo to 3\nundo to 1\nundo to 0\n"));
}

#[rstest]
fn play_reports_unreachable_targets_without_failing(history_dir: TempDir) {
    let history = write_history(&history_dir, BRANCHED_HISTORY);

    // 2 sits on a sibling branch of the current state 3
    rundo_command(&history, &["play", "2"])
        .assert()
        .success()
        .stdout(predicate::eq("No path to that state from here!\n"));
}

#[rstest]
fn playing_to_the_current_state_is_a_single_step(history_dir: TempDir) {
    let history = write_history(&history_dir, LINEAR_HISTORY);

    rundo_command(&history, &["play", "1"])
        .assert()
        .success()
        .stdout(predicate::eq("undo to 1\n"));
}
