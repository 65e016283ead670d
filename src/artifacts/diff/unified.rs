//! Unified-style diffs between two historical states
//!
//! Emits the two `---`/`+++` header lines with state labels and timestamps,
//! followed by the full line alignment (` ` context, `-` removed, `+`
//! added). The whole alignment is kept rather than hunk-compressed: the
//! equal and delete lines reconstruct the before state, the equal and
//! insert lines the after state.

use crate::artifacts::diff::myers::{Edit, MyersDiff};

/// Compute the unified diff between two line sequences. Pure function of
/// its inputs; labels and timestamps only show up in the headers.
pub fn unified_diff(
    before: &[String],
    after: &[String],
    before_label: &str,
    after_label: &str,
    before_time: &str,
    after_time: &str,
) -> Vec<String> {
    let mut lines = vec![
        header("---", before_label, before_time),
        header("+++", after_label, after_time),
    ];

    for edit in MyersDiff::new(before, after).edit_script() {
        lines.push(match edit {
            Edit::Equal(line) => format!(" {line}"),
            Edit::Delete(line) => format!("-{line}"),
            Edit::Insert(line) => format!("+{line}"),
        });
    }

    lines
}

fn header(marker: &str, label: &str, time: &str) -> String {
    if time.is_empty() {
        format!("{marker} {label}")
    } else {
        format!("{marker} {label}\t{time}")
    }
}
