//! Compact one-line change summaries
//!
//! Aligns two strings character by character and renders the changed runs
//! as `-removed+added`, bounded to a maximum length. Used as the per-node
//! label in the graph, where there is room for roughly one word of context.

use crate::artifacts::diff::myers::{Edit, MyersDiff};

/// Default label budget for graph rows.
pub const DEFAULT_MAX_LEN: usize = 15;

/// A maximal run of the alignment: either an unchanged stretch, or a
/// change carrying the removed and/or inserted text at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Run {
    Equal(String),
    Change { minus: String, plus: String },
}

/// Summarize the difference between two strings in at most `max_len`
/// characters. Unchanged leading text is dropped, control characters are
/// escaped, and an overlong summary is truncated with a `...` marker.
pub fn one_line_summary(before: &str, after: &str, max_len: usize) -> String {
    let mut out = String::new();

    for (i, run) in group_runs(before, after).into_iter().enumerate() {
        match run {
            // an unchanged prefix carries no information
            Run::Equal(_) if i == 0 => continue,
            Run::Equal(text) => out.push_str(&escape(&text)),
            Run::Change { minus, plus } => {
                if !minus.is_empty() {
                    out.push('-');
                    out.push_str(&escape(&minus));
                }
                if !plus.is_empty() {
                    out.push('+');
                    out.push_str(&escape(&plus));
                }
            }
        }
    }

    if out.chars().count() > max_len {
        let kept: String = out.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        out
    }
}

/// Group the character alignment into maximal equal/change runs. Adjacent
/// deletions and insertions collapse into one change, so a replacement
/// renders as a single `-old+new` pair.
fn group_runs(before: &str, after: &str) -> Vec<Run> {
    let a: Vec<char> = before.chars().collect();
    let b: Vec<char> = after.chars().collect();

    let mut runs: Vec<Run> = Vec::new();
    for edit in MyersDiff::new(&a, &b).edit_script() {
        match edit {
            Edit::Equal(c) => match runs.last_mut() {
                Some(Run::Equal(text)) => text.push(c),
                _ => runs.push(Run::Equal(c.to_string())),
            },
            Edit::Delete(c) => match runs.last_mut() {
                Some(Run::Change { minus, .. }) => minus.push(c),
                _ => runs.push(Run::Change {
                    minus: c.to_string(),
                    plus: String::new(),
                }),
            },
            Edit::Insert(c) => match runs.last_mut() {
                Some(Run::Change { plus, .. }) => plus.push(c),
                _ => runs.push(Run::Change {
                    minus: String::new(),
                    plus: c.to_string(),
                }),
            },
        }
    }

    runs
}

fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
