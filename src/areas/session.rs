use crate::areas::document::DocumentSource;
use crate::artifacts::age::age;
use crate::artifacts::diff::compact::{DEFAULT_MAX_LEN, one_line_summary};
use crate::artifacts::diff::unified::unified_diff;
use crate::artifacts::history::{Node, NodeSet, ROOT_ID};
use anyhow::Context;
use chrono::{Local, TimeZone, Utc};
use regex::Regex;
use std::cell::{RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

/// Which flavour of diff a cache entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    /// Full unified diff between a state and its predecessor.
    Unified,
    /// One-line summary used as a node label.
    Compact,
    /// Unified diff of the *current* state against a selected one.
    ChangePreview,
}

/// Cache validity marker. All caches are scoped to one token value and
/// dropped together the moment it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DocumentToken {
    identity: String,
    seq_last: u64,
}

/// One visualization session over a tracked document.
///
/// Owns the output writer and every cache: the flattened node set, the
/// diff cache, and the per-state snapshot cache. The caches live exactly
/// as long as the document keeps its `(identity, seq_last)` pair; a change
/// invalidates all of them atomically, never piecemeal, so diffs computed
/// against stale snapshots can never mix with fresh ones.
pub struct Session<D: DocumentSource> {
    document: D,
    writer: RefCell<Box<dyn std::io::Write>>,
    token: Option<DocumentToken>,
    nodes: Option<NodeSet>,
    diffs: HashMap<(u64, u64, DiffKind), Rc<Vec<String>>>,
    snapshots: HashMap<u64, Rc<Vec<String>>>,
}

impl<D: DocumentSource> Session<D> {
    pub fn new(document: D, writer: Box<dyn std::io::Write>) -> Self {
        Session {
            document,
            writer: RefCell::new(writer),
            token: None,
            nodes: None,
            diffs: HashMap::new(),
            snapshots: HashMap::new(),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// The flattened node set, rebuilt only when the document token moved.
    pub fn node_set(&mut self) -> anyhow::Result<&NodeSet> {
        self.revalidate();
        if self.nodes.is_none() {
            let set = NodeSet::build(self.document.entries())?;
            self.nodes = Some(set);
        }
        match &self.nodes {
            Some(set) => Ok(set),
            None => unreachable!("node set was just built"),
        }
    }

    /// Sequence number of the current state.
    pub fn current(&mut self) -> anyhow::Result<u64> {
        let host_current = self.document.seq_cur();
        Ok(self.node_set()?.current(host_current))
    }

    /// The full ASCII graph with one label per node, newest first.
    pub fn render_graph(&mut self, verbose: bool) -> anyhow::Result<String> {
        use crate::artifacts::graph::layout::ColumnTracker;
        use crate::artifacts::graph::render::{RenderState, render_node};

        let current = self.current()?;
        let order: Vec<Node> = self
            .node_set()?
            .descending()
            .into_iter()
            .cloned()
            .collect();
        let now = Utc::now().timestamp();

        let mut tracker = ColumnTracker::new();
        let mut state = RenderState::new();
        let mut rows = Vec::new();

        for node in &order {
            let age_label = match node.time() {
                Some(ts) => age(ts, now),
                None => "Original".to_string(),
            };
            let summary = self.node_summary(node)?;
            let glyph = if node.n() == current {
                '@'
            } else if node.saved() {
                'w'
            } else {
                'o'
            };
            let label = format!("[{}] {:>10} {:>10}", node.n(), age_label, summary);

            let parents: Vec<u64> = node.parent().into_iter().collect();
            let coldata = tracker.advance(node.n(), &parents)?;
            render_node(&mut rows, &mut state, glyph, &[label], &coldata, verbose);
        }

        let block = rows.join("\n");
        Ok(block
            .trim_end()
            .lines()
            .map(|line| format!(" {line}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Diff between two states: the full unified diff, or the one-line
    /// summary wrapped in a single-element vector. `before` is ignored for
    /// the root state, which diffs against the empty document.
    pub fn diff_for(
        &mut self,
        before: u64,
        after: u64,
        unified: bool,
    ) -> anyhow::Result<Rc<Vec<String>>> {
        self.revalidate();

        let kind = if unified {
            DiffKind::Unified
        } else {
            DiffKind::Compact
        };
        let (bn, an) = if after == ROOT_ID {
            (ROOT_ID, ROOT_ID)
        } else {
            (before, after)
        };
        if let Some(cached) = self.diffs.get(&(bn, an, kind)) {
            return Ok(Rc::clone(cached));
        }

        let (before_lines, after_lines, before_label, after_label, before_time, after_time) =
            if after == ROOT_ID {
                self.node_set()?.node(after)?;
                (
                    Rc::new(Vec::new()),
                    self.snapshot_lines(ROOT_ID)?,
                    "n/a".to_string(),
                    "Original".to_string(),
                    String::new(),
                    String::new(),
                )
            } else if before == ROOT_ID {
                let after_ts = self.node_set()?.node(after)?.time();
                (
                    self.snapshot_lines(ROOT_ID)?,
                    self.snapshot_lines(after)?,
                    "Original".to_string(),
                    after.to_string(),
                    String::new(),
                    format_time(after_ts),
                )
            } else {
                let (before_ts, after_ts) = {
                    let set = self.node_set()?;
                    (set.node(before)?.time(), set.node(after)?.time())
                };
                (
                    self.snapshot_lines(before)?,
                    self.snapshot_lines(after)?,
                    before.to_string(),
                    after.to_string(),
                    format_time(before_ts),
                    format_time(after_ts),
                )
            };

        let lines = if unified {
            unified_diff(
                &before_lines,
                &after_lines,
                &before_label,
                &after_label,
                &before_time,
                &after_time,
            )
        } else {
            vec![one_line_summary(
                &before_lines.join("\n"),
                &after_lines.join("\n"),
                DEFAULT_MAX_LEN,
            )]
        };

        let lines = Rc::new(lines);
        self.diffs.insert((bn, an, kind), Rc::clone(&lines));
        Ok(lines)
    }

    /// Unified diff of the current state against `target`, with both
    /// endpoints fully labelled. Backs the "what would change if I
    /// reverted here" preview.
    pub fn change_preview(&mut self, target: u64) -> anyhow::Result<Rc<Vec<String>>> {
        self.revalidate();
        let current = self.current()?;

        if let Some(cached) = self.diffs.get(&(current, target, DiffKind::ChangePreview)) {
            return Ok(Rc::clone(cached));
        }

        let (before_ts, after_ts) = {
            let set = self.node_set()?;
            (set.node(current)?.time(), set.node(target)?.time())
        };
        let before_lines = self.snapshot_lines(current)?;
        let after_lines = self.snapshot_lines(target)?;

        let lines = Rc::new(unified_diff(
            &before_lines,
            &after_lines,
            &state_label(current),
            &state_label(target),
            &format_time(before_ts),
            &format_time(after_ts),
        ));
        self.diffs
            .insert((current, target, DiffKind::ChangePreview), Rc::clone(&lines));
        Ok(lines)
    }

    /// The chain of states a playback from the current state to `target`
    /// steps through, both inclusive.
    pub fn play_path(&mut self, target: u64) -> anyhow::Result<Vec<u64>> {
        let current = self.current()?;
        self.node_set()?.path_between(current, target)
    }

    /// First state near `from` whose change introduced or removed a line
    /// matching `pattern`. Scans older states by default, newer ones when
    /// `newer` is set.
    pub fn search(
        &mut self,
        pattern: &str,
        from: u64,
        newer: bool,
    ) -> anyhow::Result<Option<u64>> {
        let re = Regex::new(pattern).context("invalid search pattern")?;

        let candidates: Vec<u64> = {
            let mut ids: Vec<u64> = self.node_set()?.nodes().iter().map(Node::n).collect();
            ids.sort_unstable();
            if newer {
                ids.into_iter().filter(|&n| n > from).collect()
            } else {
                ids.into_iter().filter(|&n| n < from).rev().collect()
            }
        };

        for id in candidates {
            let parent = self.node_set()?.node(id)?.parent().unwrap_or(ROOT_ID);
            let diff = self.diff_for(parent, id, true)?;
            // the two header lines carry labels and timestamps, not content
            let hit = diff
                .iter()
                .skip(2)
                .any(|line| line.starts_with(['-', '+']) && re.is_match(line));
            if hit {
                return Ok(Some(id));
            }
        }

        Ok(None)
    }

    /// One-line summary of the change a node introduced over its parent.
    fn node_summary(&mut self, node: &Node) -> anyhow::Result<String> {
        let parent = node.parent().unwrap_or(ROOT_ID);
        let lines = self.diff_for(parent, node.n(), false)?;
        Ok(lines.first().cloned().unwrap_or_default())
    }

    /// Snapshot of one state, materialized through the document at most
    /// once per token.
    fn snapshot_lines(&mut self, n: u64) -> anyhow::Result<Rc<Vec<String>>> {
        if let Some(lines) = self.snapshots.get(&n) {
            return Ok(Rc::clone(lines));
        }
        let lines = Rc::new(self.document.snapshot(n)?);
        self.snapshots.insert(n, Rc::clone(&lines));
        Ok(lines)
    }

    /// Drop every cache at once when the document identity or its latest
    /// revision moved. Checked once at the top of each request.
    fn revalidate(&mut self) {
        let token = DocumentToken {
            identity: self.document.identity().to_string(),
            seq_last: self.document.seq_last(),
        };
        if self.token.as_ref() != Some(&token) {
            self.nodes = None;
            self.diffs.clear();
            self.snapshots.clear();
            self.token = Some(token);
        }
    }
}

fn state_label(n: u64) -> String {
    if n == ROOT_ID {
        "Original".to_string()
    } else {
        n.to_string()
    }
}

fn format_time(ts: Option<i64>) -> String {
    ts.and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map(|dt| dt.format("%Y-%m-%d %I:%M:%S %p").to_string())
        .unwrap_or_default()
}
