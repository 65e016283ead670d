//! Undo-history flattening and addressing
//!
//! Converts the host's nested branch description into a flat, id-addressed
//! arena of nodes. Parents are stored as ids, never references; the
//! children index is derived by grouping on parent id after the arena is
//! complete, and rebuilt wholesale whenever the arena is.

pub mod raw_entry;

use crate::error::RundoError;
use derive_new::new;
use std::collections::HashMap;

pub use raw_entry::RawEntry;

/// Sequence number of the synthetic root state (the unmodified document).
pub const ROOT_ID: u64 = 0;

/// One historical document state.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Node {
    n: u64,
    parent: Option<u64>,
    time: Option<i64>,
    curhead: bool,
    saved: bool,
}

impl Node {
    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn parent(&self) -> Option<u64> {
        self.parent
    }

    pub fn time(&self) -> Option<i64> {
        self.time
    }

    pub fn curhead(&self) -> bool {
        self.curhead
    }

    pub fn saved(&self) -> bool {
        self.saved
    }
}

/// The flattened undo tree: every state of the document, addressable by
/// sequence number. Built whole from the raw entries and never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet {
    nodes: Vec<Node>,
    by_id: HashMap<u64, usize>,
    children: HashMap<u64, Vec<u64>>,
}

impl NodeSet {
    /// Flatten the nested history description into the node arena.
    ///
    /// Main-line entries chain each to the previous entry as parent. Every
    /// `alt` list holds branches that diverged *before* the entry carrying
    /// it, so each branch's first node attaches to that entry's parent, not
    /// to the entry itself; nested `alt` lists recurse identically. The
    /// walk is an explicit stack so arbitrarily deep histories cannot blow
    /// the call stack. The synthetic root is appended last.
    pub fn build(entries: &[RawEntry]) -> anyhow::Result<Self> {
        struct Frame<'a> {
            entries: &'a [RawEntry],
            pos: usize,
            parent: u64,
        }

        let mut nodes = Vec::new();
        let mut stack = vec![Frame {
            entries,
            pos: 0,
            parent: ROOT_ID,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.get(frame.pos) else {
                stack.pop();
                continue;
            };
            frame.pos += 1;

            let branch_parent = frame.parent;
            nodes.push(Node::new(
                entry.seq,
                Some(branch_parent),
                entry.time,
                entry.curhead,
                entry.save,
            ));
            frame.parent = entry.seq;

            if !entry.alt.is_empty() {
                stack.push(Frame {
                    entries: &entry.alt,
                    pos: 0,
                    parent: branch_parent,
                });
            }
        }

        nodes.push(Node::new(ROOT_ID, None, None, false, false));

        let mut by_id = HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if by_id.insert(node.n(), idx).is_some() {
                return Err(
                    RundoError::Malformed(format!("duplicate sequence number {}", node.n()))
                        .into(),
                );
            }
        }

        let mut children: HashMap<u64, Vec<u64>> = HashMap::new();
        for node in &nodes {
            if let Some(parent) = node.parent() {
                children.entry(parent).or_default().push(node.n());
            }
        }

        Ok(NodeSet {
            nodes,
            by_id,
            children,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, n: u64) -> Option<&Node> {
        self.by_id.get(&n).map(|&idx| &self.nodes[idx])
    }

    /// Like [`get`](Self::get), but an unknown id is a [`RundoError::NotFound`].
    pub fn node(&self, n: u64) -> anyhow::Result<&Node> {
        self.get(n).ok_or_else(|| RundoError::NotFound(n).into())
    }

    pub fn children_of(&self, n: u64) -> &[u64] {
        self.children.get(&n).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes, newest first. This is the order the graph is laid out in.
    pub fn descending(&self) -> Vec<&Node> {
        let mut sorted: Vec<&Node> = self.nodes.iter().collect();
        sorted.sort_by(|a, b| b.n().cmp(&a.n()));
        sorted
    }

    /// The sequence number of the current state.
    ///
    /// A `curhead` marker sits *inside* an edit, so the current state is
    /// that node's predecessor. Without a marker the host-reported current
    /// revision stands.
    pub fn current(&self, host_current: u64) -> u64 {
        match self.nodes.iter().find(|node| node.curhead()) {
            Some(node) => node.parent().unwrap_or(ROOT_ID),
            None => host_current,
        }
    }

    /// The chain of states stepped through when moving from `from` to
    /// `to`, both inclusive. Fails with [`RundoError::NoPath`] when the two
    /// states do not sit on one parent chain; nothing is mutated either way.
    pub fn path_between(&self, from: u64, to: u64) -> anyhow::Result<Vec<u64>> {
        let origin = self.node(from)?;
        let dest = self.node(to)?;

        let forward = origin.n() < dest.n();
        let (mut cursor, target) = if forward { (dest, origin) } else { (origin, dest) };

        let mut path = Vec::new();
        while cursor.n() != target.n() {
            path.push(cursor.n());
            cursor = match cursor.parent() {
                Some(parent) if parent >= target.n() => self.node(parent)?,
                _ => return Err(RundoError::NoPath { from, to }.into()),
            };
        }
        path.push(target.n());

        if forward {
            path.reverse();
        }
        Ok(path)
    }
}
