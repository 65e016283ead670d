//! Column assignment for the graph
//!
//! Walks the node sequence (newest first) and decides, for every node,
//! which column its glyph lands in and which edges connect it to its
//! parents' columns. The only state is the ordered list of currently open
//! columns, kept across the whole pass.

use crate::error::RundoError;

/// Everything the renderer needs to draw one node's rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColData {
    /// Column of the node glyph.
    pub col: usize,
    /// `(col, parent_col)` connector pairs, plus the self/split markers.
    pub edges: Vec<(usize, usize)>,
    /// Open-column count before this node was processed.
    pub ncols: usize,
    /// Net open-column change caused by this node.
    pub coldiff: isize,
}

/// The ordered sequence of open columns, left to right. One tracker serves
/// exactly one layout pass.
#[derive(Debug, Default)]
pub struct ColumnTracker {
    seen: Vec<u64>,
}

impl ColumnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one node and report its drawing data.
    ///
    /// Parents already holding a column become plain edges; unseen parents
    /// take over the node's column slot, opening one column each. A
    /// non-empty unseen set adds the self edge `(col, col)` signalling the
    /// column continues downward, and a second unseen parent adds the split
    /// edge `(col, col + 1)`. Under single-parent histories the column
    /// count moves by at most one per step; a larger move is fatal.
    pub fn advance(&mut self, rev: u64, parents: &[u64]) -> anyhow::Result<ColData> {
        let col = match self.seen.iter().position(|&n| n == rev) {
            Some(idx) => idx,
            None => {
                self.seen.push(rev);
                self.seen.len() - 1
            }
        };

        let (known, new): (Vec<u64>, Vec<u64>) = parents
            .iter()
            .partition(|parent| self.seen.contains(*parent));

        let ncols = self.seen.len();
        // the node is fully processed: its slot is handed to the unseen
        // parents (possibly none, closing the column)
        self.seen.splice(col..=col, new.iter().copied());

        let mut edges = Vec::with_capacity(known.len() + 2);
        for parent in &known {
            let target = self
                .seen
                .iter()
                .position(|n| n == parent)
                .ok_or_else(|| RundoError::NotFound(*parent))?;
            edges.push((col, target));
        }
        if !new.is_empty() {
            edges.push((col, col));
        }
        if new.len() > 1 {
            edges.push((col, col + 1));
        }

        let coldiff = self.seen.len() as isize - ncols as isize;
        if coldiff.abs() > 1 {
            return Err(RundoError::ColumnBound(coldiff).into());
        }

        Ok(ColData {
            col,
            edges,
            ncols,
            coldiff,
        })
    }
}
