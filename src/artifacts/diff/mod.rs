//! Diff algorithms for historical states
//!
//! - `myers`: Myers' shortest-edit-script alignment over generic slices
//! - `unified`: full unified-style diffs with labelled headers
//! - `compact`: bounded one-line change summaries used as node labels

pub mod compact;
pub mod myers;
pub mod unified;
