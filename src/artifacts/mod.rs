//! Core data structures and algorithms
//!
//! - `age`: relative-age formatting for node timestamps
//! - `core`: shared output plumbing (pager wrapper)
//! - `diff`: Myers diffs, unified output, compact one-line summaries
//! - `graph`: column layout and ASCII row assembly
//! - `history`: raw-entry ingestion and the flattened node arena

pub mod age;
pub mod core;
pub mod diff;
pub mod graph;
pub mod history;
