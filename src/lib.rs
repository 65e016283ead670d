//! rundo: undo-tree visualization and diffing
//!
//! The library is organized into two layers, mirroring how the data flows:
//!
//! - `artifacts`: the core data structures and algorithms (history
//!   flattening, graph layout, ASCII rendering, Myers diffs, age formatting)
//! - `areas`: the session layer that owns the caches and ties the
//!   artifacts to a host-supplied document
//!
//! User-facing operations live in `commands` as `impl Session` blocks, one
//! file per operation.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;

pub use error::RundoError;
