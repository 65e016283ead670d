//! User-facing operations
//!
//! Each file holds one operation as an `impl Session` block writing to the
//! session's output writer:
//!
//! - `graph`: render the full undo tree
//! - `diff`: unified or compact diff between two states
//! - `show`: preview what reverting to a state would change
//! - `play`: the step sequence of a playback to a state
//! - `search`: find the state whose change matches a pattern

pub mod diff;
pub mod graph;
pub mod play;
pub mod search;
pub mod show;
