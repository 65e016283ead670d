//! Session layer
//!
//! - `document`: the host boundary (raw entries in, snapshots out)
//! - `session`: cache ownership and the operations built on the artifacts

pub mod document;
pub mod session;
