//! ASCII graph layout and drawing
//!
//! - `layout`: assigns columns and edges to nodes visited newest-first
//! - `render`: turns the layout data plus labels into finished text rows

pub mod layout;
pub mod render;
