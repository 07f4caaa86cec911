//! Output generation for the resource inventory.
//!
//! This module handles rendering and writing the diagram files:
//! - [`d2`] - D2 diagram-description file generation

mod d2;

// Re-export public functions
pub use d2::{generate_diagram_files, render_group_file, render_index_file};
