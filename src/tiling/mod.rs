//! Tiling engine: fills the cell grid from parsed template sections
//!
//! Rows are tiled horizontally by [`render_row`]; [`render_grid`] stacks
//! the prefix rows, the vertically repeated main rows and the suffix rows.
//! Total symmetry switches mirror the result across the grid's center
//! lines using the glyph maps in [`crate::symmetry`].

pub mod config;
pub mod error;
mod grid;
mod row;

pub use config::TilingConfig;
pub use error::TilingError;
pub use grid::render_grid;
pub use row::render_row;

/// Length in characters, which is what the grid measures
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
