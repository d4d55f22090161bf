//! Error types for the tiling engine

use thiserror::Error;

/// Errors that can occur while tiling rows and composing the grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TilingError {
    /// Column prefix and suffix together are wider than the grid
    #[error("row on line {line} is too wide: prefix ({prefix}) + suffix ({suffix}) exceed {cells_x} columns")]
    RowTooWide {
        line: usize,
        prefix: usize,
        suffix: usize,
        cells_x: usize,
    },

    /// Row prefix and suffix sections together are taller than the grid
    #[error("grid is too short: {prefix_rows} prefix rows + {suffix_rows} suffix rows exceed {cells_y} rows")]
    GridTooShort {
        prefix_rows: usize,
        suffix_rows: usize,
        cells_y: usize,
    },

    /// A row needs tiling but its main segment is empty
    #[error("row on line {line} has an empty main segment but needs to fill {width} columns")]
    EmptyMainSegment { line: usize, width: usize },

    /// Main rows are needed but the main section has no rows
    #[error("main section is empty but {rows} rows need to be filled")]
    EmptyMainSection { rows: usize },

    /// Grid dimensions are unusable
    #[error("invalid tiling configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl TilingError {
    /// Get the template line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::RowTooWide { line, .. } | Self::EmptyMainSegment { line, .. } => Some(*line),
            _ => None,
        }
    }
}
