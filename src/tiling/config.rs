//! Configuration for the tiling engine

use super::error::TilingError;

/// Grid size and symmetry switches, threaded explicitly through parsing and tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingConfig {
    /// Number of glyph columns in every output row
    pub cells_x: usize,

    /// Number of output rows
    pub cells_y: usize,

    /// Mirror each row across its vertical center line
    pub total_x_symmetry: bool,

    /// Mirror the grid across its horizontal center line
    pub total_y_symmetry: bool,

    /// Make every authored main segment self-symmetric before tiling
    pub local_x_symmetry: bool,

    /// Append a vertically mirrored copy of the main section before tiling
    pub local_y_symmetry: bool,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            cells_x: 16,
            cells_y: 16,
            total_x_symmetry: false,
            total_y_symmetry: false,
            local_x_symmetry: false,
            local_y_symmetry: false,
        }
    }
}

impl TilingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both grid dimensions to the same cell count
    pub fn with_cells(mut self, cells: usize) -> Self {
        self.cells_x = cells;
        self.cells_y = cells;
        self
    }

    /// Set the grid dimensions
    pub fn with_size(mut self, cells_x: usize, cells_y: usize) -> Self {
        self.cells_x = cells_x;
        self.cells_y = cells_y;
        self
    }

    pub fn with_total_x_symmetry(mut self, enabled: bool) -> Self {
        self.total_x_symmetry = enabled;
        self
    }

    pub fn with_total_y_symmetry(mut self, enabled: bool) -> Self {
        self.total_y_symmetry = enabled;
        self
    }

    pub fn with_local_x_symmetry(mut self, enabled: bool) -> Self {
        self.local_x_symmetry = enabled;
        self
    }

    pub fn with_local_y_symmetry(mut self, enabled: bool) -> Self {
        self.local_y_symmetry = enabled;
        self
    }

    /// Reject grids with a zero dimension
    pub fn validate(&self) -> Result<(), TilingError> {
        if self.cells_x == 0 || self.cells_y == 0 {
            return Err(TilingError::InvalidConfig {
                reason: format!(
                    "grid must be at least 1x1, got {}x{}",
                    self.cells_x, self.cells_y
                ),
            });
        }
        Ok(())
    }
}
