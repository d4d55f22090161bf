//! Rendering collaborators that receive finished grids
//!
//! The tiling engine only produces text. Turning that text into a page is
//! delegated to a [`PatternRenderer`] chosen by the caller; [`TextRenderer`]
//! is the fallback that prints the grid as-is.

pub mod config;
pub mod text;

use thiserror::Error;

pub use config::{Color, PageGeometry, StyleConfig};
pub use text::{NullRenderer, TextRenderer};

/// Errors reported by a rendering collaborator
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to write pattern '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Collaborator-specific failure
    #[error("renderer failed on pattern '{name}': {reason}")]
    Failed { name: String, reason: String },
}

/// Everything a collaborator needs to draw one pattern
#[derive(Debug, Clone)]
pub struct RenderJob<'a> {
    /// Template name, for diagnostics and output naming
    pub name: &'a str,
    /// Newline-terminated rows, `cells_y` of them
    pub grid: &'a str,
    pub cells_x: usize,
    pub cells_y: usize,
    pub style: &'a StyleConfig,
    pub geometry: PageGeometry,
}

impl<'a> RenderJob<'a> {
    pub fn new(
        name: &'a str,
        grid: &'a str,
        cells_x: usize,
        cells_y: usize,
        style: &'a StyleConfig,
    ) -> Self {
        Self {
            name,
            grid,
            cells_x,
            cells_y,
            style,
            geometry: style.geometry(cells_x, cells_y),
        }
    }
}

/// A sink for rendered patterns
pub trait PatternRenderer {
    fn render(&mut self, job: &RenderJob<'_>) -> Result<(), RendererError>;
}

impl<R: PatternRenderer + ?Sized> PatternRenderer for &mut R {
    fn render(&mut self, job: &RenderJob<'_>) -> Result<(), RendererError> {
        (**self).render(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_carries_geometry() {
        let style = StyleConfig::default();
        let job = RenderJob::new("leaves", "ab\ncd\n", 2, 2, &style);
        assert_eq!(job.geometry, style.geometry(2, 2));
        assert_eq!(job.geometry.font_size, 500.0);
    }

    #[test]
    fn test_error_display_names_pattern() {
        let err = RendererError::Failed {
            name: "leaves".to_string(),
            reason: "no font".to_string(),
        };
        assert!(err.to_string().contains("leaves"));
    }
}
