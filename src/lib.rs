//! Ornament Grid - tile small glyph templates into large symmetric patterns
//!
//! This library parses compact pattern templates, tiles them across a
//! fixed cell grid, optionally mirrors the result, and hands the finished
//! text grid to a rendering collaborator.
//!
//! # Example
//!
//! ```rust
//! use ornament_grid::{render_with_config, PatternConfig, TilingConfig};
//!
//! let config = PatternConfig::new().with_tiling(TilingConfig::new().with_size(4, 2));
//! let grid = render_with_config("q*w*e", &config).unwrap();
//! assert_eq!(grid, "qwwe\nqwwe\n");
//! ```

pub mod error;
pub mod parser;
pub mod renderer;
pub mod settings;
pub mod symmetry;
pub mod template;
pub mod tiling;

pub use error::ParseError;
pub use parser::{parse, PatternSections, Row};
pub use renderer::{
    NullRenderer, PatternRenderer, RenderJob, RendererError, StyleConfig, TextRenderer,
};
pub use symmetry::{SymmetryMap, X_MAP, Y_MAP};
pub use template::{TemplateError, TemplateRegistry};
pub use tiling::{render_grid, render_row, TilingConfig, TilingError};

use log::warn;
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error during tiling
    #[error("tiling error: {0}")]
    Tiling(#[from] TilingError),

    /// Error from the rendering collaborator
    #[error("renderer error: {0}")]
    Renderer(#[from] RendererError),

    /// The template itself could not be loaded
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct PatternConfig {
    /// Grid size and symmetry
    pub tiling: TilingConfig,
    /// Page style passed to the rendering collaborator
    pub style: StyleConfig,
}

impl PatternConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tiling configuration
    pub fn with_tiling(mut self, tiling: TilingConfig) -> Self {
        self.tiling = tiling;
        self
    }

    /// Set the page style
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }
}

/// Render a template to a grid with default configuration
pub fn render(template: &str) -> Result<String, RenderError> {
    render_with_config(template, &PatternConfig::default())
}

/// Render a template to a grid of `cells_y` newline-terminated rows
pub fn render_with_config(template: &str, config: &PatternConfig) -> Result<String, RenderError> {
    let sections = parse(template, &config.tiling)?;
    let grid = render_grid(&sections, &config.tiling)?;
    Ok(grid)
}

/// A template that failed somewhere in the pipeline
#[derive(Debug)]
pub struct BatchFailure {
    pub name: String,
    /// Template text, kept for diagnostics
    pub source: String,
    pub error: RenderError,
}

impl BatchFailure {
    /// Human-readable report; parse errors get a source excerpt and
    /// tiling errors the template line they came from
    pub fn report(&self) -> String {
        match &self.error {
            RenderError::Parse(e) => e.format(&self.source, &self.name),
            RenderError::Tiling(e) => match e.line() {
                Some(line) if line > 0 => format!("{}:{}: {}", self.name, line, self.error),
                _ => format!("{}: {}", self.name, self.error),
            },
            other => format!("{}: {}", self.name, other),
        }
    }
}

/// Outcome of rendering a whole registry
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Names of templates handed to the renderer, in order
    pub rendered: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render every template in the registry and hand each grid to `renderer`
///
/// A failing template is recorded and skipped; the rest are still rendered.
/// Templates the registry could not load are reported first.
pub fn render_batch(
    registry: &TemplateRegistry,
    config: &PatternConfig,
    renderer: &mut dyn PatternRenderer,
) -> BatchReport {
    let mut report = BatchReport::default();

    for failure in registry.failures() {
        report.failures.push(BatchFailure {
            name: failure.name.clone(),
            source: String::new(),
            error: RenderError::Template(failure.error.clone()),
        });
    }

    for template in registry.iter() {
        let outcome = render_with_config(&template.source, config).and_then(|grid| {
            let job = RenderJob::new(
                &template.name,
                &grid,
                config.tiling.cells_x,
                config.tiling.cells_y,
                &config.style,
            );
            renderer.render(&job).map_err(RenderError::from)
        });

        match outcome {
            Ok(()) => report.rendered.push(template.name.clone()),
            Err(error) => {
                warn!("template '{}' failed: {}", template.name, error);
                report.failures.push(BatchFailure {
                    name: template.name.clone(),
                    source: template.source.clone(),
                    error,
                });
            }
        }
    }

    report
}
