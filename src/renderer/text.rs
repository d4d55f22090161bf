//! Print-only collaborators

use std::io::Write;

use super::{PatternRenderer, RenderJob, RendererError};

/// Writes each grid followed by a blank line
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> PatternRenderer for TextRenderer<W> {
    fn render(&mut self, job: &RenderJob<'_>) -> Result<(), RendererError> {
        writeln!(self.out, "{}", job.grid)
            .and_then(|()| self.out.flush())
            .map_err(|source| RendererError::Io {
                name: job.name.to_string(),
                source,
            })
    }
}

/// Discards every job
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl PatternRenderer for NullRenderer {
    fn render(&mut self, _job: &RenderJob<'_>) -> Result<(), RendererError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::StyleConfig;

    #[test]
    fn test_text_renderer_appends_blank_line() {
        let style = StyleConfig::default();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer
            .render(&RenderJob::new("a", "qe\nzc\n", 2, 2, &style))
            .unwrap();
        renderer
            .render(&RenderJob::new("b", "ss\n", 2, 1, &style))
            .unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "qe\nzc\n\nss\n\n");
    }

    #[test]
    fn test_null_renderer_accepts_everything() {
        let style = StyleConfig::default();
        assert!(NullRenderer
            .render(&RenderJob::new("a", "", 1, 1, &style))
            .is_ok());
    }
}
