//! Page style handed through to rendering collaborators

/// An RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build from `[r, g, b]` or `[r, g, b, a]`
    ///
    /// Returns None for any other length or a component outside `0.0..=1.0`.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        if components.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return None;
        }
        match *components {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self { r, g, b, a }),
            _ => None,
        }
    }
}

/// Style options for the drawn page
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Installed font name or path to a font file
    pub font: String,

    /// Width of the glyph area in points
    pub base_width: f64,

    /// Margin around the glyph area
    pub margin: f64,

    pub background: Color,
    pub foreground: Color,

    /// Convert text to outlines when drawing
    pub outlines: bool,

    /// Seconds per page when pages are assembled into an animation
    pub frame_duration: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font: "Fern Ornaments".to_string(),
            base_width: 1000.0,
            margin: 50.0,
            background: Color::WHITE,
            foreground: Color::BLACK,
            outlines: false,
            frame_duration: 0.75,
        }
    }
}

impl StyleConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the base width; the margin follows at 5% of it
    pub fn with_base_width(mut self, width: f64) -> Self {
        self.base_width = width;
        self.margin = width * 0.05;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_colors(mut self, background: Color, foreground: Color) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    pub fn with_outlines(mut self, outlines: bool) -> Self {
        self.outlines = outlines;
        self
    }

    /// Page layout for a grid of the given size
    pub fn geometry(&self, cells_x: usize, cells_y: usize) -> PageGeometry {
        let font_size = self.base_width / cells_x.max(1) as f64;
        let content_height = cells_y as f64 * font_size;
        PageGeometry {
            font_size,
            content_width: self.base_width,
            content_height,
            page_width: self.base_width + self.margin * 2.0,
            page_height: content_height + self.margin * 2.0,
        }
    }
}

/// Derived page measurements: one glyph per cell, square cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Font size and line height
    pub font_size: f64,
    pub content_width: f64,
    pub content_height: f64,
    pub page_width: f64,
    pub page_height: f64,
}
