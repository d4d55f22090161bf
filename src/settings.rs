//! Settings file support
//!
//! Grid size, symmetry switches and page style can be kept in a TOML
//! file. Every key is optional; missing keys fall back to the built-in
//! defaults below.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::{Color, StyleConfig};
use crate::tiling::TilingConfig;
use crate::PatternConfig;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid setting '{key}': {reason}")]
    Invalid { key: String, reason: String },
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSettings {
    grid: TomlGrid,
    symmetry: TomlSymmetry,
    style: TomlStyle,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlGrid {
    cells: Option<usize>,
    cells_x: Option<usize>,
    cells_y: Option<usize>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSymmetry {
    total_x: bool,
    total_y: bool,
    local_x: bool,
    local_y: bool,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlStyle {
    font: Option<String>,
    base_width: Option<f64>,
    margin: Option<f64>,
    background: Option<Vec<f64>>,
    foreground: Option<Vec<f64>>,
    outlines: Option<bool>,
    frame_duration: Option<f64>,
}

/// Built-in settings, matching `PatternConfig::default()`
pub const DEFAULT_SETTINGS: &str = r#"
[grid]
# cells sets both directions; cells_x / cells_y override it
cells = 16

[symmetry]
total_x = false
total_y = false
local_x = false
local_y = false

[style]
font = "Fern Ornaments"
base_width = 1000.0
# margin defaults to 5% of base_width
background = [1.0, 1.0, 1.0]
foreground = [0.0, 0.0, 0.0]
outlines = false
frame_duration = 0.75
"#;

/// Load settings from a TOML file
pub fn from_file(path: &Path) -> Result<PatternConfig, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    from_str(&content)
}

/// Load settings from a TOML string
pub fn from_str(content: &str) -> Result<PatternConfig, SettingsError> {
    let parsed: TomlSettings = toml::from_str(content)?;

    let defaults = TilingConfig::default();
    let cells = parsed.grid.cells;
    let cells_x = parsed.grid.cells_x.or(cells).unwrap_or(defaults.cells_x);
    let cells_y = parsed.grid.cells_y.or(cells).unwrap_or(defaults.cells_y);
    let tiling = TilingConfig::new()
        .with_size(cells_x, cells_y)
        .with_total_x_symmetry(parsed.symmetry.total_x)
        .with_total_y_symmetry(parsed.symmetry.total_y)
        .with_local_x_symmetry(parsed.symmetry.local_x)
        .with_local_y_symmetry(parsed.symmetry.local_y);
    tiling.validate().map_err(|e| invalid("grid", e.to_string()))?;

    let style = style_from_toml(parsed.style)?;

    Ok(PatternConfig { tiling, style })
}

fn style_from_toml(toml: TomlStyle) -> Result<StyleConfig, SettingsError> {
    let mut style = StyleConfig::default();
    if let Some(font) = toml.font {
        style.font = font;
    }
    if let Some(width) = toml.base_width {
        if width <= 0.0 {
            return Err(invalid("style.base_width", "must be positive"));
        }
        style = style.with_base_width(width);
    }
    if let Some(margin) = toml.margin {
        if margin < 0.0 {
            return Err(invalid("style.margin", "must not be negative"));
        }
        style.margin = margin;
    }
    if let Some(components) = toml.background {
        style.background = color("style.background", &components)?;
    }
    if let Some(components) = toml.foreground {
        style.foreground = color("style.foreground", &components)?;
    }
    if let Some(outlines) = toml.outlines {
        style.outlines = outlines;
    }
    if let Some(duration) = toml.frame_duration {
        style.frame_duration = duration;
    }
    Ok(style)
}

fn color(key: &str, components: &[f64]) -> Result<Color, SettingsError> {
    Color::from_components(components)
        .ok_or_else(|| invalid(key, "expected [r, g, b] or [r, g, b, a] with values from 0 to 1"))
}

fn invalid(key: &str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        key: key.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_default_config() {
        let config = from_str(DEFAULT_SETTINGS).unwrap();
        assert_eq!(config.tiling, TilingConfig::default());
        assert_eq!(config.style, StyleConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = from_str("").unwrap();
        assert_eq!(config.tiling, TilingConfig::default());
    }

    #[test]
    fn test_cells_x_overrides_cells() {
        let config = from_str("[grid]\ncells = 10\ncells_x = 24\n").unwrap();
        assert_eq!(config.tiling.cells_x, 24);
        assert_eq!(config.tiling.cells_y, 10);
    }

    #[test]
    fn test_symmetry_flags() {
        let config = from_str("[symmetry]\ntotal_x = true\nlocal_y = true\n").unwrap();
        assert!(config.tiling.total_x_symmetry);
        assert!(config.tiling.local_y_symmetry);
        assert!(!config.tiling.total_y_symmetry);
    }

    #[test]
    fn test_style_overrides() {
        let config = from_str(
            r#"
            [style]
            font = "fonts/Fern.otf"
            base_width = 2000.0
            foreground = [0.2, 0.4, 0.6, 0.5]
            outlines = true
            "#,
        )
        .unwrap();
        assert_eq!(config.style.font, "fonts/Fern.otf");
        assert_eq!(config.style.margin, 100.0);
        assert_eq!(config.style.foreground.a, 0.5);
        assert!(config.style.outlines);
    }

    #[test]
    fn test_zero_cells_rejected() {
        let err = from_str("[grid]\ncells = 0\n").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { .. }));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = from_str("[style]\nbackground = [1.0, 1.0]\n").unwrap_err();
        assert!(err.to_string().contains("style.background"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            from_str("[grid]\ncolumns = 3\n"),
            Err(SettingsError::ParseError(_))
        ));
    }
}
