//! Horizontal tiling of a single row

use std::borrow::Cow;

use log::trace;

use crate::parser::Row;
use crate::symmetry::X_MAP;

use super::char_len;
use super::config::TilingConfig;
use super::error::TilingError;

/// Render one row to exactly `cells_x` characters
///
/// With total X symmetry the authored suffix is replaced by the reflection
/// of the prefix, and the main segment is tiled from both ends toward the
/// center so the row reads the same mirrored.
pub fn render_row(row: &Row, config: &TilingConfig) -> Result<String, TilingError> {
    let cells_x = config.cells_x;
    let prefix = row.prefix.as_str();
    let suffix: Cow<'_, str> = if config.total_x_symmetry {
        Cow::Owned(X_MAP.reflect_line(prefix))
    } else {
        Cow::Borrowed(row.suffix.as_str())
    };

    let prefix_len = char_len(prefix);
    let suffix_len = char_len(&suffix);
    let width = cells_x
        .checked_sub(prefix_len + suffix_len)
        .ok_or(TilingError::RowTooWide {
            line: row.line,
            prefix: prefix_len,
            suffix: suffix_len,
            cells_x,
        })?;

    let main = tile_main(&row.main, width, config.total_x_symmetry)
        .ok_or(TilingError::EmptyMainSegment {
            line: row.line,
            width,
        })?;

    trace!(
        "row {}: {} + {} + {} columns",
        row.line,
        prefix_len,
        width,
        suffix_len
    );

    let mut out = String::with_capacity(prefix.len() + main.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(&main);
    out.push_str(&suffix);
    Ok(out.chars().take(cells_x).collect())
}

/// Fill `width` columns with repetitions of `unit`
///
/// Returns `None` when columns need filling but the unit is empty. When
/// mirrored, the left half keeps the extra column on odd widths and the
/// right half is the reflection of an equally tiled copy.
fn tile_main(unit: &str, width: usize, mirrored: bool) -> Option<String> {
    if width == 0 {
        return Some(String::new());
    }
    let unit_len = char_len(unit);
    if unit_len == 0 {
        return None;
    }

    let mut repeats = width.div_ceil(unit_len);
    if mirrored {
        repeats = repeats.div_ceil(2);
    }
    let content = unit.repeat(repeats);

    if !mirrored {
        return Some(content.chars().take(width).collect());
    }

    let left: String = content.chars().take(width.div_ceil(2)).collect();
    let right: String = content.chars().take(width / 2).collect();
    Some(left + &X_MAP.reflect_line(&right))
}
