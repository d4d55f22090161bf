//! Vertical composition of tiled rows into the full grid

use log::debug;

use crate::parser::{PatternSections, Row};
use crate::symmetry::Y_MAP;

use super::config::TilingConfig;
use super::error::TilingError;
use super::row::render_row;

/// Render parsed sections to a grid of `cells_y` newline-terminated rows
///
/// With total Y symmetry the authored suffix rows are replaced by the
/// prefix rows in reverse order, and every row below the horizontal
/// center line is passed through the vertical mirror map.
pub fn render_grid(
    sections: &PatternSections,
    config: &TilingConfig,
) -> Result<String, TilingError> {
    config.validate()?;

    let prefix_rows = &sections.prefix_rows;
    let suffix_rows: Vec<&Row> = if config.total_y_symmetry {
        prefix_rows.iter().rev().collect()
    } else {
        sections.suffix_rows.iter().collect()
    };

    let main_count = config
        .cells_y
        .checked_sub(prefix_rows.len() + suffix_rows.len())
        .ok_or(TilingError::GridTooShort {
            prefix_rows: prefix_rows.len(),
            suffix_rows: suffix_rows.len(),
            cells_y: config.cells_y,
        })?;

    debug!(
        "composing {}x{} grid: {} prefix, {} main, {} suffix rows",
        config.cells_x,
        config.cells_y,
        prefix_rows.len(),
        main_count,
        suffix_rows.len()
    );

    let mut lines = Vec::with_capacity(config.cells_y);
    for row in prefix_rows {
        lines.push(render_row(row, config)?);
    }

    lines.extend(tile_main_rows(&sections.main_rows, main_count, config)?);

    for row in suffix_rows {
        let rendered = render_row(row, config)?;
        if config.total_y_symmetry {
            lines.push(Y_MAP.mirror_line(&rendered));
        } else {
            lines.push(rendered);
        }
    }

    let mut out = String::new();
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// Repeat the main rows to fill `count` grid rows
///
/// When mirrored, the top half holds `count / 2` rows and the bottom half
/// holds the remaining rows reversed and mirrored vertically, so an odd
/// count puts a mirrored row on the center line.
fn tile_main_rows(
    rows: &[Row],
    count: usize,
    config: &TilingConfig,
) -> Result<Vec<String>, TilingError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if rows.is_empty() {
        return Err(TilingError::EmptyMainSection { rows: count });
    }

    let rendered = rows
        .iter()
        .map(|row| render_row(row, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut repeats = count.div_ceil(rows.len());
    if config.total_y_symmetry {
        repeats = repeats.div_ceil(2);
    }
    let tiled: Vec<&String> = rendered.iter().cycle().take(repeats * rows.len()).collect();

    if !config.total_y_symmetry {
        return Ok(tiled.into_iter().take(count).cloned().collect());
    }

    let upper = count / 2;
    let lower = count - upper;
    let mut block: Vec<String> = tiled.iter().take(upper).map(|r| (*r).clone()).collect();
    block.extend(tiled[..lower].iter().rev().map(|r| Y_MAP.mirror_line(r)));
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sections(prefix: &[&str], main: &[&str], suffix: &[&str]) -> PatternSections {
        let rows = |mains: &[&str]| mains.iter().map(|m| Row::plain(*m)).collect::<Vec<_>>();
        PatternSections {
            prefix_rows: rows(prefix),
            main_rows: rows(main),
            suffix_rows: rows(suffix),
        }
    }

    #[test]
    fn test_main_rows_repeat_and_truncate() {
        let config = TilingConfig::new().with_size(3, 5);
        let grid = render_grid(&sections(&[], &["ab", "cd"], &[]), &config).unwrap();
        assert_eq!(grid, "aba\ncdc\naba\ncdc\naba\n");
    }

    #[test]
    fn test_prefix_and_suffix_rows_emitted_once() {
        let config = TilingConfig::new().with_size(2, 4);
        let grid = render_grid(&sections(&["p"], &["m"], &["s"]), &config).unwrap();
        assert_eq!(grid, "pp\nmm\nmm\nss\n");
    }

    #[test]
    fn test_zero_main_rows() {
        let config = TilingConfig::new().with_size(2, 2);
        let grid = render_grid(&sections(&["p"], &["m"], &["s"]), &config).unwrap();
        assert_eq!(grid, "pp\nss\n");
    }

    #[test]
    fn test_zero_main_rows_allows_empty_main_section() {
        let config = TilingConfig::new().with_size(2, 2);
        let grid = render_grid(&sections(&["p"], &[], &["s"]), &config).unwrap();
        assert_eq!(grid, "pp\nss\n");
    }

    #[test]
    fn test_empty_main_section_with_room_is_error() {
        let config = TilingConfig::new().with_size(2, 3);
        let err = render_grid(&sections(&["p"], &[], &["s"]), &config).unwrap_err();
        assert_eq!(err, TilingError::EmptyMainSection { rows: 1 });
    }

    #[test]
    fn test_grid_too_short() {
        let config = TilingConfig::new().with_size(2, 1);
        let err = render_grid(&sections(&["p"], &["m"], &["s"]), &config).unwrap_err();
        assert_eq!(
            err,
            TilingError::GridTooShort {
                prefix_rows: 1,
                suffix_rows: 1,
                cells_y: 1
            }
        );
    }

    #[test]
    fn test_total_y_mirrors_prefix_into_suffix() {
        let config = TilingConfig::new().with_size(2, 4).with_total_y_symmetry(true);
        let grid = render_grid(&sections(&["q"], &["a"], &["ignored"]), &config).unwrap();
        assert_eq!(grid, "qq\naa\naa\nzz\n");
    }

    #[test]
    fn test_total_y_even_main_block() {
        let config = TilingConfig::new().with_size(1, 4).with_total_y_symmetry(true);
        let grid = render_grid(&sections(&[], &["W", "R"], &[]), &config).unwrap();
        assert_eq!(grid, "W\nR\nV\nX\n");
    }

    #[test]
    fn test_total_y_odd_main_block_mirrors_center_row() {
        let config = TilingConfig::new().with_size(1, 3).with_total_y_symmetry(true);
        let grid = render_grid(&sections(&[], &["W", "R"], &[]), &config).unwrap();
        assert_eq!(grid, "W\nV\nX\n");
    }

    #[test]
    fn test_zero_cells_rejected() {
        let config = TilingConfig::new().with_size(0, 2);
        assert!(matches!(
            render_grid(&sections(&[], &["a"], &[]), &config),
            Err(TilingError::InvalidConfig { .. })
        ));
    }
}
