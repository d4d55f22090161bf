//! Template grammar: lines into rows, rows into sections
//!
//! ```text
//! template  := line ('\n' line)*
//! line      := separator | row
//! separator := '*' anything
//! row       := main | prefix '*' main | prefix '*' main '*' suffix
//! ```

use log::debug;

use crate::error::ParseError;
use crate::symmetry::{X_MAP, Y_MAP};
use crate::tiling::TilingConfig;

use super::ast::{PatternSections, Row, Span};
use super::lexer::{lex, Token};

/// Parse a template into prefix, main and suffix row sections
///
/// Local symmetry switches in `config` are applied here, so the returned
/// rows are ready for tiling.
pub fn parse(input: &str, config: &TilingConfig) -> Result<PatternSections, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyTemplate);
    }

    let start = input.len() - input.trim_start().len();
    let first_line = input[..start].matches('\n').count() + 1;

    let mut sections: Vec<Vec<Row>> = Vec::new();
    let mut section: Vec<Row> = Vec::new();
    let mut offset = start;

    for (index, raw) in trimmed.split('\n').enumerate() {
        let line_no = first_line + index;
        let lead = raw.len() - raw.trim_start().len();
        let line = raw.trim();
        let span = offset + lead..offset + lead + line.len();
        offset += raw.len() + 1;

        if line.is_empty() {
            return Err(ParseError::empty_line(line_no, span));
        }

        if line.starts_with('*') {
            sections.push(std::mem::take(&mut section));
        } else {
            section.push(parse_row(line, line_no, span)?);
        }
    }
    if !section.is_empty() {
        sections.push(section);
    }

    if config.local_x_symmetry {
        for row in sections.iter_mut().flatten() {
            if !row.main.is_empty() {
                let reflected = X_MAP.reflect_line(&row.main);
                row.main.push_str(&reflected);
            }
        }
    }

    let raw_count = sections.len();
    let mut pattern = PatternSections::from_sections(sections);

    if config.local_y_symmetry {
        let mirrored: Vec<Row> = pattern
            .main_rows
            .iter()
            .rev()
            .map(|row| Row {
                main: Y_MAP.mirror_line(&row.main),
                ..row.clone()
            })
            .collect();
        pattern.main_rows.extend(mirrored);
    }

    debug!(
        "parsed template: {} raw sections, {}/{}/{} prefix/main/suffix rows",
        raw_count,
        pattern.prefix_rows.len(),
        pattern.main_rows.len(),
        pattern.suffix_rows.len()
    );

    Ok(pattern)
}

/// Split one non-separator line into its column segments
fn parse_row(line: &str, line_no: usize, span: Span) -> Result<Row, ParseError> {
    let mut segments = vec![String::new()];
    for (token, _) in lex(line) {
        match token {
            Token::Star => segments.push(String::new()),
            Token::Glyphs(glyphs) => {
                if let Some(last) = segments.last_mut() {
                    last.push_str(&glyphs);
                }
            }
        }
    }

    let row = match segments.len() {
        1 => Row::new("", segments.remove(0), ""),
        2 => {
            let main = segments.remove(1);
            Row::new(segments.remove(0), main, "")
        }
        3 => {
            let suffix = segments.remove(2);
            let main = segments.remove(1);
            Row::new(segments.remove(0), main, suffix)
        }
        count => return Err(ParseError::too_many_segments(line_no, count, span)),
    };

    Ok(row.at(line_no, span))
}
