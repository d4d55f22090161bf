//! Integration tests for the template parser

use ornament_grid::{parse, ParseError, PatternSections, TilingConfig};

fn parse_default(input: &str) -> PatternSections {
    parse(input, &TilingConfig::default()).expect("Should parse")
}

#[test]
fn test_frame_template() {
    let input = r#"
        q*w*e
        *
        a*s*d
        *
        z*x*c
    "#;

    let sections = parse_default(input);
    assert_eq!(sections.prefix_rows.len(), 1);
    assert_eq!(sections.main_rows.len(), 1);
    assert_eq!(sections.suffix_rows.len(), 1);
    assert_eq!(sections.main_rows[0].prefix, "a");
    assert_eq!(sections.main_rows[0].main, "s");
    assert_eq!(sections.main_rows[0].suffix, "d");
}

#[test]
fn test_rows_remember_their_lines() {
    let input = "qwe\n*\nasd\nfgh";
    let sections = parse_default(input);
    let lines: Vec<_> = sections.rows().map(|r| r.line).collect();
    assert_eq!(lines, vec![1, 3, 4]);
}

#[test]
fn test_separator_line_content_is_ignored() {
    let sections = parse_default("qwe\n*** anything here\nasd");
    assert_eq!(sections.prefix_rows[0].main, "qwe");
    assert_eq!(sections.main_rows[0].main, "asd");
}

#[test]
fn test_five_sections_merge_interior() {
    let sections = parse_default("a\n*\nb\n*\nc\n*\nd\n*\ne");
    let mains: Vec<_> = sections.main_rows.iter().map(|r| r.main.as_str()).collect();
    assert_eq!(sections.prefix_rows[0].main, "a");
    assert_eq!(mains, vec!["b", "c", "d"]);
    assert_eq!(sections.suffix_rows[0].main, "e");
}

#[test]
fn test_windows_line_endings() {
    let sections = parse_default("q*w*e\r\n*\r\nasd\r\n");
    assert_eq!(sections.prefix_rows[0].suffix, "e");
    assert_eq!(sections.main_rows[0].main, "asd");
}

#[test]
fn test_local_symmetry_both_axes() {
    let config = TilingConfig::new()
        .with_local_x_symmetry(true)
        .with_local_y_symmetry(true);
    let sections = parse("qw", &config).expect("Should parse");
    let mains: Vec<_> = sections.main_rows.iter().map(|r| r.main.as_str()).collect();
    // x: qw + we, then y: zxxc appended
    assert_eq!(mains, vec!["qwwe", "zxxc"]);
}

#[test]
fn test_error_diagnostic_points_at_line() {
    let input = "qwe\na*b*c*d\nzxc";
    let err = parse(input, &TilingConfig::default()).unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.span().map(|s| &input[s.clone()]), Some("a*b*c*d"));

    let report = err.format(input, "broken.txt");
    assert!(report.contains("broken.txt"));
    assert!(report.contains("4 segments"));
}

#[test]
fn test_empty_template_error() {
    assert_eq!(
        parse("\n   \n", &TilingConfig::default()),
        Err(ParseError::EmptyTemplate)
    );
}
