//! Parsed template structure: rows grouped into prefix, main and suffix sections

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// One template line split into column segments
///
/// The prefix is emitted once at the start of the row, the main segment
/// repeats to fill the remaining width, and the suffix is emitted once at
/// the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub prefix: String,
    pub main: String,
    pub suffix: String,
    /// 1-based line in the template this row came from (0 if built in code)
    pub line: usize,
    pub span: Span,
}

impl Row {
    pub fn new(
        prefix: impl Into<String>,
        main: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            main: main.into(),
            suffix: suffix.into(),
            line: 0,
            span: 0..0,
        }
    }

    /// A row with only a repeating segment
    pub fn plain(main: impl Into<String>) -> Self {
        Self::new("", main, "")
    }

    /// Attach the source location
    pub fn at(mut self, line: usize, span: Span) -> Self {
        self.line = line;
        self.span = span;
        self
    }
}

/// The three row sections of a template
///
/// Prefix rows are emitted once at the top, main rows repeat to fill the
/// grid height, suffix rows are emitted once at the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSections {
    pub prefix_rows: Vec<Row>,
    pub main_rows: Vec<Row>,
    pub suffix_rows: Vec<Row>,
}

impl PatternSections {
    /// Normalize any number of raw sections into exactly three
    ///
    /// - one section becomes the main section
    /// - two sections become prefix and main, with an empty suffix
    /// - three sections map onto prefix, main and suffix
    /// - with more than three, the first is the prefix, the last is the
    ///   suffix and everything in between is joined into the main section
    pub fn from_sections(mut sections: Vec<Vec<Row>>) -> Self {
        match sections.len() {
            0 => Self::default(),
            1 => Self {
                main_rows: sections.remove(0),
                ..Self::default()
            },
            2 => {
                let main_rows = sections.remove(1);
                Self {
                    prefix_rows: sections.remove(0),
                    main_rows,
                    suffix_rows: Vec::new(),
                }
            }
            _ => {
                let suffix_rows = sections.pop().unwrap_or_default();
                let mut interior = sections.into_iter();
                let prefix_rows = interior.next().unwrap_or_default();
                Self {
                    prefix_rows,
                    main_rows: interior.flatten().collect(),
                    suffix_rows,
                }
            }
        }
    }

    /// Iterate over every row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.prefix_rows
            .iter()
            .chain(&self.main_rows)
            .chain(&self.suffix_rows)
    }
}
