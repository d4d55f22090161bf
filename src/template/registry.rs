//! Template registry for storing named templates

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use thiserror::Error;

/// File extension of template files in a pattern directory
pub const TEMPLATE_EXTENSION: &str = "txt";

/// Errors that can occur while collecting templates
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    /// Template not found in registry
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// Two templates with the same name
    #[error("duplicate template name: {name}")]
    Duplicate { name: String },

    /// Error listing a template directory
    #[error("error reading template directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Error reading a template file
    #[error("error reading template file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl TemplateError {
    fn read_dir(path: &Path, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }

    fn read_file(path: &Path, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }
}

/// A template and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTemplate {
    pub name: String,
    pub source: String,
    /// Path of the file the template was read from
    pub path: Option<PathBuf>,
}

/// A template that could not be loaded
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub name: String,
    pub error: TemplateError,
}

/// Ordered collection of uniquely named templates
///
/// Templates that failed to load are kept alongside, so a batch can
/// report them without dropping the templates that did load.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<NamedTemplate>,
    failures: Vec<LoadFailure>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect inline templates, named `inline-1`, `inline-2`, ...
    ///
    /// Blank entries are skipped; numbering follows list position.
    pub fn from_inline<I, S>(templates: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (index, source) in templates.into_iter().enumerate() {
            let source = source.into();
            if source.trim().is_empty() {
                continue;
            }
            registry.add(format!("inline-{}", index + 1), source)?;
        }
        Ok(registry)
    }

    /// Collect every `*.txt` file in a directory, sorted by file name
    ///
    /// Only a failure to list the directory is an error; unreadable files
    /// are recorded in [`failures`](Self::failures).
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut registry = Self::new();
        registry.add_dir(dir)?;
        Ok(registry)
    }

    /// Add a template under a name
    pub fn add(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), TemplateError> {
        self.insert(NamedTemplate {
            name: name.into(),
            source: source.into(),
            path: None,
        })
    }

    /// Add a single template file, named after its file stem
    pub fn add_file(&mut self, path: &Path) -> Result<(), TemplateError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| TemplateError::read_file(path, e))?;
        self.insert(NamedTemplate {
            name: template_name(path),
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// Add every `*.txt` file in a directory, sorted by file name
    ///
    /// Files that cannot be read or clash with an existing name are
    /// recorded as failures and the remaining files are still added.
    pub fn add_dir(&mut self, dir: &Path) -> Result<(), TemplateError> {
        let read_dir_err = |e| TemplateError::read_dir(dir, e);

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();
            let is_template = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == TEMPLATE_EXTENSION);
            if is_template {
                paths.push(path);
            }
        }
        paths.sort();

        info!("loading {} templates from {}", paths.len(), dir.display());
        for path in &paths {
            if let Err(error) = self.add_file(path) {
                self.record_failure(template_name(path), error);
            }
        }
        Ok(())
    }

    /// Remember a template that could not be loaded
    pub fn record_failure(&mut self, name: impl Into<String>, error: TemplateError) {
        let name = name.into();
        warn!("template '{}' not loaded: {}", name, error);
        self.failures.push(LoadFailure { name, error });
    }

    /// Templates that failed to load, in the order they were encountered
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    fn insert(&mut self, template: NamedTemplate) -> Result<(), TemplateError> {
        if self.contains(&template.name) {
            return Err(TemplateError::Duplicate {
                name: template.name,
            });
        }
        debug!("registered template '{}'", template.name);
        self.templates.push(template);
        Ok(())
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Result<&NamedTemplate, TemplateError> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| TemplateError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.iter().any(|t| t.name == name)
    }

    /// Iterate over templates in registration order
    pub fn iter(&self) -> impl Iterator<Item = &NamedTemplate> {
        self.templates.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn template_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
