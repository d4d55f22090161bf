//! Named template sources
//!
//! A template is just a string. The registry collects templates from an
//! inline list, individual files, or every `*.txt` file in a directory,
//! and keeps them in a deterministic order for batch rendering.
//!
//! # Example
//!
//! ```rust
//! use ornament_grid::template::TemplateRegistry;
//!
//! let registry = TemplateRegistry::from_inline(["qwe\nasd\nzxc", "  "]).unwrap();
//! assert_eq!(registry.len(), 1);
//! assert_eq!(registry.get("inline-1").unwrap().source, "qwe\nasd\nzxc");
//! ```

mod registry;

pub use registry::{LoadFailure, NamedTemplate, TemplateError, TemplateRegistry};
