//! Filtering of language-server diagnostics against workspace ignore globs.
//!
//! Diagnostics arrive keyed by `file://` URI. Each URI is turned into a path
//! relative to the workspace root and checked against the configured
//! patterns; entries that match are dropped, everything else is passed
//! through untouched.
//!
//! ```
//! use diagnostic_filter::{DiagnosticsMap, filter_by_ignore_patterns};
//!
//! let mut diagnostics = DiagnosticsMap::new();
//! diagnostics.insert("file:///project/src/main.php".to_string(), vec!["unused"]);
//! diagnostics.insert("file:///project/vendor/lib.php".to_string(), vec!["undefined"]);
//!
//! let kept = filter_by_ignore_patterns(diagnostics, &["vendor/**"], "/project");
//! assert_eq!(kept.len(), 1);
//! assert!(kept.contains_key("file:///project/src/main.php"));
//! ```

pub mod filter;
pub mod glob;
pub mod uri;

use indexmap::IndexMap;

pub use filter::{IgnoreMatcher, filter_by_ignore_patterns};
pub use glob::Glob;
pub use uri::{WorkspaceRoot, file_uri_to_path};

/// Diagnostics keyed by file URI, in the order they were reported.
pub type DiagnosticsMap<D> = IndexMap<String, Vec<D>>;
