use log::trace;

use crate::{DiagnosticsMap, glob::Glob, uri::WorkspaceRoot};

/// Ignore patterns compiled against a workspace root.
///
/// Build one per (patterns, root) pair and reuse it for every diagnostics
/// batch; it holds no mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    globs: Vec<Glob>,
    root: WorkspaceRoot,
}

impl IgnoreMatcher {
    /// `workspace_root` must be absolute: a relative root contains no file
    /// URI, so such a matcher ignores nothing.
    pub fn new<S: AsRef<str>>(patterns: &[S], workspace_root: &str) -> Self {
        Self {
            globs: patterns.iter().map(|p| Glob::new(p.as_ref())).collect(),
            root: WorkspaceRoot::new(workspace_root),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.globs.iter().map(Glob::as_str)
    }

    /// First pattern, in configuration order, that excludes `uri`.
    ///
    /// URIs that are not `file://` URIs or that point outside the workspace
    /// never match.
    pub fn matching_pattern(&self, uri: &str) -> Option<&str> {
        if self.globs.is_empty() {
            return None;
        }

        let relative = self.root.relative_uri_path(uri)?;
        self.globs
            .iter()
            .find(|glob| glob.is_match(&relative))
            .map(Glob::as_str)
    }

    pub fn is_ignored(&self, uri: &str) -> bool {
        self.matching_pattern(uri).is_some()
    }

    /// Drops every entry whose URI matches one of the patterns.
    ///
    /// Surviving entries keep their position and their diagnostics untouched.
    pub fn filter<D>(&self, mut diagnostics: DiagnosticsMap<D>) -> DiagnosticsMap<D> {
        if self.globs.is_empty() {
            return diagnostics;
        }

        diagnostics.retain(|uri, _| match self.matching_pattern(uri) {
            Some(pattern) => {
                trace!("Ignoring diagnostics for {uri} (matched `{pattern}`)");
                false
            }
            None => true,
        });

        diagnostics
    }
}

/// Removes diagnostics for files matching any of `patterns`, where patterns
/// are globs relative to `workspace_root`.
///
/// With no patterns the map is handed back as is. A relative
/// `workspace_root` matches no URI either, see [`IgnoreMatcher::new`].
pub fn filter_by_ignore_patterns<D, S: AsRef<str>>(
    diagnostics: DiagnosticsMap<D>,
    patterns: &[S],
    workspace_root: &str,
) -> DiagnosticsMap<D> {
    if patterns.is_empty() {
        return diagnostics;
    }

    IgnoreMatcher::new(patterns, workspace_root).filter(diagnostics)
}
