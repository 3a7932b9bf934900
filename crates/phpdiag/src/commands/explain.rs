use anyhow::Result;
use camino::Utf8Path;
use clap::Parser;
use diagnostic_filter::{IgnoreMatcher, WorkspaceRoot};
use log::info;

use crate::{
    commands::PatternArgs,
    utils::styles::{fmt_dimmed, fmt_ignored, fmt_kept, fmt_pattern},
};

#[derive(Debug, Clone, Parser)]
pub struct ExplainCmd {
    /// File URIs as reported by the language server, e.g. file:///project/src/index.php
    #[arg(required = true)]
    pub uris: Vec<String>,

    #[command(flatten)]
    pub patterns: PatternArgs,
}

impl ExplainCmd {
    pub(crate) fn handle(&self, workspace: &Utf8Path) -> Result<()> {
        let patterns = self.patterns.resolve(workspace);
        let matcher = IgnoreMatcher::new(&patterns, workspace.as_str());
        let root = WorkspaceRoot::new(workspace.as_str());

        for uri in &self.uris {
            info!("{}", explain_uri(&matcher, &root, uri));
        }

        Ok(())
    }
}

fn explain_uri(matcher: &IgnoreMatcher, root: &WorkspaceRoot, uri: &str) -> String {
    let Some(relative) = root.relative_uri_path(uri) else {
        return fmt_kept(&format!(
            "{uri} {}",
            fmt_dimmed("(outside the workspace, never ignored)")
        ));
    };

    match matcher.matching_pattern(uri) {
        Some(pattern) => fmt_ignored(&format!(
            "{relative} ignored by {}",
            fmt_pattern(pattern)
        )),
        None => fmt_kept(&format!("{relative} {}", fmt_dimmed("(reported)"))),
    }
}
