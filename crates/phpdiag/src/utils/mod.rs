pub mod logger;
pub mod styles;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

pub(crate) static CHECK: &str = "✔";
pub(crate) static MARK: &str = "✘";

/// Makes `path` absolute against the current directory without touching the
/// filesystem, diagnostics URIs are always absolute.
pub(crate) fn absolute_workspace(path: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    let absolute =
        std::path::absolute(path).with_context(|| format!("Failed to resolve workspace {path}"))?;

    Utf8PathBuf::from_path_buf(absolute).map_err(|p| {
        anyhow::anyhow!(
            "Workspace path {} is not valid UTF-8",
            p.to_string_lossy()
        )
    })
}
