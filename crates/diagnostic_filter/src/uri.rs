//! Turns `file://` URIs into paths relative to a workspace root.
//!
//! Everything here works on `/`-separated strings so that a Windows workspace
//! (`C:\project`) and the URIs a language server reports for it
//! (`file:///C:/project/...`) compare the same way on every host.

use log::debug;
use percent_encoding::percent_decode_str;

const FILE_SCHEME: &str = "file://";

/// Strips the `file://` scheme from `uri` and returns the percent-decoded
/// path with `/` separators.
///
/// A drive-letter path (`file:///C:/project/a.php`, or `file:///c%3A/...` as
/// VS Code style clients encode it) comes back in its plain form
/// (`C:/project/a.php`). Returns `None` when `uri` is not a file URI or does
/// not decode to UTF-8.
pub fn file_uri_to_path(uri: &str) -> Option<String> {
    let scheme = uri.get(..FILE_SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(FILE_SCHEME) {
        return None;
    }

    let decoded = percent_decode_str(&uri[FILE_SCHEME.len()..])
        .decode_utf8()
        .ok()?;
    let path = decoded.replace('\\', "/");
    match path.strip_prefix('/') {
        Some(rest) if has_drive_prefix(rest) => Some(rest.to_string()),
        _ => Some(path),
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Relative,
    Root,
    /// Upper-cased drive letter
    Drive(char),
}

/// Lexically normalized path: separators folded, `.` and empty segments
/// dropped, `..` resolved where possible.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NormalizedPath {
    anchor: Anchor,
    segments: Vec<String>,
}

impl NormalizedPath {
    fn parse(path: &str) -> Self {
        let path = path.replace('\\', "/");

        let (anchor, rest) = if has_drive_prefix(&path) {
            let drive = char::from(path.as_bytes()[0].to_ascii_uppercase());
            (Anchor::Drive(drive), &path[2..])
        } else if let Some(rest) = path.strip_prefix('/') {
            (Anchor::Root, rest)
        } else {
            (Anchor::Relative, path.as_str())
        };

        let mut segments: Vec<String> = Vec::new();
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                // `..` above an absolute root stays at the root
                ".." => {
                    if segments.last().is_some_and(|last| last != "..") {
                        segments.pop();
                    } else if anchor == Anchor::Relative {
                        segments.push(segment.to_string());
                    }
                }
                _ => segments.push(segment.to_string()),
            }
        }

        Self { anchor, segments }
    }
}

/// Workspace root that file paths are made relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    path: NormalizedPath,
}

impl WorkspaceRoot {
    /// Normalizes `root`, which should be absolute: file URIs always are, so
    /// nothing lies inside a relative root.
    pub fn new(root: &str) -> Self {
        let path = NormalizedPath::parse(root);
        if path.anchor == Anchor::Relative {
            debug!("Workspace root `{root}` is relative, no file URI will fall inside it");
        }
        Self { path }
    }

    pub fn is_absolute(&self) -> bool {
        self.path.anchor != Anchor::Relative
    }

    /// Path of `path` relative to this root, joined with `/`.
    ///
    /// Returns `None` when `path` does not live strictly inside the root
    /// (a different drive, a sibling directory, or the root itself).
    pub fn relative_path(&self, path: &str) -> Option<String> {
        let path = NormalizedPath::parse(path);
        if path.anchor != self.path.anchor || path.segments.len() <= self.path.segments.len() {
            return None;
        }

        let (head, tail) = path.segments.split_at(self.path.segments.len());
        if head != self.path.segments.as_slice() {
            return None;
        }

        Some(tail.join("/"))
    }

    /// [`file_uri_to_path`] followed by [`WorkspaceRoot::relative_path`].
    pub fn relative_uri_path(&self, uri: &str) -> Option<String> {
        self.relative_path(&file_uri_to_path(uri)?)
    }
}
