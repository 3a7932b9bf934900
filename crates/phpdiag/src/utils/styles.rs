use anstyle::{AnsiColor, Color, Style};
use clap::builder::Styles;
use log::Level;

use crate::utils::{CHECK, MARK};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Section headers and the usage line
const HEADING: Style = fg(AnsiColor::Cyan).bold();
/// Flags, subcommands and glob patterns
const LITERAL: Style = fg(AnsiColor::Yellow);
const PLACEHOLDER: Style = fg(AnsiColor::Cyan).italic();
const KEPT: Style = fg(AnsiColor::Green);
const DROPPED: Style = fg(AnsiColor::Yellow);
const ERROR: Style = fg(AnsiColor::Red).bold();

pub fn get_styles() -> Styles {
    Styles::styled()
        .usage(HEADING)
        .header(HEADING)
        .literal(LITERAL.bold())
        .placeholder(PLACEHOLDER)
        .valid(KEPT.bold())
        .invalid(ERROR)
        .error(ERROR)
}

/// Prefix style of a log line at `level`; info lines have none.
pub(crate) fn level_style(level: Level) -> Style {
    match level {
        Level::Error => ERROR,
        Level::Warn => fg(AnsiColor::Yellow).bold(),
        Level::Info => Style::new(),
        Level::Debug => fg(AnsiColor::Blue),
        Level::Trace => Style::new().dimmed(),
    }
}

fn fmt_style(msg: &str, style: &Style) -> String {
    format!("{style}{msg}{style:#}")
}

/// A glob pattern as it appears in `intelephense.json`
pub(crate) fn fmt_pattern(msg: &str) -> String {
    fmt_style(msg, &LITERAL)
}

pub(crate) fn fmt_bold(msg: &str) -> String {
    fmt_style(msg, &Style::new().bold())
}

pub(crate) fn fmt_dimmed(msg: &str) -> String {
    fmt_style(msg, &Style::new().dimmed())
}

/// `✔ msg`, for files whose diagnostics are kept
pub(crate) fn fmt_kept(msg: &str) -> String {
    format!("{} {msg}", fmt_style(CHECK, &KEPT))
}

/// `✘ msg`, for files whose diagnostics are dropped
pub(crate) fn fmt_ignored(msg: &str) -> String {
    format!("{} {msg}", fmt_style(MARK, &DROPPED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_wrap_message() {
        assert!(fmt_kept("src/a.php").ends_with(" src/a.php"));
        assert!(fmt_kept("src/a.php").contains(CHECK));
        assert!(fmt_ignored("vendor/a.php").contains(MARK));
    }

    #[test]
    fn test_info_lines_are_unstyled() {
        assert_eq!(level_style(Level::Info), Style::new());
        assert_ne!(level_style(Level::Warn), Style::new());
    }
}
