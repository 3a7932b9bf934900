use std::io::Write;

use log::{Level, LevelFilter};

use crate::utils::styles::{fmt_dimmed, level_style};

/// Crates that `-v` turns up; `-vv` turns up everything
const CRATES: &[&str] = &["phpdiag", "phpdiag_config", "diagnostic_filter"];

fn level_filter(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

fn label(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Logs go to stderr so stdout stays machine readable. Info lines print bare,
/// the rest as `warning: ...`, with the emitting module at debug and trace.
pub fn init_logger(quiet: bool, verbose: u8) {
    let level = level_filter(quiet, verbose);
    let mut builder = env_logger::builder();

    if level == LevelFilter::Trace {
        builder.filter_level(level);
    } else {
        for module in CRATES {
            builder.filter_module(module, level);
        }
    }

    builder.format(|buf, record| {
        let level = record.level();
        let style = level_style(level);
        match level {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Error | Level::Warn => {
                writeln!(buf, "{style}{}:{style:#} {}", label(level), record.args())
            }
            Level::Debug | Level::Trace => writeln!(
                buf,
                "{style}{}:{style:#} {} {}",
                label(level),
                fmt_dimmed(record.target()),
                record.args()
            ),
        }
    });

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_pick_level() {
        assert_eq!(level_filter(false, 0), LevelFilter::Info);
        assert_eq!(level_filter(false, 1), LevelFilter::Debug);
        assert_eq!(level_filter(false, 3), LevelFilter::Trace);
        assert_eq!(level_filter(true, 2), LevelFilter::Error);
    }

    #[test]
    fn test_labels_are_lowercase() {
        assert_eq!(label(Level::Warn), "warning");
        assert_eq!(label(Level::Error), "error");
    }
}
