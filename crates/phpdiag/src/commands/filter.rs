use std::{
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};
use camino::Utf8Path;
use clap::Parser;
use diagnostic_filter::{DiagnosticsMap, IgnoreMatcher};
use log::info;
use serde_json::Value;

use crate::{
    commands::PatternArgs,
    utils::styles::{fmt_bold, fmt_kept},
};

/// Reads diagnostics from stdin
const STDIN: &str = "-";

#[derive(Debug, Clone, Parser)]
pub struct FilterCmd {
    /// Diagnostics JSON (object of file URI to diagnostics array), `-` reads stdin
    #[arg(default_value = STDIN)]
    pub input: String,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Pretty-print the filtered JSON
    #[arg(long)]
    pub pretty: bool,
}

impl FilterCmd {
    pub(crate) fn handle(&self, workspace: &Utf8Path) -> Result<()> {
        let diagnostics = self.read_diagnostics()?;
        let total = diagnostics.len();

        let patterns = self.patterns.resolve(workspace);
        let kept = IgnoreMatcher::new(&patterns, workspace.as_str()).filter(diagnostics);

        let mut out = io::stdout().lock();
        write_diagnostics(&mut out, &kept, self.pretty)?;

        info!(
            "{}",
            fmt_kept(&format!(
                "{ignored} of {total} files ignored",
                ignored = fmt_bold(&(total - kept.len()).to_string()),
            ))
        );

        Ok(())
    }

    fn read_diagnostics(&self) -> Result<DiagnosticsMap<Value>> {
        let contents = if self.input == STDIN {
            io::read_to_string(io::stdin()).context("Failed to read diagnostics from stdin")?
        } else {
            fs::read_to_string(&self.input)
                .with_context(|| format!("Failed to read diagnostics file {}", self.input))?
        };

        parse_diagnostics(&contents).with_context(|| {
            format!(
                "Failed to parse diagnostics from {}",
                if self.input == STDIN { "stdin" } else { self.input.as_str() }
            )
        })
    }
}

/// Parses an object of file URI to diagnostics array, keeping document order
pub(crate) fn parse_diagnostics(contents: &str) -> Result<DiagnosticsMap<Value>> {
    serde_json::from_str(contents)
        .context("expected a JSON object mapping file URIs to arrays of diagnostics")
}

pub(crate) fn write_diagnostics(
    out: &mut impl Write,
    diagnostics: &DiagnosticsMap<Value>,
    pretty: bool,
) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, diagnostics)?;
    } else {
        serde_json::to_writer(&mut *out, diagnostics)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
