pub mod commands;
pub mod utils;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::commands::{explain::ExplainCmd, filter::FilterCmd, patterns::PatternsCmd};

#[derive(Parser)]
#[command(name = "phpdiag")]
#[command(version)]
#[command(about = "phpdiag - Intelephense diagnostics without the noise")]
#[command(
    long_about = "phpdiag drops diagnostics for files matched by the `ignore` globs of a workspace's \
intelephense.json, so vendored and generated code stays out of reports."
)]
#[command(after_help = "EXAMPLES:\n  \
    phpdiag filter diagnostics.json\n  \
    phpdiag -w ~/src/shop filter --ignore 'storage/**' < diagnostics.json\n  \
    phpdiag patterns\n  \
    phpdiag explain file:///home/me/shop/vendor/autoload.php\n\
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root holding intelephense.json, defaults to the current directory
    #[arg(
        long,
        short = 'w',
        global = true,
        env = "PHPDIAG_WORKSPACE",
        default_value = "."
    )]
    pub workspace: Utf8PathBuf,

    /// No logging except for errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verbose logging (-v) or trace logging (-vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    #[allow(clippy::missing_errors_doc)]
    pub fn handle(&self) -> anyhow::Result<()> {
        let workspace = utils::absolute_workspace(&self.workspace)?;

        match &self.command {
            Commands::Filter(cmd) => cmd.handle(&workspace),
            Commands::Patterns(cmd) => cmd.handle(&workspace),
            Commands::Explain(cmd) => cmd.handle(&workspace),
        }
    }
}

#[derive(Debug, Subcommand)]
#[command(styles=utils::styles::get_styles())]
pub enum Commands {
    /// Filter a diagnostics JSON document
    #[command(
        long_about = "Reads a JSON object mapping file URIs to diagnostic arrays and writes it back \
without the files matched by the workspace ignore globs."
    )]
    Filter(FilterCmd),

    /// List the effective ignore globs
    #[command(long_about = "Lists the ignore globs read from intelephense.json.")]
    Patterns(PatternsCmd),

    /// Show whether file URIs are ignored and by which glob
    #[command(long_about = "Checks each file URI against the ignore globs and reports the first match.")]
    Explain(ExplainCmd),
}
