pub mod explain;
pub mod filter;
pub mod patterns;

use camino::Utf8Path;
use clap::Args;
use log::debug;
use phpdiag_config::{Config, LogReporter, get_ignore_patterns};

/// Where ignore globs come from, shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct PatternArgs {
    /// Additional ignore glob relative to the workspace root, may be repeated
    #[arg(long = "ignore", short = 'i', value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Skip reading intelephense.json
    #[arg(long)]
    pub no_config: bool,
}

impl PatternArgs {
    /// Config globs first, in file order, then the ones given on the command line
    pub(crate) fn resolve(&self, workspace: &Utf8Path) -> Vec<String> {
        let mut patterns = if self.no_config {
            vec![]
        } else {
            let cfg = Config::load(workspace, &LogReporter);
            if cfg.is_none() {
                debug!("No usable config in {workspace}");
            }
            get_ignore_patterns(cfg.as_ref())
        };

        patterns.extend(self.ignore.iter().cloned());
        debug!("Ignore patterns: {patterns:?}");
        patterns
    }
}
