use anyhow::Result;
use camino::Utf8Path;
use clap::Parser;
use log::info;
use phpdiag_config::CONFIG_FILE_NAME;

use crate::{
    commands::PatternArgs,
    utils::styles::{fmt_bold, fmt_dimmed},
};

#[derive(Debug, Clone, Parser)]
pub struct PatternsCmd {
    #[command(flatten)]
    pub patterns: PatternArgs,
}

impl PatternsCmd {
    pub(crate) fn handle(&self, workspace: &Utf8Path) -> Result<()> {
        let patterns = self.patterns.resolve(workspace);

        if patterns.is_empty() {
            info!("No ignore patterns configured");
            info!("");
            info!(
                "Add an {field} array to {path} to skip files",
                field = fmt_bold("\"ignore\""),
                path = fmt_dimmed(workspace.join(CONFIG_FILE_NAME).as_str()),
            );
            return Ok(());
        }

        for pattern in &patterns {
            println!("{pattern}");
        }

        Ok(())
    }
}
