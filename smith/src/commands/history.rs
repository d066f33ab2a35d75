use clap::Args;
use eyre::Result;

use super::generate::HISTORY_MODULE;
use crate::{
    config::Config,
    reports::{HistoryReport, HistoryRow, Report, TerminalOutput},
};

#[derive(Args)]
pub struct HistoryCommand {
    /// Only show entries recorded by this module
    #[arg(short, long)]
    pub module: Option<String>,

    /// Print the most recent input verbatim (of `--module`, or of `generate`)
    #[arg(long)]
    pub last: bool,

    /// Show at most this many entries
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl HistoryCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let store = config.history.store();

        if self.last {
            let module = self.module.as_deref().unwrap_or(HISTORY_MODULE);
            let input = store.last(module);
            if !input.is_empty() {
                println!("{}", input);
            }
            return Ok(());
        }

        let entries = match &self.module {
            Some(module) => store.module_history(module),
            None => store.entries(),
        };
        let report = HistoryReport {
            path: store.path().to_path_buf(),
            rows: entries
                .iter()
                .take(self.limit.unwrap_or(usize::MAX))
                .map(HistoryRow::from_entry)
                .collect(),
            total: entries.len(),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
