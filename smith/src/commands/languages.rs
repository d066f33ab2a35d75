use clap::Args;
use eyre::Result;
use typesmith_core::Language;

use crate::reports::{LanguageRow, LanguagesReport, Report, TerminalOutput};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        let report = LanguagesReport {
            languages: Language::ALL
                .into_iter()
                .map(|language| LanguageRow {
                    id: language.as_str(),
                    extension: language.extension(),
                    emits_types: language.emits_types(),
                })
                .collect(),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
