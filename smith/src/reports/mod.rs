//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod history;
mod languages;
mod output;

pub use generate::GenerateReport;
pub use history::{HistoryReport, HistoryRow};
pub use languages::{LanguageRow, LanguagesReport};
pub use output::{Report, TerminalOutput};
