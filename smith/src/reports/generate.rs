use std::path::PathBuf;

use typesmith_core::Language;

use super::output::{Output, Report};

/// Summary of a generate run that wrote a file.
#[derive(Debug)]
pub struct GenerateReport {
    /// Language the code was generated for, after fallback.
    pub language: Language,
    /// File written.
    pub path: PathBuf,
    /// Number of generated lines.
    pub lines: usize,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.added_item(&format!(
            "{} ({}, {} lines)",
            self.path.display(),
            self.language,
            self.lines
        ));
    }
}
