use super::output::{Output, Report};

/// One supported language.
#[derive(Debug)]
pub struct LanguageRow {
    pub id: &'static str,
    pub extension: &'static str,
    /// Type definitions, or a data literal
    pub emits_types: bool,
}

#[derive(Debug)]
pub struct LanguagesReport {
    pub languages: Vec<LanguageRow>,
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self
            .languages
            .iter()
            .map(|row| row.id.len())
            .max()
            .unwrap_or(0);

        out.title("Languages");
        for row in &self.languages {
            let kind = if row.emits_types { "types" } else { "literal" };
            out.preformatted(&format!(
                "  {:<width$}  {:<7}  {}",
                row.id,
                row.extension,
                kind,
                width = width
            ));
        }
    }
}
