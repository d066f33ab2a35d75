use std::path::PathBuf;

use chrono::{DateTime, Local};
use typesmith_history::HistoryEntry;

use super::output::{Output, Report};

const PREVIEW_CHARS: usize = 60;

#[derive(Debug)]
pub struct HistoryRow {
    pub module: String,
    pub time: String,
    pub language: Option<String>,
    pub preview: String,
}

impl HistoryRow {
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        let time = DateTime::from_timestamp_millis(entry.time)
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| entry.time.to_string());
        Self {
            module: entry.module.clone(),
            time,
            language: entry
                .get("language")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            preview: preview(&entry.input),
        }
    }
}

/// Input collapsed to one line and shortened.
fn preview(input: &str) -> String {
    let line = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() <= PREVIEW_CHARS {
        return line;
    }
    let mut short: String = line.chars().take(PREVIEW_CHARS - 1).collect();
    short.push('…');
    short
}

#[derive(Debug)]
pub struct HistoryReport {
    pub path: PathBuf,
    pub rows: Vec<HistoryRow>,
    /// Entries before applying the display limit
    pub total: usize,
}

impl Report for HistoryReport {
    fn render(&self, out: &mut dyn Output) {
        if self.rows.is_empty() {
            out.preformatted("No history yet");
            return;
        }

        out.key_value("History", &self.path.display().to_string());
        out.newline();
        for (i, row) in self.rows.iter().enumerate() {
            let language = row
                .language
                .as_ref()
                .map(|l| format!(" [{}]", l))
                .unwrap_or_default();
            out.numbered_item(
                i + 1,
                &format!("{} {}{}  {}", row.time, row.module, language, row.preview),
            );
        }
        if self.total > self.rows.len() {
            out.newline();
            out.preformatted(&format!("… {} more", self.total - self.rows.len()));
        }
    }
}
