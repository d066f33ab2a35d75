//! `typesmith.toml` configuration.
//!
//! ```toml
//! [generate]
//! language = "Go"
//! root = "Root"
//! camel_case = true
//!
//! [history]
//! enabled = true
//! path = ".typesmith/history.json"
//! max_entries = 50
//! ```
//!
//! Every key is optional; command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use typesmith_core::Language;
use typesmith_history::{DEFAULT_MAX_ENTRIES, HistoryStore};

use crate::error::{Error, Result, SourceContext};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "typesmith.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generate: GenerateConfig,
    pub history: HistoryConfig,
}

/// Defaults for `typesmith generate`.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub language: Option<String>,
    pub root: Option<String>,
    pub camel_case: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            language: None,
            root: None,
            camel_case: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(".typesmith/history.json"),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl HistoryConfig {
    pub fn store(&self) -> HistoryStore {
        HistoryStore::open(&self.path).with_max_entries(self.max_entries)
    }
}

impl Config {
    /// Load the config for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used when present and defaults otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::open(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Read and validate a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config text, naming `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(language) = &self.generate.language
            && language.parse::<Language>().is_err()
        {
            return Err(ctx.unknown_language_error(language));
        }

        if let Some(root) = &self.generate.root
            && root.trim().is_empty()
        {
            return Err(ctx.validation_error("root type name cannot be empty", ctx.find("root")));
        }

        if self.history.max_entries == 0 {
            return Err(ctx.validation_error(
                "max_entries must be at least 1",
                ctx.find("max_entries"),
            ));
        }

        Ok(())
    }
}
