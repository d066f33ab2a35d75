use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Args;
use eyre::{Context, Result, eyre};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};
use typesmith_codegen::{DEFAULT_ROOT_NAME, GeneratedSource, file_extension, generate_source};
use typesmith_core::{Language, to_snake_case};

use crate::{
    config::Config,
    reports::{GenerateReport, Report, TerminalOutput},
};

/// History module under which generated inputs are recorded.
pub(crate) const HISTORY_MODULE: &str = "json-to-code";

/// Language used when neither the flag nor the config names one.
const DEFAULT_LANGUAGE: &str = "TypeScript";

#[derive(Args)]
pub struct GenerateCommand {
    /// JSON file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Target language (e.g. Go, TypeScript, Objective-C, C#)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Name of the top-level type
    #[arg(long)]
    pub root: Option<String>,

    /// Keep JSON keys as property names instead of converting them to camelCase
    #[arg(long)]
    pub no_camel_case: bool,

    /// Write the code to this file instead of stdout
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write the code into this directory, named after the root type
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Do not record the input in history
    #[arg(long)]
    pub no_history: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, config: &Config) -> Result<()> {
        let input = self.read_input()?;
        let value: Value = serde_json::from_str(&input).wrap_err("Input is not valid JSON")?;

        let language_id = canonical_id(self.language_id(config));
        let root = self.root_name(config);
        let use_camel_case = !self.no_camel_case && config.generate.camel_case;

        let source = generate_source(&value, language_id, root, use_camel_case);

        match self.destination(language_id, root, &source)? {
            Some(path) => {
                write_file(&path, &source.code)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                GenerateReport {
                    language: source.language,
                    path,
                    lines: source.code.lines().count(),
                }
                .render(&mut TerminalOutput::new());
            }
            None => println!("{}", source.code),
        }

        if !self.no_history && config.history.enabled {
            record_history(config, &input, &source);
        }
        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        if self.input == "-" {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .wrap_err("Failed to read JSON from stdin")?;
            return Ok(input);
        }
        fs::read_to_string(&self.input).wrap_err_with(|| format!("Failed to read {}", self.input))
    }

    fn language_id<'a>(&'a self, config: &'a Config) -> &'a str {
        self.language
            .as_deref()
            .or(config.generate.language.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    fn root_name<'a>(&'a self, config: &'a Config) -> &'a str {
        self.root
            .as_deref()
            .or(config.generate.root.as_deref())
            .unwrap_or(DEFAULT_ROOT_NAME)
    }

    /// File to write to, or `None` for stdout.
    fn destination(
        &self,
        language_id: &str,
        root: &str,
        source: &GeneratedSource,
    ) -> Result<Option<PathBuf>> {
        if let Some(output) = &self.output {
            return Ok(Some(output.clone()));
        }
        let Some(dir) = &self.out_dir else {
            return Ok(None);
        };
        if file_extension(language_id).is_none() {
            return Err(eyre!(
                "Unknown language '{language_id}': cannot choose a file extension"
            ));
        }
        Ok(Some(dir.join(source.file_name(&to_snake_case(root)))))
    }
}

/// Resolve aliases such as `ts` or `golang` to the identifier the generator
/// expects. Unknown names pass through and generate JavaScript.
fn canonical_id(requested: &str) -> &str {
    match requested.parse::<Language>() {
        Ok(language) => language.as_str(),
        Err(err) => {
            warn!(%err, "generating JavaScript");
            requested
        }
    }
}

fn record_history(config: &Config, input: &str, source: &GeneratedSource) {
    let mut extra = Map::new();
    extra.insert("language".to_string(), json!(source.language.as_str()));

    match config.history.store().save(HISTORY_MODULE, input, extra) {
        Ok(saved) => debug!(saved, "history updated"),
        Err(err) => warn!(error = %err, "could not record input in history"),
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}\n", content))
}
