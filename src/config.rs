use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_PAGES_DIR: &str = "data/pages";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding already-extracted page text.
    pub pages_dir: PathBuf,
    pub parse: ParseOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
            parse: ParseOptions::default(),
        }
    }
}

impl Settings {
    /// Defaults, then the optional file, then `EXAM_*` environment variables
    /// (`__` separates nested keys, e.g. `EXAM_PARSE__LOOKAHEAD_PAGES=2`).
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("EXAM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize::<Settings>()
            .context("invalid configuration")?;
        Ok(settings)
    }
}

/// Tunables for the corpus-specific heuristics of the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// How many following pages the section capture may read into.
    pub lookahead_pages: usize,
    /// Drop trailing initials-looking tokens from course titles.
    pub strip_trailing_initials: bool,
    /// Ordered suffix fixes for truncation artifacts in the source templates.
    pub title_corrections: Vec<TitleCorrection>,
}

/// Replace `suffix` with `replacement` when a course title ends with it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TitleCorrection {
    pub suffix: String,
    pub replacement: String,
}

impl TitleCorrection {
    pub fn new(suffix: impl Into<String>, replacement: impl Into<String>) -> Self {
        TitleCorrection {
            suffix: suffix.into(),
            replacement: replacement.into(),
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            lookahead_pages: 1,
            strip_trailing_initials: true,
            title_corrections: vec![TitleCorrection::new("Desig", "Design")],
        }
    }
}
