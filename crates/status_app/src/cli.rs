use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use document_engine::DocumentFormat;

use crate::settings::{LogTarget, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "Reading-time and reading-level status for documents", long_about = None)]
pub struct Cli {
    /// Documents to analyse; reads stdin when none are given
    pub files: Vec<PathBuf>,

    /// How to interpret document content
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    pub format: FormatArg,

    /// Character limit shown in the status line
    #[arg(long, conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Disable the character limit
    #[arg(long)]
    pub no_limit: bool,

    /// Write a JSON metrics report per document into this directory
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Force a text encoding label instead of detecting it
    #[arg(long)]
    pub encoding: Option<String>,

    /// Re-analyse the single given file whenever it changes
    #[arg(long, requires = "files")]
    pub watch: bool,

    /// Polling interval for --watch, in milliseconds
    #[arg(long, default_value_t = 250)]
    pub interval_ms: u64,

    /// Path to the settings file
    #[arg(long, default_value = "status.ron")]
    pub config: PathBuf,

    /// Write the effective settings to --config and exit
    #[arg(long)]
    pub init_config: bool,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Auto,
    Text,
    Html,
}

impl From<FormatArg> for DocumentFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Auto => DocumentFormat::Auto,
            FormatArg::Text => DocumentFormat::Text,
            FormatArg::Html => DocumentFormat::Html,
        }
    }
}

impl Cli {
    /// Command-line flags take precedence over the settings file.
    pub fn apply_to(&self, settings: &mut Settings) {
        if self.no_limit {
            settings.character_limit = None;
        } else if let Some(limit) = self.limit {
            settings.character_limit = Some(limit);
        }
        if let Some(dir) = &self.report {
            settings.report_dir = Some(dir.clone());
        }
        if let Some(encoding) = &self.encoding {
            settings.encoding = Some(encoding.clone());
        }
        if let Some(log) = self.log {
            settings.log = log;
        }
    }
}
