//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Clausewise - Analyze legal contracts from the command line.
#[derive(Debug, Parser)]
#[command(name = "clausewise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CLAUSEWISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Analyzer preset, overriding the [analyzer] section
    #[arg(short, long, value_enum, global = true)]
    pub preset: Option<PresetArg>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare text only)
    Quiet,
}

/// Analyzer presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Summarize only the opening chunk
    Quick,
    /// Longer summaries, generous timeout
    Thorough,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the plain text of a PDF
    Extract(DocumentArgs),

    /// Summarize a document
    Summarize(DocumentArgs),

    /// Extract clauses from a document
    Clauses(ClausesArgs),

    /// Flag risky clauses in a document
    Risks(RisksArgs),

    /// Compare a clause against reference clauses
    Compare(CompareArgs),

    /// Rewrite a clause in clearer language
    Rewrite(RewriteArgs),

    /// Run clause extraction, risk flagging and comparison on a document
    Analyze(DocumentArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// A document to read.
#[derive(Debug, Clone, Args)]
pub struct DocumentArgs {
    /// Path to the document
    pub path: PathBuf,

    /// Treat the file as plain UTF-8 text instead of PDF
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the clauses command.
#[derive(Debug, Args)]
pub struct ClausesArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Extraction strategy, overriding the configured one
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the risks command.
#[derive(Debug, Args)]
pub struct RisksArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Extraction strategy, overriding the configured one
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Risk keyword (repeatable), replacing the configured list
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,
}

/// Arguments for the compare command.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Clause text to compare
    pub clause: String,

    /// Reference clause as label=text (repeatable); defaults to the standard library
    #[arg(short, long = "reference", value_parser = parse_reference)]
    pub references: Vec<(String, String)>,

    /// Show the score against every reference
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the rewrite command.
#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// Clause text to rewrite
    pub clause: String,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Clause extraction strategy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Sentences filed under keyword categories
    Keyword,
    /// Segments cut at "Clause N" markers
    Marker,
}

/// Parse a `label=text` reference clause.
pub fn parse_reference(s: &str) -> Result<(String, String), String> {
    let (label, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected label=text, got '{}'", s))?;
    let (label, text) = (label.trim(), text.trim());
    if label.is_empty() || text.is_empty() {
        return Err("reference label and text must not be empty".to_string());
    }
    Ok((label.to_string(), text.to_string()))
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for clausewise_analyzer::ExtractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Keyword => clausewise_analyzer::ExtractionMode::KeywordCategory,
            ModeArg::Marker => clausewise_analyzer::ExtractionMode::MarkerSegmentation,
        }
    }
}

impl From<PresetArg> for clausewise_analyzer::AnalyzerConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Quick => clausewise_analyzer::AnalyzerConfig::quick(),
            PresetArg::Thorough => clausewise_analyzer::AnalyzerConfig::thorough(),
        }
    }
}
