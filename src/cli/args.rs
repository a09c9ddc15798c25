//! Command line argument parsing for the docsift CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// docsift - word frequency and substring lookup for plain text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "docsift")]
#[command(about = "Word frequency, substring lookup and undo/redo history for text documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocsiftArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "DOCSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocsiftArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a text document and optionally search it
    Analyze(AnalyzeArgs),

    /// Run a script of analyzer commands (analyze, find, undo, redo, ...)
    Session(SessionArgs),
}

/// Arguments for analyzing a document
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Plain text document to analyze
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Word to look up after the analysis
    #[arg(short = 'w', long = "query", value_name = "WORD")]
    pub query: Option<String>,

    /// Show only the N most frequent words
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

/// Arguments for running a session script
#[derive(Parser, Debug, Clone)]
pub struct SessionArgs {
    /// Script file; standard input when omitted
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Stop at the first line that fails
    #[arg(long)]
    pub fail_fast: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
