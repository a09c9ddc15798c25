//! Command implementations for the docsift CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::analysis::tokenizer::whitespace::is_separator;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::analyzer::{DocumentAnalyzer, WordSearch};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::error::{DocsiftError, Result};

/// Execute a CLI command.
pub fn execute_command(args: DocsiftArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Analyze(analyze_args) => analyze_document(analyze_args.clone(), config, &args),
        Command::Session(session_args) => run_session(session_args.clone(), config, &args),
    }
}

/// Load the analyzer configuration named on the command line, or the defaults.
fn load_config(args: &DocsiftArgs) -> Result<AnalyzerConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            AnalyzerConfig::from_json_file(path)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Read a plain text document and split it into words.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        DocsiftError::analysis(format!("cannot read document {}: {e}", path.display()))
    })?;
    let words = WhitespaceTokenizer::new().words(&text)?;
    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Analyze a single document.
fn analyze_document(
    args: AnalyzeArgs,
    config: AnalyzerConfig,
    cli_args: &DocsiftArgs,
) -> Result<()> {
    let words = read_document(&args.document)?;

    let mut analyzer = DocumentAnalyzer::with_config(config);
    analyzer.analyze(words);

    let source = args.document.display().to_string();
    let mut report = AnalysisReport::from_analyzer(&source, &analyzer, args.top);
    report.search = args.query.as_deref().map(|query| analyzer.find_word(query));

    output_result("Analysis complete", &report, cli_args)
}

/// One line of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `analyze <words...>`
    Analyze(Vec<String>),
    /// `load <path>`
    Load(PathBuf),
    /// `find <query>`
    Find(String),
    /// `report [n]`
    Report(Option<usize>),
    /// `undo`
    Undo,
    /// `redo`
    Redo,
    /// `reset`
    Reset,
    /// `history`
    History,
}

impl SessionCommand {
    /// Parse a script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let Some(keyword) = WhitespaceTokenizer::new().tokenize(line)?.next() else {
            return Ok(None);
        };
        if keyword.text.starts_with('#') {
            return Ok(None);
        }
        let rest = line[keyword.end_offset..].trim_matches(is_separator);

        let command = match keyword.text.to_ascii_lowercase().as_str() {
            "analyze" => SessionCommand::Analyze(WhitespaceTokenizer::new().words(rest)?),
            "load" if !rest.is_empty() => SessionCommand::Load(PathBuf::from(rest)),
            "load" => return Err(DocsiftError::invalid_argument("load needs a file path")),
            "find" => SessionCommand::Find(rest.to_string()),
            "report" if rest.is_empty() => SessionCommand::Report(None),
            "report" => {
                let limit = rest.parse::<usize>().map_err(|_| {
                    DocsiftError::invalid_argument(format!("report limit is not a number: {rest}"))
                })?;
                SessionCommand::Report(Some(limit))
            }
            "undo" => SessionCommand::Undo,
            "redo" => SessionCommand::Redo,
            "reset" => SessionCommand::Reset,
            "history" => SessionCommand::History,
            other => {
                return Err(DocsiftError::invalid_argument(format!(
                    "unknown session command at column {}: {other}",
                    keyword.start_offset + 1
                )));
            }
        };

        Ok(Some(command))
    }
}

/// What a session command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutput {
    Report(AnalysisReport),
    Search(WordSearch),
    History(HistoryStatus),
}

/// Apply one session command to `analyzer`.
pub fn apply_session_command(
    analyzer: &mut DocumentAnalyzer,
    command: SessionCommand,
) -> Result<SessionOutput> {
    let output = match command {
        SessionCommand::Analyze(words) => {
            analyzer.analyze(words);
            SessionOutput::Report(AnalysisReport::from_analyzer("inline", analyzer, None))
        }
        SessionCommand::Load(path) => {
            let words = read_document(&path)?;
            analyzer.analyze(words);
            let source = path.display().to_string();
            SessionOutput::Report(AnalysisReport::from_analyzer(&source, analyzer, None))
        }
        SessionCommand::Find(query) => SessionOutput::Search(analyzer.find_word(&query)),
        SessionCommand::Report(limit) => {
            SessionOutput::Report(AnalysisReport::from_analyzer("current", analyzer, limit))
        }
        SessionCommand::Undo => {
            let success = analyzer.undo();
            SessionOutput::History(HistoryStatus::from_analyzer("undo", success, analyzer))
        }
        SessionCommand::Redo => {
            let success = analyzer.redo();
            SessionOutput::History(HistoryStatus::from_analyzer("redo", success, analyzer))
        }
        SessionCommand::Reset => {
            analyzer.reset();
            SessionOutput::History(HistoryStatus::from_analyzer("reset", true, analyzer))
        }
        SessionCommand::History => {
            SessionOutput::History(HistoryStatus::from_analyzer("history", true, analyzer))
        }
    };
    Ok(output)
}

/// Run a session script line by line against one analyzer.
fn run_session(args: SessionArgs, config: AnalyzerConfig, cli_args: &DocsiftArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut analyzer = DocumentAnalyzer::with_config(config);

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let result = SessionCommand::parse(&line).and_then(|command| match command {
            Some(command) => apply_session_command(&mut analyzer, command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(output)) => print_session_output(&output, cli_args)?,
            Ok(None) => {}
            Err(e) if args.fail_fast => return Err(e),
            Err(e) => warn!("Line {} skipped: {e}", line_num + 1),
        }
    }

    Ok(())
}

fn print_session_output(output: &SessionOutput, cli_args: &DocsiftArgs) -> Result<()> {
    match output {
        SessionOutput::Report(report) => output_result("Analysis", report, cli_args),
        SessionOutput::Search(search) => output_result("Search", search, cli_args),
        SessionOutput::History(status) => output_result("History", status, cli_args),
    }
}
