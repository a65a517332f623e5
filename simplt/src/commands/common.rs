//! Common types and utilities for simplt commands.
//!
//! This module provides the shared scanning pipeline and the output
//! helpers used by every command.

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use simplc_lex::{lex_file, Token, TokenStream};
use simplc_util::{Diagnostic, Handler, SourceError, SourceResult};
use tracing::{debug, error};

use crate::error::{Result, SimpltError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `TOKEN: … | TYPE: … | LINE: …` line per token
    Text,
    /// One JSON array of tokens per file, one file per line
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolve a format name, rejecting unknown names.
    pub fn resolve(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| {
            SimpltError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
        })
    }
}

// ============================================================================
// Token Records
// ============================================================================

/// Serializable view of a token for JSON output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRecord<'a> {
    /// Token kind name, e.g. `RELATIONAL_OPERATOR`
    pub kind: &'static str,
    /// Lexeme as emitted by the lexer
    pub text: &'a str,
    /// 1-based source line
    pub line: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.as_str(),
            text: &token.text,
            line: token.line,
        }
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// Outcome of scanning one file.
#[derive(Debug)]
pub struct FileScan {
    /// The file that was scanned.
    pub path: PathBuf,
    /// Tokens produced, end-of-input included.
    pub tokens: TokenStream,
    /// Diagnostics reported while scanning, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileScan {
    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }
}

/// Totals reported by a command once every file has been processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files scanned successfully.
    pub files: usize,
    /// Tokens produced across all files, end-of-input included.
    pub tokens: usize,
    /// Unrecognized characters across all files.
    pub errors: usize,
}

impl ScanSummary {
    /// Folds one scanned file into the totals.
    pub fn record(&mut self, scan: &FileScan) {
        self.files += 1;
        self.tokens += scan.tokens.len();
        self.errors += scan.error_count();
    }
}

/// Scan a single file with its own lexer and handler.
fn scan_file(path: &Path) -> SourceResult<FileScan> {
    let mut handler = Handler::new();
    let tokens = lex_file(path, &mut handler)?;
    debug!(path = %path.display(), tokens = tokens.len(), "scanned file");

    Ok(FileScan {
        path: path.to_path_buf(),
        tokens,
        diagnostics: handler.take_diagnostics(),
    })
}

/// Scan every file on a pool of `jobs` workers.
///
/// Results come back in the order of `paths`, whatever order the workers
/// finish in.
pub fn scan_files(paths: &[PathBuf], jobs: usize) -> Result<Vec<SourceResult<FileScan>>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| {
            SimpltError::CommandExecution(format!("Failed to start worker pool: {}", e))
        })?;

    Ok(pool.install(|| paths.par_iter().map(|path| scan_file(path)).collect()))
}

/// Log every file that could not be loaded and fail with the first one.
pub fn report_failures(failures: Vec<SourceError>) -> Result<()> {
    for failure in &failures {
        error!("{}", failure);
    }
    match failures.into_iter().next() {
        Some(first) => Err(SimpltError::Source(first)),
        None => Ok(()),
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate that every input path exists and is a file.
pub fn validate_inputs(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(SimpltError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }

    for path in paths {
        if !path.exists() {
            return Err(SimpltError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(SimpltError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_FILE,
                path.display()
            )));
        }
    }

    Ok(())
}

/// Resolve the worker count, rejecting zero.
pub fn resolve_jobs(jobs: u32) -> Result<usize> {
    match jobs {
        0 => Err(SimpltError::Validation(
            error_messages::ZERO_JOBS.to_string(),
        )),
        n => Ok(n as usize),
    }
}

// ============================================================================
// Output
// ============================================================================

/// Write one token per line in the listing format.
pub fn write_text(out: &mut impl Write, tokens: &TokenStream) -> Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Write the tokens as a single-line JSON array.
pub fn write_json(out: &mut impl Write, tokens: &TokenStream) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Write every diagnostic of `scan`, prefixed with its file and position.
pub fn write_diagnostics(out: &mut impl Write, scan: &FileScan) -> Result<()> {
    for diagnostic in &scan.diagnostics {
        writeln!(
            out,
            "{}:{}: {}",
            scan.path.display(),
            diagnostic.span,
            diagnostic
        )?;
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when the worker count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when unrecognized characters were found.
    pub const UNRECOGNIZED_FOUND: &str = "unrecognized character(s) found";
}
