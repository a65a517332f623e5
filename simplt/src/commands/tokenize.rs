//! Tokenize command implementation.
//!
//! Scans each input file and prints its token listing to stdout, with
//! diagnostics on stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::commands::common::{
    error_messages, report_failures, resolve_jobs, scan_files, validate_inputs,
    write_diagnostics, write_json, write_text, OutputFormat, ScanSummary,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{Result, SimpltError};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to scan.
    pub files: Vec<PathBuf>,
    /// Output format name; falls back to the configured one.
    pub format: Option<String>,
    /// Fail on unrecognized characters, in addition to the configured setting.
    pub strict: bool,
    /// Number of parallel jobs; falls back to the configured count.
    pub jobs: Option<u32>,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
    config: Config,
}

impl TokenizeCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<ScanSummary> {
        let start_time = Instant::now();
        let format = self.format()?;
        let jobs = resolve_jobs(self.args.jobs.unwrap_or(self.config.jobs))?;
        validate_inputs(&self.args.files)?;

        let scans = scan_files(&self.args.files, jobs)?;
        let show_headers = self.args.files.len() > 1 && format == OutputFormat::Text;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let stderr = io::stderr();
        let mut err = stderr.lock();
        let mut summary = ScanSummary::default();
        let mut failures = Vec::new();

        for scan in scans {
            let scan = match scan {
                Ok(scan) => scan,
                Err(e) => {
                    failures.push(e);
                    continue;
                }
            };

            write_diagnostics(&mut err, &scan)?;
            if show_headers {
                writeln!(out, "==> {} <==", scan.path.display())?;
            }
            match format {
                OutputFormat::Text => write_text(&mut out, &scan.tokens)?,
                OutputFormat::Json => write_json(&mut out, &scan.tokens)?,
            }
            summary.record(&scan);
        }
        out.flush()?;

        self.log_complete(start_time.elapsed(), &summary);
        report_failures(failures)?;
        self.finish(summary)
    }

    /// Effective output format: the flag wins over the configuration.
    fn format(&self) -> Result<OutputFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.tokenize.format);
        OutputFormat::resolve(name)
    }

    /// Whether unrecognized characters fail the command.
    fn is_strict(&self) -> bool {
        self.args.strict || self.config.tokenize.strict
    }

    /// Turn the totals into the command's exit status.
    fn finish(&self, summary: ScanSummary) -> Result<ScanSummary> {
        if self.is_strict() && summary.errors > 0 {
            return Err(SimpltError::CommandExecution(format!(
                "{} {}",
                summary.errors,
                error_messages::UNRECOGNIZED_FOUND
            )));
        }
        Ok(summary)
    }

    fn log_complete(&self, elapsed: std::time::Duration, summary: &ScanSummary) {
        debug!(
            files = summary.files,
            tokens = summary.tokens,
            errors = summary.errors,
            "tokenize finished"
        );
        if self.args.verbose {
            info!(
                "Tokenized {} file(s) in {:.2}s",
                summary.files,
                elapsed.as_secs_f64()
            );
        }
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = ScanSummary;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let _span = tracing::debug_span!("command", name = Self::name()).entered();
        self.run()
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

impl CommandDescription for TokenizeCommand {
    fn description() -> &'static str {
        "Print the token stream of each source file"
    }

    fn help() -> &'static str {
        "Scans each source file and prints one line per token in the form \
         `TOKEN: <text> | TYPE: <KIND> | LINE: <n>`, or a JSON array per file \
         with --format json. Unrecognized characters are reported on stderr \
         and skipped; with --strict they also make the command fail."
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs, config: Config) -> Result<ScanSummary> {
    TokenizeCommand::new(args, config).execute()
}
