//! Check command implementation.
//!
//! Scans each input file without printing tokens, reports diagnostics and
//! a per-file summary, and fails if any file contains unrecognized
//! characters.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::commands::common::{
    error_messages, report_failures, resolve_jobs, scan_files, validate_inputs,
    write_diagnostics, FileScan, ScanSummary,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{Result, SimpltError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to scan.
    pub files: Vec<PathBuf>,
    /// Number of parallel jobs; falls back to the configured count.
    pub jobs: Option<u32>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<ScanSummary> {
        let jobs = resolve_jobs(self.args.jobs.unwrap_or(self.config.jobs))?;
        validate_inputs(&self.args.files)?;

        let scans = scan_files(&self.args.files, jobs)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let stderr = io::stderr();
        let mut err = stderr.lock();
        let mut summary = ScanSummary::default();
        let mut failures = Vec::new();

        for scan in scans {
            match scan {
                Ok(scan) => {
                    write_diagnostics(&mut err, &scan)?;
                    writeln!(out, "{}", Self::file_summary(&scan))?;
                    summary.record(&scan);
                }
                Err(e) => failures.push(e),
            }
        }
        out.flush()?;

        debug!(
            files = summary.files,
            errors = summary.errors,
            failed = failures.len(),
            "check finished"
        );
        if self.args.verbose {
            writeln!(
                err,
                "Checked {} file(s): {} token(s), {} error(s)",
                summary.files, summary.tokens, summary.errors
            )?;
        }

        report_failures(failures)?;
        Self::finish(summary)
    }

    /// One status line per file.
    fn file_summary(scan: &FileScan) -> String {
        let errors = scan.error_count();
        let status = if errors == 0 { "ok" } else { "FAILED" };
        format!(
            "{}: {} ({} token(s), {} error(s))",
            scan.path.display(),
            status,
            scan.tokens.len(),
            errors
        )
    }

    fn finish(summary: ScanSummary) -> Result<ScanSummary> {
        if summary.errors > 0 {
            return Err(SimpltError::CommandExecution(format!(
                "{} {}",
                summary.errors,
                error_messages::UNRECOGNIZED_FOUND
            )));
        }
        Ok(summary)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ScanSummary;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let _span = tracing::debug_span!("command", name = Self::name()).entered();
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report unrecognized characters without printing tokens"
    }

    fn help() -> &'static str {
        "Scans each source file, prints its diagnostics on stderr and a one-line \
         summary per file on stdout. Exits with an error if any file contains \
         unrecognized characters or cannot be read."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<ScanSummary> {
    CheckCommand::new(args, config).execute()
}
