//! Command traits for the simplt CLI.
//!
//! Every subcommand is a handler built from its arguments plus the loaded
//! configuration, then executed once.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all simplt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    ///
    /// # Returns
    /// * `Result<Self::Output>` - The command output or an error
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}
