//! Command modules for the simplt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokenize;

// Re-export command types and functions
pub use check::{run_check, CheckArgs, CheckCommand};
pub use tokenize::{run_tokenize, TokenizeArgs, TokenizeCommand};
