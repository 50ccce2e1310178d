//! CLI module for tern
//!
//! This module provides the command-line interface for the front end.
//!
//! ## Commands
//!
//! - `tokens <file>` - Dump the token stream
//! - `parse <file>` - Parse a file and print its AST
//! - `expr <expr>` - Parse a single expression and print its AST
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::parser::ParseOptions;
use crate::version::TERN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a front-end diagnostic through miette as a failure.
    pub fn diagnostic<E>(err: E) -> Self
    where
        E: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the tern codec DSL
#[derive(Parser, Debug)]
#[command(name = "tern")]
#[command(version = TERN_VERSION)]
#[command(about = "Front end for the tern codec DSL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub names: NameFlags,
}

/// Name-legality switches shared by every command that parses.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct NameFlags {
    /// Allow built-in names (u32, in, length, ...) in declaration positions
    #[arg(long, global = true)]
    pub allow_builtin_names: bool,

    /// Allow names starting with "__" in declaration positions
    #[arg(long, global = true)]
    pub allow_double_underscore_names: bool,
}

impl From<NameFlags> for ParseOptions {
    fn from(flags: NameFlags) -> Self {
        ParseOptions::default()
            .with_builtin_names(flags.allow_builtin_names)
            .with_double_underscore_names(flags.allow_double_underscore_names)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump the token stream of a source file
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a source file and print its AST
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a single expression and print its AST
    Expr {
        /// Expression source text
        #[arg(value_name = "EXPR")]
        source: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its printable output.
pub fn execute(cli: Cli) -> CliResult<String> {
    let options = ParseOptions::from(cli.names);
    match cli.command {
        Command::Tokens { file } => commands::tokens_file(&file.to_string_lossy()),
        Command::Parse { file } => commands::parse_file(&file.to_string_lossy(), &options),
        Command::Expr { source } => commands::parse_expr_source(&source, &options),
    }
}

// ============================================================================
// Tests
// ============================================================================
