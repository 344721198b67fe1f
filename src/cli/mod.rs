//! CLI module for objgen
//!
//! This module provides the command-line interface for the implementation-unit emitter.
//!
//! ## Commands
//!
//! - `emit <MODEL.json>` - Render one `.m` file per type in the model
//! - `check <MODEL.json>` - Validate the model without writing output
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
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::config::EmitConfig;

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
    /// Create a new CLI error with a message and exit code.
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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Objective-C implementation-unit emitter
#[derive(Parser, Debug)]
#[command(name = "objgen")]
#[command(version = VERSION)]
#[command(about = "Render Objective-C implementation units from resolved type models", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one `.m` file per type
    Emit {
        /// JSON model: one type or an array of types
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Output directory (default: current directory)
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
        #[command(flatten)]
        options: EmitOptions,
    },

    /// Validate a model without writing output
    Check {
        /// JSON model: one type or an array of types
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        #[command(flatten)]
        options: EmitOptions,
    },
}

/// Generation options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct EmitOptions {
    /// Interleave `#line` markers mapping output to source lines
    #[arg(long)]
    pub emit_line_directives: bool,
    /// Emit class-method accessors for static fields and enum constants
    #[arg(long)]
    pub static_accessor_methods: bool,
    /// Reserved-symbol list, one per line (replaces the built-in C standard list)
    #[arg(long, value_name = "FILE")]
    pub reserved_symbols: Option<PathBuf>,
    /// Worker threads for rendering
    #[arg(short, long, value_name = "N", default_value = "1")]
    pub jobs: NonZeroUsize,
}

impl EmitOptions {
    pub fn config(&self) -> EmitConfig {
        EmitConfig::new()
            .with_line_directives(self.emit_line_directives)
            .with_static_accessor_methods(self.static_accessor_methods)
    }
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
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Emit { model, output, options } => commands::emit(&model, &output, &options),
        Command::Check { model, options } => commands::check(&model, &options),
    }
}

// ============================================================================
// Tests
// ============================================================================
