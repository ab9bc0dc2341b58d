//! Celeritas Error Types
//!
//! Centralized error handling for the library and the CLI.

use crate::arithmetic::Operation;
use thiserror::Error;

/// Why an overflow-checked fold could not produce a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("integer overflow: {lhs} {} {rhs}", .op.symbol())]
    Overflow { op: Operation, lhs: i64, rhs: i64 },

    #[error("division by zero: {lhs} {} 0", .op.symbol())]
    DivideByZero { op: Operation, lhs: i64 },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Central error type for Celeritas
#[derive(Error, Debug)]
pub enum CeleritasError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("command required")]
    CommandRequired,

    #[error("invalid command: {input}\n{}", hint(.suggestion, "Run 'celeritas help' for usage"))]
    UnknownCommand {
        input: String,
        suggestion: Option<String>,
    },

    #[error("{command} requires a subcommand: ({})", .valid.join("|"))]
    MissingSubcommand { command: String, valid: Vec<String> },

    #[error(
        "invalid '{command}' subcommand: {input}\n{}",
        subcommand_hint(.suggestion, .valid)
    )]
    UnknownSubcommand {
        command: String,
        input: String,
        suggestion: Option<String>,
        valid: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Celeritas operations
pub type CeleritasResult<T> = Result<T, CeleritasError>;

fn hint(suggestion: &Option<String>, fallback: &str) -> String {
    match suggestion {
        Some(s) => format!("Did you mean '{}'?", s),
        None => fallback.to_string(),
    }
}

fn subcommand_hint(suggestion: &Option<String>, valid: &[String]) -> String {
    let valid = format!("Valid subcommands are: {}", valid.join(", "));
    match suggestion {
        Some(s) => format!("Did you mean '{}'?\n{}", s, valid),
        None => valid,
    }
}
