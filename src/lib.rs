//! Celeritas Library
//!
//! Typo suggestions and overflow-checked integer arithmetic used by the
//! `celeritas` command line.

pub mod arithmetic;
pub mod commands;
pub mod config;
pub mod error;
pub mod utils;

pub use arithmetic::{compute, compute_named, compute_or_zero, would_overflow, Operation};
pub use commands::{CommandRegistry, CommandSpec, Invocation};
pub use config::Config;
pub use error::{ArithmeticError, CeleritasError, CeleritasResult};
pub use utils::{closest_match, levenshtein, Suggestion, SuggestionMatcher};
