//! Command registry
//!
//! Validates `celeritas` command lines against the known command table and
//! turns typos into "Did you mean" errors.

use crate::error::{CeleritasError, CeleritasResult};
use crate::utils::SuggestionMatcher;
use std::fmt;
use tracing::debug;

/// A top-level command and the subcommands it accepts
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: String,
    pub summary: String,
    /// Valid subcommands, in suggestion priority order
    pub subcommands: Vec<String>,
    /// Used when no subcommand is given
    pub default_subcommand: Option<String>,
    /// Fail instead of falling back when no subcommand is given
    pub requires_subcommand: bool,
}

impl CommandSpec {
    pub fn new(name: &str, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            summary: summary.to_string(),
            subcommands: Vec::new(),
            default_subcommand: None,
            requires_subcommand: false,
        }
    }

    pub fn with_subcommands(mut self, subcommands: &[&str]) -> Self {
        self.subcommands = subcommands.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_default(mut self, subcommand: &str) -> Self {
        self.default_subcommand = Some(subcommand.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.requires_subcommand = true;
        self
    }
}

/// A resolved command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub subcommand: Option<String>,
    pub argument: Option<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        if let Some(ref sub) = self.subcommand {
            write!(f, " {}", sub)?;
        }
        if let Some(ref arg) = self.argument {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Known commands plus the matcher used to correct typos
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    matcher: SuggestionMatcher,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new(matcher: SuggestionMatcher) -> Self {
        Self {
            commands: Vec::new(),
            matcher,
        }
    }

    /// Registry with the standard celeritas command table
    pub fn with_defaults(matcher: SuggestionMatcher) -> Self {
        let mut registry = Self::new(matcher);

        registry.add_command(CommandSpec::new("help", "show the help commands"));
        registry.add_command(CommandSpec::new("version", "print application version"));
        registry.add_command(
            CommandSpec::new("make", "generate a key, migration, model, handler or middleware")
                .with_subcommands(&["key", "migration", "model", "handler", "middleware"])
                .required(),
        );
        registry.add_command(
            CommandSpec::new("migrate", "run, reverse or reset database migrations")
                .with_subcommands(&["up", "down", "reset"])
                .with_default("up"),
        );
        registry.add_command(CommandSpec::new(
            "auth",
            "create authentication tables, models and middleware",
        ));
        registry.add_command(CommandSpec::new("model", "create a new model"));

        registry
    }

    /// Register a command. Re-registering a name replaces the earlier entry.
    pub fn add_command(&mut self, spec: CommandSpec) {
        debug!("Registering command '{}'", spec.name);
        match self.commands.iter_mut().find(|c| c.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.commands.push(spec),
        }
    }

    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Resolve `args` (without the program name) into an [`Invocation`]
    pub fn resolve<S: AsRef<str>>(&self, args: &[S]) -> CeleritasResult<Invocation> {
        let mut args = args.iter().map(|a| a.as_ref());

        let name = args.next().ok_or(CeleritasError::CommandRequired)?;
        let spec = self.get(name).ok_or_else(|| CeleritasError::UnknownCommand {
            input: name.to_string(),
            suggestion: self.suggest(name, &self.command_names()),
        })?;

        let subcommand = match args.next() {
            Some(sub) if spec.subcommands.is_empty() => Some(sub.to_string()),
            Some(sub) if spec.subcommands.iter().any(|s| s == sub) => Some(sub.to_string()),
            Some(sub) => {
                return Err(CeleritasError::UnknownSubcommand {
                    command: spec.name.clone(),
                    input: sub.to_string(),
                    suggestion: self.suggest(sub, &spec.subcommands),
                    valid: spec.subcommands.clone(),
                });
            }
            None if spec.requires_subcommand => {
                return Err(CeleritasError::MissingSubcommand {
                    command: spec.name.clone(),
                    valid: spec.subcommands.clone(),
                });
            }
            None => spec.default_subcommand.clone(),
        };

        Ok(Invocation {
            command: spec.name.clone(),
            subcommand,
            argument: args.next().map(str::to_string),
        })
    }

    fn suggest<S: AsRef<str>>(&self, input: &str, candidates: &[S]) -> Option<String> {
        self.matcher
            .closest_match(input, candidates)
            .map(|s| s.value)
    }

    /// Render the command table for `celeritas help`
    pub fn help_text(&self) -> String {
        let usages: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| {
                let usage = if c.subcommands.is_empty() {
                    c.name.clone()
                } else {
                    format!("{} <{}>", c.name, c.subcommands.join("|"))
                };
                (usage, c.summary.as_str())
            })
            .collect();

        let width = usages.iter().map(|(u, _)| u.len()).max().unwrap_or(0);

        let mut text = String::from("Available commands:\n");
        for (usage, summary) in usages {
            text += &format!("  {:<width$}  - {}\n", usage, summary, width = width);
        }
        text
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults(SuggestionMatcher::default())
    }
}
