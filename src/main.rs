//! Celeritas - command line front end
//!
//! Exposes the typo-suggestion engine, the overflow-checked arithmetic and
//! the command registry.

use anyhow::{anyhow, bail, Result};
use celeritas::config::{self, Config};
use celeritas::{arithmetic, CommandRegistry, Operation, SuggestionMatcher};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $CELERITAS_CONFIG or the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fold integers with an overflow-checked operation
    Math {
        /// add, subtract, multiply, divide or modulus
        operation: String,

        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Print 0 instead of failing
        #[arg(long)]
        zero_on_failure: bool,
    },

    /// Suggest the closest candidate for a mistyped word
    Suggest {
        query: String,

        #[arg(required = true)]
        candidates: Vec<String>,

        /// Override the configured suggestion threshold
        #[arg(long)]
        max_distance: Option<usize>,

        /// Compare without regard to case
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// Resolve a celeritas command line, correcting typos
    Resolve { words: Vec<String> },

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("celeritas v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let config = Config::load_from(&config_path)?;
    debug!("Using config {:?} from {}", config, config_path.display());

    match args.command {
        Command::Math {
            operation,
            numbers,
            zero_on_failure,
        } => run_math(&config, &operation, &numbers, zero_on_failure),
        Command::Suggest {
            query,
            candidates,
            max_distance,
            ignore_case,
        } => {
            let matcher = SuggestionMatcher {
                max_distance: max_distance.unwrap_or(config.suggestion_threshold),
                case_sensitive: config.case_sensitive && !ignore_case,
            };
            match matcher.closest_match(&query, &candidates) {
                Some(s) => println!("{}\t{}", s.value, s.distance),
                None => println!("no suggestion"),
            }
            Ok(())
        }
        Command::Resolve { words } => {
            let registry = CommandRegistry::with_defaults(config.matcher());
            let invocation = registry.resolve(&words)?;
            if invocation.command == "help" {
                print!("{}", registry.help_text());
            } else {
                println!("{}", invocation);
            }
            Ok(())
        }
        Command::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "config already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to(&config_path)?;
            info!("📝 Wrote default config to {}", config_path.display());
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn run_math(config: &Config, operation: &str, numbers: &[i64], zero_on_failure: bool) -> Result<()> {
    let result = operation
        .parse::<Operation>()
        .map_err(|e| {
            let names = Operation::names();
            match config.matcher().did_you_mean(operation, &names) {
                Some(hint) => anyhow!("{}\n{}", e, hint),
                None => anyhow!("{}\nValid operations are: {}", e, names.join(", ")),
            }
        })
        .and_then(|op| arithmetic::compute(op, numbers).map_err(anyhow::Error::from));

    match result {
        Ok(value) => println!("{}", value),
        Err(e) if zero_on_failure || config.zero_on_failure => {
            warn!("⚠️ {}; printing 0", e);
            println!("0");
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
