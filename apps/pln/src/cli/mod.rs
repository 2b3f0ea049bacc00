//! # PLN CLI Module
//!
//! This module implements the CLI interface for the reasoner.
//!
//! ## Available Commands
//!
//! - `run` - Build a scenario and forward chain
//! - `query` - Query a scenario by atom type
//! - `tv` - Truth-value calculator
//! - `demo` - Built-in Animal/Mammal/Dog/Canine walkthrough

mod commands;

use clap::{Parser, Subcommand};
use pln::AppError;
use pln_core::TruthValue;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// PLN - Probabilistic Logic Networks
///
/// A bounded AtomSpace of probabilistic beliefs with a deterministic
/// forward-chaining rule engine.
#[derive(Parser, Debug)]
#[command(name = "pln")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a scenario and run forward chaining
    Run {
        /// Path to the scenario file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// Atom name that stops chaining once concluded (overrides the file)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Query a scenario by atom type
    Query {
        /// Path to the scenario file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// Atom type (name, short name, or numeric code)
        #[arg(short = 't', long)]
        atom_type: String,

        /// Run forward chaining before querying
        #[arg(long)]
        after_chain: bool,
    },

    /// Truth-value calculator
    Tv {
        #[command(subcommand)]
        op: TvOp,
    },

    /// Run the built-in Animal/Mammal/Dog/Canine demo
    Demo,
}

/// Truth-value operations. Operands are `strength,confidence[,count]`.
#[derive(Subcommand, Debug)]
pub enum TvOp {
    /// Conjunction of two truth values
    And {
        #[arg(value_parser = parse_tv, allow_hyphen_values = true)]
        a: TruthValue,
        #[arg(value_parser = parse_tv, allow_hyphen_values = true)]
        b: TruthValue,
    },

    /// Probabilistic union of two truth values
    Or {
        #[arg(value_parser = parse_tv, allow_hyphen_values = true)]
        a: TruthValue,
        #[arg(value_parser = parse_tv, allow_hyphen_values = true)]
        b: TruthValue,
    },

    /// Negation of a truth value
    Not {
        #[arg(value_parser = parse_tv, allow_hyphen_values = true)]
        a: TruthValue,
    },
}

/// Parse `strength,confidence[,count]`. Out-of-range values are clamped.
fn parse_tv(s: &str) -> Result<TruthValue, String> {
    let fields = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| format!("'{}' is not a number: {}", part.trim(), e))
        })
        .collect::<Result<Vec<f32>, String>>()?;

    match fields.as_slice() {
        [strength, confidence] => Ok(TruthValue::new(*strength, *confidence, 0.0)),
        [strength, confidence, count] => Ok(TruthValue::new(*strength, *confidence, *count)),
        _ => Err(format!(
            "expected strength,confidence[,count], got {} field(s)",
            fields.len()
        )),
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let json_mode = cli.json_mode;
    let verbose = cli.verbose;

    match cli.command {
        Some(Commands::Run { file, target }) => {
            cmd_run(&file, target.as_deref(), json_mode, verbose)
        }
        Some(Commands::Query {
            file,
            atom_type,
            after_chain,
        }) => cmd_query(&file, &atom_type, after_chain, json_mode),
        Some(Commands::Tv { op }) => cmd_tv(&op, json_mode),
        Some(Commands::Demo) | None => cmd_demo(json_mode, verbose),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tv_accepts_two_or_three_fields() {
        let tv = parse_tv("0.8, 0.9").expect("two");
        assert_eq!((tv.strength(), tv.confidence(), tv.count()), (0.8, 0.9, 0.0));

        let tv = parse_tv("0.8,0.9,5").expect("three");
        assert_eq!(tv.count(), 5.0);
    }

    #[test]
    fn parse_tv_clamps() {
        let tv = parse_tv("2,-1,-3").expect("clamped");
        assert_eq!((tv.strength(), tv.confidence(), tv.count()), (1.0, 0.0, 0.0));
    }

    #[test]
    fn parse_tv_rejects_garbage() {
        assert!(parse_tv("0.8").is_err());
        assert!(parse_tv("0.8,high").is_err());
        assert!(parse_tv("1,2,3,4").is_err());
    }

    #[test]
    fn cli_parses_tv_command() {
        let cli = Cli::try_parse_from(["pln", "tv", "and", "0.8,0.9,5", "0.6,0.7,3"])
            .expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Tv {
                op: TvOp::And { .. }
            })
        ));
    }

    #[test]
    fn cli_parses_query_flags() {
        let cli = Cli::try_parse_from([
            "pln",
            "--json-mode",
            "query",
            "-f",
            "s.toml",
            "-t",
            "InheritanceLink",
            "--after-chain",
        ])
        .expect("parse");
        assert!(cli.json_mode);
        match cli.command {
            Some(Commands::Query {
                atom_type,
                after_chain,
                ..
            }) => {
                assert_eq!(atom_type, "InheritanceLink");
                assert!(after_chain);
            }
            other => unreachable!("unexpected command: {:?}", other),
        }
    }
}
