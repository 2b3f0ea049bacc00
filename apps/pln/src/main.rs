//! # PLN - Probabilistic Reasoner
//!
//! The command-line front end for the pln-core AtomSpace and rule engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/pln (THE BINARY)            │
//! │                                               │
//! │  ┌─────────────┐        ┌─────────────────┐   │
//! │  │    CLI      │───────▶│ Scenario loader │   │
//! │  │   (clap)    │        │     (toml)      │   │
//! │  └──────┬──────┘        └────────┬────────┘   │
//! │         └────────────┬───────────┘            │
//! │                      ▼                        │
//! │              ┌───────────────┐                │
//! │              │   pln-core    │                │
//! │              │  (THE LOGIC)  │                │
//! │              └───────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! pln demo
//! pln run -f apps/pln/scenarios/taxonomy.toml
//! pln query -f apps/pln/scenarios/taxonomy.toml -t InheritanceLink --after-chain
//! pln tv and 0.8,0.9,5 0.6,0.7,3
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // PLN_LOG_FORMAT=json enables machine-parseable logs. Logs go to stderr so
    // stdout stays clean for --json-mode output.
    let log_format = std::env::var("PLN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pln=info,pln_core=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗ ██╗     ███╗   ██╗
  ██╔══██╗██║     ████╗  ██║
  ██████╔╝██║     ██╔██╗ ██║
  ██╔═══╝ ██║     ██║╚██╗██║
  ██║     ███████╗██║ ╚████║
  ╚═╝     ╚══════╝╚═╝  ╚═══╝

  Probabilistic Logic Networks v{}

  Bounded • Deterministic • Explainable
"#,
        env!("CARGO_PKG_VERSION")
    );
}
