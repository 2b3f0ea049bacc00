//! # App Errors
//!
//! Failures of the CLI layer. Core reasoning errors pass through unchanged;
//! scenario file problems stay out of the core `PlnError`.

use pln_core::PlnError;
use thiserror::Error;

/// Errors surfaced by scenario loading and CLI commands.
#[derive(Debug, Error)]
pub enum AppError {
    /// An AtomSpace, rule, or lookup failure from pln-core.
    #[error(transparent)]
    Core(#[from] PlnError),

    /// A scenario file could not be read, parsed, or laid out.
    #[error("Fixture error: {0}")]
    Fixture(String),
}
