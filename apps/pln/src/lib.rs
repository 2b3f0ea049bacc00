//! # pln
//!
//! Scenario loading for the PLN reasoner CLI.
//!
//! The binary in `main.rs` owns argument parsing and output; this library
//! half turns TOML scenario files into a ready-to-chain AtomSpace so the
//! loader can be tested on its own.

pub mod error;
pub mod fixture;

pub use error::AppError;
pub use fixture::{LoadedScenario, Scenario};
