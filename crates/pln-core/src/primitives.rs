//! # Innate Primitives
//!
//! Hardcoded constants for the PLN core.
//!
//! These values are compiled into the binary and are immutable at runtime.
//! Engine limits that callers may tune live in `UreConfig` instead.

/// Number of premises every built-in rule consumes.
///
/// The forward chainer enumerates premise pairs `(i, j)` with `i < j`.
pub const PREMISE_COUNT: usize = 2;

/// Arity of the links the built-in rules reason over (`A -> B`).
pub const BINARY_LINK_ARITY: usize = 2;

/// Confidence decay applied to every transitive inheritance hop.
pub const TRANSITIVE_DECAY: f32 = 0.9;

/// Minimum confidence an atom needs to appear in a pattern query result.
pub const QUERY_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Default iteration cap for forward chaining.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Default minimum confidence for accepting a conclusion.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Default AtomSpace capacity used by the CLI.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default embedding width used by the CLI.
pub const DEFAULT_EMBEDDING_WIDTH: usize = 64;

/// Maximum atoms a single AtomSpace may be sized for.
pub const MAX_CAPACITY: usize = 10_000_000;

/// Maximum floats per embedding row.
pub const MAX_EMBEDDING_WIDTH: usize = 4096;

/// Maximum floats in one embedding region (`capacity x width`), 1 GiB of f32.
pub const MAX_EMBEDDING_FLOATS: usize = 256 * 1024 * 1024;

/// Name of the contiguous embedding region owned by each AtomSpace.
pub const EMBEDDING_REGION_NAME: &str = "atom_embeddings";
