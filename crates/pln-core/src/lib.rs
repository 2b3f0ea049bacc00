//! # pln-core
//!
//! Probabilistic AtomSpace and Unified Rule Engine - THE LOGIC.
//!
//! This crate implements a small PLN (Probabilistic Logic Networks) reasoner:
//! a bounded graph of typed atoms, each carrying a
//! `(strength, confidence, count)` truth value, and an exhaustive
//! forward-chaining engine that applies built-in rules to derive new facts.
//!
//! ## Usage
//!
//! ```rust
//! use pln_core::{AtomSpace, AtomType, Rule, TruthValue, Ure};
//!
//! let mut space = AtomSpace::new(100, 32)?;
//! let tv = TruthValue::new(0.9, 0.8, 10.0);
//! let a = space.create_node(AtomType::ConceptNode, "A", tv)?;
//! let b = space.create_node(AtomType::ConceptNode, "B", tv)?;
//! let c = space.create_node(AtomType::ConceptNode, "C", tv)?;
//! space.add_inheritance_edge(a, b, tv)?;
//! space.add_inheritance_edge(b, c, tv)?;
//!
//! let mut ure = Ure::new(&mut space, 1, 0.5);
//! ure.add_rule(Rule::inheritance_transitivity());
//! assert_eq!(ure.forward_chain(None), 1);
//! # Ok::<(), pln_core::PlnError>(())
//! ```
//!
//! ## Architectural Constraints
//!
//! - NO async, NO network, NO randomness
//! - Deterministic: the same initial space and rules always derive the same
//!   atoms in the same order
//! - Bounded: fixed AtomSpace capacity and a chaining iteration cap
//! - Single writer: the engine borrows its AtomSpace mutably

// =============================================================================
// MODULES
// =============================================================================

pub mod atomspace;
pub mod embedding;
pub mod primitives;
pub mod query;
pub mod rule;
pub mod truth;
pub mod types;
pub mod ure;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{AtomId, AtomType, PlnError, SpaceId};

// =============================================================================
// RE-EXPORTS: Store, Rules, Engine
// =============================================================================

pub use atomspace::{Atom, AtomSpace};
pub use embedding::EmbeddingBuffer;
pub use query::{Pattern, QueryResult, query};
pub use rule::{Rule, RuleKind};
pub use truth::TruthValue;
pub use ure::{ChainReport, Termination, Ure, UreConfig};
