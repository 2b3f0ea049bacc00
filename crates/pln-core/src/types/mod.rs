//! # Core Type Definitions
//!
//! This module contains the shared identifiers and the error type:
//! - Atom type codes (`AtomType`)
//! - Arena handles (`SpaceId`, `AtomId`)
//! - Error types (`PlnError`)
//!
//! ## Handle Guarantees
//!
//! - An `AtomId` is an index into exactly one AtomSpace arena
//! - Every handle carries the `SpaceId` of the arena that issued it
//! - Handles implement `Ord` so result sets can be compared deterministically

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

// =============================================================================
// ATOM TYPES
// =============================================================================

/// The kind of an atom.
///
/// The discriminants are stable integer codes and must never be renumbered:
/// fixtures refer to atom types by these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AtomType {
    ConceptNode = 0,
    PredicateNode = 1,
    LinkNode = 2,
    InheritanceLink = 3,
    SimilarityLink = 4,
    ImplicationLink = 5,
    EvaluationLink = 6,
}

impl AtomType {
    /// Every atom type, in code order.
    pub const ALL: [AtomType; 7] = [
        AtomType::ConceptNode,
        AtomType::PredicateNode,
        AtomType::LinkNode,
        AtomType::InheritanceLink,
        AtomType::SimilarityLink,
        AtomType::ImplicationLink,
        AtomType::EvaluationLink,
    ];

    /// Get the stable integer code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolve a stable integer code.
    pub fn from_code(code: u8) -> Result<Self, PlnError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| PlnError::UnknownAtomType(code.to_string()))
    }

    /// Get the canonical type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AtomType::ConceptNode => "ConceptNode",
            AtomType::PredicateNode => "PredicateNode",
            AtomType::LinkNode => "LinkNode",
            AtomType::InheritanceLink => "InheritanceLink",
            AtomType::SimilarityLink => "SimilarityLink",
            AtomType::ImplicationLink => "ImplicationLink",
            AtomType::EvaluationLink => "EvaluationLink",
        }
    }

    /// True for the types that connect other atoms.
    ///
    /// `LinkNode` is a named node despite its name.
    #[must_use]
    pub const fn is_link(self) -> bool {
        matches!(
            self,
            AtomType::InheritanceLink
                | AtomType::SimilarityLink
                | AtomType::ImplicationLink
                | AtomType::EvaluationLink
        )
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AtomType {
    type Err = PlnError;

    /// Accepts the canonical name (case-insensitive), the name without its
    /// `Node`/`Link` suffix, or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code);
        }

        let wanted = trimmed.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| {
                let name = t.name().to_ascii_lowercase();
                name == wanted
                    || name.strip_suffix("node") == Some(wanted.as_str())
                    || name.strip_suffix("link") == Some(wanted.as_str())
            })
            .ok_or_else(|| PlnError::UnknownAtomType(trimmed.to_string()))
    }
}

// =============================================================================
// ARENA HANDLES
// =============================================================================

static NEXT_SPACE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one AtomSpace instance.
///
/// Only issued by `AtomSpace::new`; callers can copy one but never mint one,
/// so a handle cannot claim membership of a space that did not issue it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SpaceId(u64);

impl SpaceId {
    /// Issue a fresh, process-unique space identity.
    #[must_use]
    pub(crate) fn fresh() -> Self {
        Self(NEXT_SPACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Handle to an atom inside an AtomSpace arena.
///
/// Handles are plain indices: they never dangle while the issuing space is
/// alive, and they are rejected by any other space. Only an AtomSpace
/// creates them; they serialize for output but do not deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AtomId {
    space: SpaceId,
    index: usize,
}

impl AtomId {
    #[must_use]
    pub(crate) const fn new(space: SpaceId, index: usize) -> Self {
        Self { space, index }
    }

    /// The space that issued this handle.
    #[must_use]
    pub const fn space(self) -> SpaceId {
        self.space
    }

    /// Creation-order position inside the issuing space.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the PLN core.
///
/// Inside the chaining loop these are absent-results, not faults: a rule
/// that does not apply is simply not counted.
#[derive(Debug, Error)]
pub enum PlnError {
    /// Atom or link creation on a full AtomSpace.
    #[error("AtomSpace is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A conclusion was requested for premises that fail the rule's precondition.
    #[error("Precondition unmet for rule '{rule}'")]
    PreconditionUnmet { rule: String },

    /// No atom carries the requested name.
    #[error("No atom named '{0}'")]
    LookupMiss(String),

    /// A handle that was not issued by this AtomSpace.
    #[error("Atom {0:?} does not belong to this AtomSpace")]
    ForeignAtom(AtomId),

    /// A link was requested with no outgoing atoms.
    #[error("Links need at least one outgoing atom")]
    EmptyOutgoing,

    /// An unknown atom type name or code.
    #[error("Unknown atom type: {0}")]
    UnknownAtomType(String),

    /// A requested size is above its compiled-in maximum.
    #[error("{what} {value} exceeds maximum allowed {max}")]
    LimitExceeded {
        what: &'static str,
        value: usize,
        max: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
