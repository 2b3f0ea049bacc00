//! # Query Module
//!
//! Read-only pattern matching over an AtomSpace.
//!
//! - Matching is by atom type only
//! - Atoms below `QUERY_CONFIDENCE_THRESHOLD` confidence are never returned
//! - Results keep AtomSpace creation order
//! - An empty result is a valid answer, not an error

use crate::atomspace::AtomSpace;
use crate::primitives::QUERY_CONFIDENCE_THRESHOLD;
use crate::{AtomId, AtomType};
use serde::{Deserialize, Serialize};

/// What to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub atom_type: AtomType,
}

impl Pattern {
    /// Match every atom of one type.
    #[must_use]
    pub const fn of_type(atom_type: AtomType) -> Self {
        Self { atom_type }
    }
}

/// Matching atoms in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QueryResult {
    pub atoms: Vec<AtomId>,
    pub count: usize,
}

impl QueryResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Find every sufficiently confident atom of the pattern's type.
#[must_use]
pub fn query(space: &AtomSpace, pattern: &Pattern) -> QueryResult {
    let atoms: Vec<AtomId> = space
        .iter()
        .filter(|(_, atom)| {
            atom.atom_type() == pattern.atom_type
                && atom.tv().confidence() >= QUERY_CONFIDENCE_THRESHOLD
        })
        .map(|(id, _)| id)
        .collect();

    QueryResult {
        count: atoms.len(),
        atoms,
    }
}

// =============================================================================
// TESTS
// =============================================================================
