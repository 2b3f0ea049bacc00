//! # Rule Module
//!
//! Built-in PLN inference rules.
//!
//! Rules form a closed set, so they are a tagged variant (`RuleKind`)
//! dispatched by `match` rather than trait objects. Every rule is a
//! precondition/conclusion pair over an ordered premise list of length
//! `PREMISE_COUNT`.
//!
//! A conclusion re-checks its own precondition and leaves the AtomSpace
//! untouched when it fails.

use crate::atomspace::AtomSpace;
use crate::primitives::{PREMISE_COUNT, TRANSITIVE_DECAY};
use crate::{AtomId, AtomType, PlnError, TruthValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The built-in inference rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `[P, P -> Q]` strengthens `Q`.
    ModusPonens,
    /// `[A -> B, B -> C]` derives a new `A -> C`.
    InheritanceTransitivity,
}

impl RuleKind {
    /// Human-readable default name.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            RuleKind::ModusPonens => "Modus Ponens",
            RuleKind::InheritanceTransitivity => "Inheritance Transitivity",
        }
    }

    /// Check whether the premises fit this rule.
    #[must_use]
    pub fn precondition(self, space: &AtomSpace, premises: &[AtomId]) -> bool {
        match self {
            RuleKind::ModusPonens => modus_ponens_match(space, premises).is_some(),
            RuleKind::InheritanceTransitivity => transitivity_match(space, premises).is_some(),
        }
    }

    /// Apply the rule.
    ///
    /// Returns the concluded atom. Fails with `PreconditionUnmet` (and no
    /// mutation) when the premises do not fit, or with `CapacityExceeded`
    /// when a new atom cannot be stored.
    pub fn conclusion(self, space: &mut AtomSpace, premises: &[AtomId]) -> Result<AtomId, PlnError> {
        match self {
            RuleKind::ModusPonens => modus_ponens(space, premises),
            RuleKind::InheritanceTransitivity => inheritance_transitivity(space, premises),
        }
    }

    fn unmet(self) -> PlnError {
        PlnError::PreconditionUnmet {
            rule: self.default_name().to_string(),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

// =============================================================================
// MODUS PONENS
// =============================================================================

/// Matched `[P, P -> Q]`: returns `(P, implication, Q)`.
fn modus_ponens_match(space: &AtomSpace, premises: &[AtomId]) -> Option<(AtomId, AtomId, AtomId)> {
    let [p, implication] = <[AtomId; PREMISE_COUNT]>::try_from(premises).ok()?;
    if !space.contains(p) {
        return None;
    }
    let (antecedent, consequent) = space
        .get(implication)?
        .binary_ends(AtomType::ImplicationLink)?;
    (antecedent == p).then_some((p, implication, consequent))
}

fn modus_ponens(space: &mut AtomSpace, premises: &[AtomId]) -> Result<AtomId, PlnError> {
    let (p, implication, q) =
        modus_ponens_match(space, premises).ok_or_else(|| RuleKind::ModusPonens.unmet())?;

    let tv_p = space.get(p).map(|a| a.tv()).ok_or(PlnError::ForeignAtom(p))?;
    let tv_imp = space
        .get(implication)
        .map(|a| a.tv())
        .ok_or(PlnError::ForeignAtom(implication))?;
    let tv_q = space.get(q).map(|a| a.tv()).ok_or(PlnError::ForeignAtom(q))?;

    let derived = TruthValue::new(
        tv_p.strength() * tv_imp.strength(),
        tv_p.confidence() * tv_imp.confidence(),
        tv_p.count().min(tv_imp.count()),
    );

    // Evidence accumulates into Q's existing belief.
    space.set_tv(q, tv_q.or(derived))?;
    Ok(q)
}

// =============================================================================
// INHERITANCE TRANSITIVITY
// =============================================================================

/// Matched `[A -> B, B -> C]`: returns the two links and `(A, C)`.
fn transitivity_match(
    space: &AtomSpace,
    premises: &[AtomId],
) -> Option<(AtomId, AtomId, AtomId, AtomId)> {
    let [first, second] = <[AtomId; PREMISE_COUNT]>::try_from(premises).ok()?;
    let (a, b1) = space.get(first)?.binary_ends(AtomType::InheritanceLink)?;
    let (b2, c) = space.get(second)?.binary_ends(AtomType::InheritanceLink)?;
    (b1 == b2).then_some((first, second, a, c))
}

fn inheritance_transitivity(space: &mut AtomSpace, premises: &[AtomId]) -> Result<AtomId, PlnError> {
    let (first, second, a, c) = transitivity_match(space, premises)
        .ok_or_else(|| RuleKind::InheritanceTransitivity.unmet())?;

    let tv1 = space.get(first).map(|l| l.tv()).ok_or(PlnError::ForeignAtom(first))?;
    let tv2 = space
        .get(second)
        .map(|l| l.tv())
        .ok_or(PlnError::ForeignAtom(second))?;

    let tv = TruthValue::new(
        tv1.strength() * tv2.strength(),
        tv1.confidence() * tv2.confidence() * TRANSITIVE_DECAY,
        tv1.count().min(tv2.count()),
    );

    space.add_inheritance_edge(a, c, tv)
}

// =============================================================================
// RULE RECORD
// =============================================================================

/// A registered rule: a named `RuleKind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Diagnostic name only.
    pub name: String,
    pub kind: RuleKind,
    /// Reserved; never used in derivation arithmetic.
    #[serde(default)]
    pub confidence_boost: f32,
}

impl Rule {
    /// Create a rule with the kind's default name and no boost.
    #[must_use]
    pub fn new(kind: RuleKind) -> Self {
        Self {
            name: kind.default_name().to_string(),
            kind,
            confidence_boost: 0.0,
        }
    }

    #[must_use]
    pub fn modus_ponens() -> Self {
        Self::new(RuleKind::ModusPonens)
    }

    #[must_use]
    pub fn inheritance_transitivity() -> Self {
        Self::new(RuleKind::InheritanceTransitivity)
    }

    /// Override the diagnostic name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Record a confidence boost (reserved).
    #[must_use]
    pub fn with_confidence_boost(mut self, boost: f32) -> Self {
        self.confidence_boost = boost;
        self
    }

    #[must_use]
    pub fn precondition(&self, space: &AtomSpace, premises: &[AtomId]) -> bool {
        self.kind.precondition(space, premises)
    }

    pub fn conclusion(&self, space: &mut AtomSpace, premises: &[AtomId]) -> Result<AtomId, PlnError> {
        self.kind.conclusion(space, premises)
    }
}

// =============================================================================
// TESTS
// =============================================================================
