//! # Truth Value Module
//!
//! The PLN truth-value algebra.
//!
//! - A truth value is a `(strength, confidence, count)` triple
//! - Every value is produced by the clamping constructor
//! - AND / OR / NOT are pure and re-clamp their output

use serde::{Deserialize, Serialize};
use std::fmt;

/// A probabilistic belief.
///
/// - `strength` in `[0, 1]`: probability that the atom holds
/// - `confidence` in `[0, 1]`: how much evidence backs the strength
/// - `count` in `[0, inf)`: supporting evidence count
///
/// Fields are private so no value can escape the clamp ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTruthValue", into = "RawTruthValue")]
pub struct TruthValue {
    strength: f32,
    confidence: f32,
    count: f32,
}

/// Unchecked wire shape; always clamped on the way in.
#[derive(Serialize, Deserialize)]
struct RawTruthValue {
    strength: f32,
    confidence: f32,
    #[serde(default)]
    count: f32,
}

impl From<RawTruthValue> for TruthValue {
    fn from(raw: RawTruthValue) -> Self {
        TruthValue::new(raw.strength, raw.confidence, raw.count)
    }
}

impl From<TruthValue> for RawTruthValue {
    fn from(tv: TruthValue) -> Self {
        Self {
            strength: tv.strength,
            confidence: tv.confidence,
            count: tv.count,
        }
    }
}

/// Clamp into `[lo, hi]`, mapping NaN to `lo`.
fn clamp_unit(x: f32, lo: f32, hi: f32) -> f32 {
    if x.is_nan() { lo } else { x.clamp(lo, hi) }
}

impl TruthValue {
    /// The belief given to atoms created without explicit evidence.
    pub const DEFAULT: TruthValue = TruthValue {
        strength: 0.8,
        confidence: 0.9,
        count: 1.0,
    };

    /// Create a truth value, silently clamping every field into range.
    #[must_use]
    pub fn new(strength: f32, confidence: f32, count: f32) -> Self {
        Self {
            strength: clamp_unit(strength, 0.0, 1.0),
            confidence: clamp_unit(confidence, 0.0, 1.0),
            count: clamp_unit(count, 0.0, f32::INFINITY),
        }
    }

    #[must_use]
    pub const fn strength(&self) -> f32 {
        self.strength
    }

    #[must_use]
    pub const fn confidence(&self) -> f32 {
        self.confidence
    }

    #[must_use]
    pub const fn count(&self) -> f32 {
        self.count
    }

    /// Conjunction under independence.
    #[must_use]
    pub fn and(self, other: TruthValue) -> TruthValue {
        TruthValue::new(
            self.strength * other.strength,
            self.confidence * other.confidence,
            self.count + other.count,
        )
    }

    /// Probabilistic union.
    ///
    /// Confidence is the weaker operand's.
    ///
    /// Only operands equal in all three fields (exact `f32` equality) count
    /// as the same evidence seen twice; they return the belief unchanged.
    /// Any other pair, however close, goes through the union formula, so
    /// `or` jumps at the identical point: `(0.5, 0.9, 1)` with itself stays
    /// at strength 0.5, but with `(0.5, 0.9, 1.0001)` yields 0.75.
    #[must_use]
    pub fn or(self, other: TruthValue) -> TruthValue {
        if self == other {
            return self;
        }
        TruthValue::new(
            self.strength + other.strength - self.strength * other.strength,
            self.confidence.min(other.confidence),
            self.count.max(other.count),
        )
    }

    /// Negation of the strength; confidence and count carry over.
    #[must_use]
    pub fn not(self) -> TruthValue {
        TruthValue::new(1.0 - self.strength, self.confidence, self.count)
    }

    /// Confidence-weighted probability.
    ///
    /// Low confidence pulls the strength towards the uninformative 0.5.
    #[must_use]
    pub fn expectation(&self) -> f32 {
        self.strength * self.confidence + (1.0 - self.confidence) * 0.5
    }
}

impl Default for TruthValue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<s={:.3}, c={:.3}, n={:.1}>",
            self.strength, self.confidence, self.count
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
