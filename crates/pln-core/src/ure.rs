//! # Unified Rule Engine
//!
//! Exhaustive forward chaining over an AtomSpace.
//!
//! One iteration tries every registered rule, in registration order, on every
//! premise pair `(atoms[i], atoms[j])` with `i < j`, ascending `i` then `j`.
//! The pair bounds are re-read on every step, so atoms concluded earlier in an
//! iteration are premises later in that same iteration.
//!
//! Chaining stops, in priority order, when:
//! 1. the caller's target atom is concluded,
//! 2. an iteration accepts no conclusion (fixpoint),
//! 3. the iteration cap is reached.
//!
//! Cost is `O(iterations x rules x n^2)` pair tests. This matcher is meant for
//! small graphs; there is no pattern index.
//!
//! The engine holds the AtomSpace mutably for its whole lifetime: conclusions
//! append atoms and rewrite truth values while the scan is running, so no
//! other reader or writer may observe the space mid-chain.

use crate::atomspace::AtomSpace;
use crate::primitives::{DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_CONFIDENCE};
use crate::rule::Rule;
use crate::{AtomId, PlnError};
use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunable engine limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UreConfig {
    /// Upper bound on chaining iterations.
    pub max_iterations: usize,
    /// Conclusions below this confidence are not counted.
    pub min_confidence: f32,
}

impl Default for UreConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Why a chaining run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The target atom was concluded.
    TargetReached,
    /// An iteration accepted no conclusion.
    Fixpoint,
    /// `max_iterations` iterations ran.
    IterationCap,
}

/// Outcome of one chaining run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainReport {
    /// Accepted inferences.
    pub inferences: usize,
    /// Iterations started.
    pub iterations: usize,
    pub termination: Termination,
    /// Accepted conclusions, in the order they were produced.
    pub conclusions: Vec<AtomId>,
}

// =============================================================================
// ENGINE
// =============================================================================

/// Forward-chaining engine bound to one AtomSpace.
#[derive(Debug)]
pub struct Ure<'a> {
    space: &'a mut AtomSpace,
    rules: Vec<Rule>,
    config: UreConfig,
}

impl<'a> Ure<'a> {
    /// Create an engine with no rules.
    pub fn new(space: &'a mut AtomSpace, max_iterations: usize, min_confidence: f32) -> Self {
        Self::with_config(
            space,
            UreConfig {
                max_iterations,
                min_confidence,
            },
        )
    }

    /// Create an engine from a config.
    pub fn with_config(space: &'a mut AtomSpace, config: UreConfig) -> Self {
        Self {
            space,
            rules: Vec::new(),
            config,
        }
    }

    /// Register a rule. Rules are tried in registration order.
    pub fn add_rule(&mut self, rule: Rule) {
        tracing::debug!(rule = %rule.name, position = self.rules.len(), "rule registered");
        self.rules.push(rule);
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> UreConfig {
        self.config
    }

    /// Read access to the bound space.
    #[must_use]
    pub fn space(&self) -> &AtomSpace {
        &*self.space
    }

    /// Write access to the bound space between chaining runs.
    pub fn space_mut(&mut self) -> &mut AtomSpace {
        &mut *self.space
    }

    /// Forward chain, returning the number of accepted inferences.
    pub fn forward_chain(&mut self, target: Option<AtomId>) -> usize {
        self.run(target).inferences
    }

    /// One untargeted chaining run.
    pub fn inference_step(&mut self) -> usize {
        self.forward_chain(None)
    }

    /// Chain towards `query`.
    ///
    /// This is forward chaining that stops once `query` is concluded; no
    /// goal-directed search is performed.
    pub fn backward_chain(&mut self, query: AtomId) -> usize {
        self.forward_chain(Some(query))
    }

    /// Forward chain and report how the run ended.
    pub fn run(&mut self, target: Option<AtomId>) -> ChainReport {
        let mut report = ChainReport {
            inferences: 0,
            iterations: 0,
            termination: Termination::IterationCap,
            conclusions: Vec::new(),
        };

        for iteration in 0..self.config.max_iterations {
            report.iterations = iteration + 1;
            let mut productive = false;

            for rule in &self.rules {
                let space_id = self.space.id();
                let mut i = 0;
                while i < self.space.len() {
                    let mut j = i + 1;
                    while j < self.space.len() {
                        let premises = [AtomId::new(space_id, i), AtomId::new(space_id, j)];
                        j += 1;

                        if !rule.precondition(&*self.space, &premises) {
                            continue;
                        }

                        let concluded = match rule.conclusion(&mut *self.space, &premises) {
                            Ok(id) => id,
                            Err(err) => {
                                log_rejected(rule, &err);
                                continue;
                            }
                        };

                        let confidence = self
                            .space
                            .get(concluded)
                            .map_or(0.0, |atom| atom.tv().confidence());
                        if confidence < self.config.min_confidence {
                            tracing::trace!(
                                rule = %rule.name,
                                confidence,
                                "conclusion below confidence threshold"
                            );
                            continue;
                        }

                        productive = true;
                        report.inferences += 1;
                        report.conclusions.push(concluded);
                        tracing::debug!(
                            rule = %rule.name,
                            iteration,
                            conclusion = %self.space.label(concluded),
                            confidence,
                            "inference accepted"
                        );

                        if target == Some(concluded) {
                            report.termination = Termination::TargetReached;
                            tracing::debug!(inferences = report.inferences, "target reached");
                            return report;
                        }
                    }
                    i += 1;
                }
            }

            if !productive {
                report.termination = Termination::Fixpoint;
                break;
            }
        }

        tracing::debug!(
            inferences = report.inferences,
            iterations = report.iterations,
            termination = ?report.termination,
            "forward chaining finished"
        );
        report
    }
}

fn log_rejected(rule: &Rule, err: &PlnError) {
    match err {
        PlnError::CapacityExceeded { capacity } => {
            tracing::debug!(rule = %rule.name, capacity, "conclusion dropped, AtomSpace full");
        }
        other => tracing::trace!(rule = %rule.name, error = %other, "conclusion rejected"),
    }
}

// =============================================================================
// TESTS
// =============================================================================
