//! # Scenario Fixtures
//!
//! A scenario is a TOML file describing an initial AtomSpace, the rules to
//! register, and the engine limits:
//!
//! ```toml
//! target = "Wet"            # optional, an atom name
//!
//! [space]
//! capacity = 1000
//! embedding_width = 64
//!
//! [engine]
//! max_iterations = 10
//! min_confidence = 0.5
//!
//! [[atoms]]
//! type = "PredicateNode"    # name, short name, or numeric code
//! name = "Rain"
//! tv = { strength = 0.9, confidence = 0.9, count = 3.0 }
//!
//! [[links]]
//! type = "ImplicationLink"
//! outgoing = ["Rain", "Wet"] # atom names, first match wins
//!
//! [[rules]]
//! kind = "modus_ponens"
//! ```
//!
//! Scenarios are input only. Loading one builds a fresh AtomSpace; nothing
//! is ever written back.

use crate::error::AppError;
use pln_core::primitives::{DEFAULT_CAPACITY, DEFAULT_EMBEDDING_WIDTH};
use pln_core::{AtomId, AtomSpace, AtomType, PlnError, Rule, RuleKind, TruthValue, Ure, UreConfig};
use serde::Deserialize;
use std::path::Path;

/// Maximum scenario file size (10 MB).
pub const MAX_SCENARIO_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// The built-in Animal/Mammal/Dog/Canine scenario.
pub const DEMO_SCENARIO: &str = include_str!("../scenarios/taxonomy.toml");

// =============================================================================
// FILE SHAPE
// =============================================================================

/// A parsed, not yet built, scenario file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Name of the atom whose conclusion stops chaining.
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub space: SpaceSpec,
    #[serde(default)]
    pub engine: UreConfig,
    #[serde(default)]
    pub atoms: Vec<AtomSpec>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// AtomSpace sizing.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpaceSpec {
    pub capacity: usize,
    pub embedding_width: usize,
}

impl Default for SpaceSpec {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            embedding_width: DEFAULT_EMBEDDING_WIDTH,
        }
    }
}

/// A named node.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomSpec {
    #[serde(rename = "type")]
    pub atom_type: String,
    pub name: String,
    #[serde(default)]
    pub tv: TruthValue,
}

/// A link over previously declared atoms.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkSpec {
    #[serde(rename = "type")]
    pub atom_type: String,
    pub outgoing: Vec<String>,
    #[serde(default)]
    pub tv: TruthValue,
}

/// A rule registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub kind: RuleKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub confidence_boost: f32,
}

impl RuleSpec {
    fn to_rule(&self) -> Rule {
        let rule = Rule::new(self.kind).with_confidence_boost(self.confidence_boost);
        match &self.name {
            Some(name) => rule.with_name(name.clone()),
            None => rule,
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl Scenario {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::Fixture(format!("Invalid scenario: {}", e)))
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AppError::Fixture(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(AppError::Fixture(format!(
                "Path '{}' is not a regular file",
                path.display()
            )));
        }
        if metadata.len() > MAX_SCENARIO_FILE_SIZE {
            return Err(AppError::Fixture(format!(
                "File size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_SCENARIO_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Fixture(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "scenario read");
        Self::from_toml_str(&text)
    }

    /// Build the AtomSpace and resolve rules and target.
    ///
    /// Atoms are created first in file order, then links in file order, so
    /// atom handles follow the file layout.
    pub fn build(&self) -> Result<LoadedScenario, AppError> {
        let mut space = AtomSpace::new(self.space.capacity, self.space.embedding_width)?;

        for decl in &self.atoms {
            let atom_type: AtomType = decl.atom_type.parse()?;
            if atom_type.is_link() {
                return Err(AppError::Fixture(format!(
                    "Atom '{}' has link type {}; declare it under [[links]]",
                    decl.name, atom_type
                )));
            }
            space.create_node(atom_type, &decl.name, decl.tv)?;
        }

        for decl in &self.links {
            let atom_type: AtomType = decl.atom_type.parse()?;
            if !atom_type.is_link() {
                return Err(AppError::Fixture(format!(
                    "Link over {:?} has node type {}",
                    decl.outgoing, atom_type
                )));
            }
            let outgoing = decl
                .outgoing
                .iter()
                .map(|name| space.require_by_name(name))
                .collect::<Result<Vec<AtomId>, PlnError>>()?;
            space.create_link(atom_type, &outgoing, decl.tv)?;
        }

        let target = self
            .target
            .as_deref()
            .map(|name| space.require_by_name(name))
            .transpose()?;

        tracing::info!(
            atoms = space.len(),
            capacity = space.capacity(),
            rules = self.rules.len(),
            "scenario built"
        );

        Ok(LoadedScenario {
            space,
            rules: self.rules.iter().map(RuleSpec::to_rule).collect(),
            config: self.engine,
            target,
        })
    }
}

// =============================================================================
// BUILT SCENARIO
// =============================================================================

/// A scenario ready to chain.
#[derive(Debug)]
pub struct LoadedScenario {
    pub space: AtomSpace,
    pub rules: Vec<Rule>,
    pub config: UreConfig,
    pub target: Option<AtomId>,
}

impl LoadedScenario {
    /// Load, parse and build a scenario file.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        Scenario::load(path)?.build()
    }

    /// Parse and build the built-in demo scenario.
    pub fn demo() -> Result<Self, AppError> {
        Scenario::from_toml_str(DEMO_SCENARIO)?.build()
    }

    /// Replace the target with the atom of this name.
    pub fn retarget(&mut self, name: &str) -> Result<(), AppError> {
        self.target = Some(self.space.require_by_name(name)?);
        Ok(())
    }

    /// An engine over this scenario's space, with its rules registered.
    pub fn engine(&mut self) -> Ure<'_> {
        let mut ure = Ure::with_config(&mut self.space, self.config);
        for rule in &self.rules {
            ure.add_rule(rule.clone());
        }
        ure
    }
}

// =============================================================================
// TESTS
// =============================================================================
