//! # AtomSpace
//!
//! The bounded knowledge-graph store.
//!
//! Atoms live in a single creation-ordered arena owned by the AtomSpace.
//! Links refer to their outgoing atoms by `AtomId`, an index into that arena,
//! so references cannot dangle and every lifetime is the space's lifetime.
//!
//! - Capacity is fixed at construction; creation beyond it fails
//! - There is no per-atom deletion; dropping the space releases everything
//! - Name lookup is a linear, first-match scan in creation order

use crate::embedding::EmbeddingBuffer;
use crate::primitives::{
    BINARY_LINK_ARITY, MAX_CAPACITY, MAX_EMBEDDING_FLOATS, MAX_EMBEDDING_WIDTH,
};
use crate::{AtomId, AtomType, PlnError, SpaceId, TruthValue};

// =============================================================================
// ATOM
// =============================================================================

/// A typed node or link carrying a truth value.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    atom_type: AtomType,
    /// Present for nodes, absent for links. Not unique.
    name: Option<String>,
    tv: TruthValue,
    /// Empty for nodes, at least one entry for links.
    outgoing: Vec<AtomId>,
    /// Opaque extension data. Never consulted by reasoning.
    payload: Option<serde_json::Value>,
}

impl Atom {
    #[must_use]
    pub fn atom_type(&self) -> AtomType {
        self.atom_type
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn tv(&self) -> TruthValue {
        self.tv
    }

    #[must_use]
    pub fn outgoing(&self) -> &[AtomId] {
        &self.outgoing
    }

    #[must_use]
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    /// True if this atom has outgoing atoms.
    #[must_use]
    pub fn is_link(&self) -> bool {
        !self.outgoing.is_empty()
    }

    /// The `(from, to)` ends of a binary link of the given type.
    ///
    /// Returns `None` for nodes, other types, and links of any other arity.
    #[must_use]
    pub fn binary_ends(&self, atom_type: AtomType) -> Option<(AtomId, AtomId)> {
        if self.atom_type != atom_type || self.outgoing.len() != BINARY_LINK_ARITY {
            return None;
        }
        Some((self.outgoing[0], self.outgoing[1]))
    }
}

// =============================================================================
// ATOMSPACE
// =============================================================================

/// Fixed-capacity arena of atoms in creation order.
#[derive(Debug)]
pub struct AtomSpace {
    id: SpaceId,
    atoms: Vec<Atom>,
    capacity: usize,
    embeddings: EmbeddingBuffer,
}

impl AtomSpace {
    /// Create an empty space holding at most `capacity` atoms.
    ///
    /// `embedding_width` only sizes the embedding region (`capacity` rows),
    /// which is allocated up front. Atom storage grows on demand.
    ///
    /// # Errors
    /// `LimitExceeded` if `capacity`, `embedding_width`, or their product is
    /// above `MAX_CAPACITY`, `MAX_EMBEDDING_WIDTH`, or `MAX_EMBEDDING_FLOATS`.
    pub fn new(capacity: usize, embedding_width: usize) -> Result<Self, PlnError> {
        check_limit("capacity", capacity, MAX_CAPACITY)?;
        check_limit("embedding width", embedding_width, MAX_EMBEDDING_WIDTH)?;
        check_limit(
            "embedding size",
            capacity.saturating_mul(embedding_width),
            MAX_EMBEDDING_FLOATS,
        )?;

        Ok(Self {
            id: SpaceId::fresh(),
            atoms: Vec::new(),
            capacity,
            embeddings: EmbeddingBuffer::allocate(capacity, embedding_width),
        })
    }

    /// Identity of this space; carried by every handle it issues.
    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Current number of atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.atoms.len() >= self.capacity
    }

    /// Check that a handle was issued by this space.
    #[must_use]
    pub fn contains(&self, id: AtomId) -> bool {
        id.space() == self.id && id.index() < self.atoms.len()
    }

    /// The handle of the atom at a creation-order position.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<AtomId> {
        (index < self.atoms.len()).then(|| AtomId::new(self.id, index))
    }

    /// Look up an atom by handle.
    #[must_use]
    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        if id.space() != self.id {
            return None;
        }
        self.atoms.get(id.index())
    }

    /// All atoms in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> + '_ {
        let space = self.id;
        self.atoms
            .iter()
            .enumerate()
            .map(move |(index, atom)| (AtomId::new(space, index), atom))
    }

    fn push(&mut self, atom: Atom) -> Result<AtomId, PlnError> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, "AtomSpace full, creation refused");
            return Err(PlnError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let id = AtomId::new(self.id, self.atoms.len());
        self.atoms.push(atom);
        Ok(id)
    }

    /// Create an atom, named or anonymous, with no outgoing set.
    pub fn create_atom(
        &mut self,
        atom_type: AtomType,
        name: Option<&str>,
        tv: TruthValue,
    ) -> Result<AtomId, PlnError> {
        self.push(Atom {
            atom_type,
            name: name.map(str::to_string),
            tv,
            outgoing: Vec::new(),
            payload: None,
        })
    }

    /// Create a named node.
    pub fn create_node(
        &mut self,
        atom_type: AtomType,
        name: &str,
        tv: TruthValue,
    ) -> Result<AtomId, PlnError> {
        self.create_atom(atom_type, Some(name), tv)
    }

    /// Create a link over existing atoms of this space.
    ///
    /// # Errors
    /// - `CapacityExceeded` if the space is full
    /// - `EmptyOutgoing` if `outgoing` is empty
    /// - `ForeignAtom` if any handle was not issued by this space
    pub fn create_link(
        &mut self,
        atom_type: AtomType,
        outgoing: &[AtomId],
        tv: TruthValue,
    ) -> Result<AtomId, PlnError> {
        if self.is_full() {
            return Err(PlnError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if outgoing.is_empty() {
            return Err(PlnError::EmptyOutgoing);
        }
        if let Some(foreign) = outgoing.iter().find(|id| !self.contains(**id)) {
            return Err(PlnError::ForeignAtom(*foreign));
        }

        self.push(Atom {
            atom_type,
            name: None,
            tv,
            outgoing: outgoing.to_vec(),
            payload: None,
        })
    }

    /// Create a binary link `from -> to` of any link type.
    pub fn add_edge(
        &mut self,
        from: AtomId,
        to: AtomId,
        link_type: AtomType,
        tv: TruthValue,
    ) -> Result<AtomId, PlnError> {
        self.create_link(link_type, &[from, to], tv)
    }

    /// Create an `InheritanceLink` `from -> to`.
    pub fn add_inheritance_edge(
        &mut self,
        from: AtomId,
        to: AtomId,
        tv: TruthValue,
    ) -> Result<AtomId, PlnError> {
        self.add_edge(from, to, AtomType::InheritanceLink, tv)
    }

    /// First atom, in creation order, carrying exactly this name.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<AtomId> {
        self.atoms
            .iter()
            .position(|atom| atom.name.as_deref() == Some(name))
            .map(|index| AtomId::new(self.id, index))
    }

    /// Like `lookup_by_name`, reporting a miss as `LookupMiss`.
    pub fn require_by_name(&self, name: &str) -> Result<AtomId, PlnError> {
        self.lookup_by_name(name)
            .ok_or_else(|| PlnError::LookupMiss(name.to_string()))
    }

    /// Replace an atom's truth value.
    pub fn set_tv(&mut self, id: AtomId, tv: TruthValue) -> Result<(), PlnError> {
        let atom = self.get_mut(id)?;
        atom.tv = tv;
        Ok(())
    }

    /// Attach opaque extension data to an atom.
    pub fn set_payload(&mut self, id: AtomId, payload: serde_json::Value) -> Result<(), PlnError> {
        let atom = self.get_mut(id)?;
        atom.payload = Some(payload);
        Ok(())
    }

    fn get_mut(&mut self, id: AtomId) -> Result<&mut Atom, PlnError> {
        if id.space() != self.id {
            return Err(PlnError::ForeignAtom(id));
        }
        self.atoms.get_mut(id.index()).ok_or(PlnError::ForeignAtom(id))
    }

    /// The embedding row reserved for an atom.
    #[must_use]
    pub fn embedding(&self, id: AtomId) -> Option<&[f32]> {
        if !self.contains(id) {
            return None;
        }
        self.embeddings.row(id.index())
    }

    /// Mutable embedding row for an atom, for a representation backend.
    pub fn embedding_mut(&mut self, id: AtomId) -> Option<&mut [f32]> {
        if !self.contains(id) {
            return None;
        }
        self.embeddings.row_mut(id.index())
    }

    /// The whole embedding region.
    #[must_use]
    pub fn embeddings(&self) -> &EmbeddingBuffer {
        &self.embeddings
    }

    /// Display label: the atom's name, or a rendering of its outgoing set.
    #[must_use]
    pub fn label(&self, id: AtomId) -> String {
        let Some(atom) = self.get(id) else {
            return id.to_string();
        };
        if let Some(name) = atom.name() {
            return name.to_string();
        }
        let parts: Vec<String> = atom.outgoing().iter().map(|o| self.label(*o)).collect();
        match atom.atom_type() {
            AtomType::InheritanceLink | AtomType::ImplicationLink if parts.len() == 2 => {
                format!("{} -> {}", parts[0], parts[1])
            }
            other => format!("{}({})", other, parts.join(", ")),
        }
    }
}

fn check_limit(what: &'static str, value: usize, max: usize) -> Result<(), PlnError> {
    if value > max {
        return Err(PlnError::LimitExceeded { what, value, max });
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
