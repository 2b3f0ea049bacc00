//! # Embedding Buffer
//!
//! The float region reserved for per-atom neural embeddings.
//!
//! Reasoning never reads or writes this region. It exists so that a learned
//! representation backend can attach vectors to atoms later without the
//! AtomSpace changing shape:
//!
//! - Allocation is scoped to the owning AtomSpace (one buffer per space)
//! - The buffer is released only when the space is dropped
//! - The region is named, and each atom gets a fixed-width row view into it
//!
//! Rows are zero-initialized; no ambient randomness is involved.

use crate::primitives::EMBEDDING_REGION_NAME;

/// Contiguous `rows x width` float region with named, row-wise views.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingBuffer {
    name: &'static str,
    width: usize,
    data: Vec<f32>,
}

impl EmbeddingBuffer {
    /// Allocate a zeroed region for `rows` atoms of `width` floats each.
    #[must_use]
    pub fn allocate(rows: usize, width: usize) -> Self {
        Self {
            name: EMBEDDING_REGION_NAME,
            width,
            data: vec![0.0; rows.saturating_mul(width)],
        }
    }

    /// Name of the region.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Floats per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows the region was sized for.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.data.len() / self.width
        }
    }

    /// Total number of floats held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View one row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        let start = row.checked_mul(self.width)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Mutable view of one row.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [f32]> {
        let start = row.checked_mul(self.width)?;
        let end = start.checked_add(self.width)?;
        self.data.get_mut(start..end)
    }
}

// =============================================================================
// TESTS
// =============================================================================
