//! Capabilities the block builder consumes and exposes.
//!
//! The trip graph is injected rather than looked up globally, so callers can
//! back it with a database, a compiled bundle, or a test fake.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Trip Graph
// ============================================================================

/// Access to operational vehicle blocks
pub trait TripGraph: Send + Sync {
    fn get_trip(&self, id: &TripIdentifier) -> Option<Arc<Trip>>;

    /// Trip run by the same vehicle immediately before `id`.
    ///
    /// `Ok(None)` when `id` opens its block or has no block at all.
    fn previous_trip(&self, id: &TripIdentifier) -> Result<Option<Arc<Trip>>>;

    /// Trip run by the same vehicle immediately after `id`
    fn next_trip(&self, id: &TripIdentifier) -> Result<Option<Arc<Trip>>>;
}

impl<G: TripGraph + ?Sized> TripGraph for Arc<G> {
    fn get_trip(&self, id: &TripIdentifier) -> Option<Arc<Trip>> {
        (**self).get_trip(id)
    }

    fn previous_trip(&self, id: &TripIdentifier) -> Result<Option<Arc<Trip>>> {
        (**self).previous_trip(id)
    }

    fn next_trip(&self, id: &TripIdentifier) -> Result<Option<Arc<Trip>>> {
        (**self).next_trip(id)
    }
}

// ============================================================================
// Service Trait
// ============================================================================

/// Builds directional blocks for the stop sequences of one route
pub trait StopSequenceCollectionService {
    fn stop_sequences_as_blocks(
        &self,
        sequences: &[Arc<StopSequence>],
    ) -> Result<Vec<StopSequenceCollection>>;
}
