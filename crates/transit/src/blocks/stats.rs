//! Per-sequence statistics: trip count, geometry and continuation edges.

use std::sync::Arc;

use crate::models::types::{Result, StopSequence, TransitError};
use crate::spatial::Segment;

/// Statistics for the sequence at the same index of the input slice
#[derive(Debug, Clone)]
pub struct SequenceStats {
    pub trip_count: u64,
    pub segment: Segment,
    /// Indices of sequences that continue this one, in discovery order
    pub continuations: Vec<usize>,
}

impl SequenceStats {
    pub fn add_continuation(&mut self, next: usize) {
        if !self.continuations.contains(&next) {
            self.continuations.push(next);
        }
    }
}

/// Compute stats for every sequence, index-aligned with the input.
///
/// Sequences must already be pruned of empty stop lists.
pub fn sequence_stats(sequences: &[Arc<StopSequence>]) -> Result<Vec<SequenceStats>> {
    sequences
        .iter()
        .map(|sequence| {
            let segment = Segment::from_stops(sequence.stops.iter().map(|s| s.as_ref()))
                .ok_or_else(|| {
                    TransitError::InvalidData(format!("stop sequence {} has no stops", sequence.id))
                })?;
            Ok(SequenceStats {
                trip_count: sequence.trip_count,
                segment,
                continuations: Vec::new(),
            })
        })
        .collect()
}
