//! Continuation edges between stop sequences.
//!
//! Sequence B continues sequence A when a trip of B is run by the same
//! vehicle immediately after a trip of A, both sit in the same direction
//! group, and B starts close to where A ends. The result is a directed
//! multigraph stored in each sequence's [`SequenceStats::continuations`];
//! cycles are left in place for the explorer to deal with.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::blocks::grouping::DirectionGroup;
use crate::blocks::stats::SequenceStats;
use crate::identifiers::TripIdentifier;
use crate::models::traits::TripGraph;
use crate::models::types::StopSequence;
use crate::spatial::stop_distance;

/// Add continuation edges to `stats`. Returns the number of edges added.
pub fn compute_continuations<G: TripGraph + ?Sized>(
    graph: &G,
    sequences: &[Arc<StopSequence>],
    stats: &mut [SequenceStats],
    groups: &[DirectionGroup],
    max_gap: f64,
) -> usize {
    let mut group_of: Vec<usize> = vec![usize::MAX; sequences.len()];
    for (g, group) in groups.iter().enumerate() {
        for &member in &group.members {
            group_of[member] = g;
        }
    }

    // Trip -> owning sequence, only for trips in a vehicle block. The first
    // sequence to claim a trip keeps it.
    let mut trip_order: Vec<&TripIdentifier> = Vec::new();
    let mut sequence_by_trip: HashMap<&TripIdentifier, usize> = HashMap::new();
    for (i, sequence) in sequences.iter().enumerate() {
        for trip in &sequence.trips {
            if trip.block_id.is_none() {
                continue;
            }
            if !sequence_by_trip.contains_key(&trip.id) {
                sequence_by_trip.insert(&trip.id, i);
                trip_order.push(&trip.id);
            }
        }
    }

    let mut added = 0;
    for trip_id in trip_order {
        let prev_trip = match graph.previous_trip(trip_id) {
            Ok(Some(prev)) => prev,
            Ok(None) => continue,
            Err(err) => {
                warn!(trip = %trip_id, %err, "previous trip lookup failed");
                continue;
            }
        };

        let Some(&prev) = sequence_by_trip.get(&prev_trip.id) else {
            continue;
        };
        let current = sequence_by_trip[trip_id];

        if prev == current || group_of[prev] != group_of[current] {
            continue;
        }

        let (Some(from), Some(to)) = (sequences[prev].last_stop(), sequences[current].first_stop())
        else {
            continue;
        };

        let gap = stop_distance(from, to);
        if gap < max_gap {
            trace!(
                from = %sequences[prev].id,
                to = %sequences[current].id,
                gap,
                "continuation"
            );
            let before = stats[prev].continuations.len();
            stats[prev].add_continuation(current);
            added += stats[prev].continuations.len() - before;
        }
    }

    debug!(edges = added, "computed stop sequence continuations");
    added
}
