//! In-memory trip graph.
//!
//! Stores every trip in memory and precomputes the previous/next links of
//! each vehicle block so lookups are plain map reads.

use std::collections::HashMap;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};

#[derive(Clone, Debug, Default)]
struct BlockLinks {
    previous: Option<Arc<Trip>>,
    next: Option<Arc<Trip>>,
}

/// In-memory [`TripGraph`] built from a list of trips
///
/// This type is cheap to clone since all trips are stored in `Arc`s.
#[derive(Clone, Debug, Default)]
pub struct StaticTripGraph {
    trips: Vec<Arc<Trip>>,
    trip_map: HashMap<TripIdentifier, Arc<Trip>>,
    links: HashMap<TripIdentifier, BlockLinks>,
}

impl StaticTripGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph, linking trips of the same block in `block_sequence`
    /// order. Trips with equal sequence numbers keep their input order.
    pub fn from_trips(trips: impl IntoIterator<Item = Arc<Trip>>) -> Self {
        let trips: Vec<Arc<Trip>> = trips.into_iter().collect();

        let trip_map: HashMap<_, _> = trips
            .iter()
            .map(|t| (t.id.clone(), t.clone()))
            .collect();

        // Group by block, preserving first-seen block order
        let mut block_order: Vec<BlockIdentifier> = Vec::new();
        let mut blocks: HashMap<BlockIdentifier, Vec<Arc<Trip>>> = HashMap::new();
        for trip in &trips {
            if let Some(block_id) = &trip.block_id {
                blocks
                    .entry(block_id.clone())
                    .or_insert_with(|| {
                        block_order.push(block_id.clone());
                        Vec::new()
                    })
                    .push(trip.clone());
            }
        }

        let mut links: HashMap<TripIdentifier, BlockLinks> = HashMap::new();
        for block_id in &block_order {
            let Some(block) = blocks.get_mut(block_id) else {
                continue;
            };
            block.sort_by_key(|t| t.block_sequence);

            for pair in block.windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                links.entry(prev.id.clone()).or_default().next = Some(next.clone());
                links.entry(next.id.clone()).or_default().previous = Some(prev.clone());
            }
        }

        Self {
            trips,
            trip_map,
            links,
        }
    }

    pub fn all_trips(&self) -> &[Arc<Trip>] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    fn links_for(&self, id: &TripIdentifier) -> Result<Option<&BlockLinks>> {
        if !self.trip_map.contains_key(id) {
            return Err(TransitError::TripNotFound(id.clone()));
        }
        Ok(self.links.get(id))
    }
}

impl TripGraph for StaticTripGraph {
    fn get_trip(&self, id: &TripIdentifier) -> Option<Arc<Trip>> {
        self.trip_map.get(id).cloned()
    }

    fn previous_trip(&self, id: &TripIdentifier) -> Result<Option<Arc<Trip>>> {
        Ok(self.links_for(id)?.and_then(|l| l.previous.clone()))
    }

    fn next_trip(&self, id: &TripIdentifier) -> Result<Option<Arc<Trip>>> {
        Ok(self.links_for(id)?.and_then(|l| l.next.clone()))
    }
}
