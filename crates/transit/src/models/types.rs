//! Core data types for stop sequences and the blocks built from them.

use std::collections::HashSet;
use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Entities
// ============================================================================

/// A boarding location.
///
/// `location` follows the `geo` convention: x is longitude, y is latitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    pub location: Point,
}

impl Stop {
    pub fn new(id: impl Into<StopIdentifier>, lat: f64, lon: f64) -> Self {
        let id = id.into();
        Self {
            name: id.as_str().into(),
            id,
            location: Point::new(lon, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }
}

/// A single vehicle run.
///
/// Trips sharing a `block_id` are operated by the same vehicle one after
/// another, ordered by `block_sequence`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: TripIdentifier,
    pub route_id: RouteIdentifier,
    pub block_id: Option<BlockIdentifier>,
    pub block_sequence: u32,
    pub headsign: Option<Arc<str>>,
    pub direction_id: Option<DirectionIdentifier>,
}

impl Trip {
    pub fn new(id: impl Into<TripIdentifier>, route_id: impl Into<RouteIdentifier>) -> Self {
        Self {
            id: id.into(),
            route_id: route_id.into(),
            block_id: None,
            block_sequence: 0,
            headsign: None,
            direction_id: None,
        }
    }

    pub fn with_block(mut self, block_id: impl Into<BlockIdentifier>, sequence: u32) -> Self {
        self.block_id = Some(block_id.into());
        self.block_sequence = sequence;
        self
    }

    pub fn with_headsign(mut self, headsign: impl AsRef<str>) -> Self {
        self.headsign = Some(headsign.as_ref().into());
        self
    }

    pub fn with_direction(mut self, direction_id: impl Into<DirectionIdentifier>) -> Self {
        self.direction_id = Some(direction_id.into());
        self
    }

    /// Headsign, if present and non-empty
    pub fn display_headsign(&self) -> Option<&str> {
        self.headsign.as_deref().filter(|h| !h.is_empty())
    }
}

/// An ordered stopping pattern shared by one or more trips.
#[derive(Clone, Debug)]
pub struct StopSequence {
    pub id: StopSequenceIdentifier,
    pub route_id: RouteIdentifier,
    pub stops: Vec<Arc<Stop>>,
    pub trips: Vec<Arc<Trip>>,
    pub direction_id: Option<DirectionIdentifier>,
    /// Trips using this pattern, weighted by service frequency
    pub trip_count: u64,
}

impl StopSequence {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first_stop(&self) -> Option<&Stop> {
        self.stops.first().map(|s| s.as_ref())
    }

    pub fn last_stop(&self) -> Option<&Stop> {
        self.stops.last().map(|s| s.as_ref())
    }

    /// Set of consecutive (from, to) stop pairs along the pattern
    pub fn stop_pairs(&self) -> HashSet<(StopIdentifier, StopIdentifier)> {
        self.stops
            .windows(2)
            .map(|w| (w[0].id.clone(), w[1].id.clone()))
            .collect()
    }
}

impl PartialEq for StopSequence {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StopSequence {}

// ============================================================================
// Output
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StopSequenceCollectionKey {
    pub route_id: Option<RouteIdentifier>,
    pub direction: String,
}

/// A named group of stop sequences travelling in the same direction
#[derive(Clone, Debug)]
pub struct StopSequenceCollection {
    pub id: StopSequenceCollectionKey,
    pub public_id: String,
    pub description: String,
    pub stop_sequences: Vec<Arc<StopSequence>>,
    pub start: Point,
    pub end: Point,
}

impl StopSequenceCollection {
    pub fn start_lat(&self) -> f64 {
        self.start.y()
    }

    pub fn start_lon(&self) -> f64 {
        self.start.x()
    }

    pub fn end_lat(&self) -> f64 {
        self.end.y()
    }

    pub fn end_lon(&self) -> f64 {
        self.end.x()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Trip not found: {0}")]
    TripNotFound(TripIdentifier),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Internal invariant violation: a group ended up without geometry
    #[error("Direction group {direction:?} produced no representative geometry")]
    DegenerateGeometry { direction: String },
}

pub type Result<T> = std::result::Result<T, TransitError>;
