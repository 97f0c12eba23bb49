//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use transit_blocks::prelude::*;

/// Install a test-writer subscriber so `RUST_LOG`-style output shows up
/// under `cargo test -- --nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

pub fn stop(id: &str, lat: f64, lon: f64) -> Arc<Stop> {
    Arc::new(Stop::new(id, lat, lon))
}

/// Stops along a meridian, `step` degrees of latitude apart
pub fn stops_north(prefix: &str, start_lat: f64, step: f64, n: usize) -> Vec<Arc<Stop>> {
    (0..n)
        .map(|i| stop(&format!("{prefix}{i}"), start_lat + step * i as f64, -122.3))
        .collect()
}

pub fn trip(id: &str, headsign: &str) -> Arc<Trip> {
    Arc::new(Trip::new(id, "r1").with_headsign(headsign))
}

pub fn block_trip(id: &str, headsign: &str, block: &str, seq: u32) -> Arc<Trip> {
    Arc::new(
        Trip::new(id, "r1")
            .with_headsign(headsign)
            .with_block(block, seq),
    )
}

pub struct SequenceBuilder {
    sequence: StopSequence,
}

impl SequenceBuilder {
    pub fn new(id: &str, stops: Vec<Arc<Stop>>) -> Self {
        Self {
            sequence: StopSequence {
                id: id.into(),
                route_id: "r1".into(),
                stops,
                trips: Vec::new(),
                direction_id: None,
                trip_count: 0,
            },
        }
    }

    pub fn direction(mut self, direction: &str) -> Self {
        self.sequence.direction_id = Some(direction.into());
        self
    }

    /// Adds the trips and bumps the trip count to match
    pub fn trips(mut self, trips: Vec<Arc<Trip>>) -> Self {
        self.sequence.trip_count += trips.len() as u64;
        self.sequence.trips.extend(trips);
        self
    }

    pub fn trip_count(mut self, count: u64) -> Self {
        self.sequence.trip_count = count;
        self
    }

    pub fn build(self) -> Arc<StopSequence> {
        Arc::new(self.sequence)
    }
}

pub fn ids(block: &StopSequenceCollection) -> Vec<&str> {
    block.stop_sequences.iter().map(|s| s.id.as_str()).collect()
}
