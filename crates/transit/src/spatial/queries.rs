//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

use crate::models::types::Stop;

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Great-circle distance between two stops in meters
pub fn stop_distance(a: &Stop, b: &Stop) -> f64 {
    haversine_distance(a.location, b.location)
}
