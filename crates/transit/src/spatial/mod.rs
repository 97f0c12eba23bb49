//! Distance and segment geometry.

pub mod queries;
pub mod segment;

pub use queries::{haversine_distance, stop_distance};
pub use segment::Segment;
