//! # transit-blocks
//!
//! Directional blocks for transit routes.
//!
//! Given the stop sequences (stopping patterns) of one route, partition them
//! into groups that travel the same direction, name each group after its
//! dominant headsign and summarise it with a representative start and end
//! point.
//!
//! ## Features
//!
//! - **Direction grouping**: explicit direction ids, or stop-pair overlap
//!   clustering when those are missing or uninformative
//! - **Vehicle block chaining**: sequences run back to back by the same
//!   vehicle are chained when picking the representative span
//! - **Pluggable trip graph**: bring your own [`TripGraph`], or use the
//!   in-memory [`StaticTripGraph`]
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use transit_blocks::prelude::*;
//!
//! let stop = |id: &str, lat: f64| Arc::new(Stop::new(id, lat, -122.33));
//! let (a, b, c) = (stop("a", 47.60), stop("b", 47.61), stop("c", 47.62));
//!
//! let north = Arc::new(Trip::new("t1", "r1").with_headsign("Northgate"));
//! let south = Arc::new(Trip::new("t2", "r1").with_headsign("Downtown"));
//!
//! let sequences = vec![
//!     Arc::new(StopSequence {
//!         id: "northbound".into(),
//!         route_id: "r1".into(),
//!         stops: vec![a.clone(), b.clone(), c.clone()],
//!         trips: vec![north],
//!         direction_id: Some("0".into()),
//!         trip_count: 1,
//!     }),
//!     Arc::new(StopSequence {
//!         id: "southbound".into(),
//!         route_id: "r1".into(),
//!         stops: vec![c, b, a],
//!         trips: vec![south],
//!         direction_id: Some("1".into()),
//!         trip_count: 1,
//!     }),
//! ];
//!
//! let service = StopSequenceBlocksService::new(StaticTripGraph::new());
//! let blocks = service.stop_sequences_as_blocks(&sequences).unwrap();
//!
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].description, "Northgate");
//! assert_eq!(blocks[1].public_id, "1");
//! ```

pub mod blocks;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod spatial;
pub mod union_find;

// Re-exports for convenience
pub mod prelude {
    pub use crate::blocks::{prune_empty_stop_sequences, BlockConfig, StopSequenceBlocksService};
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::static_provider::StaticTripGraph;
    pub use crate::spatial::Segment;
    pub use crate::union_find::UnionFind;
}

pub use prelude::*;
