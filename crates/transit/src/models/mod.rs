//! Transit data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::{StopSequenceCollectionService, TripGraph};
pub use types::{
    Result, Stop, StopSequence, StopSequenceCollection, StopSequenceCollectionKey, TransitError,
    Trip,
};
