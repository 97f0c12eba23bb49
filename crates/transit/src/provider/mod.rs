//! Trip graph providers.

pub mod static_provider;

pub use static_provider::StaticTripGraph;
