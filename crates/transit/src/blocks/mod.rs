//! Directional blocks for a route's stop sequences.
//!
//! A block collects the stop sequences heading the same way along a route,
//! names them after their most common headsign and summarises them with the
//! start and end of the longest chain of sequences that vehicles actually
//! run back to back.
//!
//! The pipeline, per call:
//!
//! 1. Drop sequences without stops
//! 2. [`stats`]: trip count and geometry per sequence
//! 3. [`grouping`]: partition into direction groups
//! 4. [`continuations`]: link sequences chained by vehicle blocks
//! 5. [`explore`] and [`naming`]: representative geometry and name per group
//!
//! All intermediate state is indexed by position in the pruned input and
//! dropped when the call returns.

pub mod config;
pub mod continuations;
pub mod explore;
pub mod grouping;
pub mod naming;
pub mod stats;

use std::sync::Arc;

use tracing::{debug, trace};

pub use config::BlockConfig;
pub use grouping::DirectionGroup;

use crate::identifiers::RouteIdentifier;
use crate::models::traits::{StopSequenceCollectionService, TripGraph};
use crate::models::types::{
    Result, StopSequence, StopSequenceCollection, StopSequenceCollectionKey, TransitError,
};
use crate::spatial::Segment;

/// Remove sequences that have no stops
pub fn prune_empty_stop_sequences(sequences: &mut Vec<Arc<StopSequence>>) {
    sequences.retain(|s| !s.is_empty());
}

/// Builds [`StopSequenceCollection`] blocks using an injected [`TripGraph`]
#[derive(Debug, Clone)]
pub struct StopSequenceBlocksService<G> {
    graph: G,
    config: BlockConfig,
}

impl<G: TripGraph> StopSequenceBlocksService<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            config: BlockConfig::default(),
        }
    }

    pub fn with_config(graph: G, config: BlockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &BlockConfig {
        &self.config
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn construct_blocks(
        &self,
        sequences: &[Arc<StopSequence>],
        mut stats: Vec<stats::SequenceStats>,
        groups: Vec<DirectionGroup>,
    ) -> Result<Vec<StopSequenceCollection>> {
        continuations::compute_continuations(
            &self.graph,
            sequences,
            &mut stats,
            &groups,
            self.config.max_continuation_gap,
        );

        let mut names: Vec<(String, String)> = Vec::with_capacity(groups.len());
        let mut segments: Vec<Option<Segment>> = Vec::with_capacity(groups.len());

        for group in &groups {
            let members = group.members.iter().map(|&i| sequences[i].as_ref());
            let name = naming::dominant_headsign(members).unwrap_or_default();
            let segment =
                explore::longest_segment(&stats, &group.members, self.config.min_trip_count_ratio);

            trace!(direction = %group.key, %name, ?segment, "explored direction group");
            names.push((group.key.clone(), name));
            segments.push(segment);
        }

        naming::disambiguate(&mut names);

        groups
            .into_iter()
            .zip(names)
            .zip(segments)
            .map(|((group, (direction, description)), segment)| {
                let segment = match segment {
                    Some(segment) if !segment.is_degenerate() => segment,
                    _ => return Err(TransitError::DegenerateGeometry { direction }),
                };

                let stop_sequences: Vec<Arc<StopSequence>> =
                    group.members.iter().map(|&i| sequences[i].clone()).collect();

                debug!(
                    direction = %direction,
                    name = %description,
                    sequences = stop_sequences.len(),
                    "built block"
                );

                Ok(StopSequenceCollection {
                    id: StopSequenceCollectionKey {
                        route_id: shared_route_id(&stop_sequences),
                        direction: direction.clone(),
                    },
                    public_id: direction,
                    description,
                    stop_sequences,
                    start: segment.start,
                    end: segment.end,
                })
            })
            .collect()
    }
}

impl<G: TripGraph> StopSequenceCollectionService for StopSequenceBlocksService<G> {
    fn stop_sequences_as_blocks(
        &self,
        sequences: &[Arc<StopSequence>],
    ) -> Result<Vec<StopSequenceCollection>> {
        let mut sequences = sequences.to_vec();
        prune_empty_stop_sequences(&mut sequences);

        if sequences.is_empty() {
            return Ok(Vec::new());
        }

        let stats = stats::sequence_stats(&sequences)?;
        let groups = grouping::group_sequences(&sequences, self.config.min_common_stop_pair_ratio);

        self.construct_blocks(&sequences, stats, groups)
    }
}

/// Route shared by every sequence, if they agree
fn shared_route_id(sequences: &[Arc<StopSequence>]) -> Option<RouteIdentifier> {
    let first = &sequences.first()?.route_id;
    sequences
        .iter()
        .all(|s| &s.route_id == first)
        .then(|| first.clone())
}
