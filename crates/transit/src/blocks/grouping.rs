//! Partition stop sequences into direction groups.
//!
//! Explicit direction ids win when every sequence has one and they split the
//! sequences into more than one group. Otherwise sequences are clustered by
//! shared stop pairs using Union-Find, which also merges transitively
//! overlapping chains (A~B and B~C puts A and C together).

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::models::types::StopSequence;
use crate::union_find::UnionFind;

/// One direction group: its key and member indices into the sequence slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionGroup {
    pub key: String,
    pub members: Vec<usize>,
}

/// Group sequences by direction. Groups come back in discovery order.
pub fn group_sequences(sequences: &[Arc<StopSequence>], min_common_ratio: f64) -> Vec<DirectionGroup> {
    if let Some(groups) = group_by_direction_id(sequences) {
        if groups.len() > 1 {
            debug!(groups = groups.len(), "grouped stop sequences by direction id");
            return groups;
        }
    }

    let groups = group_by_shared_stop_pairs(sequences, min_common_ratio);
    debug!(groups = groups.len(), "grouped stop sequences by shared stop pairs");
    groups
}

/// `None` unless every sequence carries a direction id
pub fn group_by_direction_id(sequences: &[Arc<StopSequence>]) -> Option<Vec<DirectionGroup>> {
    let mut groups: Vec<DirectionGroup> = Vec::new();
    let mut slot_by_key: HashMap<&str, usize> = HashMap::new();

    for (i, sequence) in sequences.iter().enumerate() {
        let key = sequence.direction_id.as_ref()?.as_str();
        let slot = *slot_by_key.entry(key).or_insert_with(|| {
            groups.push(DirectionGroup {
                key: key.to_string(),
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(i);
    }

    Some(groups)
}

/// Cluster by pairwise stop-pair overlap; keys are "0", "1", ...
pub fn group_by_shared_stop_pairs(
    sequences: &[Arc<StopSequence>],
    min_common_ratio: f64,
) -> Vec<DirectionGroup> {
    let pairs: Vec<_> = sequences.iter().map(|s| s.stop_pairs()).collect();

    let mut uf = UnionFind::with_capacity(sequences.len());
    for i in 0..sequences.len() {
        uf.make_set(i);
    }

    for i in 0..sequences.len() {
        for j in (i + 1)..sequences.len() {
            let ratio = max_common_ratio(&pairs[i], &pairs[j]);
            if ratio >= min_common_ratio {
                trace!(
                    a = %sequences[i].id,
                    b = %sequences[j].id,
                    ratio,
                    "joining stop sequences"
                );
                uf.union(&i, &j);
            }
        }
    }

    uf.groups()
        .into_iter()
        .enumerate()
        .map(|(index, members)| DirectionGroup {
            key: index.to_string(),
            members,
        })
        .collect()
}

/// Shared pairs over the smaller set's size. Zero if either set is empty.
pub fn max_common_ratio<T: std::hash::Hash + Eq>(
    a: &std::collections::HashSet<T>,
    b: &std::collections::HashSet<T>,
) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a.intersection(b).count() as f64;
    let ratio_a = common / a.len() as f64;
    let ratio_b = common / b.len() as f64;
    ratio_a.max(ratio_b)
}
