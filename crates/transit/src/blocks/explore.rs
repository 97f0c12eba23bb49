//! Longest representative chain through the continuation graph.
//!
//! Depth-first over continuation edges with an explicit stack. A node is
//! marked on the current path while its continuations are being explored
//! and unmarked once they are exhausted, so cycles terminate but a node may
//! still be reached again along a different path. This finds the longest
//! chain reachable under that rule, not the global longest path.

use std::collections::HashSet;

use crate::blocks::stats::SequenceStats;
use crate::spatial::Segment;

struct Frame<'a> {
    candidates: &'a [usize],
    next: usize,
    prefix: Option<Segment>,
    /// Node whose continuations these are; `None` for the root frame
    owner: Option<usize>,
}

/// Segment of maximum cumulative distance over all chains starting at
/// `roots`. Sequences with fewer than `min_trip_count_ratio` of the group's
/// maximum trip count are skipped, both as roots and as intermediate nodes.
///
/// Ties keep the first segment found. `None` only if every root is skipped.
pub fn longest_segment(
    stats: &[SequenceStats],
    roots: &[usize],
    min_trip_count_ratio: f64,
) -> Option<Segment> {
    let max_trip_count = roots
        .iter()
        .map(|&i| stats[i].trip_count)
        .max()
        .unwrap_or(0);

    let representative = |i: usize| {
        if max_trip_count == 0 {
            return true;
        }
        let ratio = stats[i].trip_count as f64 / max_trip_count as f64;
        ratio >= min_trip_count_ratio
    };

    let mut longest: Option<Segment> = None;
    let mut on_path: HashSet<usize> = HashSet::new();
    let mut stack = vec![Frame {
        candidates: roots,
        next: 0,
        prefix: None,
        owner: None,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&node) = frame.candidates.get(frame.next) else {
            if let Some(owner) = frame.owner {
                on_path.remove(&owner);
            }
            stack.pop();
            continue;
        };
        frame.next += 1;

        if on_path.contains(&node) || !representative(node) {
            continue;
        }

        let stat = &stats[node];
        let segment = match &frame.prefix {
            Some(prefix) => prefix.concat(&stat.segment),
            None => stat.segment,
        };

        if longest.map_or(true, |l| segment.distance > l.distance) {
            longest = Some(segment);
        }

        if !stat.continuations.is_empty() {
            on_path.insert(node);
            stack.push(Frame {
                candidates: &stat.continuations,
                next: 0,
                prefix: Some(segment),
                owner: Some(node),
            });
        }
    }

    longest
}
