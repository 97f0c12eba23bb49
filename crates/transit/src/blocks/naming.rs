//! Block display names.

use std::collections::{HashMap, HashSet};

use crate::models::types::StopSequence;

/// Most frequent non-empty headsign across all trips of `sequences`.
/// Ties go to the headsign that reached the winning count first.
pub fn dominant_headsign<'a>(sequences: impl IntoIterator<Item = &'a StopSequence>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<(&str, usize)> = None;

    for sequence in sequences {
        for trip in &sequence.trips {
            let Some(headsign) = trip.display_headsign() else {
                continue;
            };
            let count = counts.entry(headsign).or_insert(0);
            *count += 1;
            if best.map_or(true, |(_, n)| *count > n) {
                best = Some((headsign, *count));
            }
        }
    }

    best.map(|(headsign, _)| headsign.to_string())
}

/// "NORTH" / "north" -> "North"
pub fn format_direction(direction: &str) -> String {
    let mut chars = direction.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// If any two groups share a name, suffix every name with its direction.
///
/// `names` holds `(direction key, name)` per group.
pub fn disambiguate(names: &mut [(String, String)]) {
    let distinct: HashSet<&str> = names.iter().map(|(_, name)| name.as_str()).collect();
    if distinct.len() == names.len() {
        return;
    }

    for (direction, name) in names.iter_mut() {
        let direction = format_direction(direction);
        *name = if name.is_empty() {
            direction
        } else {
            format!("{name} - {direction}")
        };
    }
}
