//! Geometric summary of one or more chained stop sequences.

use geo::Point;

use crate::models::types::Stop;
use crate::spatial::queries::stop_distance;

/// Start point, end point and cumulative travelled distance (meters)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub distance: f64,
}

impl Segment {
    pub fn new(start: Point, end: Point, distance: f64) -> Self {
        Self {
            start,
            end,
            distance,
        }
    }

    /// Walk the stops in order, summing the hop distances.
    ///
    /// Returns `None` for an empty stop list.
    pub fn from_stops<'a>(stops: impl IntoIterator<Item = &'a Stop>) -> Option<Self> {
        let mut stops = stops.into_iter();
        let first = stops.next()?;

        let mut segment = Self::new(first.location, first.location, 0.0);
        let mut prev = first;
        for stop in stops {
            segment.distance += stop_distance(prev, stop);
            segment.end = stop.location;
            prev = stop;
        }
        Some(segment)
    }

    /// `self` followed by `next`: keeps this start, takes the other's end
    pub fn concat(&self, next: &Segment) -> Segment {
        Segment::new(self.start, next.end, self.distance + next.distance)
    }

    /// A start latitude of exactly 0.0 marks geometry that was never set
    pub fn is_degenerate(&self) -> bool {
        self.start.y() == 0.0
    }
}
