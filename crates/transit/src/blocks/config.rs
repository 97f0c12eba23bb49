//! Tuning knobs for block construction.

use crate::models::types::{Result, TransitError};

/// Thresholds used while grouping and exploring stop sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlockConfig {
    /// Minimum shared stop-pair ratio for two sequences to be grouped when
    /// direction ids are unusable.
    pub min_common_stop_pair_ratio: f64,

    /// Sequences below this fraction of their group's busiest sequence are
    /// not considered representative.
    pub min_trip_count_ratio: f64,

    /// Largest gap (meters) between one sequence's last stop and the next
    /// sequence's first stop that still counts as a continuation.
    pub max_continuation_gap: f64,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            min_common_stop_pair_ratio: 0.3,
            min_trip_count_ratio: 0.2,
            max_continuation_gap: 5280.0 / 4.0,
        }
    }
}

impl BlockConfig {
    pub fn with_min_common_stop_pair_ratio(mut self, ratio: f64) -> Self {
        self.min_common_stop_pair_ratio = ratio;
        self
    }

    pub fn with_min_trip_count_ratio(mut self, ratio: f64) -> Self {
        self.min_trip_count_ratio = ratio;
        self
    }

    pub fn with_max_continuation_gap(mut self, gap: f64) -> Self {
        self.max_continuation_gap = gap;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_common_stop_pair_ratio", self.min_common_stop_pair_ratio),
            ("min_trip_count_ratio", self.min_trip_count_ratio),
            ("max_continuation_gap", self.max_continuation_gap),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(TransitError::InvalidData(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        if self.min_trip_count_ratio > 1.0 {
            return Err(TransitError::InvalidData(format!(
                "min_trip_count_ratio must not exceed 1, got {}",
                self.min_trip_count_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BlockConfig::default();
        assert_eq!(config.min_common_stop_pair_ratio, 0.3);
        assert_eq!(config.min_trip_count_ratio, 0.2);
        assert_eq!(config.max_continuation_gap, 1320.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = BlockConfig::default().with_max_continuation_gap(f64::NAN);
        assert!(matches!(config.validate(), Err(TransitError::InvalidData(_))));

        let config = BlockConfig::default().with_min_trip_count_ratio(-0.1);
        assert!(config.validate().is_err());

        // Would discard every sequence, including the busiest
        let config = BlockConfig::default().with_min_trip_count_ratio(1.5);
        assert!(config.validate().is_err());
    }
}
