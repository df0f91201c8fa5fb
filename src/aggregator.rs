// ABOUTME: Weighted aggregation of factor sub-scores
// ABOUTME: Resolves user weight overrides and guards the zero-weight edge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Weighted score aggregation
//!
//! Combines the five factor sub-scores into one weighted average using the
//! user's adjustment-slider overrides. Factors without an override get the
//! neutral weight; wind always uses the fixed configured weight. A factor
//! weighted to zero contributes nothing to either side of the division.

use crate::config::AggregationConfig;
use crate::factor_scores::FactorScores;
use crate::models::FactorWeights;
use tracing::{debug, warn};

/// Weighted aggregator over the five factor sub-scores
pub struct WeightedAggregator {
    /// Weight resolution settings
    config: AggregationConfig,
}

impl WeightedAggregator {
    /// Create an aggregator with the given weight settings
    #[must_use]
    pub const fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Combine the sub-scores into one weighted average
    ///
    /// If every resolved weight is zero (only reachable when the
    /// configured wind weight is zero and the caller zeroes all
    /// overrides), the division would be undefined; the aggregator falls
    /// back to the unweighted mean of the five sub-scores instead.
    #[must_use]
    pub fn aggregate(&self, scores: &FactorScores, overrides: &FactorWeights) -> f64 {
        let neutral = self.config.neutral_weight;
        let temperature_weight = overrides.temperature.unwrap_or(neutral);
        let humidity_weight = overrides.humidity.unwrap_or(neutral);
        let uv_weight = overrides.uv.unwrap_or(neutral);
        let air_weight = overrides.air_quality.unwrap_or(neutral);
        let wind_weight = self.config.wind_weight;

        let total_weight =
            temperature_weight + humidity_weight + wind_weight + air_weight + uv_weight;

        if !total_weight.is_finite() || total_weight <= 0.0 {
            warn!(
                total_weight,
                "all aggregation weights resolved to zero; falling back to unweighted mean"
            );
            return (scores.temperature
                + scores.humidity
                + scores.wind_speed
                + scores.air_quality
                + scores.uv_index)
                / 5.0;
        }

        let weighted = (scores.temperature * temperature_weight
            + scores.humidity * humidity_weight
            + scores.wind_speed * wind_weight
            + scores.air_quality * air_weight
            + scores.uv_index * uv_weight)
            / total_weight;

        debug!(weighted, total_weight, "sub-scores aggregated");
        weighted
    }
}

impl Default for WeightedAggregator {
    fn default() -> Self {
        Self::new(AggregationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: FactorScores = FactorScores {
        temperature: 100.0,
        humidity: 50.0,
        wind_speed: 80.0,
        air_quality: 100.0,
        uv_index: 0.0,
    };

    #[test]
    fn test_neutral_weights_with_fixed_wind() {
        // Four neutral 50s plus the fixed wind 30: denominator 230
        let aggregator = WeightedAggregator::default();
        let result = aggregator.aggregate(&SCORES, &FactorWeights::default());
        let expected = (100.0 * 50.0 + 50.0 * 50.0 + 80.0 * 30.0 + 100.0 * 50.0) / 230.0;
        assert!((result - expected).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_zero_drops_factor() {
        let aggregator = WeightedAggregator::default();
        let overrides = FactorWeights {
            temperature: Some(0.0),
            ..FactorWeights::default()
        };
        let result = aggregator.aggregate(&SCORES, &overrides);
        let expected = (50.0 * 50.0 + 80.0 * 30.0 + 100.0 * 50.0) / 180.0;
        assert!((result - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_dominant_weight() {
        let aggregator = WeightedAggregator::new(AggregationConfig {
            neutral_weight: 50.0,
            wind_weight: 0.0,
        });
        let overrides = FactorWeights {
            temperature: Some(100.0),
            humidity: Some(0.0),
            uv: Some(0.0),
            air_quality: Some(0.0),
        };
        let result = aggregator.aggregate(&SCORES, &overrides);
        assert!((result - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_mean() {
        let aggregator = WeightedAggregator::new(AggregationConfig {
            neutral_weight: 50.0,
            wind_weight: 0.0,
        });
        let overrides = FactorWeights {
            temperature: Some(0.0),
            humidity: Some(0.0),
            uv: Some(0.0),
            air_quality: Some(0.0),
        };
        let result = aggregator.aggregate(&SCORES, &overrides);
        let mean = (100.0 + 50.0 + 80.0 + 100.0 + 0.0) / 5.0;
        assert!((result - mean).abs() < 1e-9);
    }
}
