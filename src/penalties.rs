// ABOUTME: Priority penalties for user-flagged severe weather factors
// ABOUTME: Multiplicative score reduction per crossed severity threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Priority penalty application
//!
//! A smooth weighted average cannot express "this one bad factor ruins my
//! day". When a user marked a factor as a priority concern (importance
//! strictly positive) and the observation crosses that factor's severity
//! threshold, the running score is multiplied by the penalty factor.
//! Each triggered factor applies independently, so simultaneous crossings
//! compound multiplicatively.
//!
//! The temperature triggers are gated as observed in the product:
//! `importance_cold` gates the hot-weather threshold and `importance_heat`
//! the cold one. See DESIGN.md for the status of that pairing.

use crate::config::PenaltyConfig;
use crate::models::{SensitivityProfile, WeatherObservation};
use tracing::debug;

/// Applies priority penalties to a weighted score
pub struct PriorityPenaltyApplier {
    /// Penalty tuning
    config: PenaltyConfig,
}

impl PriorityPenaltyApplier {
    /// Create an applier with the given tuning
    #[must_use]
    pub const fn new(config: PenaltyConfig) -> Self {
        Self { config }
    }

    /// Apply every triggered priority penalty to `weighted_score`
    #[must_use]
    pub fn apply(
        &self,
        weighted_score: f64,
        observation: &WeatherObservation,
        profile: &SensitivityProfile,
    ) -> f64 {
        let triggers = [
            (
                "cold-priority hot weather",
                profile.importance_cold,
                observation.temperature > self.config.hot_temperature_trigger,
            ),
            (
                "heat-priority cold weather",
                profile.importance_heat,
                observation.temperature < self.config.cold_temperature_trigger,
            ),
            (
                "humidity",
                profile.importance_humidity,
                observation.humidity > self.config.humidity_trigger,
            ),
            (
                "uv",
                profile.importance_uv,
                observation.uv_index > self.config.uv_trigger,
            ),
            (
                "air quality",
                profile.importance_air,
                observation.pm25 > self.config.pm25_trigger,
            ),
        ];

        let mut score = weighted_score;
        for (factor, importance, crossed) in triggers {
            if importance > 0.0 && crossed {
                score *= self.config.penalty_factor;
                debug!(factor, score, "priority penalty applied");
            }
        }
        score
    }
}

impl Default for PriorityPenaltyApplier {
    fn default() -> Self {
        Self::new(PenaltyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> WeatherObservation {
        WeatherObservation {
            temperature: 20.0,
            humidity: 50.0,
            wind_speed: 2.0,
            pm25: 10.0,
            uv_index: 3.0,
        }
    }

    fn profile_without_priorities() -> SensitivityProfile {
        SensitivityProfile {
            importance_cold: 0.0,
            importance_heat: 0.0,
            importance_humidity: 0.0,
            importance_uv: 0.0,
            importance_air: 0.0,
            ..SensitivityProfile::default()
        }
    }

    #[test]
    fn test_no_penalty_without_importance() {
        // Severe humidity but nobody flagged it
        let applier = PriorityPenaltyApplier::default();
        let score = applier.apply(
            80.0,
            &WeatherObservation {
                humidity: 95.0,
                ..observation()
            },
            &profile_without_priorities(),
        );
        assert!((score - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_penalty_without_severity() {
        // Flagged factor but mild conditions
        let applier = PriorityPenaltyApplier::default();
        let profile = SensitivityProfile {
            importance_humidity: 1.0,
            ..profile_without_priorities()
        };
        let score = applier.apply(80.0, &observation(), &profile);
        assert!((score - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_penalty_applies_factor() {
        let applier = PriorityPenaltyApplier::default();
        let profile = SensitivityProfile {
            importance_humidity: 0.4,
            ..profile_without_priorities()
        };
        let wet = WeatherObservation {
            humidity: 85.0,
            ..observation()
        };
        let score = applier.apply(80.0, &wet, &profile);
        assert!((score - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_penalties_compound_multiplicatively() {
        // 29C trips the cold-priority hot trigger, 85% trips humidity
        let applier = PriorityPenaltyApplier::default();
        let profile = SensitivityProfile {
            importance_cold: 0.5,
            importance_humidity: 0.5,
            ..profile_without_priorities()
        };
        let severe = WeatherObservation {
            temperature: 29.0,
            humidity: 85.0,
            ..observation()
        };
        let score = applier.apply(100.0, &severe, &profile);
        assert!((score - 9.0).abs() < 1e-9, "expected 100 * 0.3 * 0.3, got {score}");
    }

    #[test]
    fn test_cold_importance_triggers_on_hot_weather() {
        // Pins the observed cold/heat gating so an intentional fix is
        // visible as a test diff
        let applier = PriorityPenaltyApplier::default();
        let cold_flagged = SensitivityProfile {
            importance_cold: 1.0,
            ..profile_without_priorities()
        };
        let hot = WeatherObservation {
            temperature: 29.0,
            ..observation()
        };
        assert!((applier.apply(50.0, &hot, &cold_flagged) - 15.0).abs() < 1e-9);

        let heat_flagged = SensitivityProfile {
            importance_heat: 1.0,
            ..profile_without_priorities()
        };
        let freezing = WeatherObservation {
            temperature: 5.0,
            ..observation()
        };
        assert!((applier.apply(50.0, &freezing, &heat_flagged) - 15.0).abs() < 1e-9);
        // And the flags do nothing for the weather their names suggest
        assert!((applier.apply(50.0, &freezing, &cold_flagged) - 50.0).abs() < 1e-9);
        assert!((applier.apply(50.0, &hot, &heat_flagged) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_boundaries_are_strict() {
        let applier = PriorityPenaltyApplier::default();
        let profile = SensitivityProfile {
            importance_cold: 1.0,
            importance_humidity: 1.0,
            importance_uv: 1.0,
            importance_air: 1.0,
            ..profile_without_priorities()
        };
        // Exactly at each threshold: no trigger fires
        let boundary = WeatherObservation {
            temperature: 28.0,
            humidity: 80.0,
            wind_speed: 2.0,
            pm25: 50.0,
            uv_index: 8.0,
        };
        assert!((applier.apply(70.0, &boundary, &profile) - 70.0).abs() < 1e-9);
    }
}
