// ABOUTME: Per-factor comfort sub-scores for weather observations
// ABOUTME: Temperature, humidity, wind, air quality, and UV scoring curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Five independent factor scoring curves
//!
//! Each function maps one raw reading (plus the relevant sensitivity
//! inputs) to a continuous score in `[0, 100]`. Rounding to integers is
//! deferred to presentation time so the weighted aggregate works on full
//! precision.

use crate::config::FactorScoringConfig;
use crate::constants::factor_scoring;
use crate::models::{ReactionLevel, SensitivityProfile, WeatherObservation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Raw continuous sub-scores, one per weather factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    /// Temperature sub-score
    pub temperature: f64,
    /// Humidity sub-score
    pub humidity: f64,
    /// Wind sub-score
    pub wind_speed: f64,
    /// Air-quality sub-score
    pub air_quality: f64,
    /// UV sub-score
    pub uv_index: f64,
}

/// Factor scoring engine
pub struct FactorScorer {
    /// Curve parameters
    config: FactorScoringConfig,
}

impl FactorScorer {
    /// Create a scorer with the given curve parameters
    #[must_use]
    pub const fn new(config: FactorScoringConfig) -> Self {
        Self { config }
    }

    /// Score all five factors for one observation
    #[must_use]
    pub fn score_all(
        &self,
        observation: &WeatherObservation,
        profile: &SensitivityProfile,
    ) -> FactorScores {
        if !observation.is_finite() {
            // Curve floors like max(0.0) absorb NaN, so guard before scoring
            warn!(?observation, "non-finite weather reading, poisoning all sub-scores");
            return FactorScores {
                temperature: f64::NAN,
                humidity: f64::NAN,
                wind_speed: f64::NAN,
                air_quality: f64::NAN,
                uv_index: f64::NAN,
            };
        }
        let scores = FactorScores {
            temperature: self
                .temperature_score(observation.temperature, profile.comfort_temperature),
            humidity: self.humidity_score(observation.humidity, profile.reaction_humidity),
            wind_speed: Self::wind_score(observation.wind_speed),
            air_quality: Self::air_quality_score(observation.pm25),
            uv_index: self.uv_score(observation.uv_index, profile.reaction_uv),
        };
        debug!(?scores, "factor sub-scores computed");
        scores
    }

    /// Temperature score: Gaussian falloff around the midpoint between the
    /// universal optimum and the user's comfort temperature
    #[must_use]
    pub fn temperature_score(&self, temperature: f64, comfort_temperature: f64) -> f64 {
        let optimum = (self.config.optimal_temperature_celsius + comfort_temperature) / 2.0;
        let deviation = (temperature - optimum).abs();
        let normalized = deviation / self.config.temperature_spread_celsius;
        (100.0 * (-normalized * normalized).exp()).max(0.0)
    }

    /// Humidity score: linear penalty around the optimum, with an extra
    /// 30% cut for high-sensitivity users in humid conditions
    #[must_use]
    pub fn humidity_score(&self, humidity: f64, reaction: ReactionLevel) -> f64 {
        let deviation = (humidity - self.config.optimal_humidity_percent).abs();
        let mut score = 100.0 - deviation * factor_scoring::HUMIDITY_SLOPE;

        if reaction == ReactionLevel::High
            && humidity > factor_scoring::HUMIDITY_SENSITIVITY_THRESHOLD
        {
            score *= self.config.humidity_sensitivity_factor;
        }

        score.max(0.0)
    }

    /// Wind score: a plateau at 100 across the ideal 2-3 m/s band, 80 for
    /// calm air, 20 for strong wind, linear in between
    #[must_use]
    pub fn wind_score(wind_speed: f64) -> f64 {
        if (factor_scoring::WIND_IDEAL_MIN..=factor_scoring::WIND_IDEAL_MAX).contains(&wind_speed)
        {
            return 100.0;
        }
        if wind_speed < factor_scoring::WIND_CALM_THRESHOLD {
            return factor_scoring::WIND_CALM_SCORE;
        }
        if wind_speed > factor_scoring::WIND_STRONG_THRESHOLD {
            return factor_scoring::WIND_STRONG_SCORE;
        }

        let deviation = if wind_speed < factor_scoring::WIND_IDEAL_MIN {
            factor_scoring::WIND_IDEAL_MIN - wind_speed
        } else {
            wind_speed - factor_scoring::WIND_IDEAL_MAX
        };
        (100.0 - deviation * factor_scoring::WIND_SLOPE).max(factor_scoring::WIND_STRONG_SCORE)
    }

    /// Air-quality score: step function over the PM2.5 bands
    #[must_use]
    pub fn air_quality_score(pm25: f64) -> f64 {
        if pm25 <= factor_scoring::PM25_GOOD_MAX {
            factor_scoring::PM25_GOOD_SCORE
        } else if pm25 <= factor_scoring::PM25_MODERATE_MAX {
            factor_scoring::PM25_MODERATE_SCORE
        } else if pm25 <= factor_scoring::PM25_UNHEALTHY_MAX {
            factor_scoring::PM25_UNHEALTHY_SCORE
        } else {
            factor_scoring::PM25_HAZARDOUS_SCORE
        }
    }

    /// UV score: linear falloff per index unit, with an extra 40% cut for
    /// high-sensitivity users under strong UV
    #[must_use]
    pub fn uv_score(&self, uv_index: f64, reaction: ReactionLevel) -> f64 {
        let mut score = (100.0 - uv_index * factor_scoring::UV_SLOPE).max(0.0);

        if reaction == ReactionLevel::High && uv_index > factor_scoring::UV_SENSITIVITY_THRESHOLD {
            score *= self.config.uv_sensitivity_factor;
        }

        score
    }
}

impl Default for FactorScorer {
    fn default() -> Self {
        Self::new(FactorScoringConfig::default())
    }
}
