// ABOUTME: Value types for weather comfort scoring
// ABOUTME: Weather observations, sensitivity profiles, and scoring result bundles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Data model for the scoring engine
//!
//! Every type here is value-like: no identity, no mutation, constructed
//! fresh per scoring request. The engine assumes the input-provider
//! collaborators already put readings in the documented units and ranges;
//! it does not re-validate them.

use crate::constants::profile_defaults;
use crate::errors::AppError;
use crate::presenter::ScoreGrade;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single snapshot of raw weather readings
///
/// Units: Celsius, percent relative humidity, m/s, micrograms per cubic
/// metre, dimensionless UV index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Ambient temperature (Celsius)
    pub temperature: f64,
    /// Relative humidity (0-100 %)
    pub humidity: f64,
    /// Wind speed (m/s, non-negative)
    pub wind_speed: f64,
    /// PM2.5 reading used as the air-quality indicator (micrograms/m3)
    pub pm25: f64,
    /// UV index (non-negative, typically 0-11+)
    pub uv_index: f64,
}

impl WeatherObservation {
    /// Whether every reading is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.temperature.is_finite()
            && self.humidity.is_finite()
            && self.wind_speed.is_finite()
            && self.pm25.is_finite()
            && self.uv_index.is_finite()
    }
}

/// Qualitative self-reported sensitivity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionLevel {
    /// Barely reacts to this factor
    Low,
    /// Typical reaction
    Medium,
    /// Reacts strongly; triggers extra scoring penalties
    High,
}

impl Default for ReactionLevel {
    fn default() -> Self {
        // Midpoint of the setup wizard's three-way choice
        Self::Medium
    }
}

impl FromStr for ReactionLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown reaction level: '{other}'. Valid options: low, medium, high"
            ))),
        }
    }
}

/// Per-factor importance weight overrides from the adjustment sliders
///
/// `None` means the user left the slider untouched and the neutral weight
/// applies. An explicit `Some(0.0)` removes the factor from the weighted
/// average entirely. Wind carries no slider; its weight is fixed by
/// [`crate::config::AggregationConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Temperature weight override (typically 0-100)
    pub temperature: Option<f64>,
    /// Humidity weight override (typically 0-100)
    pub humidity: Option<f64>,
    /// UV weight override (typically 0-100)
    pub uv: Option<f64>,
    /// Air-quality weight override (typically 0-100)
    pub air_quality: Option<f64>,
}

/// A user's declared weather sensitivity, captured by the setup wizard
///
/// Importance values use the canonical 0.0-1.0 scale; the scoring pipeline
/// only ever tests them for being strictly positive, so they double as
/// priority flags. `comfort_temperature` is expected to be clamped to
/// 10-30 Celsius by the wizard before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityProfile {
    /// Temperature at which the user starts wanting warmer clothing (Celsius)
    pub comfort_temperature: f64,
    /// Self-reported humidity sensitivity
    pub reaction_humidity: ReactionLevel,
    /// Self-reported UV sensitivity
    pub reaction_uv: ReactionLevel,
    /// Priority importance of cold weather (0.0-1.0)
    pub importance_cold: f64,
    /// Priority importance of hot weather (0.0-1.0)
    pub importance_heat: f64,
    /// Priority importance of humid weather (0.0-1.0)
    pub importance_humidity: f64,
    /// Priority importance of strong UV (0.0-1.0)
    pub importance_uv: f64,
    /// Priority importance of poor air quality (0.0-1.0)
    pub importance_air: f64,
    /// Per-factor weight overrides
    #[serde(default)]
    pub weights: FactorWeights,
}

impl Default for SensitivityProfile {
    fn default() -> Self {
        // Mirrors the wizard's seed values for a user who skipped setup
        Self {
            comfort_temperature: profile_defaults::COMFORT_TEMPERATURE,
            reaction_humidity: ReactionLevel::default(),
            reaction_uv: ReactionLevel::default(),
            importance_cold: profile_defaults::FACTOR_IMPORTANCE,
            importance_heat: profile_defaults::FACTOR_IMPORTANCE,
            importance_humidity: profile_defaults::FACTOR_IMPORTANCE,
            importance_uv: profile_defaults::FACTOR_IMPORTANCE,
            importance_air: profile_defaults::FACTOR_IMPORTANCE,
            weights: FactorWeights::default(),
        }
    }
}

/// Integer per-factor sub-scores for presentation (each 0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Temperature sub-score
    pub temperature: u8,
    /// Humidity sub-score
    pub humidity: u8,
    /// Wind sub-score
    pub wind_speed: u8,
    /// Air-quality sub-score
    pub air_quality: u8,
    /// UV sub-score
    pub uv_index: u8,
}

/// Complete scoring result returned to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final comfort score (0-100)
    pub total: u8,
    /// Grade band for the total
    pub grade: ScoreGrade,
    /// Emoji matching the grade
    pub emoji: String,
    /// Fixed-language message personalized to the dominant sensitivity
    pub message: String,
    /// Per-factor integer sub-scores
    pub breakdown: ScoreBreakdown,
}

/// Personalized feels-like temperature with its correction audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalFeelsLike {
    /// Adjusted feels-like temperature (Celsius, one decimal)
    pub calculated: f64,
    /// Signed total correction over the raw feels-like (Celsius, one decimal)
    pub adjustment: f64,
    /// Human-readable explanation of the applied corrections
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_level_from_str() {
        assert_eq!("high".parse::<ReactionLevel>().unwrap(), ReactionLevel::High);
        assert_eq!("Medium".parse::<ReactionLevel>().unwrap(), ReactionLevel::Medium);
        assert_eq!("LOW".parse::<ReactionLevel>().unwrap(), ReactionLevel::Low);
        assert!("extreme".parse::<ReactionLevel>().is_err());
    }

    #[test]
    fn test_reaction_level_serde_lowercase() {
        let json = serde_json::to_string(&ReactionLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: ReactionLevel = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(back, ReactionLevel::Low);
    }

    #[test]
    fn test_default_profile_matches_wizard_seed() {
        let profile = SensitivityProfile::default();
        assert!((profile.comfort_temperature - 19.0).abs() < f64::EPSILON);
        assert!(profile.importance_humidity > 0.0);
        assert_eq!(profile.weights, FactorWeights::default());
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = SensitivityProfile {
            comfort_temperature: 23.0,
            reaction_humidity: ReactionLevel::High,
            weights: FactorWeights {
                temperature: Some(75.0),
                ..FactorWeights::default()
            },
            ..SensitivityProfile::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: SensitivityProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
