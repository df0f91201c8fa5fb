// ABOUTME: Scoring configuration for the comfort engine
// ABOUTME: Tunable thresholds, curve parameters, and weights with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Scoring Configuration
//!
//! Groups the engine's tunables into serde-friendly config structs so a
//! deployment can reshape the scoring curves without touching code.
//! Defaults come from [`crate::constants`]; [`ScoringConfig::validate`]
//! rejects tunings the math cannot support.

use crate::constants::{aggregation, factor_scoring, priority_penalties};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Factor sub-score curve parameters
    pub factors: FactorScoringConfig,
    /// Weight resolution for the weighted average
    pub aggregation: AggregationConfig,
    /// Priority penalty tuning
    pub penalties: PenaltyConfig,
}

/// Curve parameters for the five factor sub-scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScoringConfig {
    /// Universal optimal temperature in Celsius; blended with the user's
    /// comfort temperature to locate the Gaussian peak
    pub optimal_temperature_celsius: f64,
    /// Gaussian spread of the temperature score (Celsius)
    pub temperature_spread_celsius: f64,
    /// Optimal relative humidity (%)
    pub optimal_humidity_percent: f64,
    /// Multiplier applied to the humidity score for high-sensitivity users
    /// in humid conditions
    pub humidity_sensitivity_factor: f64,
    /// Multiplier applied to the UV score for high-sensitivity users under
    /// strong UV
    pub uv_sensitivity_factor: f64,
}

impl Default for FactorScoringConfig {
    fn default() -> Self {
        Self {
            optimal_temperature_celsius: factor_scoring::UNIVERSAL_OPTIMAL_TEMP,
            temperature_spread_celsius: factor_scoring::TEMP_SCORE_SPREAD,
            optimal_humidity_percent: factor_scoring::HUMIDITY_OPTIMUM,
            humidity_sensitivity_factor: factor_scoring::HUMIDITY_SENSITIVITY_FACTOR,
            uv_sensitivity_factor: factor_scoring::UV_SENSITIVITY_FACTOR,
        }
    }
}

/// Weight resolution settings for the weighted average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Weight used for factors without a user override
    pub neutral_weight: f64,
    /// Fixed wind weight (wind has no user-facing slider)
    pub wind_weight: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            neutral_weight: aggregation::NEUTRAL_WEIGHT,
            wind_weight: aggregation::WIND_WEIGHT,
        }
    }
}

/// Priority penalty tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyConfig {
    /// Multiplier applied per triggered priority factor (0.0-1.0)
    pub penalty_factor: f64,
    /// Hot-weather trigger temperature (Celsius)
    pub hot_temperature_trigger: f64,
    /// Cold-weather trigger temperature (Celsius)
    pub cold_temperature_trigger: f64,
    /// Humidity trigger (%)
    pub humidity_trigger: f64,
    /// UV index trigger
    pub uv_trigger: f64,
    /// PM2.5 trigger (micrograms per cubic metre)
    pub pm25_trigger: f64,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            penalty_factor: priority_penalties::PENALTY_FACTOR,
            hot_temperature_trigger: priority_penalties::HOT_TEMP_TRIGGER,
            cold_temperature_trigger: priority_penalties::COLD_TEMP_TRIGGER,
            humidity_trigger: priority_penalties::HUMIDITY_TRIGGER,
            uv_trigger: priority_penalties::UV_TRIGGER,
            pm25_trigger: priority_penalties::PM25_TRIGGER,
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigInvalid` if:
    /// - the temperature spread is not strictly positive (the Gaussian
    ///   would divide by zero)
    /// - the penalty factor is outside `(0.0, 1.0]`
    /// - either sensitivity factor is outside `(0.0, 1.0]`
    /// - any aggregation weight is negative or non-finite
    pub fn validate(&self) -> AppResult<()> {
        let spread = self.factors.temperature_spread_celsius;
        if !spread.is_finite() || spread <= 0.0 {
            return Err(AppError::config(format!(
                "temperature spread must be strictly positive, got {spread}"
            )));
        }

        for (name, factor) in [
            ("penalty factor", self.penalties.penalty_factor),
            (
                "humidity sensitivity factor",
                self.factors.humidity_sensitivity_factor,
            ),
            ("uv sensitivity factor", self.factors.uv_sensitivity_factor),
        ] {
            if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
                return Err(AppError::config(format!(
                    "{name} must be in (0.0, 1.0], got {factor}"
                )));
            }
        }

        for (name, weight) in [
            ("neutral weight", self.aggregation.neutral_weight),
            ("wind weight", self.aggregation.wind_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::config(format!(
                    "{name} must be a finite non-negative number, got {weight}"
                )));
            }
        }

        Ok(())
    }
}
