// ABOUTME: Feels-like temperature calculation with personal sensitivity correction
// ABOUTME: Wind chill and heat index regimes plus user comfort and humidity adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Physically-motivated feels-like temperature with a personal correction
//!
//! The raw feels-like value follows the standard wind chill formula in
//! cold, windy conditions and the Rothfusz heat index regression in hot,
//! humid conditions; everywhere else the ambient temperature passes
//! through unchanged. On top of that, a per-user correction shifts the
//! number toward the user's declared comfort anchor and compensates for
//! humid conditions according to their stated humidity sensitivity.

use crate::constants::{feels_like, personal_correction};
use crate::models::{PersonalFeelsLike, ReactionLevel, SensitivityProfile, WeatherObservation};
use tracing::debug;

/// Round to one decimal place for presentation
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Feels-like temperature calculator
///
/// Stateless; all inputs are accepted as-is without range validation
/// (garbage in, garbage out — the input-provider collaborators own
/// validation).
pub struct FeelsLikeCalculator;

impl FeelsLikeCalculator {
    /// Compute the raw feels-like temperature in Celsius
    ///
    /// Wind chill applies at or below 10 Celsius with wind strictly above
    /// 1.6 m/s; the heat index applies at or above 27 Celsius with
    /// humidity at or above 40%. The two regimes cannot overlap.
    #[must_use]
    pub fn calculate_feels_like(temperature: f64, wind_speed: f64, humidity: f64) -> f64 {
        if temperature <= feels_like::WIND_CHILL_MAX_TEMP
            && wind_speed > feels_like::WIND_CHILL_MIN_WIND
        {
            return Self::wind_chill(temperature, wind_speed);
        }

        if temperature >= feels_like::HEAT_INDEX_MIN_TEMP
            && humidity >= feels_like::HEAT_INDEX_MIN_HUMIDITY
        {
            return Self::heat_index(temperature, humidity);
        }

        // Neither regime applies; the ambient reading stands
        temperature
    }

    /// JAG/TI wind chill formula, metric form
    fn wind_chill(temperature: f64, wind_speed: f64) -> f64 {
        let wind_term = wind_speed.powf(feels_like::WIND_CHILL_WIND_EXPONENT);
        feels_like::WIND_CHILL_BASE + feels_like::WIND_CHILL_TEMP_COEFF * temperature
            - feels_like::WIND_CHILL_WIND_COEFF * wind_term
            + feels_like::WIND_CHILL_CROSS_COEFF * wind_term * temperature
    }

    /// Rothfusz heat index regression over temperature and humidity
    fn heat_index(temperature: f64, humidity: f64) -> f64 {
        let [c1, c2, c3, c4, c5, c6, c7, c8, c9] = feels_like::HEAT_INDEX_COEFFS;
        let t = temperature;
        let h = humidity;
        c1 + c2 * t
            + c3 * h
            + c4 * t * h
            + c5 * t * t
            + c6 * h * h
            + c7 * t * t * h
            + c8 * t * h * h
            + c9 * t * t * h * h
    }

    /// Compute the personalized feels-like temperature
    ///
    /// The personal correction is `(comfort_temperature - 20) * 0.5`; the
    /// humidity correction awards 1-3 Celsius above 70% humidity depending
    /// on the declared humidity sensitivity. `calculated` always equals the
    /// raw feels-like plus `adjustment` (before the one-decimal rounding of
    /// each).
    #[must_use]
    pub fn personal_feels_like(
        observation: &WeatherObservation,
        profile: &SensitivityProfile,
    ) -> PersonalFeelsLike {
        let raw = Self::calculate_feels_like(
            observation.temperature,
            observation.wind_speed,
            observation.humidity,
        );

        let comfort_shift = (profile.comfort_temperature - personal_correction::COMFORT_BASELINE)
            * personal_correction::COMFORT_SCALE;

        let humidity_shift =
            if observation.humidity > personal_correction::HUMID_CORRECTION_THRESHOLD {
                match profile.reaction_humidity {
                    ReactionLevel::High => personal_correction::HUMID_CORRECTION_HIGH,
                    ReactionLevel::Medium => personal_correction::HUMID_CORRECTION_MEDIUM,
                    ReactionLevel::Low => personal_correction::HUMID_CORRECTION_LOW,
                }
            } else {
                0.0
            };

        let adjustment = comfort_shift + humidity_shift;
        debug!(
            raw_feels_like = raw,
            comfort_shift, humidity_shift, "personal feels-like computed"
        );

        PersonalFeelsLike {
            calculated: round_one_decimal(raw + adjustment),
            adjustment: round_one_decimal(adjustment),
            reason: Self::adjustment_reason(comfort_shift, humidity_shift),
        }
    }

    /// Build the human-readable explanation for the applied corrections
    fn adjustment_reason(comfort_shift: f64, humidity_shift: f64) -> String {
        let mut reasons = Vec::new();

        if comfort_shift.abs() > personal_correction::REASON_MENTION_THRESHOLD {
            reasons.push(if comfort_shift > 0.0 {
                "heat sensitivity"
            } else {
                "cold sensitivity"
            });
        }

        if humidity_shift > personal_correction::REASON_MENTION_THRESHOLD {
            reasons.push("high humidity");
        }

        if reasons.is_empty() {
            "standard calculation".to_owned()
        } else {
            format!("adjusted for {}", reasons.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_chill_reduces_cold_windy_reading() {
        let feels = FeelsLikeCalculator::calculate_feels_like(0.0, 8.0, 50.0);
        assert!(feels < 0.0, "wind chill should drop below ambient, got {feels}");
    }

    #[test]
    fn test_heat_index_raises_hot_humid_reading() {
        let feels = FeelsLikeCalculator::calculate_feels_like(32.0, 1.0, 80.0);
        assert!(feels > 32.0, "heat index should exceed ambient, got {feels}");
    }

    #[test]
    fn test_mild_conditions_pass_through() {
        let feels = FeelsLikeCalculator::calculate_feels_like(18.0, 3.0, 55.0);
        assert!((feels - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reason_standard_when_no_corrections() {
        let reason = FeelsLikeCalculator::adjustment_reason(0.0, 0.0);
        assert_eq!(reason, "standard calculation");
    }

    #[test]
    fn test_reason_joins_multiple_causes() {
        let reason = FeelsLikeCalculator::adjustment_reason(2.5, 3.0);
        assert_eq!(reason, "adjusted for heat sensitivity, high humidity");
    }

    #[test]
    fn test_reason_cold_sensitivity_for_negative_shift() {
        let reason = FeelsLikeCalculator::adjustment_reason(-2.0, 0.0);
        assert_eq!(reason, "adjusted for cold sensitivity");
    }

    #[test]
    fn test_small_corrections_stay_out_of_reason() {
        // Magnitudes at or below 1.0 are not worth mentioning
        let reason = FeelsLikeCalculator::adjustment_reason(0.5, 1.0);
        assert_eq!(reason, "standard calculation");
    }
}
