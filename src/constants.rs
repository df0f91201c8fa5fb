// ABOUTME: Scoring constants for weather comfort analysis
// ABOUTME: Named thresholds, curve parameters, and penalty factors used across the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Comfort scoring constants
//!
//! Every tunable number in the scoring pipeline lives here as a named
//! constant so it can be adjusted and tested independently. The config
//! structs in [`crate::config`] seed their defaults from these values.

/// Feels-like temperature formula parameters
///
/// References:
/// - Environment Canada / US NWS Joint Action Group for Temperature Indices
///   wind chill formula (metric form, m/s wind speed)
/// - Rothfusz, L.P. (1990). "The Heat Index Equation". NWS Technical
///   Attachment SR 90-23 (converted to Celsius coefficients)
pub mod feels_like {
    /// Temperature at or below which wind chill may apply (Celsius)
    pub const WIND_CHILL_MAX_TEMP: f64 = 10.0;

    /// Wind speed above which wind chill applies (m/s, strictly greater)
    pub const WIND_CHILL_MIN_WIND: f64 = 1.6;

    /// Wind chill regression constant term
    pub const WIND_CHILL_BASE: f64 = 13.12;
    /// Coefficient on ambient temperature
    pub const WIND_CHILL_TEMP_COEFF: f64 = 0.6215;
    /// Coefficient on `wind_speed^0.16`
    pub const WIND_CHILL_WIND_COEFF: f64 = 11.37;
    /// Coefficient on `temperature * wind_speed^0.16`
    pub const WIND_CHILL_CROSS_COEFF: f64 = 0.3965;
    /// Exponent applied to wind speed in both wind terms
    pub const WIND_CHILL_WIND_EXPONENT: f64 = 0.16;

    /// Temperature at or above which the heat index applies (Celsius)
    pub const HEAT_INDEX_MIN_TEMP: f64 = 27.0;

    /// Relative humidity at or above which the heat index applies (%)
    pub const HEAT_INDEX_MIN_HUMIDITY: f64 = 40.0;

    /// Rothfusz regression coefficients over temperature T and humidity H,
    /// in term order: 1, T, H, TH, T^2, H^2, T^2 H, T H^2, T^2 H^2
    pub const HEAT_INDEX_COEFFS: [f64; 9] = [
        -8.784_694_755_56,
        1.611_394_11,
        2.338_548_838_89,
        -0.146_116_05,
        -0.012_308_094,
        -0.016_424_827_777_8,
        0.002_211_732,
        0.000_725_46,
        -0.000_003_582,
    ];
}

/// Personal feels-like correction parameters
pub mod personal_correction {
    /// Baseline comfort temperature the correction is anchored on (Celsius)
    pub const COMFORT_BASELINE: f64 = 20.0;

    /// Degrees of correction per degree of declared comfort-temperature
    /// deviation from the baseline
    pub const COMFORT_SCALE: f64 = 0.5;

    /// Humidity above which the humidity correction kicks in (%)
    pub const HUMID_CORRECTION_THRESHOLD: f64 = 70.0;

    /// Humidity correction for high declared sensitivity (Celsius)
    pub const HUMID_CORRECTION_HIGH: f64 = 3.0;
    /// Humidity correction for medium declared sensitivity (Celsius)
    pub const HUMID_CORRECTION_MEDIUM: f64 = 2.0;
    /// Humidity correction for low declared sensitivity (Celsius)
    pub const HUMID_CORRECTION_LOW: f64 = 1.0;

    /// Corrections with magnitude above this appear in the reason string
    pub const REASON_MENTION_THRESHOLD: f64 = 1.0;
}

/// Factor sub-score curve parameters
pub mod factor_scoring {
    /// Universal optimal ambient temperature (Celsius); the effective
    /// optimum is the midpoint between this and the user's comfort
    /// temperature
    pub const UNIVERSAL_OPTIMAL_TEMP: f64 = 22.0;

    /// Gaussian spread of the temperature score (Celsius per sigma)
    pub const TEMP_SCORE_SPREAD: f64 = 8.0;

    /// Optimal relative humidity (%)
    pub const HUMIDITY_OPTIMUM: f64 = 55.0;

    /// Score points lost per percentage point of humidity deviation
    pub const HUMIDITY_SLOPE: f64 = 2.0;

    /// Humidity above which a high-sensitivity user is penalized (%)
    pub const HUMIDITY_SENSITIVITY_THRESHOLD: f64 = 70.0;

    /// Multiplier applied to the humidity score for high-sensitivity users
    /// in humid conditions (30% penalty)
    pub const HUMIDITY_SENSITIVITY_FACTOR: f64 = 0.7;

    /// Ideal wind band lower bound (m/s)
    pub const WIND_IDEAL_MIN: f64 = 2.0;
    /// Ideal wind band upper bound (m/s)
    pub const WIND_IDEAL_MAX: f64 = 3.0;
    /// Wind below this counts as calm (m/s)
    pub const WIND_CALM_THRESHOLD: f64 = 1.0;
    /// Wind above this counts as strong (m/s)
    pub const WIND_STRONG_THRESHOLD: f64 = 7.0;
    /// Score for calm conditions; still air is mildly suboptimal, not ideal
    pub const WIND_CALM_SCORE: f64 = 80.0;
    /// Score floor for strong wind
    pub const WIND_STRONG_SCORE: f64 = 20.0;
    /// Score points lost per m/s of deviation from the ideal band
    pub const WIND_SLOPE: f64 = 15.0;

    /// Upper bound of the good PM2.5 band (micrograms per cubic metre),
    /// following the Korean AQI banding the readings use
    pub const PM25_GOOD_MAX: f64 = 15.0;
    /// Upper bound of the moderate PM2.5 band
    pub const PM25_MODERATE_MAX: f64 = 35.0;
    /// Upper bound of the unhealthy PM2.5 band
    pub const PM25_UNHEALTHY_MAX: f64 = 75.0;
    /// Score within the good band
    pub const PM25_GOOD_SCORE: f64 = 100.0;
    /// Score within the moderate band
    pub const PM25_MODERATE_SCORE: f64 = 80.0;
    /// Score within the unhealthy band
    pub const PM25_UNHEALTHY_SCORE: f64 = 50.0;
    /// Score beyond the unhealthy band
    pub const PM25_HAZARDOUS_SCORE: f64 = 20.0;

    /// Score points lost per UV index unit
    pub const UV_SLOPE: f64 = 10.0;
    /// UV index above which a high-sensitivity user is penalized
    pub const UV_SENSITIVITY_THRESHOLD: f64 = 5.0;
    /// Multiplier applied to the UV score for high-sensitivity users under
    /// strong UV (40% penalty)
    pub const UV_SENSITIVITY_FACTOR: f64 = 0.6;
}

/// Weight resolution for the weighted average
pub mod aggregation {
    /// Weight used for any factor the user left unadjusted
    pub const NEUTRAL_WEIGHT: f64 = 50.0;

    /// Fixed wind weight; wind has no user-facing adjustment slider
    pub const WIND_WEIGHT: f64 = 30.0;
}

/// Priority penalty thresholds and factor
///
/// A factor the user declared as a priority concern crashes the score when
/// that factor crosses its severity threshold, even if the weighted average
/// looks fine. Multiple simultaneous crossings compound multiplicatively.
pub mod priority_penalties {
    /// Multiplier applied per triggered priority factor (70% reduction)
    pub const PENALTY_FACTOR: f64 = 0.3;

    /// Hot-weather trigger gated by the cold importance flag (Celsius).
    /// The cold/heat gating is preserved as observed in the product
    /// behaviour; see DESIGN.md.
    pub const HOT_TEMP_TRIGGER: f64 = 28.0;

    /// Cold-weather trigger gated by the heat importance flag (Celsius)
    pub const COLD_TEMP_TRIGGER: f64 = 8.0;

    /// Humidity trigger (%)
    pub const HUMIDITY_TRIGGER: f64 = 80.0;

    /// UV index trigger
    pub const UV_TRIGGER: f64 = 8.0;

    /// PM2.5 trigger (micrograms per cubic metre)
    pub const PM25_TRIGGER: f64 = 50.0;
}

/// Grade band thresholds over the final integer score
pub mod grades {
    /// Minimum score for the excellent grade
    pub const EXCELLENT_MIN: u8 = 90;
    /// Minimum score for the good grade
    pub const GOOD_MIN: u8 = 70;
    /// Minimum score for the fair grade
    pub const FAIR_MIN: u8 = 50;
    /// Minimum score for the poor grade; anything below is terrible
    pub const POOR_MIN: u8 = 30;
}

/// Default sensitivity profile values seeded by the setup wizard
pub mod profile_defaults {
    /// Default declared comfort temperature (Celsius)
    pub const COMFORT_TEMPERATURE: f64 = 19.0;

    /// Default importance assigned to each factor (0.0-1.0 scale)
    pub const FACTOR_IMPORTANCE: f64 = 0.2;
}
