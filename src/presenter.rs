// ABOUTME: Score presentation: grades, emoji, and personalized messages
// ABOUTME: Maps the final numeric score to a display bundle for the UI layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! Score presentation
//!
//! Turns the final numeric score into a grade band, an emoji, and a
//! fixed-language message keyed to the user's dominant sensitivity type.
//! All localization beyond the single built-in language belongs to the
//! consuming presentation layer.

use crate::constants::grades;
use crate::models::SensitivityProfile;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Grade band over the final comfort score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreGrade {
    /// 90-100
    Excellent,
    /// 70-89
    Good,
    /// 50-69
    Fair,
    /// 30-49
    Poor,
    /// 0-29
    Terrible,
}

impl ScoreGrade {
    /// Classify an integer score into its grade band
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= grades::EXCELLENT_MIN {
            Self::Excellent
        } else if score >= grades::GOOD_MIN {
            Self::Good
        } else if score >= grades::FAIR_MIN {
            Self::Fair
        } else if score >= grades::POOR_MIN {
            Self::Poor
        } else {
            Self::Terrible
        }
    }

    /// Emoji for this grade, happy through distressed
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "\u{1F60A}",
            Self::Good => "\u{1F642}",
            Self::Fair => "\u{1F610}",
            Self::Poor => "\u{1F630}",
            Self::Terrible => "\u{1F635}",
        }
    }

    /// Grade-specific message phrase
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Excellent => "Perfect weather",
            Self::Good => "Good weather",
            Self::Fair => "Average weather",
            Self::Poor => "Somewhat tough weather",
            Self::Terrible => "Very tough weather",
        }
    }
}

/// Presentation bundle for one final score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePresentation {
    /// Clamped integer score
    pub total: u8,
    /// Grade band
    pub grade: ScoreGrade,
    /// Emoji for the grade
    pub emoji: String,
    /// Personalized message
    pub message: String,
}

/// Score presenter
pub struct ScorePresenter;

impl ScorePresenter {
    /// Build the presentation bundle for a final score
    ///
    /// The score is defensively clamped and rounded first, so callers may
    /// pass the raw post-penalty float straight through.
    #[must_use]
    pub fn present(final_score: f64, profile: &SensitivityProfile) -> ScorePresentation {
        let total = round_to_score(final_score);
        let grade = ScoreGrade::from_score(total);
        ScorePresentation {
            total,
            grade,
            emoji: grade.emoji().to_owned(),
            message: format!("{} for {}", grade.phrase(), user_type_label(profile)),
        }
    }
}

/// Derive the dominant sensitivity label for message templating
///
/// First match wins: cold-sensitive, heat-sensitive, humidity-sensitive,
/// then the generic fallback.
#[must_use]
pub fn user_type_label(profile: &SensitivityProfile) -> &'static str {
    if profile.importance_cold > 0.0 || profile.comfort_temperature > 22.0 {
        "someone who feels the cold"
    } else if profile.importance_heat > 0.0 {
        "someone who feels the heat"
    } else if profile.importance_humidity > 0.0 {
        "someone who dislikes humid weather"
    } else {
        "most people"
    }
}

/// Format a temperature for display, rounded to whole degrees
#[must_use]
pub fn format_temperature(temperature: f64) -> String {
    format!("{temperature:.0}\u{b0}C")
}

/// Clamp and round a raw score into the 0-100 integer range
///
/// Non-finite values (NaN from a poisoned observation, infinities from
/// degenerate configs) collapse to 0 rather than corrupting the cast.
pub(crate) fn round_to_score(value: f64) -> u8 {
    if !value.is_finite() {
        warn!(value, "non-finite score sanitized to 0");
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_integer_score_has_exactly_one_grade() {
        for score in 0..=100_u8 {
            let expected = match score {
                90..=100 => ScoreGrade::Excellent,
                70..=89 => ScoreGrade::Good,
                50..=69 => ScoreGrade::Fair,
                30..=49 => ScoreGrade::Poor,
                _ => ScoreGrade::Terrible,
            };
            assert_eq!(ScoreGrade::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(ScoreGrade::from_score(29), ScoreGrade::Terrible);
        assert_eq!(ScoreGrade::from_score(30), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::from_score(49), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::from_score(50), ScoreGrade::Fair);
        assert_eq!(ScoreGrade::from_score(69), ScoreGrade::Fair);
        assert_eq!(ScoreGrade::from_score(70), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(89), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(90), ScoreGrade::Excellent);
    }

    #[test]
    fn test_user_type_first_match_wins() {
        let mut profile = SensitivityProfile {
            importance_cold: 0.0,
            importance_heat: 0.0,
            importance_humidity: 0.0,
            importance_uv: 0.0,
            importance_air: 0.0,
            comfort_temperature: 20.0,
            ..SensitivityProfile::default()
        };
        assert_eq!(user_type_label(&profile), "most people");

        profile.importance_humidity = 0.3;
        assert_eq!(user_type_label(&profile), "someone who dislikes humid weather");

        profile.importance_heat = 0.3;
        assert_eq!(user_type_label(&profile), "someone who feels the heat");

        profile.importance_cold = 0.3;
        assert_eq!(user_type_label(&profile), "someone who feels the cold");
    }

    #[test]
    fn test_warm_comfort_temperature_implies_cold_sensitivity() {
        let profile = SensitivityProfile {
            comfort_temperature: 24.0,
            importance_cold: 0.0,
            importance_heat: 0.0,
            importance_humidity: 0.0,
            importance_uv: 0.0,
            importance_air: 0.0,
            ..SensitivityProfile::default()
        };
        assert_eq!(user_type_label(&profile), "someone who feels the cold");
    }

    #[test]
    fn test_round_to_score_clamps_and_sanitizes() {
        assert_eq!(round_to_score(46.3), 46);
        assert_eq!(round_to_score(46.5), 47);
        assert_eq!(round_to_score(-12.0), 0);
        assert_eq!(round_to_score(250.0), 100);
        assert_eq!(round_to_score(f64::NAN), 0);
        assert_eq!(round_to_score(f64::INFINITY), 0);
    }

    #[test]
    fn test_present_bundles_grade_and_message() {
        let profile = SensitivityProfile {
            importance_cold: 0.0,
            importance_heat: 0.5,
            importance_humidity: 0.0,
            importance_uv: 0.0,
            importance_air: 0.0,
            comfort_temperature: 20.0,
            ..SensitivityProfile::default()
        };
        let presentation = ScorePresenter::present(92.4, &profile);
        assert_eq!(presentation.total, 92);
        assert_eq!(presentation.grade, ScoreGrade::Excellent);
        assert_eq!(presentation.emoji, "\u{1F60A}");
        assert_eq!(
            presentation.message,
            "Perfect weather for someone who feels the heat"
        );
    }

    #[test]
    fn test_format_temperature_rounds_to_whole_degrees() {
        assert_eq!(format_temperature(21.4), "21\u{b0}C");
        assert_eq!(format_temperature(-3.6), "-4\u{b0}C");
    }
}
