// ABOUTME: Comfort score engine orchestrating the full scoring pipeline
// ABOUTME: Factor scores, weighted aggregation, priority penalties, and presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! The comfort scoring engine
//!
//! Wires the pipeline together: raw observation and profile go in, a
//! presentation-ready [`ScoreResult`] and a [`PersonalFeelsLike`] come
//! out. Every stage is a pure transformation, so the engine is stateless
//! between calls and trivially safe to share across request handlers.

use crate::aggregator::WeightedAggregator;
use crate::config::ScoringConfig;
use crate::errors::AppResult;
use crate::factor_scores::FactorScorer;
use crate::feels_like::FeelsLikeCalculator;
use crate::models::{
    PersonalFeelsLike, ScoreBreakdown, ScoreResult, SensitivityProfile, WeatherObservation,
};
use crate::penalties::PriorityPenaltyApplier;
use crate::presenter::{round_to_score, ScorePresenter};
use tracing::debug;

/// Personalized weather comfort scoring engine
pub struct ComfortScoreEngine {
    /// Active configuration
    config: ScoringConfig,
    /// Factor sub-score curves
    scorer: FactorScorer,
    /// Weighted average over the sub-scores
    aggregator: WeightedAggregator,
    /// Priority penalty stage
    penalties: PriorityPenaltyApplier,
}

impl ComfortScoreEngine {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(ScoringConfig::default())
    }

    /// Create an engine with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigInvalid` if the configuration fails
    /// [`ScoringConfig::validate`]
    pub fn with_config(config: ScoringConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: ScoringConfig) -> Self {
        Self {
            scorer: FactorScorer::new(config.factors.clone()),
            aggregator: WeightedAggregator::new(config.aggregation.clone()),
            penalties: PriorityPenaltyApplier::new(config.penalties.clone()),
            config,
        }
    }

    /// Get the active configuration
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one observation against one sensitivity profile
    ///
    /// Deterministic: identical inputs always produce an identical result.
    #[must_use]
    pub fn score(
        &self,
        observation: &WeatherObservation,
        profile: &SensitivityProfile,
    ) -> ScoreResult {
        let sub_scores = self.scorer.score_all(observation, profile);
        let weighted = self.aggregator.aggregate(&sub_scores, &profile.weights);
        let penalized = self.penalties.apply(weighted, observation, profile);
        debug!(weighted, penalized, "comfort score pipeline complete");

        let presentation = ScorePresenter::present(penalized, profile);

        ScoreResult {
            total: presentation.total,
            grade: presentation.grade,
            emoji: presentation.emoji,
            message: presentation.message,
            breakdown: ScoreBreakdown {
                temperature: round_to_score(sub_scores.temperature),
                humidity: round_to_score(sub_scores.humidity),
                wind_speed: round_to_score(sub_scores.wind_speed),
                air_quality: round_to_score(sub_scores.air_quality),
                uv_index: round_to_score(sub_scores.uv_index),
            },
        }
    }

    /// Personalized feels-like temperature for one observation
    #[must_use]
    pub fn personal_feels_like(
        &self,
        observation: &WeatherObservation,
        profile: &SensitivityProfile,
    ) -> PersonalFeelsLike {
        FeelsLikeCalculator::personal_feels_like(observation, profile)
    }
}

impl Default for ComfortScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
