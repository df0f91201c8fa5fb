// ABOUTME: Library entry point for the comfort scoring engine
// ABOUTME: Personalized weather comfort scores and feels-like temperatures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Comfort Engine contributors

//! # Comfort Engine
//!
//! A deterministic, pure-function weather comfort scoring engine. Given a
//! raw [`WeatherObservation`] and a user's [`SensitivityProfile`], the
//! engine produces:
//!
//! - a personalized feels-like temperature ([`PersonalFeelsLike`]) built
//!   on the standard wind chill and heat index formulas plus per-user
//!   corrections, and
//! - a 0-100 comfort score ([`ScoreResult`]) combining five weighted
//!   factor sub-scores with priority penalties for user-flagged severe
//!   conditions, graded and templated for display.
//!
//! The engine performs no I/O: fetching weather data, capturing the
//! sensitivity profile, and rendering the result are the caller's
//! collaborators. Every call is a pure transformation over its arguments,
//! so concurrent use needs no coordination.
//!
//! ## Example
//!
//! ```rust
//! use comfort_engine::{ComfortScoreEngine, SensitivityProfile, WeatherObservation};
//!
//! let engine = ComfortScoreEngine::new();
//! let observation = WeatherObservation {
//!     temperature: 21.0,
//!     humidity: 50.0,
//!     wind_speed: 2.5,
//!     pm25: 12.0,
//!     uv_index: 3.0,
//! };
//! let profile = SensitivityProfile::default();
//!
//! let result = engine.score(&observation, &profile);
//! assert!(result.total <= 100);
//!
//! let feels_like = engine.personal_feels_like(&observation, &profile);
//! println!("feels like {} ({})", feels_like.calculated, feels_like.reason);
//! ```

/// Weighted aggregation of factor sub-scores
pub mod aggregator;
/// Scoring configuration with validated defaults
pub mod config;
/// Named scoring constants
pub mod constants;
/// Engine orchestration
pub mod engine;
/// Unified error handling
pub mod errors;
/// Per-factor scoring curves
pub mod factor_scores;
/// Feels-like temperature calculation
pub mod feels_like;
/// Value types for observations, profiles, and results
pub mod models;
/// Priority penalties for flagged severe factors
pub mod penalties;
/// Grades, emoji, and message templating
pub mod presenter;

pub use aggregator::WeightedAggregator;
pub use config::{AggregationConfig, FactorScoringConfig, PenaltyConfig, ScoringConfig};
pub use engine::ComfortScoreEngine;
pub use errors::{AppError, AppResult, ErrorCode};
pub use factor_scores::{FactorScorer, FactorScores};
pub use feels_like::FeelsLikeCalculator;
pub use models::{
    FactorWeights, PersonalFeelsLike, ReactionLevel, ScoreBreakdown, ScoreResult,
    SensitivityProfile, WeatherObservation,
};
pub use penalties::PriorityPenaltyApplier;
pub use presenter::{
    format_temperature, user_type_label, ScoreGrade, ScorePresentation, ScorePresenter,
};
