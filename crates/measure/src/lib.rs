//! Anthropometric estimation for PatternFit.
//!
//! Derives a full set of tailoring measurements from a single height and a
//! [`Gender`](patternfit_core::Gender). The derivation is a short chain of
//! proportionality ratios, each step perturbed by an independent, bounded,
//! symmetric jitter:
//!
//! - `waist = height·0.45 ± 1`
//! - `hip = waist·r_hip ± 1`, with `r_hip` = 1.2 (female) or 1.1 (male)
//! - `bust = hip·r_bust ± 1`, with `r_bust` = 0.98 (female) or 0.95 (male)
//! - `shoulder = height·0.23 ± 0.5`, `sleeve = height·0.33 ± 0.5`
//! - `lap = hip·0.6`, `trouserLength = height·0.6`
//!
//! Female bundles add seven further lengths taken from height or bust.
//! Every value is reported in inches, rounded to one decimal place.
//!
//! The ratios are rough placeholders for a real body-scan model.
//!
//! # Randomness
//!
//! The jitter source is a [`Jitter`] implementation. Any `rand::Rng` works,
//! and [`NoJitter`] pins every estimate to its nominal value.

mod base;
mod config;
mod error;
mod estimator;
mod jitter;
mod measurements;

pub use config::EstimatorConfig;
pub use error::EstimateError;
pub use estimator::{Estimator, estimate, estimate_with};
pub use jitter::{Jitter, NoJitter};
pub use measurements::{FemaleMeasurements, MaleMeasurements, Measure, Measurements};
