use std::time::Duration;

use patternfit_core::{Gender, Height};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    EstimatorConfig,
    base::BaseQuantities,
    error::EstimateError,
    jitter::Jitter,
    measurements::{FemaleMeasurements, MaleMeasurements, Measurements},
};

/// Estimates measurements from a height in inches and a gender tag.
///
/// Each call draws fresh jitter from the thread-local generator, so repeated
/// calls with the same inputs generally differ. Use [`Estimator`] or
/// [`estimate_with`] to control the randomness.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidArgument`] if the height is not finite and
/// strictly positive, or if the gender is not `male` or `female`.
///
/// # Example
///
/// ```
/// use patternfit_measure::{Measure, estimate};
///
/// let m = estimate(70.0, "male").unwrap();
/// assert_eq!(m.len(), 5);
/// assert_eq!(m.get(Measure::TrouserLength), Some(42.0));
///
/// assert!(estimate(0.0, "female").is_err());
/// assert!(estimate(70.0, "other").is_err());
/// ```
pub fn estimate(height_inches: f64, gender: &str) -> Result<Measurements, EstimateError> {
    let (height, gender) = parse_inputs(height_inches, gender)?;
    Ok(estimate_with(&mut rand::thread_rng(), height, gender))
}

/// Estimates measurements using the given jitter source.
///
/// Inputs are already validated by their types, so this cannot fail.
pub fn estimate_with<J: Jitter + ?Sized>(
    jitter: &mut J,
    height: Height,
    gender: Gender,
) -> Measurements {
    let base = BaseQuantities::sample(height.inches(), gender, jitter);

    let measurements = match gender {
        Gender::Male => Measurements::Male(MaleMeasurements::from_base(&base)),
        Gender::Female => Measurements::Female(FemaleMeasurements::from_base(&base)),
    };

    tracing::debug!(
        height_in = height.inches(),
        %gender,
        ?measurements,
        "estimated measurements"
    );
    measurements
}

/// Validates raw caller inputs.
pub(crate) fn parse_inputs(
    height_inches: f64,
    gender: &str,
) -> Result<(Height, Gender), EstimateError> {
    let height = Height::from_inches(height_inches)
        .map_err(|source| EstimateError::invalid_height(height_inches, source))?;
    let gender = gender
        .parse::<Gender>()
        .map_err(|source| EstimateError::invalid_gender(&source))?;
    Ok((height, gender))
}

/// A measurement estimator that owns its jitter source.
///
/// # Example
///
/// ```
/// use patternfit_core::{Gender, Height};
/// use patternfit_measure::{Estimator, EstimatorConfig};
///
/// let config = EstimatorConfig::default().with_seed(42);
/// let mut a = Estimator::from_config(&config);
/// let mut b = Estimator::from_config(&config);
///
/// let height = Height::from_inches(68.0).unwrap();
/// assert_eq!(a.estimate(height, Gender::Female), b.estimate(height, Gender::Female));
/// ```
#[derive(Debug, Clone)]
pub struct Estimator<J = ChaCha8Rng> {
    jitter: J,
    latency: Duration,
}

impl Estimator<ChaCha8Rng> {
    /// Creates an estimator from a config.
    ///
    /// Uses the configured seed if present, otherwise seeds from the
    /// operating system.
    #[must_use]
    pub fn from_config(config: &EstimatorConfig) -> Self {
        let rng = config
            .seed()
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);

        Self {
            jitter: rng,
            latency: config.latency(),
        }
    }
}

impl Default for Estimator<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_config(&EstimatorConfig::default())
    }
}

impl<J: Jitter> Estimator<J> {
    /// Creates an estimator with no latency around the given jitter source.
    #[must_use]
    pub fn new(jitter: J) -> Self {
        Self {
            jitter,
            latency: Duration::ZERO,
        }
    }

    /// Returns a copy that waits `latency` in [`Estimator::measure`].
    #[must_use]
    pub fn with_latency(self, latency: Duration) -> Self {
        Self { latency, ..self }
    }

    /// Returns the delay applied by [`Estimator::measure`].
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Estimates measurements for validated inputs.
    pub fn estimate(&mut self, height: Height, gender: Gender) -> Measurements {
        estimate_with(&mut self.jitter, height, gender)
    }

    /// Estimates measurements from raw caller inputs.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidArgument`] for a height that is not
    /// finite and positive, or an unrecognized gender tag.
    pub fn estimate_raw(
        &mut self,
        height_inches: f64,
        gender: &str,
    ) -> Result<Measurements, EstimateError> {
        let (height, gender) = parse_inputs(height_inches, gender)?;
        Ok(self.estimate(height, gender))
    }

    /// Waits for the configured latency, then estimates.
    ///
    /// The wait yields to the runtime. Dropping the future before it
    /// completes leaves nothing to clean up.
    pub async fn measure(&mut self, height: Height, gender: Gender) -> Measurements {
        if !self.latency.is_zero() {
            tracing::debug!(latency = ?self.latency, "simulating measurement latency");
            tokio::time::sleep(self.latency).await;
        }
        self.estimate(height, gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{Measure, jitter::NoJitter};

    #[test]
    fn nominal_female_golden_values() {
        let height = Height::from_inches(68.0).unwrap();
        let m = Estimator::new(NoJitter).estimate(height, Gender::Female);

        let Measurements::Female(f) = m else {
            panic!("expected female schema, got {m:?}");
        };
        assert_relative_eq!(f.waist, 30.6);
        assert_relative_eq!(f.hip, 36.7);
        assert_relative_eq!(f.bust, 36.0);
        assert_relative_eq!(f.shoulder, 15.6);
        assert_relative_eq!(f.sleeve, 22.4);
        assert_relative_eq!(f.lap, 22.0);
        assert_relative_eq!(f.trouser_length, 40.8);
        assert_relative_eq!(f.half_length, 19.0);
        assert_relative_eq!(f.bust_point, 14.4);
        assert_relative_eq!(f.shoulder_to_under_bust, 15.0);
        assert_relative_eq!(f.shoulder_to_waist, 17.0);
        assert_relative_eq!(f.skirt_length, 27.2);
        assert_relative_eq!(f.shirt_length, 23.8);
        assert_relative_eq!(f.nipple_to_nipple, 7.6);
    }

    #[test]
    fn nominal_male_golden_values() {
        let height = Height::from_inches(70.0).unwrap();
        let m = Estimator::new(NoJitter).estimate(height, Gender::Male);

        let Measurements::Male(male) = m else {
            panic!("expected male schema, got {m:?}");
        };
        assert_relative_eq!(male.shoulder, 16.1);
        assert_relative_eq!(male.sleeve, 23.1);
        assert_relative_eq!(male.bust, 32.9);
        assert_relative_eq!(male.trouser_length, 42.0);
        assert_relative_eq!(male.lap, 20.8);
    }

    #[test]
    fn raw_inputs_are_validated() {
        let mut estimator = Estimator::new(NoJitter);

        for (height, gender, argument) in [
            (0.0, "female", "height"),
            (-5.0, "male", "height"),
            (f64::NAN, "female", "height"),
            (f64::INFINITY, "male", "height"),
            (70.0, "other", "gender"),
        ] {
            let err = estimator.estimate_raw(height, gender).unwrap_err();
            assert!(
                matches!(err, EstimateError::InvalidArgument { .. }),
                "{err:?}"
            );
            assert_eq!(err.argument(), argument);
        }
    }

    #[test]
    fn seeded_estimators_repeat_and_advance() {
        let config = EstimatorConfig::default().with_seed(11);
        let mut a = Estimator::from_config(&config);
        let mut b = Estimator::from_config(&config);
        let height = Height::from_inches(64.0).unwrap();

        let first = a.estimate(height, Gender::Female);
        assert_eq!(first, b.estimate(height, Gender::Female));

        // The generator advances, so the next draw differs.
        assert_ne!(first, a.estimate(height, Gender::Female));
    }

    #[test]
    fn male_chest_uses_male_ratios() {
        let height = Height::from_inches(70.0).unwrap();
        let m = Estimator::new(NoJitter).estimate(height, Gender::Male);
        assert_eq!(m.get(Measure::Bust), Some(32.9));
        assert_eq!(m.get(Measure::Hip), None);
    }

    #[tokio::test(start_paused = true)]
    async fn measure_waits_for_latency() {
        let mut estimator =
            Estimator::new(NoJitter).with_latency(EstimatorConfig::SIMULATED_LATENCY);
        let height = Height::from_inches(70.0).unwrap();

        let start = tokio::time::Instant::now();
        let m = estimator.measure(height, Gender::Male).await;

        assert!(start.elapsed() >= EstimatorConfig::SIMULATED_LATENCY);
        assert_eq!(m.get(Measure::TrouserLength), Some(42.0));
    }
}
