use jiff::Timestamp;
use patternfit_core::{Fabric, Style};
use patternfit_measure::{Estimator, EstimatorConfig, Jitter, Measurements};
use patternfit_wardrobe::{SaveOutcome, SavedFit, Wardrobe, store::Store};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::{
    error::{FittingError, Stage},
    photo::{Photo, PhotoLimits},
    selection::SelectionDraft,
    tailor::{Tailor, TryOnRequest},
};

/// The outcome of one fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub style: Style,
    pub fabric: Fabric,
    pub design: Option<String>,
    pub measurements: Measurements,
    /// Encoded try-on image returned by the tailor.
    pub image: Vec<u8>,
    pub feedback: String,
    pub created_at: Timestamp,
}

impl FitResult {
    /// Converts the result into a wardrobe entry with a fresh id.
    #[must_use]
    pub fn to_saved_fit(&self) -> SavedFit {
        SavedFit::new(
            self.style.clone(),
            &self.fabric,
            self.design.clone(),
            self.measurements,
            self.feedback.clone(),
            self.image.clone(),
        )
        .with_created_at(self.created_at)
    }

    /// Returns the summary record kept for analytics.
    #[must_use]
    pub fn record(&self) -> FitRecord {
        FitRecord {
            style_id: self.style.id.clone(),
            style_name: self.style.name.clone(),
            fabric_id: self.fabric.id.clone(),
            fabric_name: self.fabric.name.clone(),
            measurements: self.measurements,
            created_at: self.created_at,
        }
    }
}

/// A compact, image-free summary of a fitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitRecord {
    pub style_id: String,
    pub style_name: String,
    pub fabric_id: String,
    pub fabric_name: String,
    pub measurements: Measurements,
    pub created_at: Timestamp,
}

/// Runs fittings against a [`Tailor`].
///
/// A session estimates measurements from the selected height, then asks the
/// tailor for a try-on image and fit feedback at the same time.
#[derive(Debug)]
pub struct FittingSession<T, J = ChaCha8Rng> {
    tailor: T,
    estimator: Estimator<J>,
    limits: PhotoLimits,
}

impl<T: Tailor> FittingSession<T> {
    /// Creates a session with a default estimator and photo limits.
    pub fn new(tailor: T) -> Self {
        Self::from_config(tailor, &EstimatorConfig::default())
    }

    /// Creates a session whose estimator follows `config`.
    pub fn from_config(tailor: T, config: &EstimatorConfig) -> Self {
        Self::with_estimator(tailor, Estimator::from_config(config))
    }
}

impl<T: Tailor, J: Jitter> FittingSession<T, J> {
    /// Creates a session around an existing estimator.
    pub fn with_estimator(tailor: T, estimator: Estimator<J>) -> Self {
        Self {
            tailor,
            estimator,
            limits: PhotoLimits::default(),
        }
    }

    /// Returns a copy that checks photos against `limits`.
    #[must_use]
    pub fn with_limits(self, limits: PhotoLimits) -> Self {
        Self { limits, ..self }
    }

    /// Returns the photo limits.
    pub fn limits(&self) -> &PhotoLimits {
        &self.limits
    }

    /// Returns the tailor.
    pub fn tailor(&self) -> &T {
        &self.tailor
    }

    /// Runs one fitting.
    ///
    /// Validates the selection and photo, estimates measurements, then
    /// requests the try-on image and the feedback concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::Selection`] or [`FittingError::Photo`] for
    /// bad inputs, before any tailor call is made. Returns
    /// [`FittingError::Tailor`] if either tailor call fails; the try-on
    /// failure is reported when both fail.
    pub async fn run(
        &mut self,
        selection: SelectionDraft,
        photo: Photo,
    ) -> Result<FitResult, FittingError> {
        let selection = selection.validate()?;
        photo.validate(&self.limits)?;

        let measurements = self
            .estimator
            .measure(selection.height(), selection.gender())
            .await;

        let request = TryOnRequest {
            photo,
            style: selection.style().clone(),
            fabric: selection.fabric().clone(),
            design: selection.design().map(str::to_owned),
            measurements,
        };

        tracing::info!(
            style = %request.style.id,
            fabric = %request.fabric.id,
            "requesting try-on"
        );
        let (image, feedback) = tokio::join!(
            self.tailor.try_on(&request),
            self.tailor.feedback(&request),
        );

        let image = image.map_err(|e| {
            tracing::error!(error = %e, "try-on failed");
            FittingError::tailor(Stage::TryOn, e)
        })?;
        let feedback = feedback.map_err(|e| {
            tracing::error!(error = %e, "feedback failed");
            FittingError::tailor(Stage::Feedback, e)
        })?;

        let TryOnRequest {
            style,
            fabric,
            design,
            ..
        } = request;

        Ok(FitResult {
            style,
            fabric,
            design,
            measurements,
            image,
            feedback,
            created_at: Timestamp::now(),
        })
    }

    /// Saves a result to `wardrobe`.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::Wardrobe`] if the wardrobe cannot store it.
    pub fn save<S: Store>(
        &self,
        result: &FitResult,
        wardrobe: &mut Wardrobe<S>,
    ) -> Result<SaveOutcome, FittingError> {
        let outcome = wardrobe.save(result.to_saved_fit())?;
        if !outcome.evicted.is_empty() {
            tracing::info!(evicted = outcome.evicted.len(), "older fits removed to make room");
        }
        Ok(outcome)
    }
}
