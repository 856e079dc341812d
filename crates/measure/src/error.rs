use patternfit_core::{ParseGenderError, constraint::ConstraintError};
use thiserror::Error;

/// Errors returned when estimating measurements.
///
/// Estimation either produces a complete bundle or fails before computing
/// anything, so the only failure is a bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EstimateError {
    /// An input is outside the estimator's domain.
    ///
    /// `argument` names the offending input (`height` or `gender`).
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl EstimateError {
    /// Wrap a height that is not finite and strictly positive.
    pub(crate) fn invalid_height(inches: f64, source: ConstraintError) -> Self {
        Self::InvalidArgument {
            argument: "height",
            reason: format!("{source} (got {inches} in)"),
        }
    }

    /// Wrap a gender tag that is not recognized.
    pub(crate) fn invalid_gender(source: &ParseGenderError) -> Self {
        Self::InvalidArgument {
            argument: "gender",
            reason: source.to_string(),
        }
    }

    /// Returns the name of the rejected argument.
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }
}
