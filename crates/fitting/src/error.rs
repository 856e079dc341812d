use std::{error::Error as StdError, fmt};

use patternfit_wardrobe::WardrobeError;
use thiserror::Error;

use crate::{photo::PhotoError, selection::SelectionError};

/// The tailor call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    TryOn,
    Feedback,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TryOn => "try-on image",
            Self::Feedback => "fit feedback",
        })
    }
}

/// Errors that can occur during a fitting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FittingError {
    /// The selection is incomplete or inconsistent.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The photo was refused.
    #[error(transparent)]
    Photo(#[from] PhotoError),

    /// The tailor could not produce a result.
    #[error("tailor failed to produce the {stage}")]
    Tailor {
        stage: Stage,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The result could not be saved.
    #[error(transparent)]
    Wardrobe(#[from] WardrobeError),
}

impl FittingError {
    pub(crate) fn tailor(stage: Stage, source: impl StdError + Send + Sync + 'static) -> Self {
        Self::Tailor {
            stage,
            source: Box::new(source),
        }
    }

    /// Returns `true` if the user should fix their inputs and try again.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Selection(_) | Self::Photo(_))
    }
}
