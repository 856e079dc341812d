//! Virtual try-on sessions for PatternFit.
//!
//! A [`FittingSession`] takes a [`SelectionDraft`] and a [`Photo`], estimates
//! measurements from the selected height, and asks a [`Tailor`] for a try-on
//! image and fit feedback. The resulting [`FitResult`] can be saved to a
//! [`Wardrobe`](patternfit_wardrobe::Wardrobe) or summarized as a
//! [`FitRecord`].

mod error;
mod photo;
mod prompt;
mod selection;
mod session;
mod tailor;

pub use error::{FittingError, Stage};
pub use photo::{LimitsError, Photo, PhotoError, PhotoLimits};
pub use prompt::{INSTRUCTION, prompt};
pub use selection::{Selection, SelectionDraft, SelectionError};
pub use session::{FitRecord, FitResult, FittingSession};
pub use tailor::{Tailor, TryOnRequest};
