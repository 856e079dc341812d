use std::{error::Error as StdError, future::Future};

use patternfit_core::{Fabric, Style};
use patternfit_measure::Measurements;

use crate::photo::Photo;

/// Everything a tailor needs to dress the person in a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct TryOnRequest {
    pub photo: Photo,
    pub style: Style,
    pub fabric: Fabric,
    pub design: Option<String>,
    pub measurements: Measurements,
}

/// A service that renders try-on images and writes fit feedback.
///
/// Implementations usually call out to a generative model. A session calls
/// both methods concurrently for the same request.
pub trait Tailor {
    /// Error returned by either call.
    type Error: StdError + Send + Sync + 'static;

    /// Renders the person wearing the requested garment.
    ///
    /// Returns the encoded image bytes.
    fn try_on(
        &self,
        request: &TryOnRequest,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;

    /// Describes how the garment would fit, as a short paragraph.
    fn feedback(
        &self,
        request: &TryOnRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

impl<T: Tailor + Sync> Tailor for &T {
    type Error = T::Error;

    fn try_on(
        &self,
        request: &TryOnRequest,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send {
        (**self).try_on(request)
    }

    fn feedback(
        &self,
        request: &TryOnRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        (**self).feedback(request)
    }
}
