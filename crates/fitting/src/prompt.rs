//! Text sent to the tailor alongside the photo.

use crate::tailor::TryOnRequest;

/// Standing instructions for a tailor backed by a generative model.
pub const INSTRUCTION: &str = "\
You are a virtual tailor and image specialist for traditional Nigerian attire. \
Given a photo of a person, a garment style, a fabric, and body measurements in inches, \
produce a photorealistic image of the same person wearing the garment cut to those \
measurements, with natural drape, folds and shadows. Keep the face and identity \
unchanged. When asked for feedback, reply with one short, encouraging paragraph \
describing how the garment will fit, without markdown.";

/// Builds the request text for a try-on.
///
/// Measurements are listed in schema order, one per line, using the display
/// label for the request's gender.
///
/// # Example
///
/// ```
/// use patternfit_core::{Gender, Height, catalog};
/// use patternfit_fitting::{Photo, TryOnRequest, prompt};
/// use patternfit_measure::{NoJitter, estimate_with};
///
/// let request = TryOnRequest {
///     photo: Photo::new(vec![0xff], "image/jpeg"),
///     style: catalog::find_style("agbada").unwrap(),
///     fabric: catalog::find_fabric("aso-oke").unwrap(),
///     design: None,
///     measurements: estimate_with(
///         &mut NoJitter,
///         Height::from_inches(70.0).unwrap(),
///         Gender::Male,
///     ),
/// };
///
/// let text = prompt(&request);
/// assert!(text.contains("Agbada / Babanriga"));
/// assert!(text.contains("- Chest: 32.9 in"));
/// ```
#[must_use]
pub fn prompt(request: &TryOnRequest) -> String {
    let gender = request.measurements.gender();

    let design = request
        .design
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!(" Design: {d}."))
        .unwrap_or_default();

    let mut lines = vec![
        format!(
            "Dress the {gender} person in the photo in a {} made from {} fabric.{design}",
            request.style.name, request.fabric.name,
        ),
        "Measurements (inches):".to_owned(),
    ];
    lines.extend(
        request
            .measurements
            .iter()
            .map(|(measure, value)| format!("- {}: {value:.1} in", measure.label(gender))),
    );
    lines.join("\n")
}
