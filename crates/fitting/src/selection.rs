use patternfit_core::{Fabric, Gender, Height, Style, constraint::ConstraintError};
use thiserror::Error;

/// Reasons a selection cannot start a fitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectionError {
    /// A required choice has not been made.
    #[error("selection is incomplete: choose a {0} first")]
    Incomplete(&'static str),

    /// The chosen style is cut for the other gender.
    #[error("style `{style}` is not available for {gender}")]
    StyleGenderMismatch { style: String, gender: Gender },

    /// The height is not finite and positive.
    #[error("invalid height: {0}")]
    InvalidHeight(#[from] ConstraintError),
}

/// The choices made so far, in the order a user makes them.
///
/// Changing the gender clears the style and fabric, since both depend on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionDraft {
    pub gender: Option<Gender>,
    pub style: Option<Style>,
    pub fabric: Option<Fabric>,
    pub design: Option<String>,
    pub height_inches: Option<f64>,
}

impl SelectionDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses a gender, clearing the style and fabric if it changed.
    #[must_use]
    pub fn gender(mut self, gender: Gender) -> Self {
        if self.gender != Some(gender) {
            self.style = None;
            self.fabric = None;
        }
        self.gender = Some(gender);
        self
    }

    /// Chooses a garment style.
    #[must_use]
    pub fn style(self, style: Style) -> Self {
        Self {
            style: Some(style),
            ..self
        }
    }

    /// Chooses a fabric.
    #[must_use]
    pub fn fabric(self, fabric: Fabric) -> Self {
        Self {
            fabric: Some(fabric),
            ..self
        }
    }

    /// Chooses a sleeve length or design variant.
    #[must_use]
    pub fn design(self, design: impl Into<String>) -> Self {
        Self {
            design: Some(design.into()),
            ..self
        }
    }

    /// Enters the height in inches.
    #[must_use]
    pub fn height_inches(self, inches: f64) -> Self {
        Self {
            height_inches: Some(inches),
            ..self
        }
    }

    /// Returns `true` once every required choice is made and valid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.clone().validate().is_ok()
    }

    /// Checks the draft and produces a [`Selection`].
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if a choice is missing, the style does
    /// not match the gender, or the height is invalid.
    pub fn validate(self) -> Result<Selection, SelectionError> {
        let gender = self.gender.ok_or(SelectionError::Incomplete("gender"))?;
        let style = self.style.ok_or(SelectionError::Incomplete("style"))?;
        let fabric = self.fabric.ok_or(SelectionError::Incomplete("fabric"))?;
        let inches = self.height_inches.ok_or(SelectionError::Incomplete("height"))?;

        if style.gender != gender {
            return Err(SelectionError::StyleGenderMismatch {
                style: style.id,
                gender,
            });
        }

        Ok(Selection {
            gender,
            style,
            fabric,
            design: self.design,
            height: Height::from_inches(inches)?,
        })
    }
}

/// A complete, validated set of choices for one fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    gender: Gender,
    style: Style,
    fabric: Fabric,
    design: Option<String>,
    height: Height,
}

impl Selection {
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn fabric(&self) -> &Fabric {
        &self.fabric
    }

    #[must_use]
    pub fn design(&self) -> Option<&str> {
        self.design.as_deref()
    }

    #[must_use]
    pub fn height(&self) -> Height {
        self.height
    }
}
