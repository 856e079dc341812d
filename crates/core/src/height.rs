use uom::si::{
    f64::Length,
    length::{foot, inch},
};

use crate::constraint::{Constrained, ConstraintError, FinitePositive};

/// A body height: finite and strictly positive.
///
/// Any length unit may be used to construct a `Height`. Measurement formulas
/// read it back in inches with [`Height::inches`].
///
/// # Example
///
/// ```
/// use patternfit_core::Height;
/// use uom::si::{f64::Length, length::centimeter};
///
/// let a = Height::from_inches(68.0).unwrap();
/// let b = Height::from_feet_and_inches(5.0, 8.0).unwrap();
/// assert!((a.inches() - b.inches()).abs() < 1e-9);
///
/// let c = Height::new(Length::new::<centimeter>(172.72)).unwrap();
/// assert!((c.inches() - 68.0).abs() < 1e-9);
///
/// assert!(Height::from_inches(0.0).is_err());
/// assert!(Height::from_inches(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Height(Constrained<Length, FinitePositive>);

impl Height {
    /// Creates a height from a `uom` length.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the length is zero, negative, NaN,
    /// or infinite.
    pub fn new(length: Length) -> Result<Self, ConstraintError> {
        Ok(Self(FinitePositive::new(length)?))
    }

    /// Creates a height from a value in inches.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value is not finite and positive.
    pub fn from_inches(inches: f64) -> Result<Self, ConstraintError> {
        Self::new(Length::new::<inch>(inches))
    }

    /// Creates a height from a feet and inches pair, e.g. 5 ft 8 in.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the combined value is not finite and positive.
    pub fn from_feet_and_inches(feet: f64, inches: f64) -> Result<Self, ConstraintError> {
        Self::new(Length::new::<foot>(feet) + Length::new::<inch>(inches))
    }

    /// Returns the height in inches.
    #[must_use]
    pub fn inches(&self) -> f64 {
        self.0.as_ref().get::<inch>()
    }

    /// Returns the height as a `uom` length.
    #[must_use]
    pub fn length(&self) -> Length {
        *self.0.as_ref()
    }
}
