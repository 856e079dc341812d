use std::cmp::Ordering;

use num_traits::Zero;
use uom::si::f64::Length;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Numbers that can tell whether they are finite.
///
/// Implemented for `f32`, `f64`, and `uom::si::f64::Length`.
pub trait Finite: PartialOrd + Zero {
    fn is_finite(&self) -> bool;
}

impl Finite for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Finite for Length {
    fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Marker for values that are finite and greater than zero.
///
/// # Examples
///
/// ```
/// use patternfit_core::constraint::FinitePositive;
/// use uom::si::{f64::Length, length::inch};
///
/// let h = FinitePositive::new(Length::new::<inch>(68.0)).unwrap();
/// assert_eq!(h.as_ref().get::<inch>(), 68.0);
///
/// assert!(FinitePositive::new(0.0).is_err());
/// assert!(FinitePositive::new(f64::NAN).is_err());
/// assert!(FinitePositive::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FinitePositive;

impl FinitePositive {
    /// Wraps `value` if it is finite and greater than zero.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotANumber`] for NaN.
    /// - [`ConstraintError::NotFinite`] for either infinity.
    /// - [`ConstraintError::Zero`] or [`ConstraintError::Negative`] otherwise.
    pub fn new<T: Finite>(value: T) -> Result<Constrained<T, FinitePositive>, ConstraintError> {
        Constrained::<T, FinitePositive>::new(value)
    }
}

impl<T: Finite> Constraint<T> for FinitePositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let Some(ordering) = value.partial_cmp(&T::zero()) else {
            return Err(ConstraintError::NotANumber);
        };
        if !value.is_finite() {
            return Err(ConstraintError::NotFinite);
        }
        match ordering {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}
