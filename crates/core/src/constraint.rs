//! Checked numeric inputs.
//!
//! A [`Constrained<T, C>`] holds a value that passed the check for marker `C`
//! when it was built. Body inputs rely on this: a [`Height`](crate::Height)
//! is a `Constrained<Length, FinitePositive>`, so the estimator never sees a
//! zero, negative, NaN or infinite height.

mod finite_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite_positive::{Finite, FinitePositive};

/// A check applied once, when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks `value` against the rule.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] naming the broken rule.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The rule a rejected value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
}

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use patternfit_core::constraint::{Constrained, ConstraintError, FinitePositive};
///
/// let n = Constrained::<_, FinitePositive>::new(68.0).unwrap();
/// assert_eq!(n.into_inner(), 68.0);
///
/// assert_eq!(
///     Constrained::<_, FinitePositive>::new(f64::INFINITY).unwrap_err(),
///     ConstraintError::NotFinite,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the error from `C::check` if the value is rejected.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
