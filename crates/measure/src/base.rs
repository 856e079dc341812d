//! Quantities shared by both measurement schemas.
//!
//! The chain runs `height → waist → hip → bust`, with shoulder and sleeve
//! taken straight from height. Each jittered step draws independently.

use patternfit_core::Gender;

use crate::jitter::Jitter;

const WAIST_PER_HEIGHT: f64 = 0.45;
const SHOULDER_PER_HEIGHT: f64 = 0.23;
const SLEEVE_PER_HEIGHT: f64 = 0.33;
const LAP_PER_HIP: f64 = 0.6;
const TROUSER_PER_HEIGHT: f64 = 0.6;

const CIRCUMFERENCE_JITTER: f64 = 1.0;
const LENGTH_JITTER: f64 = 0.5;

/// Gender-specific ratios along the circumference chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Proportions {
    pub hip_per_waist: f64,
    pub bust_per_hip: f64,
}

impl Proportions {
    pub(crate) fn of(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self {
                hip_per_waist: 1.1,
                bust_per_hip: 0.95,
            },
            Gender::Female => Self {
                hip_per_waist: 1.2,
                bust_per_hip: 0.98,
            },
        }
    }
}

/// Unrounded base quantities for one estimate, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BaseQuantities {
    pub height: f64,
    pub waist: f64,
    pub hip: f64,
    pub bust: f64,
    pub shoulder: f64,
    pub sleeve: f64,
}

impl BaseQuantities {
    /// Samples the base quantities for a body of `height` inches.
    pub(crate) fn sample<J: Jitter + ?Sized>(height: f64, gender: Gender, jitter: &mut J) -> Self {
        let ratios = Proportions::of(gender);

        let waist = height * WAIST_PER_HEIGHT + jitter.jitter(CIRCUMFERENCE_JITTER);
        let hip = waist * ratios.hip_per_waist + jitter.jitter(CIRCUMFERENCE_JITTER);
        let bust = hip * ratios.bust_per_hip + jitter.jitter(CIRCUMFERENCE_JITTER);
        let shoulder = height * SHOULDER_PER_HEIGHT + jitter.jitter(LENGTH_JITTER);
        let sleeve = height * SLEEVE_PER_HEIGHT + jitter.jitter(LENGTH_JITTER);

        Self {
            height,
            waist,
            hip,
            bust,
            shoulder,
            sleeve,
        }
    }

    pub(crate) fn lap(&self) -> f64 {
        self.hip * LAP_PER_HIP
    }

    pub(crate) fn trouser_length(&self) -> f64 {
        self.height * TROUSER_PER_HEIGHT
    }
}
