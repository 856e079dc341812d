use std::fmt;

use patternfit_core::Gender;
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::inch};

use crate::base::BaseQuantities;

/// The name of a single tailoring measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measure {
    Shoulder,
    Bust,
    Waist,
    Hip,
    Sleeve,
    Lap,
    TrouserLength,
    HalfLength,
    BustPoint,
    ShoulderToUnderBust,
    ShoulderToWaist,
    SkirtLength,
    ShirtLength,
    NippleToNipple,
}

impl Measure {
    /// Keys of the male schema, in output order.
    pub const MALE: [Measure; 5] = [
        Self::Shoulder,
        Self::Sleeve,
        Self::Bust,
        Self::TrouserLength,
        Self::Lap,
    ];

    /// Keys of the female schema, in output order.
    pub const FEMALE: [Measure; 14] = [
        Self::Shoulder,
        Self::Bust,
        Self::Waist,
        Self::Hip,
        Self::Sleeve,
        Self::Lap,
        Self::HalfLength,
        Self::BustPoint,
        Self::ShoulderToUnderBust,
        Self::ShoulderToWaist,
        Self::SkirtLength,
        Self::ShirtLength,
        Self::NippleToNipple,
        Self::TrouserLength,
    ];

    /// Returns the schema for `gender`.
    #[must_use]
    pub fn schema(gender: Gender) -> &'static [Measure] {
        match gender {
            Gender::Male => &Self::MALE,
            Gender::Female => &Self::FEMALE,
        }
    }

    /// Returns the camelCase key used in serialized bundles.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Shoulder => "shoulder",
            Self::Bust => "bust",
            Self::Waist => "waist",
            Self::Hip => "hip",
            Self::Sleeve => "sleeve",
            Self::Lap => "lap",
            Self::TrouserLength => "trouserLength",
            Self::HalfLength => "halfLength",
            Self::BustPoint => "bustPoint",
            Self::ShoulderToUnderBust => "shoulderToUnderBust",
            Self::ShoulderToWaist => "shoulderToWaist",
            Self::SkirtLength => "skirtLength",
            Self::ShirtLength => "shirtLength",
            Self::NippleToNipple => "nippleToNipple",
        }
    }

    /// Returns a human-readable label.
    ///
    /// Bust reads "Chest" on male garments.
    #[must_use]
    pub fn label(self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Self::Bust, Gender::Male) => "Chest",
            (Self::Shoulder, _) => "Shoulder",
            (Self::Bust, _) => "Bust",
            (Self::Waist, _) => "Waist",
            (Self::Hip, _) => "Hip",
            (Self::Sleeve, _) => "Sleeve",
            (Self::Lap, _) => "Lap",
            (Self::TrouserLength, _) => "Trouser Length",
            (Self::HalfLength, _) => "Half Length",
            (Self::BustPoint, _) => "Bust Point",
            (Self::ShoulderToUnderBust, _) => "Shoulder to Under Bust",
            (Self::ShoulderToWaist, _) => "Shoulder to Waist",
            (Self::SkirtLength, _) => "Skirt Length",
            (Self::ShirtLength, _) => "Shirt Length",
            (Self::NippleToNipple, _) => "Nipple to Nipple",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Measurements for male garments, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaleMeasurements {
    pub shoulder: f64,
    pub sleeve: f64,
    /// Chest circumference.
    pub bust: f64,
    pub trouser_length: f64,
    pub lap: f64,
}

impl MaleMeasurements {
    pub(crate) fn from_base(base: &BaseQuantities) -> Self {
        Self {
            shoulder: round_tenth(base.shoulder),
            sleeve: round_tenth(base.sleeve),
            bust: round_tenth(base.bust),
            trouser_length: round_tenth(base.trouser_length()),
            lap: round_tenth(base.lap()),
        }
    }

    /// Returns the value for `measure`, or `None` if it is not in the male schema.
    #[must_use]
    pub fn get(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::Shoulder => Some(self.shoulder),
            Measure::Sleeve => Some(self.sleeve),
            Measure::Bust => Some(self.bust),
            Measure::TrouserLength => Some(self.trouser_length),
            Measure::Lap => Some(self.lap),
            _ => None,
        }
    }
}

/// Measurements for female garments, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FemaleMeasurements {
    pub shoulder: f64,
    pub bust: f64,
    pub waist: f64,
    pub hip: f64,
    pub sleeve: f64,
    pub lap: f64,
    pub half_length: f64,
    pub bust_point: f64,
    pub shoulder_to_under_bust: f64,
    pub shoulder_to_waist: f64,
    pub skirt_length: f64,
    pub shirt_length: f64,
    pub nipple_to_nipple: f64,
    pub trouser_length: f64,
}

impl FemaleMeasurements {
    pub(crate) fn from_base(base: &BaseQuantities) -> Self {
        let h = base.height;
        Self {
            shoulder: round_tenth(base.shoulder),
            bust: round_tenth(base.bust),
            waist: round_tenth(base.waist),
            hip: round_tenth(base.hip),
            sleeve: round_tenth(base.sleeve),
            lap: round_tenth(base.lap()),
            half_length: round_tenth(h * 0.28),
            bust_point: round_tenth(base.bust * 0.4),
            shoulder_to_under_bust: round_tenth(h * 0.22),
            shoulder_to_waist: round_tenth(h * 0.25),
            skirt_length: round_tenth(h * 0.4),
            shirt_length: round_tenth(h * 0.35),
            nipple_to_nipple: round_tenth(base.bust * 0.21),
            trouser_length: round_tenth(base.trouser_length()),
        }
    }

    /// Returns the value for `measure`. Every measure is in the female schema.
    #[must_use]
    pub fn get(&self, measure: Measure) -> Option<f64> {
        let value = match measure {
            Measure::Shoulder => self.shoulder,
            Measure::Bust => self.bust,
            Measure::Waist => self.waist,
            Measure::Hip => self.hip,
            Measure::Sleeve => self.sleeve,
            Measure::Lap => self.lap,
            Measure::TrouserLength => self.trouser_length,
            Measure::HalfLength => self.half_length,
            Measure::BustPoint => self.bust_point,
            Measure::ShoulderToUnderBust => self.shoulder_to_under_bust,
            Measure::ShoulderToWaist => self.shoulder_to_waist,
            Measure::SkirtLength => self.skirt_length,
            Measure::ShirtLength => self.shirt_length,
            Measure::NippleToNipple => self.nipple_to_nipple,
        };
        Some(value)
    }
}

/// A bundle of estimated body measurements.
///
/// The variant records which schema was produced. Values are in inches,
/// rounded to one decimal place.
///
/// Serializes as a flat object with a `gender` tag and camelCase keys:
///
/// ```json
/// { "gender": "male", "shoulder": 16.1, "sleeve": 23.2, "bust": 35.9, "trouserLength": 42.0, "lap": 22.7 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gender", rename_all = "lowercase")]
pub enum Measurements {
    Male(MaleMeasurements),
    Female(FemaleMeasurements),
}

impl Measurements {
    /// Returns the gender whose schema this bundle follows.
    #[must_use]
    pub fn gender(&self) -> Gender {
        match self {
            Self::Male(_) => Gender::Male,
            Self::Female(_) => Gender::Female,
        }
    }

    /// Returns the keys present in this bundle, in schema order.
    #[must_use]
    pub fn schema(&self) -> &'static [Measure] {
        Measure::schema(self.gender())
    }

    /// Returns the value in inches for `measure`, if present.
    #[must_use]
    pub fn get(&self, measure: Measure) -> Option<f64> {
        match self {
            Self::Male(m) => m.get(measure),
            Self::Female(m) => m.get(measure),
        }
    }

    /// Returns the value for `measure` as a `uom` length, if present.
    #[must_use]
    pub fn length(&self, measure: Measure) -> Option<Length> {
        self.get(measure).map(Length::new::<inch>)
    }

    /// Iterates `(measure, inches)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        self.schema()
            .iter()
            .filter_map(|&m| self.get(m).map(|v| (m, v)))
    }

    /// Returns the number of measurements in this bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schema().len()
    }

    /// Always `false`: every schema has at least one measurement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Magnitude from which every `f64` is a whole number.
const WHOLE_FROM: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds to one decimal place, ties away from zero.
///
/// Values too large to carry a fraction are returned as is, which keeps
/// `value * 10.0` from overflowing near `f64::MAX`.
pub(crate) fn round_tenth(value: f64) -> f64 {
    if value.abs() >= WHOLE_FROM {
        return value;
    }
    (value * 10.0).round() / 10.0
}
