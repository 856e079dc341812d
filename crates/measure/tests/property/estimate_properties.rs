use patternfit_core::{Gender, Height};
use patternfit_measure::{Measure, Measurements, estimate_with};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn sample(seed: u64, height: f64, gender: Gender) -> Measurements {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    estimate_with(&mut rng, Height::from_inches(height).unwrap(), gender)
}

proptest! {
    #[test]
    fn key_set_matches_schema(seed in any::<u64>(), height in 1.0f64..120.0, gender in gender()) {
        let m = sample(seed, height, gender);
        prop_assert_eq!(m.gender(), gender);

        let keys: Vec<Measure> = m.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(keys.as_slice(), Measure::schema(gender));
        prop_assert_eq!(m.len(), if gender == Gender::Male { 5 } else { 14 });
    }

    #[test]
    fn values_are_finite_and_rounded(seed in any::<u64>(), height in 1.0f64..120.0, gender in gender()) {
        for (measure, value) in sample(seed, height, gender).iter() {
            prop_assert!(value.is_finite(), "{} not finite", measure);
            let scaled = value * 10.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6, "{} = {}", measure, value);
        }
    }

    #[test]
    fn unjittered_lengths_are_exact(seed in any::<u64>(), height in 1.0f64..120.0, gender in gender()) {
        let m = sample(seed, height, gender);
        prop_assert_eq!(m.get(Measure::TrouserLength), Some(round_tenth(height * 0.6)));

        if gender == Gender::Female {
            prop_assert_eq!(m.get(Measure::HalfLength), Some(round_tenth(height * 0.28)));
            prop_assert_eq!(m.get(Measure::ShoulderToUnderBust), Some(round_tenth(height * 0.22)));
            prop_assert_eq!(m.get(Measure::ShoulderToWaist), Some(round_tenth(height * 0.25)));
            prop_assert_eq!(m.get(Measure::SkirtLength), Some(round_tenth(height * 0.4)));
            prop_assert_eq!(m.get(Measure::ShirtLength), Some(round_tenth(height * 0.35)));
        }
    }

    #[test]
    fn female_jitter_is_bounded(seed in any::<u64>(), height in 1.0f64..120.0) {
        let Measurements::Female(f) = sample(seed, height, Gender::Female) else {
            unreachable!("female schema requested");
        };

        // Each band is the jitter bound plus rounding slack on both sides.
        prop_assert!((f.waist - height * 0.45).abs() <= 1.05 + 1e-9);
        prop_assert!((f.hip - f.waist * 1.2).abs() <= 1.0 + 0.05 * 1.2 + 0.05 + 1e-9);
        prop_assert!((f.bust - f.hip * 0.98).abs() <= 1.0 + 0.05 * 0.98 + 0.05 + 1e-9);
        prop_assert!((f.shoulder - height * 0.23).abs() <= 0.55 + 1e-9);
        prop_assert!((f.sleeve - height * 0.33).abs() <= 0.55 + 1e-9);
    }

    #[test]
    fn female_derived_fields_follow_their_inputs(seed in any::<u64>(), height in 1.0f64..120.0) {
        let Measurements::Female(f) = sample(seed, height, Gender::Female) else {
            unreachable!("female schema requested");
        };

        // Derived from the unrounded input, so allow that input's rounding error.
        prop_assert!((f.lap - f.hip * 0.6).abs() <= 0.05 * 0.6 + 0.05 + 1e-9);
        prop_assert!((f.bust_point - f.bust * 0.4).abs() <= 0.05 * 0.4 + 0.05 + 1e-9);
        prop_assert!((f.nipple_to_nipple - f.bust * 0.21).abs() <= 0.05 * 0.21 + 0.05 + 1e-9);
    }

    #[test]
    fn male_jitter_is_bounded(seed in any::<u64>(), height in 1.0f64..120.0) {
        let Measurements::Male(m) = sample(seed, height, Gender::Male) else {
            unreachable!("male schema requested");
        };

        let hip = height * 0.45 * 1.1;
        prop_assert!((m.lap - hip * 0.6).abs() <= (1.0 * 1.1 + 1.0) * 0.6 + 0.05 + 1e-9);
        prop_assert!((m.bust - hip * 0.95).abs() <= (1.0 * 1.1 + 1.0) * 0.95 + 1.0 + 0.05 + 1e-9);
        prop_assert!((m.shoulder - height * 0.23).abs() <= 0.55 + 1e-9);
        prop_assert!((m.sleeve - height * 0.33).abs() <= 0.55 + 1e-9);
    }

    #[test]
    fn same_seed_same_bundle(seed in any::<u64>(), height in 1.0f64..120.0, gender in gender()) {
        prop_assert_eq!(sample(seed, height, gender), sample(seed, height, gender));
    }
}
