use rand::{Rng, distributions::Open01};

/// A source of bounded, symmetric random perturbations.
///
/// Every `rand::Rng` is a jitter source, so a seeded generator such as
/// `rand_chacha::ChaCha8Rng` gives reproducible estimates.
/// Implement this trait directly to pin the perturbation in tests.
pub trait Jitter {
    /// Returns a perturbation in the open interval `(-bound, bound)`.
    ///
    /// Each call is an independent draw.
    fn jitter(&mut self, bound: f64) -> f64;
}

impl<R: Rng> Jitter for R {
    fn jitter(&mut self, bound: f64) -> f64 {
        // `Open01` excludes both endpoints, so the result never reaches ±bound.
        let u: f64 = self.sample(Open01);
        (2.0 * u - 1.0) * bound
    }
}

/// A jitter source that never perturbs: every estimate sits on its nominal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn jitter(&mut self, _bound: f64) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rng_draws_stay_inside_open_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let j = rng.jitter(0.5);
            assert!(j > -0.5 && j < 0.5, "{j} escaped (-0.5, 0.5)");
        }
    }

    #[test]
    fn rng_draws_are_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = rng.jitter(1.0);
        let b = rng.jitter(1.0);
        assert!((a - b).abs() > f64::EPSILON);
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(a.jitter(1.0).to_bits(), b.jitter(1.0).to_bits());
        }
    }

    #[test]
    fn zero_bound_gives_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rng.jitter(0.0), 0.0);
        assert_eq!(NoJitter.jitter(3.0), 0.0);
    }
}
