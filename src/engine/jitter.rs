use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random addend mixed into every score.
///
/// Each ranking call owns its source, so concurrent calls never share state.
pub trait JitterSource {
    /// Draw a value in `[0, span)`. A non-positive span yields 0.
    fn sample(&mut self, span: f64) -> f64;
}

/// Uniform jitter backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Seeded from OS entropy; different on every run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn sample(&mut self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..span)
    }
}

/// Disables jitter entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self, _span: f64) -> f64 {
        0.0
    }
}

/// Always returns the same offset, clamped into `[0, span)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&mut self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        self.0.clamp(0.0, span - f64::EPSILON * span)
    }
}
