use rand::Rng;
use tracing::debug;

use crate::{NoiseSource, Perlin3D, seed, targets};

// Seeded 2D view over a 3D noise source.
// Every query samples `source` at (x / scale, y / scale, seed); the seed never changes.
// Inputs are not validated: zero scale or non-finite coordinates give non-finite results.
// `Noise2DParams::build` is the checked way in.
#[derive(Clone, Debug)]
pub struct Noise2D<N = Perlin3D> {
    seed: f64,
    source: N,
}

impl Noise2D<Perlin3D> {
    // Create a generator over the default `Perlin3D` field.
    // Without a seed one is drawn from the shared random source.
    pub fn new(seed: Option<f64>) -> Self {
        Self::with_source(seed, Perlin3D::new())
    }

    pub fn with_seed(seed: f64) -> Self {
        Self::new(Some(seed))
    }

    pub fn random() -> Self {
        Self::new(None)
    }

    // Like `Noise2D::random`, but drawing the seed from `rng`
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::with_source(Some(seed::random_seed_from(rng)), Perlin3D::new())
    }
}

impl<N: NoiseSource> Noise2D<N> {
    pub fn with_source(seed: Option<f64>, source: N) -> Self {
        let drawn = seed.is_none();
        let seed = seed.unwrap_or_else(seed::random_seed);
        debug!(target: targets::NOISE, seed, drawn, "created Noise2D");
        Self { seed, source }
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    // Raw noise at (x, y), nominally in `[-1, 1]`
    pub fn noise(&self, x: f64, y: f64, scale: f64) -> f64 {
        self.source.get3(x / scale, y / scale, self.seed)
    }

    // `Noise2D::noise` remapped to nominally `[0, 1]`
    pub fn unit_noise(&self, x: f64, y: f64, scale: f64) -> f64 {
        (self.noise(x, y, scale) + 1.0) / 2.0
    }

    // True when the raw sample lies strictly inside `(-range, range)`.
    // A `range` of zero or below never matches.
    pub fn range(&self, x: f64, y: f64, scale: f64, range: f64) -> bool {
        self.noise(x, y, scale).abs() < range
    }

    // True when the unit sample lies in the lower tail `[0, range)`.
    // Unlike `Noise2D::range` this is one-sided.
    pub fn edge_range(&self, x: f64, y: f64, scale: f64, range: f64) -> bool {
        self.unit_noise(x, y, scale) < range
    }
}
