use noise::{NoiseFn, OpenSimplex, Perlin};

// A deterministic 3D coherent-noise function.
// `Noise2D` samples the (x, y) plane at z = seed. Values are nominally in [-1, 1] but not clamped.
pub trait NoiseSource {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &N {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).get3(x, y, z)
    }
}

// Backends from the `noise` crate, for callers who want its generators
// instead of the built-in `Perlin3D`.
impl NoiseSource for Perlin {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        NoiseFn::<f64, 3>::get(self, [x, y, z])
    }
}

impl NoiseSource for OpenSimplex {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        NoiseFn::<f64, 3>::get(self, [x, y, z])
    }
}
