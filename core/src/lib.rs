// noise2d wraps a 3D coherent-noise primitive into seeded 2D queries
pub mod error;
pub mod noise2d;
pub mod params;
pub mod perlin3;
pub mod sampling;
pub mod seed;
pub mod source;
pub mod targets;

pub use error::Noise2DError;
pub use noise2d::Noise2D;
pub use params::Noise2DParams;
pub use perlin3::Perlin3D;
pub use sampling::{HeightMap2D, Mask2D, flatten2};
pub use source::NoiseSource;
