use serde::{Deserialize, Serialize};

use crate::{Noise2D, Noise2DError};

// Parameters for a generator and the queries run against it.
// Missing fields fall back to the defaults below when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Noise2DParams {
    pub seed: Option<f64>, // None draws one at build time
    pub scale: f64,        // sample coordinates are divided by this
    pub range: f64,        // threshold for range / edge_range
}

impl Default for Noise2DParams {
    fn default() -> Self {
        Self {
            seed: None,
            scale: 32.0,
            range: 0.5,
        }
    }
}

impl Noise2DParams {
    pub fn validate(&self) -> Result<(), Noise2DError> {
        if let Some(seed) = self.seed {
            if !seed.is_finite() {
                return Err(Noise2DError::NonFiniteSeed(seed));
            }
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(Noise2DError::InvalidScale(self.scale));
        }
        if !self.range.is_finite() {
            return Err(Noise2DError::NonFiniteRange(self.range));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Noise2D, Noise2DError> {
        self.validate()?;
        Ok(Noise2D::new(self.seed))
    }
}
