use tracing::trace;

use crate::{Noise2D, NoiseSource, targets};

// Sampled unit noise, one row per y: map[y][x]
pub type HeightMap2D = Vec<Vec<f32>>;

// Same layout as HeightMap2D, one flag per cell
pub type Mask2D = Vec<Vec<bool>>;

impl<N: NoiseSource> Noise2D<N> {
    // Unit noise at every integer pixel of a size×size square
    pub fn sample_grid(&self, size: usize, scale: f64) -> HeightMap2D {
        trace!(target: targets::NOISE, size, scale, "sampling unit noise grid");
        grid(size, |x, y| self.unit_noise(x, y, scale) as f32)
    }

    // `range` at every pixel: the centered band
    pub fn range_mask(&self, size: usize, scale: f64, range: f64) -> Mask2D {
        trace!(target: targets::NOISE, size, scale, range, "sampling range mask");
        grid(size, |x, y| self.range(x, y, scale, range))
    }

    // `edge_range` at every pixel: the lower tail
    pub fn edge_mask(&self, size: usize, scale: f64, range: f64) -> Mask2D {
        trace!(target: targets::NOISE, size, scale, range, "sampling edge mask");
        grid(size, |x, y| self.edge_range(x, y, scale, range))
    }
}

fn grid<T>(size: usize, mut cell: impl FnMut(f64, f64) -> T) -> Vec<Vec<T>> {
    (0..size)
        .map(|y| (0..size).map(|x| cell(x as f64, y as f64)).collect())
        .collect()
}

// flatten a 2D height map (row‐major) into a single Vec<f32>
// for converting to an image buffer
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().copied()).collect()
}

// Map unit values to grayscale bytes; anything outside [0, 1] is clamped
pub fn to_gray_bytes(flat: &[f32]) -> Vec<u8> {
    flat.iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}

// Row-major bytes for a mask: 255 where set, 0 elsewhere
pub fn mask_to_bytes(mask: &[Vec<bool>]) -> Vec<u8> {
    mask.iter()
        .flat_map(|row| row.iter().map(|&b| if b { 255 } else { 0 }))
        .collect()
}

// Fraction of set cells. An empty mask covers nothing.
pub fn coverage(mask: &[Vec<bool>]) -> f64 {
    let total: usize = mask.iter().map(Vec::len).sum();
    if total == 0 {
        return 0.0;
    }
    let set = mask.iter().flatten().filter(|&&b| b).count();
    set as f64 / total as f64
}
