use std::env;
use std::path::Path;

use anyhow::Context;
use image::GrayImage;
use noise2d::{Noise2DParams, flatten2, sampling};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SIZE: usize = 256;

// Read an optional float from the environment
fn env_f64(name: &str) -> anyhow::Result<Option<f64>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .with_context(|| format!("{name} is not a number: {raw:?}")),
        Err(_) => Ok(None),
    }
}

fn save_gray(bytes: Vec<u8>, filename: &str) -> anyhow::Result<()> {
    let img = GrayImage::from_raw(SIZE as u32, SIZE as u32, bytes)
        .context("buffer does not match image size")?;
    img.save(Path::new(filename))
        .with_context(|| format!("failed to write {filename}"))?;
    info!("Saved {}", filename);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let defaults = Noise2DParams::default();
    let params = Noise2DParams {
        seed: env_f64("NOISE2D_SEED")?,
        scale: env_f64("NOISE2D_SCALE")?.unwrap_or(defaults.scale),
        range: env_f64("NOISE2D_RANGE")?.unwrap_or(defaults.range),
    };
    let noise = params.build()?;
    info!(seed = noise.seed(), scale = params.scale, range = params.range, "generating images");

    // Unit noise as grayscale
    let map = noise.sample_grid(SIZE, params.scale);
    save_gray(sampling::to_gray_bytes(&flatten2(&map)), "unit_noise.png")?;

    // Centered band and lower tail
    let band = noise.range_mask(SIZE, params.scale, params.range);
    let edge = noise.edge_mask(SIZE, params.scale, params.range);
    info!(
        range_coverage = sampling::coverage(&band),
        edge_coverage = sampling::coverage(&edge),
        "mask coverage"
    );
    save_gray(sampling::mask_to_bytes(&band), "range_mask.png")?;
    save_gray(sampling::mask_to_bytes(&edge), "edge_mask.png")?;
    Ok(())
}
