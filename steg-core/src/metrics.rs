//! Fidelity metrics computed alongside each embed.

use crate::consts::BITS_PER_BYTE;
use crate::engine::effective_bit_capacity;
use crate::image::RgbImage;

/// Transient per-embed fidelity record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub mse: f64,
    pub psnr: f64,
    pub capacity_bytes: usize,
    pub used_bytes: usize,
}

/// Computes MSE/PSNR between `original` and `stego`, plus capacity and
/// usage figures derived from `original`'s depth map and the number of
/// payload-frame bits actually written (`used_bits`).
pub fn compute_metrics(original: &RgbImage, stego: &RgbImage, used_bits: usize) -> Metrics {
    let mse = mean_squared_error(original, stego);
    let psnr = if mse == 0.0 {
        f64::INFINITY
    } else {
        20.0 * (255.0 / mse.sqrt()).log10()
    };

    let depth_map = crate::depth::compute_depth_map(original);
    let capacity_bytes = effective_bit_capacity(&depth_map) / BITS_PER_BYTE;
    let used_bytes = used_bits.div_ceil(BITS_PER_BYTE);

    Metrics {
        mse,
        psnr,
        capacity_bytes,
        used_bytes,
    }
}

fn mean_squared_error(original: &RgbImage, stego: &RgbImage) -> f64 {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for (o, s) in original.pixels().zip(stego.pixels()) {
        for channel in 0..3 {
            let diff = o[channel] as f64 - s[channel] as f64;
            sum += diff * diff;
            count += 1;
        }
    }
    sum / count as f64
}
