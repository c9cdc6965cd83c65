//! Heuristic steganalysis scorer: estimates, from LSB-plane statistics
//! alone, whether an image likely carries hidden data. Not a security
//! claim, a motivated adversary with knowledge of this detector can
//! trivially defeat it.

use crate::consts::{
    DETECT_CHI_NORM, DETECT_CHI_WEIGHT, DETECT_CORR_WEIGHT, DETECT_ENTROPY_WEIGHT,
    DETECT_THRESHOLD,
};
use crate::image::RgbImage;

/// `"Likely contains hidden data"` or `"Likely clean image"`.
pub fn label_for(score: f64) -> &'static str {
    if score >= DETECT_THRESHOLD {
        "Likely contains hidden data"
    } else {
        "Likely clean image"
    }
}

/// Computes the heuristic score in `[0, 1]` from the image's three
/// per-channel LSB planes.
pub fn score(image: &RgbImage) -> f64 {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut entropies = Vec::with_capacity(3);
    let mut chis = Vec::with_capacity(3);
    let mut corrs = Vec::with_capacity(3);

    for channel in 0..3 {
        let lsb: Vec<u8> = image.pixels().map(|p| p[channel] & 1).collect();
        entropies.push(shannon_entropy(&lsb));
        chis.push(chi_square(&lsb));
        corrs.push(pearson_autocorrelation(&lsb));
    }
    debug_assert_eq!(width * height, image.pixels().len());

    let entropy_avg = mean(&entropies);
    let chi_norm = mean(&chis) / DETECT_CHI_NORM;
    let corr_avg = mean(&corrs.iter().map(|c| c.abs()).collect::<Vec<_>>());

    DETECT_ENTROPY_WEIGHT * entropy_avg
        + DETECT_CHI_WEIGHT * (1.0 / (1.0 + chi_norm))
        + DETECT_CORR_WEIGHT * (1.0 - corr_avg)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Shannon entropy, base-2, of a binary (0/1) distribution.
fn shannon_entropy(bits: &[u8]) -> f64 {
    let total = bits.len() as f64;
    let ones = bits.iter().filter(|&&b| b == 1).count() as f64;
    let p1 = ones / total;
    let p0 = 1.0 - p1;

    [p0, p1]
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

/// Chi-square statistic of the 0/1 counts against an expected uniform split.
fn chi_square(bits: &[u8]) -> f64 {
    let total = bits.len() as f64;
    let ones = bits.iter().filter(|&&b| b == 1).count() as f64;
    let zeros = total - ones;
    let expected = total / 2.0;
    if expected == 0.0 {
        return 0.0;
    }
    (zeros - expected).powi(2) / expected + (ones - expected).powi(2) / expected
}

/// Pearson correlation between `bits[..n-1]` and `bits[1..]`. Zero if
/// fewer than 2 samples, or if either series has zero variance.
fn pearson_autocorrelation(bits: &[u8]) -> f64 {
    if bits.len() < 2 {
        return 0.0;
    }
    let a = &bits[..bits.len() - 1];
    let b = &bits[1..];
    let n = a.len() as f64;

    let mean_a = a.iter().map(|&x| x as f64).sum::<f64>() / n;
    let mean_b = b.iter().map(|&x| x as f64).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x as f64 - mean_a;
        let dy = y as f64 - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a == 0.0 || var_b == 0.0 {
        0.0
    } else {
        cov / (var_a.sqrt() * var_b.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn constant_image_scores_low() {
        let img = RgbImage::from_pixel(64, 64, Rgb([200, 200, 200]));
        let s = score(&img);
        assert_eq!(label_for(s), "Likely clean image");
    }

    #[test]
    fn alternating_lsb_scores_high() {
        let mut img = RgbImage::new(64, 64);
        for (i, p) in img.pixels_mut().enumerate() {
            let bit = (i % 2) as u8;
            *p = Rgb([128 | bit, 128 | bit, 128 | bit]);
        }
        let s = score(&img);
        assert_eq!(label_for(s), "Likely contains hidden data");
    }

    #[test]
    fn score_is_within_unit_interval() {
        let mut img = RgbImage::new(32, 32);
        let mut state = 12345u32;
        for p in img.pixels_mut() {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            let v = (state >> 16) as u8;
            *p = Rgb([v, v.wrapping_add(1), v.wrapping_add(2)]);
        }
        let s = score(&img);
        assert!((0.0..=1.0).contains(&s), "score = {}", s);
    }
}
