//! Adaptive LSB embedding engine: writes/reads bits into/out of pixel
//! LSBs under depth-map and permutation-order constraints, with
//! redundancy-voting.
//!
//! Traversal here is strictly sequential: correctness depends on a fixed
//! order of bit consumption along the keyed permutation.

use crate::consts::{BITS_PER_BYTE, EMBEDDABLE_CHANNELS, REDUNDANCY};
use crate::depth::DepthMap;
use crate::error::{StegError, StegResult};
use crate::image::RgbImage;
use crate::permutation::pixel_order;

/// Total raw bit capacity under the depth map, before redundancy coding:
/// `sum(depth) * 3`.
fn raw_bit_capacity(depth_map: &DepthMap) -> usize {
    depth_map.total_depth() * EMBEDDABLE_CHANNELS
}

/// Effective payload bit capacity after redundancy coding:
/// `sum(depth) * 3 / REDUNDANCY`.
pub fn effective_bit_capacity(depth_map: &DepthMap) -> usize {
    raw_bit_capacity(depth_map) / REDUNDANCY
}

/// Embeds `payload` bytes into `image` under the keyed depth map and
/// permutation, with triple-repetition redundancy coding.
///
/// Mutates `image` in place. Fails with [`StegError::CapacityExceeded`]
/// if the redundancy-expanded payload doesn't fit.
pub fn embed(image: &mut RgbImage, payload: &[u8], passphrase: &str) -> StegResult<()> {
    let depth_map = crate::depth::compute_depth_map(image);
    let capacity = raw_bit_capacity(&depth_map);

    let bits = crate::bitio::bits_from_bytes(payload);
    let encoded: Vec<u8> = bits
        .iter()
        .flat_map(|&bit| std::iter::repeat(bit).take(REDUNDANCY))
        .collect();

    if encoded.len() > capacity {
        return Err(StegError::CapacityExceeded {
            needed: encoded.len(),
            available: capacity,
        });
    }

    let order = pixel_order(
        crate::permutation::seed_from_passphrase(passphrase),
        depth_map.width * depth_map.height,
    );

    let mut bit_idx = 0usize;
    'outer: for &pixel_index in &order {
        let depth = depth_map.depth_at(pixel_index) as usize;
        if depth == 0 {
            // Reserved for future edge-skipping depth policies; the
            // current threshold rule never emits 0, but the engine must
            // tolerate it.
            continue;
        }

        let x = (pixel_index % depth_map.width) as u32;
        let y = (pixel_index / depth_map.width) as u32;
        let pixel = image.get_pixel_mut(x, y);

        for channel in 0..EMBEDDABLE_CHANNELS {
            if bit_idx >= encoded.len() {
                break 'outer;
            }
            let take = depth.min(encoded.len() - bit_idx);
            let mut value: u8 = 0;
            for &bit in &encoded[bit_idx..bit_idx + take] {
                value = (value << 1) | bit;
            }
            bit_idx += take;

            let mask: u8 = !(((1u16 << take) - 1) as u8);
            pixel[channel] = (pixel[channel] & mask) | value;
        }
    }

    Ok(())
}

/// Extracts `total_bits` post-redundancy-decode payload bits from
/// `image`, recomputing the depth map and permutation fresh from the
/// same `passphrase` used to embed.
///
/// Does not assume any state carried from a prior extract call. The
/// caller is expected to re-invoke this once for the header and again
/// for the full frame.
pub fn extract(image: &RgbImage, total_bits: usize, passphrase: &str) -> Vec<u8> {
    let depth_map = crate::depth::compute_depth_map(image);
    let raw_needed = total_bits * REDUNDANCY;

    let order = pixel_order(
        crate::permutation::seed_from_passphrase(passphrase),
        depth_map.width * depth_map.height,
    );

    let mut raw_bits = Vec::with_capacity(raw_needed);
    'outer: for &pixel_index in &order {
        let depth = depth_map.depth_at(pixel_index) as usize;
        if depth == 0 {
            continue;
        }

        let x = (pixel_index % depth_map.width) as u32;
        let y = (pixel_index / depth_map.width) as u32;
        let pixel = image.get_pixel(x, y);

        for channel in 0..EMBEDDABLE_CHANNELS {
            if raw_bits.len() >= raw_needed {
                break 'outer;
            }
            let take = depth.min(raw_needed - raw_bits.len());
            let mask: u8 = ((1u16 << take) - 1) as u8;
            let value = pixel[channel] & mask;
            for shift in (0..take).rev() {
                raw_bits.push((value >> shift) & 1);
            }
        }
    }

    decode_redundancy(&raw_bits)
}

/// Folds raw bits into rows of [`REDUNDANCY`] and emits the majority vote
/// (>= 2 of 3 ones) for each row.
fn decode_redundancy(raw_bits: &[u8]) -> Vec<u8> {
    let usable_len = raw_bits.len() - (raw_bits.len() % REDUNDANCY);
    raw_bits[..usable_len]
        .chunks(REDUNDANCY)
        .map(|row| {
            let ones: usize = row.iter().map(|&b| b as usize).sum();
            if ones * 2 >= REDUNDANCY {
                1
            } else {
                0
            }
        })
        .collect()
}

/// Extracts `total_bits` worth of payload bits and packs them into bytes.
/// `total_bits` must be a multiple of [`BITS_PER_BYTE`].
///
/// Fails with [`StegError::PayloadMalformed`] if `image` doesn't have
/// enough depth-map capacity to hold `total_bytes`.
pub fn extract_bytes(image: &RgbImage, total_bytes: usize, passphrase: &str) -> StegResult<Vec<u8>> {
    let total_bits = total_bytes * BITS_PER_BYTE;
    let bits = extract(image, total_bits, passphrase);
    if bits.len() < total_bits {
        return Err(StegError::PayloadMalformed(format!(
            "cover image has only {} recoverable bits, {} requested",
            bits.len(),
            total_bits
        )));
    }
    crate::bitio::bytes_from_bits(&bits)
}
