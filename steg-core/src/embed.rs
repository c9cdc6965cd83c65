use log::debug;
use rand::RngCore;

use crate::consts::{BITS_PER_BYTE, NONCE_LEN, SALT_LEN};
use crate::engine::effective_bit_capacity;
use crate::error::{StegError, StegResult};
use crate::kdf::{aead_encrypt, derive_key};
use crate::metrics::{compute_metrics, Metrics};
use crate::payload::{build_inner, OuterFrame};
use crate::secret::Secret;

/// Embeds `secret` into `cover` under `passphrase`, returning the encoded
/// PNG bytes and the fidelity metrics for the embed.
///
/// Data flow: `secret` is wrapped into the inner payload (hash, filename,
/// DEFLATE), encrypted under a freshly drawn salt and nonce into the outer
/// frame, and the frame's bits are written into `cover`'s pixel LSBs under
/// its depth map and a permutation keyed by `passphrase`.
pub fn embed(cover: &[u8], passphrase: &str, secret: Secret) -> StegResult<(Vec<u8>, Metrics)> {
    if passphrase.is_empty() {
        return Err(StegError::KeyRequired);
    }

    let mut image = crate::image::decode(cover)?;
    let original = image.clone();

    let inner = build_inner(secret.data(), secret.filename())?;

    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    let mut rng = rand::thread_rng();
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut nonce);

    let key = derive_key(passphrase, &salt)?;
    let ciphertext = aead_encrypt(&key, &nonce, &inner);

    debug!(
        "inner payload {} bytes, ciphertext {} bytes",
        inner.len(),
        ciphertext.len()
    );

    let frame = OuterFrame {
        salt,
        nonce,
        ciphertext,
    };
    let frame_bytes = frame.to_bytes()?;

    let depth_map = crate::depth::compute_depth_map(&image);
    let capacity = effective_bit_capacity(&depth_map) / BITS_PER_BYTE;
    if frame_bytes.len() > capacity {
        return Err(StegError::CapacityExceeded {
            needed: frame_bytes.len() * BITS_PER_BYTE,
            available: capacity * BITS_PER_BYTE,
        });
    }

    crate::engine::embed(&mut image, &frame_bytes, passphrase)?;

    let used_bits = frame_bytes.len() * BITS_PER_BYTE;
    let metrics = compute_metrics(&original, &image, used_bits);
    let output = crate::image::encode_png(&image)?;

    Ok((output, metrics))
}

/// Fidelity metrics for `cover` as-is, with zero bits "used".
pub fn capacity_metrics(cover: &[u8]) -> StegResult<Metrics> {
    let image = crate::image::decode(cover)?;
    Ok(compute_metrics(&image, &image, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn noise_png(width: u32, height: u32, seed: u8) -> Vec<u8> {
        let mut img = crate::image::RgbImage::new(width, height);
        let mut state = seed as u32 | 1;
        for p in img.pixels_mut() {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            let v = (state >> 16) as u8;
            *p = Rgb([v, v.wrapping_add(5), v.wrapping_add(11)]);
        }
        crate::image::encode_png(&img).unwrap()
    }

    #[test]
    fn empty_passphrase_rejected() {
        let cover = noise_png(16, 16, 1);
        let secret = Secret::Text("hi".into());
        let err = embed(&cover, "", secret).unwrap_err();
        assert!(matches!(err, StegError::KeyRequired));
    }

    #[test]
    fn embed_reports_plausible_metrics() {
        let cover = noise_png(64, 64, 2);
        let secret = Secret::Text("hello world".into());
        let (output, metrics) = embed(&cover, "hunter2", secret).unwrap();
        assert!(!output.is_empty());
        assert!(metrics.used_bytes > 0);
        assert!(metrics.capacity_bytes >= metrics.used_bytes);
    }

    #[test]
    fn oversized_secret_is_rejected_up_front() {
        let cover = noise_png(8, 8, 3);
        let secret = Secret::File(vec![0xAB; 100_000], "big.bin".into());
        let err = embed(&cover, "k", secret).unwrap_err();
        assert!(matches!(err, StegError::CapacityExceeded { .. }));
    }
}
