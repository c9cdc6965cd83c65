//! Adaptive, encrypted least-significant-bit steganography.
//!
//! A secret (free text or a named file) is wrapped with a SHA-256 checksum
//! and DEFLATE-compressed, then sealed with AES-256-GCM under a key
//! derived from a passphrase via PBKDF2. The resulting ciphertext is
//! written into a cover image's pixel LSBs: embedding depth per pixel (1
//! or 2 bits) follows that pixel's local edge strength, and pixel
//! traversal order is a permutation keyed by the same passphrase, so
//! recovering the data requires both the stego image and the passphrase.
//! Each payload bit is triple-repeated and majority-vote decoded to
//! tolerate the occasional mis-read LSB.
//!
//! [`embed`] and [`extract`] are the two halves of that round trip;
//! [`detect`] scores an image for LSB-plane statistical anomalies as a
//! heuristic steganalysis check, independent of any passphrase.

/// Bit/byte packing shared by the outer and inner frame codecs.
pub mod bitio;
/// Wire-format and tuning constants.
pub mod consts;
/// Per-pixel embedding depth derived from edge content.
pub mod depth;
/// Heuristic steganalysis scorer.
pub mod detect;
/// Embeds a [`Secret`] into a cover image.
mod embed;
/// Sequential bit-traversal embed/extract engine.
pub mod engine;
/// Error types for embed, extract, and detect operations.
pub mod error;
/// Recovers a secret from a stego image.
mod extract;
/// SHA-256 hashing used for the inner checksum and seed derivation.
pub mod hash;
/// Raster decode/encode.
pub mod image;
/// Passphrase-based key derivation and AES-256-GCM sealing.
pub mod kdf;
/// Fidelity metrics (MSE, PSNR, capacity).
pub mod metrics;
/// Inner and outer wire frame codecs.
pub mod payload;
/// Keyed pixel traversal order.
pub mod permutation;
/// The embeddable secret payload.
pub mod secret;

pub use embed::{capacity_metrics, embed};
pub use extract::extract;
pub use metrics::Metrics;
pub use secret::Secret;

use error::StegResult;

/// Scores `image_bytes` for LSB-plane statistical anomalies, independent
/// of any passphrase, and returns `(score, label)` where `label` is
/// `"Likely contains hidden data"` or `"Likely clean image"`.
pub fn detect(image_bytes: &[u8]) -> StegResult<(f64, &'static str)> {
    let image = image::decode(image_bytes)?;
    let score = detect::score(&image);
    Ok((score, detect::label_for(score)))
}
