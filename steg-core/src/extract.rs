use log::debug;

use crate::consts::HEADER_LEN;
use crate::error::StegResult;
use crate::hash::{sha256, to_hex};
use crate::kdf::{aead_decrypt, derive_key};
use crate::payload::parse_outer_header;

/// Extracts and decrypts the secret hidden in `stego` under `passphrase`.
///
/// Returns `(data, filename, verified, sha256_hex)`: `sha256_hex` is the
/// SHA-256 of the recovered data itself, and `verified` is whether that
/// matches the hash recorded in the inner payload at embed time.
///
/// Two-phase read, matching how the data was framed: the fixed-size outer
/// header is recovered first (enough to learn the ciphertext length), then
/// the full frame is re-read now that its total size is known.
pub fn extract(stego: &[u8], passphrase: &str) -> StegResult<(Vec<u8>, String, bool, String)> {
    if passphrase.is_empty() {
        return Err(crate::error::StegError::KeyRequired);
    }

    let image = crate::image::decode(stego)?;

    let header_bytes = crate::engine::extract_bytes(&image, HEADER_LEN, passphrase)?;
    let header = parse_outer_header(&header_bytes)?;

    let frame_len = HEADER_LEN + header.payload_len;
    debug!("outer frame: {} bytes total", frame_len);

    let frame_bytes = crate::engine::extract_bytes(&image, frame_len, passphrase)?;
    let ciphertext = &frame_bytes[HEADER_LEN..];

    let key = derive_key(passphrase, &header.salt)?;
    let inner_bytes = aead_decrypt(&key, &header.nonce, ciphertext)?;

    let inner = crate::payload::parse_inner(&inner_bytes)?;
    let actual_hash = sha256(&inner.data);
    let verified = actual_hash == inner.data_hash;

    Ok((inner.data, inner.filename, verified, to_hex(&actual_hash)))
}
