//! Inner envelope (hash, filename, compressed data) and outer frame
//! (magic, length, salt, nonce, ciphertext) framing.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::consts::{
    DATA_HASH_LEN, HEADER_LEN, MAGIC, MAGIC_LEN, NAME_LEN_SIZE, NONCE_LEN, PAYLOAD_LEN_SIZE,
    SALT_LEN,
};
use crate::error::{StegError, StegResult};
use crate::hash::sha256;

/// Builds the inner payload: `data_hash(32) || name_len(2) || name || DEFLATE(data)`.
///
/// Fails with [`StegError::FilenameTooLong`] when `filename` exceeds 65535 bytes.
pub fn build_inner(data: &[u8], filename: &str) -> StegResult<Vec<u8>> {
    let name_bytes = filename.as_bytes();
    let name_len: u16 = name_bytes
        .len()
        .try_into()
        .map_err(|_| StegError::FilenameTooLong(name_bytes.len()))?;

    let data_hash = sha256(data);
    let compressed = deflate(data)?;

    let mut inner = Vec::with_capacity(DATA_HASH_LEN + NAME_LEN_SIZE + name_bytes.len() + compressed.len());
    inner.extend_from_slice(&data_hash);
    inner.extend_from_slice(&name_len.to_be_bytes());
    inner.extend_from_slice(name_bytes);
    inner.extend_from_slice(&compressed);
    Ok(inner)
}

/// Parsed inner payload: `(data_hash, filename, decompressed data)`.
pub struct InnerPayload {
    pub data_hash: [u8; DATA_HASH_LEN],
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parses and decompresses an inner payload produced by [`build_inner`].
///
/// Fails with [`StegError::PayloadMalformed`] on any boundary violation, or
/// [`StegError::DecompressError`] on invalid DEFLATE data.
pub fn parse_inner(payload: &[u8]) -> StegResult<InnerPayload> {
    if payload.len() < DATA_HASH_LEN + NAME_LEN_SIZE {
        return Err(StegError::PayloadMalformed(format!(
            "inner payload too small: {} bytes, need at least {}",
            payload.len(),
            DATA_HASH_LEN + NAME_LEN_SIZE
        )));
    }

    let mut data_hash = [0u8; DATA_HASH_LEN];
    data_hash.copy_from_slice(&payload[..DATA_HASH_LEN]);

    let name_len = u16::from_be_bytes([payload[DATA_HASH_LEN], payload[DATA_HASH_LEN + 1]]) as usize;
    let name_start = DATA_HASH_LEN + NAME_LEN_SIZE;
    let name_end = name_start + name_len;
    if name_end > payload.len() {
        return Err(StegError::PayloadMalformed(format!(
            "name_len {} overruns payload of {} bytes",
            name_len,
            payload.len()
        )));
    }

    let filename = String::from_utf8_lossy(&payload[name_start..name_end]).into_owned();
    let data = inflate(&payload[name_end..])?;

    Ok(InnerPayload {
        data_hash,
        filename,
        data,
    })
}

/// The outer frame, ready to be bit-packed into the cover image.
pub struct OuterFrame {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
}

impl OuterFrame {
    /// Serializes `magic || payload_len || salt || nonce || ciphertext`.
    ///
    /// Fails with [`StegError::CalculationOverflow`] if the ciphertext is
    /// larger than the 32-bit `payload_len` field can record.
    pub fn to_bytes(&self) -> StegResult<Vec<u8>> {
        let payload_len: u32 = self.ciphertext.len().try_into().map_err(|_| {
            StegError::CalculationOverflow(format!(
                "ciphertext length {} exceeds the 32-bit payload_len field",
                self.ciphertext.len()
            ))
        })?;

        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&payload_len.to_be_bytes());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        Ok(out)
    }
}

/// Header fields read back out of a two-phase extract, before the
/// ciphertext itself has necessarily been fully recovered.
pub struct OuterHeader {
    pub payload_len: usize,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
}

/// Parses the fixed 36-byte outer header. `header` must be exactly [`HEADER_LEN`] bytes.
///
/// Fails with [`StegError::BadMagic`] if the magic doesn't match `STG1`.
pub fn parse_outer_header(header: &[u8]) -> StegResult<OuterHeader> {
    debug_assert_eq!(header.len(), HEADER_LEN);

    if header[..MAGIC_LEN] != MAGIC {
        return Err(StegError::BadMagic);
    }

    let len_start = MAGIC_LEN;
    let payload_len = u32::from_be_bytes([
        header[len_start],
        header[len_start + 1],
        header[len_start + 2],
        header[len_start + 3],
    ]) as usize;

    let salt_start = len_start + PAYLOAD_LEN_SIZE;
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&header[salt_start..salt_start + SALT_LEN]);

    let nonce_start = salt_start + SALT_LEN;
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&header[nonce_start..nonce_start + NONCE_LEN]);

    Ok(OuterHeader {
        payload_len,
        salt,
        nonce,
    })
}

fn deflate(data: &[u8]) -> StegResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn inflate(compressed: &[u8]) -> StegResult<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(compressed);
    let mut data = Vec::new();
    decoder
        .read_to_end(&mut data)
        .map_err(|e| StegError::DecompressError(e.to_string()))?;
    Ok(data)
}
