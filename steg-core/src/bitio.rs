//! Byte/bit packing used by the outer and inner frame codecs.
//!
//! All multi-byte integers in the wire frames are big-endian; bits within
//! a byte are packed and read MSB-first.

use crate::consts::BITS_PER_BYTE;
use crate::error::{StegError, StegResult};

/// Expands each byte of `data` into 8 bits, MSB-first.
pub fn bits_from_bytes(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * BITS_PER_BYTE);
    for &byte in data {
        for shift in (0..BITS_PER_BYTE).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Packs a bit vector back into bytes, MSB-first.
///
/// Fails with [`StegError::PayloadMalformed`] unless `bits.len()` is a
/// multiple of 8.
pub fn bytes_from_bits(bits: &[u8]) -> StegResult<Vec<u8>> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(StegError::PayloadMalformed(format!(
            "bit count {} is not a multiple of {}",
            bits.len(),
            BITS_PER_BYTE
        )));
    }

    Ok(bits
        .chunks(BITS_PER_BYTE)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, &bit| (byte << 1) | (bit & 1))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let data = b"STG1 hello".to_vec();
        let bits = bits_from_bytes(&data);
        assert_eq!(bits.len(), data.len() * BITS_PER_BYTE);
        let back = bytes_from_bits(&bits).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn msb_first_order() {
        let bits = bits_from_bytes(&[0b1010_0001]);
        assert_eq!(bits, vec![1, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn rejects_non_multiple_of_eight() {
        let err = bytes_from_bits(&[1, 0, 1]).unwrap_err();
        assert!(matches!(err, StegError::PayloadMalformed(_)));
    }
}
