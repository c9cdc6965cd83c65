//! SHA-256 is the wire-fixed hash algorithm for both the inner payload's
//! data checksum and the passphrase-to-seed derivation. Earlier drafts of
//! this codec made the digest algorithm selectable per payload
//! (BLAKE3/SHA-256/SHA-512/SHA-1); that agility has no remaining call
//! site once the frame format fixes one digest, so it isn't carried here.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Lowercase hex encoding of a digest, for user-facing display.
pub fn to_hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector_empty_string() {
        let digest = sha256(b"");
        let expected: [u8; 32] = [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
            0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
            0x78, 0x52, 0xb8, 0x55,
        ];
        assert_eq!(digest, expected);
    }

    #[test]
    fn deterministic() {
        assert_eq!(sha256(b"hunter2"), sha256(b"hunter2"));
        assert_ne!(sha256(b"hunter2"), sha256(b"hunter3"));
    }

    #[test]
    fn hex_encodes_lowercase() {
        assert_eq!(to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }
}
