/// The number of bits in a byte.
pub const BITS_PER_BYTE: usize = 8;
/// The number of color channels in an image that can be used for embedding (R, G, B).
pub const EMBEDDABLE_CHANNELS: usize = 3;

/// Magic bytes that open every outer frame produced by [`crate::embed`].
pub const MAGIC: [u8; 4] = *b"STG1";
/// Size of the magic field, in bytes.
pub const MAGIC_LEN: usize = 4;
/// Size of the big-endian ciphertext-length field, in bytes.
pub const PAYLOAD_LEN_SIZE: usize = 4;
/// Size of the PBKDF2 salt, in bytes.
pub const SALT_LEN: usize = 16;
/// Size of the AES-GCM nonce, in bytes.
pub const NONCE_LEN: usize = 12;
/// Size of the AES-GCM authentication tag, in bytes.
pub const TAG_LEN: usize = 16;
/// Total size of the fixed outer frame header (everything before the ciphertext).
pub const HEADER_LEN: usize = MAGIC_LEN + PAYLOAD_LEN_SIZE + SALT_LEN + NONCE_LEN;

/// Size of the SHA-256 digest stored in the inner payload.
pub const DATA_HASH_LEN: usize = 32;
/// Size of the big-endian filename-length field in the inner payload.
pub const NAME_LEN_SIZE: usize = 2;
/// Minimum valid size of a parsed inner payload (`data_hash` + `name_len`, empty name and data).
pub const INNER_MIN_LEN: usize = DATA_HASH_LEN + NAME_LEN_SIZE;

/// PBKDF2-HMAC-SHA256 iteration count used to derive the AEAD key from the passphrase.
pub const PBKDF2_ITERATIONS: u32 = 200_000;
/// Size of the derived AES-256 key, in bytes.
pub const KEY_LEN: usize = 32;

/// Each payload bit is repeated this many times consecutively before embedding.
pub const REDUNDANCY: usize = 3;

/// Normalized-Laplacian threshold above which a pixel is assigned embedding depth 2.
pub const DEPTH_THRESHOLD: f64 = 0.25;
/// Small constant added to the maximum edge magnitude to avoid dividing by zero.
pub const DEPTH_EPSILON: f64 = 1e-6;

/// Weight of the average per-channel LSB-plane entropy term in the detector score.
pub const DETECT_ENTROPY_WEIGHT: f64 = 0.55;
/// Weight of the normalized chi-square term in the detector score.
pub const DETECT_CHI_WEIGHT: f64 = 0.25;
/// Weight of the successive-bit correlation term in the detector score.
pub const DETECT_CORR_WEIGHT: f64 = 0.20;
/// Divisor used to normalize the raw chi-square statistic before weighting.
pub const DETECT_CHI_NORM: f64 = 5.0;
/// Score at or above which an image is labeled as likely containing hidden data.
pub const DETECT_THRESHOLD: f64 = 0.62;
