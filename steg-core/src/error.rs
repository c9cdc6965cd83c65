use thiserror::Error;

/// Every way an embed, extract, or detect call can fail.
///
/// `AuthFailure` and `BadMagic` are kept as distinct variants here; an
/// outer-facing layer (out of scope for this crate) is expected to
/// conflate them in user-visible messaging so as not to leak whether a
/// valid stego payload exists under a different key.
#[derive(Debug, Error)]
pub enum StegError {
    /// The passphrase supplied to embed/extract was empty.
    #[error("a non-empty passphrase is required")]
    KeyRequired,
    /// Neither a cover image nor a secret payload was supplied.
    #[error("cover image and secret payload are both required")]
    InputMissing,
    /// The encoded, redundancy-expanded payload does not fit the image's depth-map capacity.
    #[error(
        "payload too large for this cover image: {needed} bits required, {available} bits available"
    )]
    CapacityExceeded { needed: usize, available: usize },
    /// The secret's filename is longer than 65535 bytes.
    #[error("filename exceeds maximum length of 65535 bytes: got {0}")]
    FilenameTooLong(usize),
    /// The extracted outer frame's magic did not match `STG1`.
    #[error("no hidden data found, or wrong passphrase")]
    BadMagic,
    /// AES-256-GCM tag verification failed on extract.
    #[error("authentication failed: wrong passphrase or corrupted image")]
    AuthFailure,
    /// The inner payload failed a boundary or length-consistency check.
    #[error("malformed inner payload: {0}")]
    PayloadMalformed(String),
    /// DEFLATE decompression of the inner payload's data segment failed.
    #[error("failed to decompress payload: {0}")]
    DecompressError(String),
    /// The cover or stego bytes were not a decodable raster image.
    #[error("could not decode cover image: {0}")]
    ImageDecodeError(#[from] image::ImageError),
    /// A checked arithmetic operation would have overflowed.
    #[error("numeric calculation overflow: {0}")]
    CalculationOverflow(String),
    /// Underlying I/O error (image encode/decode plumbing).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, StegError>`.
pub type StegResult<T> = Result<T, StegError>;
