//! The embeddable secret payload, as a tagged sum type.

/// The data to hide: either free-form UTF-8 text, or a named file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secret {
    /// Plain text; embedded with the filename `secret.txt`.
    Text(String),
    /// Arbitrary bytes with their original filename.
    File(Vec<u8>, String),
}

impl Secret {
    /// The raw bytes to wrap and encrypt.
    pub fn data(&self) -> &[u8] {
        match self {
            Secret::Text(text) => text.as_bytes(),
            Secret::File(bytes, _) => bytes,
        }
    }

    /// The filename recorded in the inner payload.
    pub fn filename(&self) -> &str {
        match self {
            Secret::Text(_) => "secret.txt",
            Secret::File(_, name) => name,
        }
    }
}
