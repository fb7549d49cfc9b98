/// Errors produced by object id and shortener operations.
#[derive(Debug, thiserror::Error)]
pub enum OidError {
    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid hex length: expected {expected}, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("invalid hash length: expected {expected} bytes, got {actual}")]
    InvalidHashLength { expected: usize, actual: usize },

    #[error("out of memory while formatting object id")]
    AllocationFailed,

    #[error("shortener is full: capacity of {capacity} ids reached")]
    CapacityExceeded { capacity: usize },

    #[error("invalid minimum prefix length {min_length}: must be between {min} and {max}")]
    InvalidMinLength {
        min_length: usize,
        min: usize,
        max: usize,
    },

    #[error("SHA-1 collision detected")]
    Sha1Collision,
}

impl OidError {
    /// Whether this error reports malformed hex text.
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            Self::InvalidHex { .. } | Self::InvalidHexLength { .. }
        )
    }
}
