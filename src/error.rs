//! Error types for the naver-jsrsa library.

use thiserror::Error;

/// Main error type for the naver-jsrsa library.
///
/// Only hard failures live here. A key that cannot encrypt, or an
/// exponentiation that lands on zero, is reported through
/// [`EncryptOutcome`](crate::crypto::EncryptOutcome) instead.
#[derive(Error, Debug)]
pub enum JsRsaError {
    /// Plaintext does not fit in a single PKCS#1 v1.5 block
    #[error("RSA Encrypt: message is too big ({len} bytes, block size {block_size})")]
    MessageTooLarge { len: usize, block_size: usize },

    /// The random source kept returning zero bytes
    #[error("Random source stalled: {draws} consecutive zero bytes")]
    RandomSourceStalled { draws: usize },

    /// Modulus or exponent could not be parsed
    #[error("Invalid RSA public key: {0}")]
    InvalidKey(String),

    /// A credential field does not fit its one-byte length prefix
    #[error("Field `{field}` is {len} bytes, at most 255 are allowed")]
    FieldTooLong { field: &'static str, len: usize },

    /// A required credential field is blank
    #[error("Missing credential: `{field}` is empty")]
    MissingCredential { field: &'static str },

    /// Every encryption attempt ended in the soft-failure channel
    #[error("Encryption produced no ciphertext after {attempts} attempts")]
    EncryptionUnavailable { attempts: u32 },

    /// Login response did not carry the session cookies
    #[error("Login rejected: missing cookie {missing}")]
    LoginRejected { missing: &'static str },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] rquest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Invalid response from server
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for naver-jsrsa operations.
pub type Result<T> = std::result::Result<T, JsRsaError>;
