//! Plaintext assembly for the encrypted password field.

use std::fmt;

use crate::error::{JsRsaError, Result};

/// Account credentials.
#[derive(Clone)]
pub struct Credentials {
    pub id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
        }
    }

    /// Reject a blank id or password before anything goes over the wire.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(JsRsaError::MissingCredential { field: "id" });
        }
        if self.password.is_empty() {
            return Err(JsRsaError::MissingCredential { field: "password" });
        }
        Ok(())
    }

    /// Build the plaintext for `session_key` from these credentials.
    pub fn encrypt_target(&self, session_key: &str) -> Result<Vec<u8>> {
        encrypt_target(session_key, &self.id, &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Build the RSA plaintext: each field prefixed by its length as one byte.
///
/// ```text
/// len(session_key) session_key len(id) id len(password) password
/// ```
///
/// Lengths are UTF-8 byte counts.
pub fn encrypt_target(session_key: &str, id: &str, password: &str) -> Result<Vec<u8>> {
    let fields = [
        ("session_key", session_key),
        ("id", id),
        ("password", password),
    ];

    let total: usize = fields.iter().map(|(_, v)| v.len() + 1).sum();
    let mut out = Vec::with_capacity(total);

    for (field, value) in fields {
        let len = u8::try_from(value.len()).map_err(|_| JsRsaError::FieldTooLong {
            field,
            len: value.len(),
        })?;
        out.push(len);
        out.extend_from_slice(value.as_bytes());
    }

    Ok(out)
}
