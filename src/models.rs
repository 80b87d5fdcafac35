//! Data models for the Naver login exchange.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::credentials::Credentials;
use crate::crypto::PublicKey;
use crate::error::{JsRsaError, Result};

/// Session parameters served by `/dynamicKey/{key}`.
///
/// The body is a single comma-separated line:
/// `sessionKey,keyName,modulusHex,exponentHex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_key: String,
    /// Sent back verbatim as `encnm`
    pub key_name: String,
    pub modulus: String,
    pub exponent: String,
}

impl SessionInfo {
    /// RSA key for this session.
    pub fn public_key(&self) -> Result<PublicKey> {
        PublicKey::from_hex(&self.modulus, &self.exponent)
    }
}

impl FromStr for SessionInfo {
    type Err = JsRsaError;

    fn from_str(body: &str) -> Result<Self> {
        let parts: Vec<&str> = body.trim().split(',').map(str::trim).collect();
        if parts.len() < 4 {
            return Err(JsRsaError::InvalidResponse(format!(
                "session info has {} fields, expected 4",
                parts.len()
            )));
        }

        Ok(Self {
            session_key: parts[0].to_string(),
            key_name: parts[1].to_string(),
            modulus: parts[2].to_string(),
            exponent: parts[3].to_string(),
        })
    }
}

/// Version tag the login page stamps on its behaviour payload.
const BVSD_VERSION: &str = "1.3.4";

/// Behaviour payload carried, compressed, in [`Bvsd::enc_data`].
///
/// Mirrors what the login page records: the id typed into the id field,
/// the password field, and the browser's user agent.
#[derive(Debug, Clone, Serialize)]
pub struct BvsdPayload {
    /// Same UUID as the enclosing envelope
    pub a: String,
    pub b: &'static str,
    pub d: Vec<FieldEvent>,
    pub h: &'static str,
    pub i: BrowserInfo,
}

/// One form field in [`BvsdPayload`].
#[derive(Debug, Clone, Serialize)]
pub struct FieldEvent {
    pub i: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<KeyLog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    pub e: bool,
    pub f: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyLog {
    pub a: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowserInfo {
    pub a: String,
}

impl BvsdPayload {
    pub fn new(uuid: impl Into<String>, credentials: &Credentials, user_agent: &str) -> Self {
        let id = &credentials.id;
        Self {
            a: uuid.into(),
            b: BVSD_VERSION,
            d: vec![
                FieldEvent {
                    i: "id".to_string(),
                    b: Some(KeyLog {
                        a: vec![format!("0,{}", id)],
                    }),
                    d: Some(id.clone()),
                    e: false,
                    f: false,
                },
                FieldEvent {
                    i: format!("{}@", credentials.password),
                    b: None,
                    d: None,
                    e: true,
                    f: false,
                },
            ],
            h: "1f",
            i: BrowserInfo {
                a: user_agent.to_string(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Anti-automation envelope sent as the `bvsd` form field.
///
/// `enc_data` is the compressed JSON of a [`BvsdPayload`] built under the
/// same UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bvsd {
    pub uuid: String,
    #[serde(rename = "encData")]
    pub enc_data: String,
}

impl Bvsd {
    /// Wrap a compressed payload under a fresh v4 UUID.
    pub fn new(enc_data: impl Into<String>) -> Self {
        Self::with_uuid(uuid::Uuid::new_v4().to_string(), enc_data)
    }

    /// Wrap a compressed payload under an existing UUID.
    pub fn with_uuid(uuid: impl Into<String>, enc_data: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            enc_data: enc_data.into(),
        }
    }

    /// Build the payload for `credentials`, compress it and wrap it, all
    /// under one fresh UUID.
    ///
    /// `compress` turns the payload JSON into the page's URI-safe
    /// compressed form.
    pub fn build<F>(credentials: &Credentials, user_agent: &str, compress: F) -> Result<Self>
    where
        F: FnOnce(&str) -> String,
    {
        let uuid = uuid::Uuid::new_v4().to_string();
        let payload = BvsdPayload::new(uuid.clone(), credentials, user_agent).to_json()?;
        Ok(Self::with_uuid(uuid, compress(&payload)))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginSession {
    /// Cookies set by the login response, including `NID_AUT` and `NID_SES`
    pub cookies: HashMap<String, String>,
    pub body: String,
}

impl LoginSession {
    /// `Cookie` header value for follow-up requests.
    pub fn cookie_header(&self) -> String {
        let mut pairs: Vec<_> = self
            .cookies
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        pairs.sort();
        pairs.join("; ")
    }
}
