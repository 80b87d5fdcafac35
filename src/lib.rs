//! # naver-jsrsa
//!
//! Credential encryption for the Naver login form, byte-for-byte compatible
//! with the page's own big-number RSA script, plus a small async login client.
//!
//! ## Features
//!
//! - **Exact output**: PKCS#1 v1.5 type 2 padding built the way the page
//!   builds it, raw `m^e mod n`, and lowercase hex left-padded to twice the
//!   modulus byte length. The server silently rejects anything else.
//! - **Soft failures are values**: an unusable key or a zero result yields
//!   [`EncryptOutcome::Incapable`] / [`EncryptOutcome::ZeroCollision`], never
//!   an error. Oversized plaintext is a hard [`JsRsaError::MessageTooLarge`].
//! - **Injectable randomness**: [`crypto::encrypt_with`] takes any
//!   `RngCore + CryptoRng`, so tests can script the padding bytes.
//! - **Login client**: [`NaverLogin`] fetches the session key and RSA
//!   parameters, encrypts, submits the form and returns the session cookies.
//!
//! ## Quick Start
//!
//! ```ignore
//! use naver_jsrsa::{Credentials, PublicKey};
//!
//! let key = PublicKey::from_hex(&modulus_hex, "10001")?;
//! let target = Credentials::new("id", "password").encrypt_target(&session_key)?;
//!
//! match key.encrypt(&target)? {
//!     Some(encpw) => println!("encpw: {}", encpw),
//!     None => println!("no ciphertext, retry"),
//! }
//! ```
//!
//! ## Logging In
//!
//! ```ignore
//! use naver_jsrsa::{Credentials, NaverLogin};
//!
//! let client = NaverLogin::builder()
//!     .proxy("socks5://127.0.0.1:1080")
//!     .build()?;
//! let session = client.login(&Credentials::new("id", "password")).await?;
//! ```

pub mod client;
pub mod credentials;
pub mod crypto;
pub mod error;
pub mod models;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use client::{Compressor, NaverLogin, NaverLoginBuilder};
pub use credentials::Credentials;
pub use crypto::{EncryptOutcome, PublicKey};
pub use error::{JsRsaError, Result};
pub use models::{Bvsd, BvsdPayload, LoginSession, SessionInfo};
