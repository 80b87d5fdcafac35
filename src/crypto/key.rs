//! RSA public key as used by the login page's script.

use std::fmt;

use num_bigint_dig::BigUint;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use crate::error::{JsRsaError, Result};

/// Immutable RSA public key.
///
/// Unlike [`RsaPublicKey`], any modulus and exponent are accepted. A key with
/// a zero (or absent) modulus or a zero exponent is *incapable*: it can be
/// built and queried, but [`PublicKey::do_public`] returns zero for it.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    modulus: BigUint,
    exponent: BigUint,
    capable: bool,
}

impl PublicKey {
    /// Create a key from an already parsed modulus and exponent.
    pub fn new(modulus: BigUint, exponent: impl Into<BigUint>) -> Self {
        let exponent = exponent.into();
        let capable = !is_zero(&modulus) && !is_zero(&exponent);
        Self {
            modulus,
            exponent,
            capable,
        }
    }

    /// Create a key from base-16 modulus and exponent strings.
    ///
    /// An empty string stands for an absent component and yields an
    /// incapable key rather than an error.
    pub fn from_hex(modulus: &str, exponent: &str) -> Result<Self> {
        let modulus = parse_hex("modulus", modulus)?;
        let exponent = parse_hex("exponent", exponent)?;
        Ok(Self::new(modulus, exponent))
    }

    /// Whether this key can actually encrypt.
    pub fn is_capable(&self) -> bool {
        self.capable
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    /// Number of bits in the modulus.
    pub fn bits(&self) -> usize {
        self.modulus.bits()
    }

    /// Minimum number of bytes needed to hold the modulus.
    pub fn block_size(&self) -> usize {
        (self.bits() + 7) / 8
    }

    /// Raw RSA public operation `x^e mod n`.
    ///
    /// Returns zero without exponentiating when the key is incapable, so a
    /// zero result is ambiguous on its own.
    pub fn do_public(&self, x: &BigUint) -> BigUint {
        if self.capable {
            x.modpow(&self.exponent, &self.modulus)
        } else {
            BigUint::from(0u32)
        }
    }
}

impl From<&RsaPublicKey> for PublicKey {
    fn from(key: &RsaPublicKey) -> Self {
        Self::new(key.n().clone(), key.e().clone())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("bits", &self.bits())
            .field("exponent", &self.exponent.to_str_radix(16))
            .field("capable", &self.capable)
            .finish()
    }
}

fn is_zero(n: &BigUint) -> bool {
    n.bits() == 0
}

fn parse_hex(component: &str, s: &str) -> Result<BigUint> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(BigUint::from(0u32));
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(JsRsaError::InvalidKey(format!(
            "{} is not a hex string: {:?}",
            component,
            s.chars().take(32).collect::<String>()
        )));
    }
    BigUint::parse_bytes(s.as_bytes(), 16)
        .ok_or_else(|| JsRsaError::InvalidKey(format!("failed to parse {}", component)))
}
