//! Cryptography module for the login form's `encpw` field.
//!
//! The login page encrypts credentials with a small big-number RSA script.
//! This module reproduces its output exactly: PKCS#1 v1.5 type 2 padding
//! with bytes drawn one at a time, raw `m^e mod n`, and lowercase hex
//! left-padded to twice the modulus byte length.

mod key;
mod padding;
mod rsa_enc;

pub use key::PublicKey;
pub use padding::{pkcs1_pad2, pkcs1_unpad2, MAX_ZERO_DRAWS, PADDING_OVERHEAD};
pub use rsa_enc::{encrypt_rsa, encrypt_with, hex_width, EncryptOutcome};

/// Big integer type used for key components, shared with the `rsa` crate.
pub use num_bigint_dig::BigUint;
