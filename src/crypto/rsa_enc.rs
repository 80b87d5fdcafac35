//! RSA encryption compatible with the login page's big-number script.

use num_bigint_dig::BigUint;
use rand::{CryptoRng, RngCore};

use super::key::PublicKey;
use super::padding::pkcs1_pad2;
use crate::error::Result;

/// Outcome of an encryption that did not hit a hard error.
///
/// `Incapable` and `ZeroCollision` are both "no ciphertext"; they are kept
/// apart only for diagnostics. Retrying with fresh padding is always safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptOutcome {
    /// Lowercase hex, exactly twice the modulus byte length
    Ciphertext(String),
    /// Key has a zero or absent modulus, or a zero exponent
    Incapable,
    /// Padded block or exponentiation result was exactly zero
    ZeroCollision,
}

impl EncryptOutcome {
    /// Collapse both soft failures into `None`.
    pub fn into_ciphertext(self) -> Option<String> {
        match self {
            EncryptOutcome::Ciphertext(hex) => Some(hex),
            EncryptOutcome::Incapable | EncryptOutcome::ZeroCollision => None,
        }
    }

    pub fn is_ciphertext(&self) -> bool {
        matches!(self, EncryptOutcome::Ciphertext(_))
    }
}

/// Encrypt `data` under `key`, drawing padding bytes from `rng`.
///
/// # Errors
/// `MessageTooLarge` when `data` plus 11 bytes of padding overhead does not
/// fit the key's block size.
pub fn encrypt_with<R>(key: &PublicKey, data: &[u8], rng: &mut R) -> Result<EncryptOutcome>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let block = pkcs1_pad2(data, key.block_size(), rng)?;

    let m = BigUint::from_bytes_be(&block);
    if m.bits() == 0 {
        tracing::debug!("padded block is zero, no ciphertext");
        return Ok(EncryptOutcome::ZeroCollision);
    }

    let c = key.do_public(&m);
    if c.bits() == 0 {
        return Ok(if key.is_capable() {
            tracing::debug!("RSA result is zero, no ciphertext");
            EncryptOutcome::ZeroCollision
        } else {
            tracing::debug!(?key, "key cannot encrypt, no ciphertext");
            EncryptOutcome::Incapable
        });
    }

    Ok(EncryptOutcome::Ciphertext(to_padded_hex(&c, hex_width(key))))
}

/// Number of hex digits in a ciphertext for `key`.
///
/// Whole bytes of the modulus, two digits each.
pub fn hex_width(key: &PublicKey) -> usize {
    ((key.bits() + 7) >> 3) << 1
}

fn to_padded_hex(value: &BigUint, width: usize) -> String {
    let digits = value.to_str_radix(16);
    format!("{:0>width$}", digits, width = width)
}

impl PublicKey {
    /// Encrypt with the thread-local CSPRNG.
    ///
    /// Returns `Ok(None)` on a soft failure.
    pub fn encrypt(&self, data: &[u8]) -> Result<Option<String>> {
        let mut rng = rand::thread_rng();
        Ok(encrypt_with(self, data, &mut rng)?.into_ciphertext())
    }
}

/// Encrypt a message under a key given as hex strings.
///
/// # Arguments
/// * `modulus_hex` - RSA modulus, base 16
/// * `exponent_hex` - RSA public exponent, base 16
/// * `message` - Bytes to encrypt
///
/// # Returns
/// Hex-encoded ciphertext, or `None` on a soft failure
pub fn encrypt_rsa(modulus_hex: &str, exponent_hex: &str, message: &[u8]) -> Result<Option<String>> {
    PublicKey::from_hex(modulus_hex, exponent_hex)?.encrypt(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::padding::tests::ScriptedRng;
    use crate::error::JsRsaError;

    /// 1024-bit test modulus
    const MODULUS_HEX: &str = "00C1E3934D1614465B33053E7F48EE4EC87B14B95EF88947713D25EECBFF7E74C7977D02DC1D9451F79DD5D1C10C29ACB6A9B4D6FB7D0A0279B6719E1772565F09AF627715919221AEF91899CAE08C0D686D748B20A3603BE2318CA6BC2B59706592A9219D0BF05C9F65023A21D2330807252AE0066D59CEEFA5F2748EA80BAB81";

    fn ciphertext(outcome: EncryptOutcome) -> String {
        match outcome {
            EncryptOutcome::Ciphertext(hex) => hex,
            other => panic!("expected ciphertext, got {:?}", other),
        }
    }

    #[test]
    fn test_rsa_encryption_output_length() {
        let encrypted = encrypt_rsa(MODULUS_HEX, "10001", b"56e508d726649e0d")
            .unwrap()
            .unwrap();

        // RSA-1024 produces 128 bytes = 256 hex chars
        assert_eq!(encrypted.len(), 256);
    }

    #[test]
    fn test_rsa_encryption_hex_output() {
        let encrypted = encrypt_rsa(MODULUS_HEX, "10001", b"test").unwrap().unwrap();

        assert!(encrypted
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_rsa_encryption_is_random() {
        let key = PublicKey::from_hex(MODULUS_HEX, "10001").unwrap();

        let enc1 = key.encrypt(b"testmessage12345").unwrap().unwrap();
        let enc2 = key.encrypt(b"testmessage12345").unwrap().unwrap();

        assert_ne!(enc1, enc2);
        assert_eq!(enc1.len(), enc2.len());
    }

    #[test]
    fn test_byte_boundary_widths() {
        let one = BigUint::from(1u32);
        // 1024 bits exactly vs one bit more
        let n_1024 = (one.clone() << 1023) + one.clone();
        let n_1025 = (one.clone() << 1024) + one;
        let key_1024 = PublicKey::new(n_1024, 3u32);
        let key_1025 = PublicKey::new(n_1025, 3u32);

        assert_eq!(key_1024.bits(), 1024);
        assert_eq!(key_1025.bits(), 1025);
        assert_eq!(hex_width(&key_1024), 256);
        assert_eq!(hex_width(&key_1025), 258);

        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let c = ciphertext(encrypt_with(&key_1024, b"boundary", &mut rng).unwrap());
            assert_eq!(c.len(), 256);
            let c = ciphertext(encrypt_with(&key_1025, b"boundary", &mut rng).unwrap());
            assert_eq!(c.len(), 258);
        }
    }

    #[test]
    fn test_small_results_are_left_padded() {
        let value = BigUint::from(0xabcu32);
        assert_eq!(to_padded_hex(&value, 8), "00000abc");
        assert_eq!(to_padded_hex(&value, 3), "abc");
    }

    #[test]
    fn test_deterministic_with_scripted_rng() {
        let key = PublicKey::from_hex(MODULUS_HEX, "10001").unwrap();

        let a = encrypt_with(&key, b"fixed", &mut ScriptedRng::new(&[0x42])).unwrap();
        let b = encrypt_with(&key, b"fixed", &mut ScriptedRng::new(&[0x42])).unwrap();
        assert_eq!(a, b);

        let mut block = vec![0x42u8; 128];
        block[0] = 0x00;
        block[1] = 0x02;
        block[128 - 6] = 0x00;
        block[128 - 5..].copy_from_slice(b"fixed");
        let expected = key.do_public(&BigUint::from_bytes_be(&block));
        let hex = ciphertext(a);
        assert_eq!(BigUint::parse_bytes(hex.as_bytes(), 16).unwrap(), expected);
    }

    #[test]
    fn test_zero_result_is_soft_failure() {
        // Block for data [0x00] with every padding byte 0x5a
        let mut block = vec![0x5Au8; 12];
        block[0] = 0x00;
        block[1] = 0x02;
        block[10] = 0x00;
        block[11] = 0x00;
        let m = BigUint::from_bytes_be(&block);

        // n = 256m divides m^2 because m ends in a zero byte
        let key = PublicKey::new(m << 8, 2u32);
        assert_eq!(key.block_size(), 12);
        assert!(key.is_capable());

        let outcome = encrypt_with(&key, &[0x00], &mut ScriptedRng::new(&[0x5A])).unwrap();
        assert_eq!(outcome, EncryptOutcome::ZeroCollision);
        assert_eq!(outcome.into_ciphertext(), None);
    }

    #[test]
    fn test_incapable_key_is_soft_failure() {
        let key = PublicKey::new(BigUint::parse_bytes(MODULUS_HEX.as_bytes(), 16).unwrap(), 0u32);

        let outcome = encrypt_with(&key, b"id", &mut rand::thread_rng()).unwrap();
        assert_eq!(outcome, EncryptOutcome::Incapable);
        assert_eq!(key.encrypt(b"id").unwrap(), None);
    }

    #[test]
    fn test_absent_modulus_has_no_room() {
        let result = encrypt_rsa("", "10001", b"id");
        assert!(matches!(
            result,
            Err(JsRsaError::MessageTooLarge { len: 2, block_size: 0 })
        ));
    }

    #[test]
    fn test_message_too_large_propagates() {
        let key = PublicKey::from_hex(MODULUS_HEX, "10001").unwrap();

        assert!(key.encrypt(&[0x61; 117]).unwrap().is_some());
        assert!(matches!(
            key.encrypt(&[0x61; 118]),
            Err(JsRsaError::MessageTooLarge {
                len: 118,
                block_size: 128
            })
        ));
    }
}
