//! PKCS#1 v1.5 block type 2 padding, laid out the way the login script does it.
//!
//! ```text
//! 00 02 <non-zero random bytes, at least 8> 00 <data>
//! ```

use rand::{CryptoRng, RngCore};

use crate::error::{JsRsaError, Result};

/// Bytes of overhead: `00 02`, eight random bytes, `00` separator.
pub const PADDING_OVERHEAD: usize = 11;

/// Consecutive zero draws tolerated for a single padding byte.
pub const MAX_ZERO_DRAWS: usize = 256;

/// Pad `data` into a block of exactly `block_size` bytes.
///
/// The block is filled from the tail: data, separator, then random bytes
/// drawn one at a time down to index 2, then the `02` marker and leading
/// zero.
pub fn pkcs1_pad2<R>(data: &[u8], block_size: usize, rng: &mut R) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if block_size < data.len() + PADDING_OVERHEAD {
        return Err(JsRsaError::MessageTooLarge {
            len: data.len(),
            block_size,
        });
    }

    let mut block = vec![0u8; block_size];
    let separator = block_size - data.len() - 1;
    block[separator + 1..].copy_from_slice(data);
    block[separator] = 0x00;

    for slot in block[2..separator].iter_mut().rev() {
        *slot = non_zero_byte(rng)?;
    }

    block[1] = 0x02;
    block[0] = 0x00;
    Ok(block)
}

/// Draw single bytes until one is non-zero.
fn non_zero_byte<R>(rng: &mut R) -> Result<u8>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut byte = [0u8; 1];
    for _ in 0..MAX_ZERO_DRAWS {
        rng.fill_bytes(&mut byte);
        if byte[0] != 0 {
            return Ok(byte[0]);
        }
    }
    Err(JsRsaError::RandomSourceStalled {
        draws: MAX_ZERO_DRAWS,
    })
}

/// Recover the data from a type 2 block, or `None` if the layout is wrong.
pub fn pkcs1_unpad2(block: &[u8]) -> Option<&[u8]> {
    if block.len() < PADDING_OVERHEAD || block[0] != 0x00 || block[1] != 0x02 {
        return None;
    }
    let separator = block[2..].iter().position(|&b| b == 0)? + 2;
    if separator < PADDING_OVERHEAD - 1 {
        return None;
    }
    Some(&block[separator + 1..])
}
