//! Shared-secret key derivation.

use crate::error::{LinkError, Result};

/// Length of a derived AES key in bytes.
pub const DERIVED_KEY_LEN: usize = 16;

/// Minimum number of digits a usable integration secret carries.
pub const MIN_SECRET_DIGITS: usize = 8;

/// Expand an integration secret into a 16-byte AES key.
///
/// The first 8 digits of the secret are repeated four times to form a
/// 32-character string, which is then read as hexadecimal. Digits beyond
/// the eighth are ignored: a 12-digit identification number and its 8-digit
/// prefix derive the same key. Deployed panels depend on exactly this
/// expansion, including the truncation, so it is preserved bit-for-bit.
///
/// # Errors
/// [`LinkError::SecretTooShort`] when fewer than 8 digits are available,
/// [`LinkError::SecretFormat`] when any of the first 8 characters is not a
/// hexadecimal digit.
pub fn derive_key(secret: &str) -> Result<[u8; DERIVED_KEY_LEN]> {
    if !secret.is_ascii() {
        return Err(LinkError::SecretFormat);
    }
    if secret.len() < MIN_SECRET_DIGITS {
        return Err(LinkError::SecretTooShort {
            actual: secret.len(),
            required: MIN_SECRET_DIGITS,
        });
    }

    let first8 = &secret[..MIN_SECRET_DIGITS];
    let expanded = first8.repeat(4);
    let decoded = hex::decode(&expanded).map_err(|_| LinkError::SecretFormat)?;

    let mut key = [0u8; DERIVED_KEY_LEN];
    key.copy_from_slice(&decoded);
    Ok(key)
}
