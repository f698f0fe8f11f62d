//! Type-1 and Type-2 initializer protocols.

use crate::error::{LinkError, Result};
use crate::handshake::key::{derive_key, DERIVED_KEY_LEN};
use crate::utils::crypto::BlockCipher;
use crate::utils::random::RandomSource;
use tracing::{debug, instrument, warn};
use zeroize::Zeroize;

/// Wire length of a Type-1 initializer payload.
pub const TYPE1_INITIALIZER_LEN: usize = 48;

/// Wire length of a Type-2 initializer payload.
pub const TYPE2_INITIALIZER_LEN: usize = 16;

/// Length of a negotiated session key in bytes.
pub const SESSION_KEY_LEN: usize = 16;

/// Exact digit count a Type-2 access code must have: a full 16-byte key
/// written as hex, with no truncation or repetition.
pub const TYPE2_SECRET_DIGITS: usize = 32;

/// Size of the random draw behind a Type-1 handshake: session key and
/// check bytes interleaved.
const RANDOM_DRAW_LEN: usize = 32;

/// Length of the cleartext check prefix of a Type-1 initializer.
const CHECK_BYTES_LEN: usize = 16;

/// Output of [`generate_type1`]: the payload to put on the wire and the
/// session key to hand to the cipher session.
pub struct Type1Handshake {
    /// The 48-byte wire payload: check bytes followed by ciphertext.
    pub initializer: [u8; TYPE1_INITIALIZER_LEN],
    /// The freshly drawn key that will encrypt this session's traffic.
    pub session_key: [u8; SESSION_KEY_LEN],
}

/// Apply the Type-2 initializer transform.
///
/// The Type-2 protocol is not symmetric like Type 1; instead the same
/// forward encryption is used by whichever side is encoding and whichever
/// side is decoding. `access_code` must be exactly 32 hex digits (the full
/// key, no expansion) and `initializer` exactly 16 bytes.
///
/// # Errors
/// Argument errors for a wrong-length or non-hex access code, or a
/// wrong-length initializer.
#[instrument(skip_all)]
pub fn transform_type2(
    access_code: &str,
    initializer: &[u8],
) -> Result<[u8; TYPE2_INITIALIZER_LEN]> {
    if !access_code.is_ascii() {
        return Err(LinkError::SecretFormat);
    }
    if access_code.len() != TYPE2_SECRET_DIGITS {
        return Err(LinkError::SecretLength {
            actual: access_code.len(),
            required: TYPE2_SECRET_DIGITS,
        });
    }
    if initializer.len() != TYPE2_INITIALIZER_LEN {
        return Err(LinkError::InitializerLength {
            actual: initializer.len(),
            expected: TYPE2_INITIALIZER_LEN,
        });
    }

    let decoded = hex::decode(access_code).map_err(|_| LinkError::SecretFormat)?;
    let mut key = [0u8; DERIVED_KEY_LEN];
    key.copy_from_slice(&decoded);

    let cipher = BlockCipher::new(&key);
    key.zeroize();

    let ciphertext = cipher.encrypt_ecb(initializer);
    let mut out = [0u8; TYPE2_INITIALIZER_LEN];
    out.copy_from_slice(&ciphertext);

    debug!("applied Type-2 initializer transform");
    Ok(out)
}

/// Generate a session key and the Type-1 initializer that wraps it.
///
/// Draws 32 random bytes from `rng` and splits them by index parity: the
/// even positions become the check bytes, the odd positions the session
/// key. The wire payload is the check bytes followed by the ECB encryption
/// of the whole draw under the key derived from `access_code`, so the
/// responder can verify it decrypted with the same shared secret.
///
/// # Errors
/// Argument errors from [`derive_key`], or a failure of the random source.
#[instrument(skip_all)]
pub fn generate_type1<R: RandomSource>(
    access_code: &str,
    rng: &mut R,
) -> Result<Type1Handshake> {
    let mut key = derive_key(access_code)?;

    let mut draw = [0u8; RANDOM_DRAW_LEN];
    if let Err(e) = rng.fill(&mut draw) {
        key.zeroize();
        return Err(e);
    }

    let cipher = BlockCipher::new(&key);
    key.zeroize();
    let ciphertext = cipher.encrypt_ecb(&draw);

    let check = even_indexes(&draw);
    let encoded_key = odd_indexes(&draw);
    draw.zeroize();

    let mut initializer = [0u8; TYPE1_INITIALIZER_LEN];
    initializer[..CHECK_BYTES_LEN].copy_from_slice(&check);
    initializer[CHECK_BYTES_LEN..].copy_from_slice(&ciphertext);

    let mut session_key = [0u8; SESSION_KEY_LEN];
    session_key.copy_from_slice(&encoded_key);

    debug!("generated Type-1 initializer and session key");
    Ok(Type1Handshake {
        initializer,
        session_key,
    })
}

/// Recover the session key from a received Type-1 initializer.
///
/// `identification_number` is 12 digits on the wire, but only the first 8
/// feed the key, so that is all that is required. The 32-byte ciphertext
/// tail is decrypted under the derived key and the even-index bytes of the
/// plaintext are compared byte-for-byte against the 16 received check
/// bytes; any mismatch fails the handshake. On success the odd-index bytes
/// are the peer's session key.
///
/// # Errors
/// Argument errors for a short identifier or a payload that is not exactly
/// 48 bytes; [`LinkError::IntegrityFailure`] when the check bytes do not
/// match (wrong shared secret, corruption, or tampering).
#[instrument(skip_all)]
pub fn parse_type1(
    identification_number: &str,
    remote_initializer: &[u8],
) -> Result<[u8; SESSION_KEY_LEN]> {
    if remote_initializer.len() != TYPE1_INITIALIZER_LEN {
        return Err(LinkError::InitializerLength {
            actual: remote_initializer.len(),
            expected: TYPE1_INITIALIZER_LEN,
        });
    }

    let mut key = derive_key(identification_number)?;
    let received_check = &remote_initializer[..CHECK_BYTES_LEN];
    let ciphertext = &remote_initializer[CHECK_BYTES_LEN..];

    let cipher = BlockCipher::new(&key);
    key.zeroize();
    let mut plaintext = cipher.decrypt_ecb(ciphertext)?;

    if even_indexes(&plaintext) != received_check {
        plaintext.zeroize();
        warn!("Type-1 check bytes did not match; rejecting handshake");
        return Err(LinkError::IntegrityFailure);
    }

    let encoded_key = odd_indexes(&plaintext);
    plaintext.zeroize();

    let mut session_key = [0u8; SESSION_KEY_LEN];
    session_key.copy_from_slice(&encoded_key);

    debug!("recovered session key from Type-1 initializer");
    Ok(session_key)
}

/// Draw a fresh 16-byte local initializer for the Type-2 exchange.
pub fn generate_initializer<R: RandomSource>(
    rng: &mut R,
) -> Result<[u8; TYPE2_INITIALIZER_LEN]> {
    let mut initializer = [0u8; TYPE2_INITIALIZER_LEN];
    rng.fill(&mut initializer)?;
    Ok(initializer)
}

// The parity interleave is part of the wire format: deployed panels emit
// and expect exactly this split of the random draw.
fn even_indexes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().step_by(2).copied().collect()
}

fn odd_indexes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().skip(1).step_by(2).copied().collect()
}
