//! # Random Byte Sources
//!
//! Handshake randomness behind an explicit seam instead of a global RNG,
//! so session-key generation can be driven by a deterministic source in
//! tests and fixtures.

use crate::error::{LinkError, Result};

/// A source of cryptographically secure random bytes.
///
/// Production code uses [`OsRandom`]; tests inject [`FixedRandom`] to make
/// handshake outputs reproducible.
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Operating-system entropy via getrandom.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|e| LinkError::RandomSource(e.to_string()))
    }
}

/// A deterministic source that replays a fixed byte script.
///
/// Each `fill` consumes the next `buf.len()` bytes of the script and fails
/// once the script is exhausted. Intended for tests that need to pin the
/// exact random draw behind a handshake.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    bytes: Vec<u8>,
    offset: usize,
}

impl FixedRandom {
    /// A source that will hand out exactly `bytes`, in order.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            offset: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let end = self.offset + buf.len();
        let Some(src) = self.bytes.get(self.offset..end) else {
            return Err(LinkError::RandomSource(
                "fixed random source exhausted".into(),
            ));
        };
        buf.copy_from_slice(src);
        self.offset = end;
        Ok(())
    }
}
