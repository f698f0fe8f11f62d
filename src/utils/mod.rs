//! # Utility Modules
//!
//! Supporting utilities for cryptography, randomness, and logging.
//!
//! ## Components
//! - **Crypto**: AES-128-ECB block transform with zero padding
//! - **Random**: injectable cryptographically secure byte source
//! - **Logging**: structured logging configuration
//!
//! ## Security
//! - Cryptographically secure RNG (getrandom)
//! - Memory zeroing for key material (zeroize crate)

pub mod crypto;
pub mod logging;
pub mod random;

// Re-export public types for advanced users
pub use crypto::BlockCipher;
pub use random::{OsRandom, RandomSource};
