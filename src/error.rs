//! # Error Types
//!
//! Error handling for the integration-link core.
//!
//! This module defines all error variants that can occur during handshake
//! and layout operations, from malformed arguments to integrity failures.
//!
//! ## Error Categories
//! - **Argument errors**: secret/identifier too short or malformed,
//!   initializer of the wrong length. The input itself is bad; retrying the
//!   same call is never meaningful.
//! - **Integrity failure**: Type-1 check-byte mismatch. The peer used a
//!   different shared secret, or the payload was corrupted or tampered with
//!   in transit. Callers should fail the handshake attempt and decide
//!   whether to retry with a fresh session key.
//! - **Plumbing errors**: I/O, configuration, and randomness-source
//!   failures.
//!
//! Two conditions are deliberately *not* errors: a field seeing too few
//! bytes to parse (a boolean "not yet" — see
//! [`Field::try_parse`](crate::message::Field::try_parse)), and a field
//! rejecting an assigned value (a boolean validation failure — see
//! [`Field::assign`](crate::message::Field::assign)).
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// LinkError is the primary error type for all link-core operations
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("integration secret is {actual} digits long; it needs to be at least {required}")]
    SecretTooShort { actual: usize, required: usize },

    #[error("integration access code is {actual} digits long; it needs to be exactly {required}")]
    SecretLength { actual: usize, required: usize },

    #[error("integration secret contains characters outside the hexadecimal range")]
    SecretFormat,

    #[error("initializer is {actual} bytes long; it needs to be exactly {expected}")]
    InitializerLength { actual: usize, expected: usize },

    #[error("initializer check bytes do not match the shared secret")]
    IntegrityFailure,

    #[error("cipher input is {0} bytes; it needs a whole number of 16-byte blocks")]
    CipherInput(usize),

    #[error("a field cannot follow an unbounded field in a message layout")]
    LayoutViolation,

    #[error("random source failure: {0}")]
    RandomSource(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using LinkError
pub type Result<T> = std::result::Result<T, LinkError>;
