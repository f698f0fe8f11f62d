//! # panel-link
//!
//! Session-key handshake and binary message-layout core for security-panel
//! integration links.
//!
//! A controller (panel) and a remote client share nothing but a numeric
//! integration secret exchanged out-of-band. This crate provides the two
//! non-trivial pieces needed to turn that secret into an encrypted session:
//!
//! - **Handshake** ([`handshake`]): derives a 16-byte AES key from the
//!   integration secret, and implements the Type-1 and Type-2 initializer
//!   protocols that establish the per-session key actually used to encrypt
//!   traffic. Type-1 embeds an integrity check in the same random draw as
//!   the session key; a mismatch is surfaced as a distinct error so callers
//!   can tell a wrong secret from a malformed call.
//! - **Message layout** ([`message`]): self-describing binary fields
//!   (fixed-length and unbounded) that parse themselves out of a receive
//!   buffer through a forward-only [`message::ByteCursor`], composing into
//!   ordered [`message::MessageLayout`]s. Insufficient data is a boolean
//!   "not yet", never an error, so partial network reads can simply be
//!   retried.
//!
//! The transport, the connection state machine, and the post-handshake
//! cipher session are external collaborators: this crate only produces and
//! consumes their byte buffers and keys.
//!
//! ## Example
//! ```rust
//! use panel_link::handshake::{generate_type1, parse_type1};
//! use panel_link::utils::random::OsRandom;
//!
//! # fn main() -> panel_link::Result<()> {
//! // Initiator: draw a fresh session key and wrap it for the wire.
//! let hs = generate_type1("12345678", &mut OsRandom)?;
//!
//! // Responder: recover the session key from the 48-byte wire payload.
//! let session_key = parse_type1("123456789012", &hs.initializer)?;
//! assert_eq!(session_key, hs.session_key);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security
//! - Cryptographically secure RNG (getrandom) behind an injectable
//!   [`utils::random::RandomSource`] seam
//! - Key material zeroized after use (zeroize crate)
//! - Type-1 check bytes verified before any key is released to the caller

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod handshake;
pub mod message;
pub mod utils;

pub use error::{LinkError, Result};
pub use handshake::{
    derive_key, generate_type1, parse_type1, transform_type2, Type1Handshake,
};
pub use message::{ByteCursor, Field, MessageLayout};
