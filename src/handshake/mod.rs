//! # Session-Key Handshake
//!
//! Establishes the shared symmetric key for a panel session from nothing
//! but the numeric integration secret both parties already hold.
//!
//! Two incompatible initializer protocols exist on the wire:
//!
//! - **Type 1** ([`generate_type1`] / [`parse_type1`]): the initiator draws
//!   32 random bytes, splits them by index parity into 16 check bytes and a
//!   16-byte session key, and sends `check ‖ ECB(derived_key, draw)` as a
//!   48-byte payload. The responder decrypts, recomputes the check bytes,
//!   and rejects the handshake on any mismatch — the one random draw both
//!   hides the key and carries its own integrity check, so no separate MAC
//!   is exchanged.
//! - **Type 2** ([`transform_type2`]): both sides already hold the same
//!   16-byte key material as a 32-hex-digit access code; the same forward
//!   ECB encryption serves as both the encode and the decode transform for
//!   a 16-byte initializer.
//!
//! Every function here is a pure function of its inputs (plus the injected
//! randomness for Type-1 generation); no state survives between calls. The
//! recovered session key is handed to an external cipher session — this
//! module never touches post-handshake traffic.

pub mod initializer;
pub mod key;

pub use initializer::{
    generate_initializer, generate_type1, parse_type1, transform_type2, Type1Handshake,
    SESSION_KEY_LEN, TYPE1_INITIALIZER_LEN, TYPE2_INITIALIZER_LEN, TYPE2_SECRET_DIGITS,
};
pub use key::{derive_key, DERIVED_KEY_LEN, MIN_SECRET_DIGITS};
