//! # Message Layout Components
//!
//! Binary field ("property") abstraction for the link's message framing.
//!
//! Incoming buffers are consumed through a forward-only [`ByteCursor`];
//! each [`Field`] in a layout parses its own value off the front of the
//! cursor and advances it. Outgoing messages are built by assigning values
//! to the same fields and serializing the layout back to bytes.
//!
//! ## Components
//! - **ByteCursor**: index-based window over an immutable receive buffer
//! - **Field**: fixed-length and unbounded binary fields with a shared
//!   parse/assign/validate contract
//! - **MessageLayout**: an ordered field sequence parsed atomically
//!
//! ## Partial reads
//! A field that cannot find enough bytes reports `false` and leaves both
//! itself and the cursor untouched; the caller retries the same call once
//! more bytes arrive. No error is raised for this case.

pub mod cursor;
pub mod field;
pub mod layout;

pub use cursor::ByteCursor;
pub use field::Field;
pub use layout::MessageLayout;
