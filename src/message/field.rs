//! Binary fields that parse themselves out of a byte stream.
//!
//! The variant set is closed on purpose: the link's message catalog only
//! ever uses fixed-length arrays and a trailing unbounded array, and a
//! tagged enum keeps the dispatch exhaustively checkable.

use crate::message::ByteCursor;

/// A self-describing binary-layout element.
///
/// A field holds its current value (initially the default), knows how to
/// consume that value from the front of a [`ByteCursor`], and validates
/// values assigned to it for outgoing messages.
///
/// Invariant: a successfully parsed or assigned value always satisfies the
/// variant's validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Exactly `length` bytes on the wire. Defaults to `length` zero bytes.
    Fixed { length: usize, value: Vec<u8> },
    /// Consumes the entire remainder of the buffer. Defaults to empty.
    ///
    /// An unbounded field leaves nothing behind it, so it may only occupy
    /// the last position of a layout; [`MessageLayout::push`] enforces
    /// this.
    ///
    /// [`MessageLayout::push`]: crate::message::MessageLayout::push
    Unbounded { value: Vec<u8> },
}

impl Field {
    /// A fixed-length field of `length` bytes, at its default value.
    pub fn fixed(length: usize) -> Self {
        Field::Fixed {
            length,
            value: vec![0; length],
        }
    }

    /// An unbounded field, at its default (empty) value.
    pub fn unbounded() -> Self {
        Field::Unbounded { value: Vec::new() }
    }

    /// Attempt to consume this field's value from the front of `cursor`.
    ///
    /// On success the parsed bytes become the field's value and `cursor`
    /// advances past exactly the consumed bytes. On failure (not enough
    /// bytes remain) both the cursor and the field are left untouched and
    /// `false` is returned — an expected, recoverable condition during
    /// partial network reads, so the caller retries once more bytes arrive.
    ///
    /// An unbounded field always succeeds, draining the cursor and yielding
    /// an empty value on an empty cursor. A zero-length fixed field always
    /// succeeds without advancing.
    pub fn try_parse(&mut self, cursor: &mut ByteCursor<'_>) -> bool {
        match self {
            Field::Fixed { length, value } => match cursor.take(*length) {
                Some(bytes) => {
                    *value = bytes.to_vec();
                    true
                }
                None => false,
            },
            Field::Unbounded { value } => {
                *value = cursor.take_rest().to_vec();
                true
            }
        }
    }

    /// Set the field's value directly, but only if [`validate`](Self::validate)
    /// holds; otherwise the value is left unchanged and `false` is
    /// returned. Guards against building malformed outgoing messages.
    pub fn assign(&mut self, bytes: &[u8]) -> bool {
        if !self.validate(bytes) {
            return false;
        }
        match self {
            Field::Fixed { value, .. } | Field::Unbounded { value } => {
                *value = bytes.to_vec();
            }
        }
        true
    }

    /// Whether `bytes` is a legal value for this field.
    pub fn validate(&self, bytes: &[u8]) -> bool {
        match self {
            Field::Fixed { length, .. } => bytes.len() == *length,
            Field::Unbounded { .. } => true,
        }
    }

    /// The value a freshly created field holds before any parse or assign.
    pub fn default_value(&self) -> Vec<u8> {
        match self {
            Field::Fixed { length, .. } => vec![0; *length],
            Field::Unbounded { .. } => Vec::new(),
        }
    }

    /// The field's current value.
    pub fn value(&self) -> &[u8] {
        match self {
            Field::Fixed { value, .. } | Field::Unbounded { value } => value,
        }
    }

    /// True for the unbounded variant.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Field::Unbounded { .. })
    }
}
