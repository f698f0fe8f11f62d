//! Forward-only view over a receive buffer.
//!
//! The cursor is an index into an immutable slice rather than a shrinking
//! reference: it is `Copy`, so callers can probe ahead on a copy and commit
//! by overwriting the original only when the whole probe succeeds.

/// A forward-only window over a byte buffer.
///
/// `take(n)` hands out the next `n` bytes and advances past them, or fails
/// without advancing when fewer than `n` remain. The underlying buffer is
/// owned by the caller; the cursor never copies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of unconsumed bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume exactly `n` bytes.
    ///
    /// Returns `None` (and does not advance) when fewer than `n` bytes
    /// remain. `take(0)` always succeeds with an empty slice.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.remaining() < n {
            return None;
        }
        let start = self.pos;
        self.pos += n;
        Some(&self.buf[start..self.pos])
    }

    /// Consume everything that remains, possibly an empty slice.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let rest = &self.buf[self.pos..];
        self.pos = self.buf.len();
        rest
    }
}
