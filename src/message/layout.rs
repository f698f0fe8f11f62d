//! Ordered field sequences.

use crate::error::{LinkError, Result};
use crate::message::{ByteCursor, Field};
use bytes::{BufMut, Bytes, BytesMut};

/// An ordered sequence of [`Field`]s describing one message body.
///
/// Parsing is atomic: either every field consumes its value and the
/// caller's cursor advances past the whole message, or nothing changes and
/// the same call can be retried once more bytes have arrived.
#[derive(Debug, Clone, Default)]
pub struct MessageLayout {
    fields: Vec<Field>,
}

impl MessageLayout {
    /// An empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field to the layout.
    ///
    /// Fails with [`LinkError::LayoutViolation`] if the layout already ends
    /// in an unbounded field: that field consumes the entire remainder of
    /// any buffer, so anything placed after it could never parse.
    pub fn push(&mut self, field: Field) -> Result<()> {
        if self.fields.last().is_some_and(Field::is_unbounded) {
            return Err(LinkError::LayoutViolation);
        }
        self.fields.push(field);
        Ok(())
    }

    /// Parse every field, in order, from the front of `cursor`.
    ///
    /// Returns `false` when the buffer is too short for the full layout; in
    /// that case neither the cursor nor any field value has changed.
    pub fn parse(&mut self, cursor: &mut ByteCursor<'_>) -> bool {
        let mut probe = *cursor;
        let mut parsed = self.fields.clone();
        for field in &mut parsed {
            if !field.try_parse(&mut probe) {
                return false;
            }
        }
        self.fields = parsed;
        *cursor = probe;
        true
    }

    /// Serialize the current field values back into wire bytes.
    pub fn to_bytes(&self) -> Bytes {
        let len = self.fields.iter().map(|f| f.value().len()).sum();
        let mut buf = BytesMut::with_capacity(len);
        for field in &self.fields {
            buf.put_slice(field.value());
        }
        buf.freeze()
    }

    /// The fields in layout order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Mutable access to a field by position, for assigning outgoing values.
    pub fn field_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// Number of fields in the layout.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the layout holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn header_layout() -> MessageLayout {
        let mut layout = MessageLayout::new();
        layout.push(Field::fixed(2)).unwrap();
        layout.push(Field::fixed(4)).unwrap();
        layout.push(Field::unbounded()).unwrap();
        layout
    }

    #[test]
    fn test_parse_in_order() {
        let data = [0xAAu8, 0xBB, 1, 2, 3, 4, 9, 9, 9];
        let mut cursor = ByteCursor::new(&data);
        let mut layout = header_layout();

        assert!(layout.parse(&mut cursor));
        assert!(cursor.is_empty());
        assert_eq!(layout.fields()[0].value(), &[0xAA, 0xBB]);
        assert_eq!(layout.fields()[1].value(), &[1, 2, 3, 4]);
        assert_eq!(layout.fields()[2].value(), &[9, 9, 9]);
    }

    #[test]
    fn test_partial_buffer_leaves_cursor_untouched() {
        // Two bytes short of the fixed prefix
        let data = [0xAAu8, 0xBB, 1, 2];
        let mut cursor = ByteCursor::new(&data);
        let mut layout = header_layout();

        assert!(!layout.parse(&mut cursor));
        assert_eq!(cursor.remaining(), 4);
        // Field values untouched as well
        assert_eq!(layout.fields()[0].value(), &[0, 0]);

        // Retry with the completed buffer succeeds
        let full = [0xAAu8, 0xBB, 1, 2, 3, 4];
        let mut cursor = ByteCursor::new(&full);
        assert!(layout.parse(&mut cursor));
        assert!(layout.fields()[2].value().is_empty());
    }

    #[test]
    fn test_push_after_unbounded_rejected() {
        let mut layout = MessageLayout::new();
        layout.push(Field::unbounded()).unwrap();
        assert!(matches!(
            layout.push(Field::fixed(1)),
            Err(LinkError::LayoutViolation)
        ));
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_assign_and_serialize() {
        let mut layout = header_layout();
        assert!(layout.field_mut(0).unwrap().assign(&[0x06, 0x0E]));
        assert!(layout.field_mut(1).unwrap().assign(&[1, 2, 3, 4]));
        assert!(layout.field_mut(2).unwrap().assign(&[0xFF]));

        assert_eq!(
            layout.to_bytes().as_ref(),
            &[0x06, 0x0E, 1, 2, 3, 4, 0xFF]
        );
    }

    #[test]
    fn test_empty_layout_parses_anything() {
        let data = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        let mut layout = MessageLayout::new();
        assert!(layout.parse(&mut cursor));
        assert_eq!(cursor.remaining(), 3);
        assert!(layout.to_bytes().is_empty());
    }
}
