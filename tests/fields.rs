#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Field and layout edge cases: cursor contracts, partial-read retries,
//! and layout composition rules

use panel_link::error::LinkError;
use panel_link::message::{ByteCursor, Field, MessageLayout};

// ============================================================================
// FIXED FIELD CURSOR CONTRACT
// ============================================================================

#[test]
fn test_fixed_field_three_byte_cursor() {
    let data = [1u8, 2, 3];
    let mut cursor = ByteCursor::new(&data);
    let mut field = Field::fixed(4);

    assert!(!field.try_parse(&mut cursor));
    assert_eq!(cursor.remaining(), 3, "failed parse must not consume");
}

#[test]
fn test_fixed_field_five_byte_cursor() {
    let data = [1u8, 2, 3, 4, 5];
    let mut cursor = ByteCursor::new(&data);
    let mut field = Field::fixed(4);

    assert!(field.try_parse(&mut cursor));
    assert_eq!(field.value(), &[1, 2, 3, 4]);
    assert_eq!(cursor.remaining(), 1, "must consume exactly four bytes");
}

#[test]
fn test_fixed_field_retry_after_more_data() {
    // Simulates a partial network read: same field, second attempt with
    // the completed buffer
    let mut field = Field::fixed(4);

    let partial = [9u8, 9];
    let mut cursor = ByteCursor::new(&partial);
    assert!(!field.try_parse(&mut cursor));

    let complete = [9u8, 9, 9, 9];
    let mut cursor = ByteCursor::new(&complete);
    assert!(field.try_parse(&mut cursor));
    assert_eq!(field.value(), &[9, 9, 9, 9]);
}

#[test]
fn test_zero_length_fixed_field() {
    let mut field = Field::fixed(0);

    let mut empty = ByteCursor::new(&[]);
    assert!(field.try_parse(&mut empty));
    assert!(field.value().is_empty());

    let data = [1u8];
    let mut cursor = ByteCursor::new(&data);
    assert!(field.try_parse(&mut cursor));
    assert_eq!(cursor.remaining(), 1, "zero-length field never advances");
}

// ============================================================================
// UNBOUNDED FIELD
// ============================================================================

#[test]
fn test_unbounded_always_succeeds() {
    let mut field = Field::unbounded();

    let mut empty = ByteCursor::new(&[]);
    assert!(field.try_parse(&mut empty));
    assert!(field.value().is_empty());
    assert_eq!(empty.remaining(), 0);

    let data = [5u8; 100];
    let mut cursor = ByteCursor::new(&data);
    assert!(field.try_parse(&mut cursor));
    assert_eq!(field.value().len(), 100);
    assert_eq!(cursor.remaining(), 0);
}

// ============================================================================
// ASSIGNMENT VALIDATION
// ============================================================================

#[test]
fn test_assign_wrong_length_reports_failure() {
    let mut field = Field::fixed(4);
    assert!(!field.assign(&[1, 2, 3]));
    assert!(!field.assign(&[1, 2, 3, 4, 5]));
    assert_eq!(field.value(), &[0, 0, 0, 0], "rejected assign leaves value");
    assert!(field.assign(&[1, 2, 3, 4]));
}

#[test]
fn test_unbounded_assign_accepts_anything() {
    let mut field = Field::unbounded();
    assert!(field.assign(&[]));
    assert!(field.assign(&[1; 1000]));
}

// ============================================================================
// LAYOUT COMPOSITION AND PARSING
// ============================================================================

#[test]
fn test_layout_rejects_field_after_unbounded() {
    let mut layout = MessageLayout::new();
    layout.push(Field::fixed(2)).unwrap();
    layout.push(Field::unbounded()).unwrap();

    match layout.push(Field::fixed(1)) {
        Err(LinkError::LayoutViolation) => {}
        other => panic!("expected layout violation, got {other:?}"),
    }
    match layout.push(Field::unbounded()) {
        Err(LinkError::LayoutViolation) => {}
        other => panic!("expected layout violation, got {other:?}"),
    }
}

#[test]
fn test_layout_atomic_parse_on_short_buffer() {
    let mut layout = MessageLayout::new();
    layout.push(Field::fixed(4)).unwrap();
    layout.push(Field::fixed(4)).unwrap();

    let short = [1u8, 2, 3, 4, 5, 6];
    let mut cursor = ByteCursor::new(&short);
    assert!(!layout.parse(&mut cursor));
    assert_eq!(
        cursor.remaining(),
        6,
        "a half-parsed layout must not consume anything"
    );
    assert_eq!(layout.fields()[0].value(), &[0, 0, 0, 0]);
}

#[test]
fn test_layout_parse_then_serialize_roundtrip() {
    let mut layout = MessageLayout::new();
    layout.push(Field::fixed(2)).unwrap();
    layout.push(Field::fixed(1)).unwrap();
    layout.push(Field::unbounded()).unwrap();

    let wire = [0x06u8, 0x0E, 0x01, 0xDE, 0xAD, 0xBE, 0xEF];
    let mut cursor = ByteCursor::new(&wire);
    assert!(layout.parse(&mut cursor));
    assert!(cursor.is_empty());

    assert_eq!(layout.to_bytes().as_ref(), &wire[..]);
}

#[test]
fn test_layout_trailing_unbounded_takes_empty_remainder() {
    let mut layout = MessageLayout::new();
    layout.push(Field::fixed(3)).unwrap();
    layout.push(Field::unbounded()).unwrap();

    let wire = [1u8, 2, 3];
    let mut cursor = ByteCursor::new(&wire);
    assert!(layout.parse(&mut cursor));
    assert!(layout.fields()[1].value().is_empty());
}
