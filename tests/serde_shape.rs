//! Persisted shape of color ranges (requires the `serde` feature).

use colorspan::{ColorRange, ColorRanges};
use serde_json::json;

#[test]
fn ranges_serialize_as_plain_records() {
    let ranges = ColorRanges::new(vec![
        ColorRange::new(0, 3, "red"),
        ColorRange::new(5, 8, "blue"),
    ])
    .unwrap();
    let value = serde_json::to_value(&ranges).unwrap();
    assert_eq!(
        value,
        json!([
            { "start": 0, "end": 3, "color": "red" },
            { "start": 5, "end": 8, "color": "blue" },
        ])
    );

    let back: ColorRanges = serde_json::from_value(value).unwrap();
    assert_eq!(back, ranges);
}

#[test]
fn absent_ranges_serialize_as_null() {
    let none: Option<ColorRanges> = None;
    assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    let back: Option<ColorRanges> = serde_json::from_str("null").unwrap();
    assert!(back.is_none());
}

#[test]
fn non_canonical_input_is_rejected() {
    let overlapping = json!([
        { "start": 0, "end": 5, "color": "red" },
        { "start": 3, "end": 8, "color": "blue" },
    ]);
    let err = serde_json::from_value::<ColorRanges>(overlapping).unwrap_err();
    assert!(err.to_string().contains("range #1"));

    let empty = json!([]);
    assert!(serde_json::from_value::<ColorRanges>(empty).is_err());
}
