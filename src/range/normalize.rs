//! Canonicalization of raw range lists.

use super::ColorRange;

/// Clamp, sort, and merge a raw range list into canonical form.
///
/// Every bound is clamped into `[0, text_length]`, ranges left empty are
/// dropped, and overlapping or touching ranges of the same color are merged.
/// Pass `usize::MAX` to skip truncation against the text length.
#[must_use]
pub fn cleanup_color_ranges(ranges: Vec<ColorRange>, text_length: usize) -> Vec<ColorRange> {
    let input_len = ranges.len();
    let mut clamped: Vec<ColorRange> = ranges
        .into_iter()
        .map(|mut r| {
            r.start = r.start.min(text_length);
            r.end = r.end.min(text_length);
            r
        })
        .filter(|r| !r.is_empty())
        .collect();

    clamped.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut merged: Vec<ColorRange> = Vec::with_capacity(clamped.len());
    for curr in clamped {
        match merged.last_mut() {
            Some(prev) if curr.start <= prev.end && curr.color == prev.color => {
                prev.end = prev.end.max(curr.end);
            }
            _ => merged.push(curr),
        }
    }

    tracing::trace!(
        input = input_len,
        output = merged.len(),
        text_length,
        "normalized color ranges"
    );
    merged
}
