//! Painting a color over part of the logical text.

use super::{ColorRange, ColorRanges, cleanup_color_ranges};

/// Paint `color` over `[start, end)`, replacing whatever was there.
///
/// Existing ranges that overlap the painted span keep only their parts
/// outside it. Painting with `stroke_color` erases overrides instead of
/// adding one. An empty or inverted span changes nothing.
///
/// The result is not clamped to any text length; callers that know the
/// current length should apply [`ColorRanges::clamped`].
#[must_use]
pub fn apply_color_to_range(
    ranges: Option<&ColorRanges>,
    start: usize,
    end: usize,
    color: &str,
    stroke_color: &str,
) -> Option<ColorRanges> {
    if start >= end {
        return ranges.cloned();
    }

    let existing = ranges.map_or(&[][..], |r| r.as_slice());
    let mut out = cut_out(existing, start, end);

    if color == stroke_color {
        tracing::debug!(start, end, "default color paint erases overrides");
    } else {
        out.push(ColorRange::new(start, end, color));
    }

    ColorRanges::from_normalized(cleanup_color_ranges(out, usize::MAX))
}

/// Copy `existing` with `[start, end)` removed from every range.
///
/// Ranges straddling the span are split into their left and right parts.
/// The output keeps input order and is not normalized.
pub(crate) fn cut_out(existing: &[ColorRange], start: usize, end: usize) -> Vec<ColorRange> {
    let mut out: Vec<ColorRange> = Vec::with_capacity(existing.len() + 2);
    for range in existing {
        if range.end <= start || range.start >= end {
            out.push(range.clone());
            continue;
        }
        if range.start < start {
            out.push(ColorRange::new(range.start, start, range.color.as_str()));
        }
        if range.end > end {
            out.push(ColorRange::new(end, range.end, range.color.as_str()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const STROKE: &str = "#1e1e1e";

    fn r(start: usize, end: usize, color: &str) -> ColorRange {
        ColorRange::new(start, end, color)
    }

    fn paint(
        ranges: Option<&ColorRanges>,
        start: usize,
        end: usize,
        color: &str,
    ) -> Option<ColorRanges> {
        apply_color_to_range(ranges, start, end, color, STROKE)
    }

    #[test]
    fn test_paint_on_empty() {
        let out = paint(None, 2, 5, "red").unwrap();
        assert_eq!(out.as_slice(), &[r(2, 5, "red")]);
    }

    #[test]
    fn test_split_inside_existing() {
        let base = paint(None, 0, 10, "red");
        let out = paint(base.as_ref(), 3, 6, "blue").unwrap();
        assert_eq!(
            out.as_slice(),
            &[r(0, 3, "red"), r(3, 6, "blue"), r(6, 10, "red")]
        );
    }

    #[test]
    fn test_empty_span_is_noop() {
        let base = paint(None, 0, 4, "red");
        assert_eq!(paint(base.as_ref(), 3, 3, "blue"), base);
        assert_eq!(paint(base.as_ref(), 5, 1, "blue"), base);
        assert!(paint(None, 3, 3, "blue").is_none());
    }

    #[test]
    fn test_repaint_same_is_idempotent() {
        let base = paint(None, 2, 6, "red");
        let again = paint(base.as_ref(), 2, 6, "red");
        assert_eq!(base, again);
    }

    #[test]
    fn test_default_color_erases() {
        let base = paint(None, 0, 10, "red");
        let out = paint(base.as_ref(), 4, 7, STROKE).unwrap();
        assert_eq!(out.as_slice(), &[r(0, 4, "red"), r(7, 10, "red")]);

        let gone = paint(base.as_ref(), 0, 10, STROKE);
        assert!(gone.is_none());
        assert!(paint(None, 0, 10, STROKE).is_none());
    }

    #[test]
    fn test_paint_merges_with_neighbour() {
        let base = paint(None, 0, 4, "red");
        let out = paint(base.as_ref(), 4, 8, "red").unwrap();
        assert_eq!(out.as_slice(), &[r(0, 8, "red")]);
    }

    #[test]
    fn test_paint_spanning_several_ranges() {
        let base = paint(None, 0, 3, "red");
        let base = paint(base.as_ref(), 5, 8, "green");
        let base = paint(base.as_ref(), 10, 12, "blue");
        let out = paint(base.as_ref(), 2, 11, "pink").unwrap();
        assert_eq!(
            out.as_slice(),
            &[r(0, 2, "red"), r(2, 11, "pink"), r(11, 12, "blue")]
        );
    }

    #[test]
    fn test_paint_past_end_is_not_truncated() {
        let out = paint(None, 5, 1_000, "red").unwrap();
        assert_eq!(out.as_slice(), &[r(5, 1_000, "red")]);
        assert_eq!(out.clamped(8).unwrap().as_slice(), &[r(5, 8, "red")]);
    }
}
