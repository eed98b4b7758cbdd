//! Colored intervals over the logical text of an element.
//!
//! A [`ColorRange`] paints `[start, end)` of the original (unwrapped) text,
//! counted in `char`s. Stored collections are always canonical:
//!
//! - sorted ascending by `start`
//! - mutually disjoint
//! - no two touching ranges share a color
//! - every range has `start < end`
//!
//! "No overrides" is `Option<ColorRanges>::None`; a [`ColorRanges`] is never
//! empty, so call sites can branch on the option alone.
//!
//! # Examples
//!
//! ```
//! use colorspan::{ColorRange, apply_color_to_range, shift_color_ranges, TextEdit};
//!
//! let ranges = apply_color_to_range(None, 0, 10, "red", "#000000");
//! let ranges = apply_color_to_range(ranges.as_ref(), 3, 6, "blue", "#000000").unwrap();
//! assert_eq!(
//!     ranges.as_slice(),
//!     &[
//!         ColorRange::new(0, 3, "red"),
//!         ColorRange::new(3, 6, "blue"),
//!         ColorRange::new(6, 10, "red"),
//!     ]
//! );
//!
//! // Typing two characters at the front pushes everything right.
//! let shifted = shift_color_ranges(Some(&ranges), TextEdit::insert(0, 2)).unwrap();
//! assert_eq!(shifted[0], ColorRange::new(2, 5, "red"));
//! ```

mod normalize;
mod paint;
mod shift;

pub use normalize::cleanup_color_ranges;
pub use paint::apply_color_to_range;
pub use shift::{TextEdit, shift_color_ranges};

use crate::error::{Error, Result};
use paint::cut_out;
use std::ops::Deref;

/// A color override over `[start, end)` of the logical text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorRange {
    /// First char covered.
    pub start: usize,
    /// One past the last char covered.
    pub end: usize,
    /// Color string, compared by equality only.
    pub color: String,
}

impl ColorRange {
    /// Create a new color range.
    #[must_use]
    pub fn new(start: usize, end: usize, color: impl Into<String>) -> Self {
        Self {
            start,
            end,
            color: color.into(),
        }
    }

    /// Number of chars covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if empty (or inverted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this range covers a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if this range overlaps with another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if this range overlaps or abuts another.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A non-empty, canonical collection of color ranges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorRanges(Vec<ColorRange>);

impl ColorRanges {
    /// Build a collection from raw ranges, or `None` if nothing survives.
    ///
    /// Ranges are laid down in input order, so where two overlap the later
    /// one wins, exactly as if each had been painted in turn.
    #[must_use]
    pub fn new(ranges: Vec<ColorRange>) -> Option<Self> {
        let mut layered: Vec<ColorRange> = Vec::with_capacity(ranges.len());
        for range in ranges.into_iter().filter(|r| !r.is_empty()) {
            layered = cut_out(&layered, range.start, range.end);
            layered.push(range);
            layered = cleanup_color_ranges(layered, usize::MAX);
        }
        Self::from_normalized(layered)
    }

    /// Validate ranges that claim to already be canonical.
    ///
    /// Unlike [`ColorRanges::new`] nothing is repaired: the first violation is
    /// reported. An empty list is valid and yields `Ok(None)`.
    pub fn from_canonical(ranges: Vec<ColorRange>) -> Result<Option<Self>> {
        for (index, range) in ranges.iter().enumerate() {
            if range.is_empty() {
                return Err(Error::InvalidRange {
                    index,
                    start: range.start,
                    end: range.end,
                });
            }
            let Some(prev) = index.checked_sub(1).map(|i| &ranges[i]) else {
                continue;
            };
            if range.start < prev.end {
                return Err(Error::UnsortedRanges { index });
            }
            if range.start == prev.end && range.color == prev.color {
                return Err(Error::UnmergedRanges { index });
            }
        }
        Ok(Self::from_normalized(ranges))
    }

    /// Wrap ranges the caller guarantees are canonical.
    pub(crate) fn from_normalized(ranges: Vec<ColorRange>) -> Option<Self> {
        debug_assert!(ranges.iter().all(|r| !r.is_empty()));
        if ranges.is_empty() {
            None
        } else {
            Some(Self(ranges))
        }
    }

    /// Borrow the ranges as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ColorRange] {
        &self.0
    }

    /// Consume into the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ColorRange> {
        self.0
    }

    /// Drop or truncate ranges reaching past `text_length` chars.
    #[must_use]
    pub fn clamped(&self, text_length: usize) -> Option<Self> {
        Self::from_normalized(cleanup_color_ranges(self.0.clone(), text_length))
    }
}

impl Deref for ColorRanges {
    type Target = [ColorRange];

    fn deref(&self) -> &[ColorRange] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ColorRanges {
    type Item = &'a ColorRange;
    type IntoIter = std::slice::Iter<'a, ColorRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorRanges {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ranges = Vec::<ColorRange>::deserialize(deserializer)?;
        Self::from_canonical(ranges)
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom("color range list is empty"))
    }
}

/// Effective color at a logical index.
#[must_use]
pub fn color_at<'a>(
    ranges: Option<&'a ColorRanges>,
    index: usize,
    stroke_color: &'a str,
) -> &'a str {
    ranges
        .and_then(|ranges| {
            let pos = ranges.partition_point(|r| r.end <= index);
            ranges.get(pos).filter(|r| r.contains(index))
        })
        .map_or(stroke_color, |r| r.color.as_str())
}

/// Color of a selection as shown by a color picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionColor<'a> {
    /// Every selected char has this color.
    Uniform(&'a str),
    /// The selection spans more than one color.
    Mixed,
}

/// Summarize the effective color of `[start, end)`.
///
/// An empty or inverted selection covers no chars and reports the stroke
/// color.
#[must_use]
pub fn selection_color<'a>(
    ranges: Option<&'a ColorRanges>,
    start: usize,
    end: usize,
    stroke_color: &'a str,
) -> SelectionColor<'a> {
    if start >= end {
        return SelectionColor::Uniform(stroke_color);
    }
    let first = color_at(ranges, start, stroke_color);
    let Some(ranges) = ranges else {
        return SelectionColor::Uniform(first);
    };

    // Walk the covered span, tracking gaps (stroke color) between ranges.
    let mut pos = start;
    for range in ranges.iter().filter(|r| r.end > start && r.start < end) {
        if range.start > pos && first != stroke_color {
            return SelectionColor::Mixed;
        }
        if range.color != first {
            return SelectionColor::Mixed;
        }
        pos = range.end;
    }
    if pos < end && first != stroke_color {
        return SelectionColor::Mixed;
    }
    SelectionColor::Uniform(first)
}
