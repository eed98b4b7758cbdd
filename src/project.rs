//! Projection of logical color ranges onto wrapped text.
//!
//! A [`TextElement`] carries two strings: the `original_text` the user typed,
//! which ranges index into, and the wrapped `text` that is actually drawn.
//! [`get_per_char_colors`] walks both in lock-step to give every drawn char a
//! color.
//!
//! # Wrapping contract
//!
//! The wrapped text must be the original text with only
//!
//! - some spaces turned into `'\n'`, and
//! - extra chars inserted (typically line breaks),
//!
//! never with original chars removed or reordered. Chars the walk cannot
//! match get the default color; a wrapper that breaks the contract (for
//! example by dropping a space between words) degrades to default-colored
//! output rather than failing. Trimming trailing spaces is harmless: the
//! unmatched tail of the original is simply never drawn.

use crate::color::Theme;
use crate::range::{ColorRanges, TextEdit, apply_color_to_range, shift_color_ranges};
use std::sync::Arc;

/// The fields of a text element that color ranges depend on.
///
/// Updates return a new element and leave the receiver untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextElement {
    /// Logical text as typed; ranges index into this.
    pub original_text: String,
    /// Wrapped text as drawn.
    pub text: String,
    /// Base color of the element.
    pub stroke_color: String,
    /// Color overrides, `None` when there are none.
    pub color_ranges: Option<ColorRanges>,
}

impl TextElement {
    /// Create an unwrapped element without overrides.
    #[must_use]
    pub fn new(original_text: impl Into<String>, stroke_color: impl Into<String>) -> Self {
        let original_text = original_text.into();
        Self {
            text: original_text.clone(),
            original_text,
            stroke_color: stroke_color.into(),
            color_ranges: None,
        }
    }

    /// Set the wrapped text.
    #[must_use]
    pub fn with_wrapped_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the color overrides.
    #[must_use]
    pub fn with_color_ranges(mut self, color_ranges: Option<ColorRanges>) -> Self {
        self.color_ranges = color_ranges;
        self
    }

    /// Length of the logical text in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.original_text.chars().count()
    }

    /// Check if any color override is present.
    #[must_use]
    pub fn has_color_ranges(&self) -> bool {
        self.color_ranges.is_some()
    }

    /// Paint `color` over `[start, end)` of the logical text.
    ///
    /// The result is clamped to the current text length.
    #[must_use]
    pub fn painted(&self, start: usize, end: usize, color: &str) -> Self {
        let ranges = apply_color_to_range(
            self.color_ranges.as_ref(),
            start,
            end,
            color,
            &self.stroke_color,
        )
        .and_then(|ranges| ranges.clamped(self.char_len()));
        self.clone().with_color_ranges(ranges)
    }

    /// Replace the text, carrying the color ranges along with the edit.
    ///
    /// The edit is derived from the old and new logical text; `new_wrapped`
    /// is the wrapper's output for `new_original`. Inside a run of repeated
    /// chars the derived edit lands at the end of the run (typing `a` in the
    /// middle of `aaa` reads as an append), so an insertion there may fall
    /// outside a range ending with the run. Editors that know the cursor
    /// position should use [`TextElement::edited_with`].
    #[must_use]
    pub fn edited(&self, new_original: &str, new_wrapped: &str) -> Self {
        match TextEdit::between(&self.original_text, new_original) {
            Some(edit) => self.edited_with(edit, new_original, new_wrapped),
            None => Self {
                original_text: new_original.to_string(),
                text: new_wrapped.to_string(),
                stroke_color: self.stroke_color.clone(),
                color_ranges: self.color_ranges.clone(),
            },
        }
    }

    /// Replace the text after a known `edit`, carrying the color ranges along.
    ///
    /// Ranges are shifted by `edit` and then clamped to the length of
    /// `new_original`.
    #[must_use]
    pub fn edited_with(&self, edit: TextEdit, new_original: &str, new_wrapped: &str) -> Self {
        let ranges = shift_color_ranges(self.color_ranges.as_ref(), edit)
            .and_then(|ranges| ranges.clamped(new_original.chars().count()));

        Self {
            original_text: new_original.to_string(),
            text: new_wrapped.to_string(),
            stroke_color: self.stroke_color.clone(),
            color_ranges: ranges,
        }
    }

    /// Per-char colors of the wrapped text, see [`get_per_char_colors`].
    #[must_use]
    pub fn per_char_colors<F>(&self, theme: Theme, dark_transform: F) -> Option<Vec<Arc<str>>>
    where
        F: Fn(&str) -> String,
    {
        get_per_char_colors(self, theme, dark_transform)
    }
}

/// Color of every char of `element.text`.
///
/// Returns `None` when the element has no overrides, so callers can draw it
/// in the uniform stroke color. Under [`Theme::Dark`] the stroke color and
/// every range color go through `dark_transform`. The output always has one
/// entry per char of the wrapped text.
#[must_use]
pub fn get_per_char_colors<F>(
    element: &TextElement,
    theme: Theme,
    dark_transform: F,
) -> Option<Vec<Arc<str>>>
where
    F: Fn(&str) -> String,
{
    let ranges = element.color_ranges.as_ref()?;
    let default: Arc<str> = theme.adjust(&element.stroke_color, &dark_transform).into();

    let original: Vec<char> = element.original_text.chars().collect();
    let mut orig_colors = vec![Arc::clone(&default); original.len()];
    for range in ranges {
        let start = range.start.min(original.len());
        let end = range.end.min(original.len());
        if start >= end {
            continue;
        }
        let color: Arc<str> = theme.adjust(&range.color, &dark_transform).into();
        for slot in &mut orig_colors[start..end] {
            *slot = Arc::clone(&color);
        }
    }

    let mut orig_idx = 0;
    let mut unmatched = 0usize;
    let colors: Vec<Arc<str>> = element
        .text
        .chars()
        .map(|ch| match original.get(orig_idx) {
            Some(&orig) if orig == ch || (ch == '\n' && orig == ' ') => {
                orig_idx += 1;
                Arc::clone(&orig_colors[orig_idx - 1])
            }
            _ => {
                if ch != '\n' {
                    unmatched += 1;
                }
                Arc::clone(&default)
            }
        })
        .collect();

    if unmatched > 0 || orig_idx < original.len() {
        tracing::debug!(
            unmatched,
            consumed = orig_idx,
            original_len = original.len(),
            "wrapped text diverges from original text"
        );
    }
    Some(colors)
}
