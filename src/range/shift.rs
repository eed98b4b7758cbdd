//! Keeping ranges attached to their text across edits.

use super::{ColorRange, ColorRanges};

/// A single replace edit in char offsets of the pre-edit text.
///
/// `deleted` chars starting at `start` are replaced by `inserted` new chars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub start: usize,
    pub inserted: usize,
    pub deleted: usize,
}

impl TextEdit {
    /// Insert `len` chars at `at`.
    #[must_use]
    pub const fn insert(at: usize, len: usize) -> Self {
        Self {
            start: at,
            inserted: len,
            deleted: 0,
        }
    }

    /// Delete `len` chars starting at `at`.
    #[must_use]
    pub const fn delete(at: usize, len: usize) -> Self {
        Self {
            start: at,
            inserted: 0,
            deleted: len,
        }
    }

    /// Replace `deleted` chars at `at` with `inserted` chars.
    #[must_use]
    pub const fn replace(at: usize, deleted: usize, inserted: usize) -> Self {
        Self {
            start: at,
            inserted,
            deleted,
        }
    }

    /// Derive the edit that turns `old` into `new`.
    ///
    /// The edit spans everything between the longest common prefix and the
    /// longest common suffix. Returns `None` when the strings are equal.
    #[must_use]
    pub fn between(old: &str, new: &str) -> Option<Self> {
        if old == new {
            return None;
        }
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();

        let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        Some(Self {
            start: prefix,
            inserted: new.len() - prefix - suffix,
            deleted: old.len() - prefix - suffix,
        })
    }

    /// End of the deleted span in pre-edit coordinates.
    #[must_use]
    pub const fn deleted_end(&self) -> usize {
        self.start.saturating_add(self.deleted)
    }

    /// End of the inserted text in post-edit coordinates.
    #[must_use]
    pub const fn inserted_end(&self) -> usize {
        self.start.saturating_add(self.inserted)
    }

    /// Check if the edit leaves the text unchanged in length and position.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.inserted == 0 && self.deleted == 0
    }
}

/// Move `pos` by `inserted - deleted`, saturating at the `usize` bounds.
///
/// Unbounded ranges (painted up to `usize::MAX`) stay pinned at the top.
fn offset_by(pos: usize, edit: TextEdit) -> usize {
    match pos.checked_add(edit.inserted) {
        Some(grown) => grown.saturating_sub(edit.deleted),
        None => pos.saturating_sub(edit.deleted).saturating_add(edit.inserted),
    }
}

/// Move every range so it stays over the same text after `edit`.
///
/// - ranges before the deleted span are untouched
/// - ranges after it move by `inserted - deleted`
/// - a range starting before the edit keeps its start and grows or shrinks
///   with it, but never ends before `edit.start`
/// - a range starting inside the deleted span keeps only its tail beyond the
///   span, placed right after the inserted text
///
/// Ranges consumed by the deletion are dropped. Neighbours of the same color
/// left touching (the deletion closed the gap between them) are joined.
#[must_use]
pub fn shift_color_ranges(ranges: Option<&ColorRanges>, edit: TextEdit) -> Option<ColorRanges> {
    let ranges = ranges?;
    if edit.is_noop() {
        return Some(ranges.clone());
    }

    let edit_end = edit.deleted_end();
    let mut out: Vec<ColorRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (start, end) = if range.end <= edit.start {
            (range.start, range.end)
        } else if range.start >= edit_end {
            (offset_by(range.start, edit), offset_by(range.end, edit))
        } else if range.start < edit.start {
            (range.start, offset_by(range.end, edit).max(edit.start))
        } else {
            let start = edit.inserted_end();
            (start, start.saturating_add(range.end.saturating_sub(edit_end)))
        };

        if start >= end {
            tracing::debug!(
                start = range.start,
                end = range.end,
                color = %range.color,
                "color range consumed by deletion"
            );
            continue;
        }

        match out.last_mut() {
            Some(prev) if prev.end == start && prev.color == range.color => prev.end = end,
            _ => out.push(ColorRange::new(start, end, range.color.as_str())),
        }
    }

    tracing::trace!(
        edit_start = edit.start,
        inserted = edit.inserted,
        deleted = edit.deleted,
        kept = out.len(),
        "shifted color ranges"
    );
    ColorRanges::from_normalized(out)
}
