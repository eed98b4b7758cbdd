//! Same-color runs for drawing.

use unicode_width::UnicodeWidthStr;

/// A run of text drawn in one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSegment<'a> {
    /// The text content.
    pub text: &'a str,
    /// The color to draw it in.
    pub color: &'a str,
}

impl<'a> ColorSegment<'a> {
    /// Create a new segment.
    #[must_use]
    pub fn new(text: &'a str, color: &'a str) -> Self {
        Self { text, color }
    }

    /// Display width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text)
    }

    /// Number of chars in the segment.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split one line into maximal runs of equal color.
///
/// `colors` holds one entry per char of `line`. An empty line yields a single
/// empty segment in the first color (or `""`). If `colors` is short, the
/// remaining chars keep the last color seen.
#[must_use]
pub fn get_color_segments<'a, S>(line: &'a str, colors: &'a [S]) -> Vec<ColorSegment<'a>>
where
    S: AsRef<str>,
{
    let first = colors.first().map_or("", AsRef::as_ref);
    if line.is_empty() {
        return vec![ColorSegment::new("", first)];
    }

    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut run_color = first;
    for (i, (byte, _)) in line.char_indices().enumerate() {
        let color = colors.get(i).map_or(run_color, AsRef::as_ref);
        if color != run_color {
            if byte > run_start {
                segments.push(ColorSegment::new(&line[run_start..byte], run_color));
            }
            run_start = byte;
            run_color = color;
        }
    }
    segments.push(ColorSegment::new(&line[run_start..], run_color));
    segments
}

/// Segments for every line of wrapped text.
///
/// `colors` is the per-char array for the whole of `text`, newlines included;
/// each line gets the matching slice. Newline chars are not emitted.
#[must_use]
pub fn line_segments<'a, S>(text: &'a str, colors: &'a [S]) -> Vec<Vec<ColorSegment<'a>>>
where
    S: AsRef<str>,
{
    let mut offset = 0;
    text.split('\n')
        .map(|line| {
            let len = line.chars().count();
            let start = offset.min(colors.len());
            let end = (offset + len).min(colors.len());
            offset += len + 1;
            get_color_segments(line, &colors[start..end])
        })
        .collect()
}
