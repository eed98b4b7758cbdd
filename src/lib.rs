//! `colorspan` - per-character color overrides for editable text
//!
//! Tracks colored ranges over the logical text of a text element, keeps them
//! attached to their characters while the text is edited, and projects them
//! onto the word-wrapped string for drawing.
//!
//! The pipeline:
//!
//! - paint events go through [`apply_color_to_range`]
//! - text edits go through [`shift_color_ranges`] (or [`TextElement::edited`])
//! - rendering calls [`get_per_char_colors`] and then [`get_color_segments`]
//!   per line
//!
//! # Examples
//!
//! ```
//! use colorspan::{TextElement, Theme, get_color_segments};
//!
//! let element = TextElement::new("hello world", "#000000")
//!     .with_wrapped_text("hello\nworld")
//!     .painted(6, 11, "#e03131");
//!
//! let colors = element.per_char_colors(Theme::Light, str::to_string).unwrap();
//! let segments = get_color_segments("world", &colors[6..]);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].color, "#e03131");
//! ```

#![allow(clippy::module_name_repetitions)] // ColorRange in range, ColorSegment in segment
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::cast_possible_truncation)] // Intentional color channel casts
#![allow(clippy::cast_sign_loss)] // Intentional color channel casts

pub mod color;
pub mod error;
pub mod project;
pub mod range;
pub mod segment;

// Re-export core types at crate root
pub use color::{Rgba, Theme, apply_dark_mode_filter};
pub use error::{Error, Result};
pub use project::{TextElement, get_per_char_colors};
pub use range::{
    ColorRange, ColorRanges, SelectionColor, TextEdit, apply_color_to_range, cleanup_color_ranges,
    color_at, selection_color, shift_color_ranges,
};
pub use segment::{ColorSegment, get_color_segments, line_segments};
