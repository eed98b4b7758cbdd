//! End-to-end paint / edit / render scenarios.
//!
//! Each test drives a [`TextElement`] the way an editor would: paint a
//! selection, type or delete text, re-wrap, then turn the result into draw
//! segments.

use std::sync::Once;

use colorspan::{
    ColorRange, ColorRanges, ColorSegment, SelectionColor, TextEdit, TextElement, Theme,
    apply_color_to_range, apply_dark_mode_filter, get_color_segments, line_segments,
    selection_color, shift_color_ranges,
};
use tracing::info;

const STROKE: &str = "#1e1e1e";
const RED: &str = "#e03131";
const BLUE: &str = "#1971c2";

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn pairs<'a>(segments: &[ColorSegment<'a>]) -> Vec<(&'a str, &'a str)> {
    segments.iter().map(|s| (s.text, s.color)).collect()
}

#[test]
fn paint_then_render_wrapped_lines() {
    setup_test_logging();
    let element = TextElement::new("the quick brown fox", STROKE)
        .with_wrapped_text("the quick\nbrown fox")
        .painted(4, 15, RED);
    info!(ranges = ?element.color_ranges, "painted");

    let colors = element
        .per_char_colors(Theme::Light, apply_dark_mode_filter)
        .expect("element has overrides");
    assert_eq!(colors.len(), element.text.chars().count());

    let lines = line_segments(&element.text, &colors);
    assert_eq!(lines.len(), 2);
    assert_eq!(pairs(&lines[0]), vec![("the ", STROKE), ("quick", RED)]);
    assert_eq!(pairs(&lines[1]), vec![("brown", RED), (" fox", STROKE)]);
}

#[test]
fn split_paint_then_type_inside() {
    setup_test_logging();
    let ranges = apply_color_to_range(None, 0, 10, "red", STROKE);
    let ranges = apply_color_to_range(ranges.as_ref(), 3, 6, "blue", STROKE);
    assert_eq!(
        ranges.as_deref(),
        Some(
            &[
                ColorRange::new(0, 3, "red"),
                ColorRange::new(3, 6, "blue"),
                ColorRange::new(6, 10, "red"),
            ][..]
        )
    );

    // Typing inside the blue run widens it.
    let ranges = shift_color_ranges(ranges.as_ref(), TextEdit::insert(4, 2)).unwrap();
    assert_eq!(ranges[1], ColorRange::new(3, 8, "blue"));
    assert_eq!(ranges[2], ColorRange::new(8, 12, "red"));
}

#[test]
fn deleting_blue_run_rejoins_red() {
    setup_test_logging();
    let ranges = ColorRanges::from_canonical(vec![
        ColorRange::new(0, 3, "red"),
        ColorRange::new(3, 6, "blue"),
        ColorRange::new(6, 10, "red"),
    ])
    .unwrap();
    let ranges = shift_color_ranges(ranges.as_ref(), TextEdit::delete(3, 3)).unwrap();
    assert_eq!(ranges.as_slice(), &[ColorRange::new(0, 7, "red")]);
}

#[test]
fn element_edit_cycle_keeps_colors_on_words() {
    setup_test_logging();
    let element = TextElement::new("hello world", STROKE).painted(6, 11, BLUE);

    // Prepend a word; "world" stays blue.
    let element = element.edited("oh hello world", "oh hello world");
    assert_eq!(
        element.color_ranges.as_deref(),
        Some(&[ColorRange::new(9, 14, BLUE)][..])
    );

    // Rewrap with the space before "world" turned into a break.
    let element = element.edited("oh hello world", "oh hello\nworld");
    let colors = element.per_char_colors(Theme::Light, str::to_string).unwrap();
    let lines = line_segments(&element.text, &colors);
    assert_eq!(pairs(&lines[1]), vec![("world", BLUE)]);

    // Erase with the default color.
    let element = element.painted(0, 14, STROKE);
    assert!(element.per_char_colors(Theme::Light, str::to_string).is_none());
}

#[test]
fn dark_theme_render() {
    setup_test_logging();
    let element = TextElement::new("ab", "#000000").painted(1, 2, "#ffffff");
    let colors = element
        .per_char_colors(Theme::Dark, apply_dark_mode_filter)
        .unwrap();
    let segments = get_color_segments(&element.text, &colors);
    assert_eq!(pairs(&segments), vec![("a", "#ededed"), ("b", "#121212")]);
}

#[test]
fn picker_reports_selection_color() {
    setup_test_logging();
    let element = TextElement::new("red and blue", STROKE)
        .painted(0, 3, RED)
        .painted(8, 12, BLUE);
    let ranges = element.color_ranges.as_ref();
    assert_eq!(
        selection_color(ranges, 0, 3, STROKE),
        SelectionColor::Uniform(RED)
    );
    assert_eq!(
        selection_color(ranges, 4, 7, STROKE),
        SelectionColor::Uniform(STROKE)
    );
    assert_eq!(selection_color(ranges, 0, 12, STROKE), SelectionColor::Mixed);
}

#[test]
fn empty_text_renders_single_empty_segment() {
    setup_test_logging();
    let none: [&str; 0] = [];
    let segments = get_color_segments("", &none);
    assert_eq!(pairs(&segments), vec![("", "")]);
}
