//! Markdown helpers for chapter files.
//!
//! Derives human-readable titles and heading anchors from chapter filenames,
//! and decides whether a chapter body needs a synthesized heading.

mod title;

pub use title::{MARKDOWN_EXT, derive_anchor, derive_title};

/// Marker that opens an ATX heading.
pub const HEADING_MARKER: char = '#';

/// Whether trimmed chapter text already opens with a heading.
///
/// Only the first character is inspected; `#hashtag` counts as a heading.
pub fn starts_with_heading(text: &str) -> bool {
    text.starts_with(HEADING_MARKER)
}

/// A level-1 heading line for `title`, followed by a blank line.
pub fn level_one_heading(title: &str) -> String {
    format!("{HEADING_MARKER} {title}\n\n")
}

/// A TOC bullet linking `title` to `#anchor`.
pub fn toc_link(title: &str, anchor: &str) -> String {
    format!("- [{title}](#{anchor})\n")
}

/// Whether `name` has the chapter file extension.
pub fn is_markdown_file(name: &str) -> bool {
    name.ends_with(MARKDOWN_EXT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
