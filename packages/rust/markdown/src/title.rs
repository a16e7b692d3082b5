//! Title and anchor derivation from chapter filenames.
//!
//! `2.1-prompt-engineering.md` → title `prompt-engineering`,
//! anchor `prompt-engineering`.

use std::sync::LazyLock;

use regex::Regex;

/// Markdown file extension recognized for chapters.
pub const MARKDOWN_EXT: &str = ".md";

/// Matches one leading `N`, `N.`, `N.M` prefix with an optional dash.
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d*)?-?").expect("prefix regex"));

/// Strip the extension and the leading numeric prefix from a filename.
///
/// A filename without a numeric prefix yields the extension-stripped name.
pub fn derive_title(filename: &str) -> String {
    let stem = filename.strip_suffix(MARKDOWN_EXT).unwrap_or(filename);
    PREFIX_RE.replace(stem, "").into_owned()
}

/// Lowercase `title` and replace everything except ASCII alphanumerics and
/// CJK ideographs with `-`.
///
/// Other scripts collapse to dashes, so two titles written only in such
/// scripts can produce the same anchor.
pub fn derive_anchor(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if is_anchor_char(c) { c } else { '-' })
        .collect()
}

fn is_anchor_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_extension_and_prefix() {
        assert_eq!(derive_title("2.1-prompt-engineering.md"), "prompt-engineering");
        assert_eq!(derive_title("10-intro.md"), "intro");
        assert_eq!(derive_title("3.2-tools.md"), "tools");
        assert_eq!(derive_title("7.md"), "");
    }

    #[test]
    fn title_without_dash_or_section() {
        assert_eq!(derive_title("4第四章.md"), "第四章");
        assert_eq!(derive_title("5.概述.md"), "概述");
    }

    #[test]
    fn title_strips_only_one_prefix() {
        assert_eq!(derive_title("1-2-3.md"), "2-3");
    }

    #[test]
    fn title_without_prefix_keeps_name() {
        assert_eq!(derive_title("notes.md"), "notes");
        assert_eq!(derive_title("appendix-a.md"), "appendix-a");
    }

    #[test]
    fn anchor_lowercases_and_dashes() {
        assert_eq!(derive_anchor("Prompt Engineering"), "prompt-engineering");
        assert_eq!(derive_anchor("C++ & Rust"), "c-----rust");
        assert_eq!(derive_anchor("setup"), "setup");
    }

    #[test]
    fn anchor_keeps_cjk_ideographs() {
        assert_eq!(derive_anchor("Claude Code入门"), "claude-code入门");
        assert_eq!(derive_anchor("提示词：基础"), "提示词-基础");
    }

    #[test]
    fn anchor_collapses_other_scripts() {
        assert_eq!(derive_anchor("Ωμέγα"), "-----");
        assert_eq!(derive_anchor("Ωμέγα"), derive_anchor("Δέλτα"));
    }
}
