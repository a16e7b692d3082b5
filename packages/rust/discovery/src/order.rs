//! Chapter order keys parsed from filenames.
//!
//! Filenames follow `<chapter>[.<section>][-<slug>].md`. The parser is
//! permissive: it never fails, it only pushes unparsable names to the end.

use std::sync::LazyLock;

use bookbuilder_shared::{ChapterFile, OrderKey};
use regex::Regex;

/// Matches `N` or `N.M` at the start of a filename.
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?").expect("order key regex"));

/// Parse the `(chapter, section)` key from a filename.
///
/// `10-intro.md` → `(10, 0)`, `3.2-tools.md` → `(3, 2)`. Names without a
/// leading digit run, or with numbers that overflow `u32`, get the fallback key.
pub fn parse_order_key(filename: &str) -> OrderKey {
    let Some(caps) = KEY_RE.captures(filename) else {
        return OrderKey::fallback();
    };

    let Ok(major) = caps[1].parse::<u32>() else {
        return OrderKey::fallback();
    };
    let minor = match caps.get(2) {
        Some(m) => match m.as_str().parse::<u32>() {
            Ok(n) => n,
            Err(_) => return OrderKey::fallback(),
        },
        None => 0,
    };

    OrderKey::new(major, minor)
}

/// Whether a filename starts with a digit run.
pub fn has_numeric_prefix(filename: &str) -> bool {
    filename.starts_with(|c: char| c.is_ascii_digit())
}

/// Stable ascending sort by order key.
///
/// Entries with equal keys (notably all fallback keys) keep their relative
/// discovery order.
pub fn sort_manifest(entries: &mut [ChapterFile]) {
    entries.sort_by_key(|entry| entry.key);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
