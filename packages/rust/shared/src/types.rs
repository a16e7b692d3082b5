//! Core domain types for BookBuilder.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Key reported for chapters whose filename has no numeric prefix.
pub const FALLBACK_ORDINAL: u32 = 999;

// ---------------------------------------------------------------------------
// OrderKey
// ---------------------------------------------------------------------------

/// Sort key parsed from a chapter filename: `3.2-tools.md` → `(3, 2)`.
///
/// A fallback key stands for "no numeric prefix". It sorts after every
/// parsed key and compares equal to any other fallback key, so a stable
/// sort keeps unnumbered files in discovery order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderKey {
    pub major: u32,
    pub minor: u32,
    pub is_fallback: bool,
}

impl OrderKey {
    /// A key parsed from a numeric prefix.
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            is_fallback: false,
        }
    }

    /// The key for a filename without a numeric prefix.
    pub fn fallback() -> Self {
        Self {
            major: FALLBACK_ORDINAL,
            minor: FALLBACK_ORDINAL,
            is_fallback: true,
        }
    }

    /// The `(chapter, section)` pair.
    pub fn pair(&self) -> (u32, u32) {
        (self.major, self.minor)
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_fallback, other.is_fallback) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.pair().cmp(&other.pair()),
        }
    }
}

impl std::fmt::Display for OrderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_fallback {
            write!(f, "-")
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

// ---------------------------------------------------------------------------
// ChapterFile
// ---------------------------------------------------------------------------

/// One chapter file, snapshotted at discovery time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterFile {
    /// Bare filename inside the chapter directory.
    pub filename: String,
    /// Parsed sort key.
    pub key: OrderKey,
    /// Human-readable title derived from the filename.
    pub title: String,
    /// Heading anchor derived from `title`.
    pub anchor: String,
}

// ---------------------------------------------------------------------------
// ChapterContent
// ---------------------------------------------------------------------------

/// A manifest entry paired with its trimmed text.
///
/// Empty `text` means the chapter could not be read (or was blank); it keeps
/// its TOC entry but contributes no body.
#[derive(Debug, Clone)]
pub struct ChapterContent {
    pub file: ChapterFile,
    pub text: String,
}

impl ChapterContent {
    /// Whether this chapter contributes a body section.
    pub fn has_body(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_keys_order_numerically() {
        assert!(OrderKey::new(2, 0) < OrderKey::new(10, 0));
        assert!(OrderKey::new(2, 1) < OrderKey::new(2, 2));
        assert!(OrderKey::new(2, 9) < OrderKey::new(3, 0));
        assert_eq!(OrderKey::new(4, 1), OrderKey::new(4, 1));
    }

    #[test]
    fn fallback_sorts_after_everything() {
        assert!(OrderKey::new(999, 999) < OrderKey::fallback());
        assert!(OrderKey::new(5000, 0) < OrderKey::fallback());
        assert_eq!(OrderKey::fallback(), OrderKey::fallback());
        assert_eq!(OrderKey::fallback().pair(), (FALLBACK_ORDINAL, FALLBACK_ORDINAL));
    }

    #[test]
    fn key_display() {
        assert_eq!(OrderKey::new(3, 2).to_string(), "3.2");
        assert_eq!(OrderKey::fallback().to_string(), "-");
    }

    #[test]
    fn chapter_file_serialization() {
        let file = ChapterFile {
            filename: "2.1-setup.md".into(),
            key: OrderKey::new(2, 1),
            title: "setup".into(),
            anchor: "setup".into(),
        };
        let json = serde_json::to_string(&file).expect("serialize");
        assert!(json.contains("\"major\":2"));
        let parsed: ChapterFile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, file);
    }
}
