//! Chapter content reader.
//!
//! A chapter that cannot be read is downgraded to a warning: it keeps its
//! TOC entry but contributes no body, so one bad file never blocks the book.

use std::path::Path;

use tracing::{debug, warn};

/// Byte order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Read a chapter file and trim surrounding whitespace and any BOM.
///
/// Returns an empty string if the file is missing, unreadable, or not UTF-8.
pub async fn read_chapter(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let trimmed = content.trim_matches(|c: char| c.is_whitespace() || c == BOM);
            debug!(path = %path.display(), len = trimmed.len(), "chapter read");
            trimmed.to_string()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read chapter, skipping body");
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bb-reader-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn reads_and_trims() {
        let tmp = temp_dir();
        let path = tmp.join("1-intro.md");
        std::fs::write(&path, "\n\n  # Intro\n\nBody text.  \n\n").unwrap();

        assert_eq!(read_chapter(&path).await, "# Intro\n\nBody text.");

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn strips_leading_bom() {
        let tmp = temp_dir();
        let path = tmp.join("1-intro.md");
        std::fs::write(&path, "\u{feff}# Intro\n\nBody\n").unwrap();

        let text = read_chapter(&path).await;
        assert_eq!(text, "# Intro\n\nBody");
        assert!(bookbuilder_markdown::starts_with_heading(&text));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn bom_only_file_reads_empty() {
        let tmp = temp_dir();
        let path = tmp.join("2-blank.md");
        std::fs::write(&path, "\u{feff}\n  \n").unwrap();

        assert_eq!(read_chapter(&path).await, "");

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let tmp = temp_dir();
        assert_eq!(read_chapter(&tmp.join("9-gone.md")).await, "");
        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn invalid_utf8_reads_empty() {
        let tmp = temp_dir();
        let path = tmp.join("3-binary.md");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        assert_eq!(read_chapter(&path).await, "");

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn directory_reads_empty() {
        let tmp = temp_dir();
        let path = tmp.join("4-folder.md");
        std::fs::create_dir_all(&path).unwrap();

        assert_eq!(read_chapter(&path).await, "");

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
