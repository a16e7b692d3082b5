//! Book assembler.
//!
//! Takes the ordered chapters and their content, builds the merged
//! markdown document in memory, then writes it to disk in one step.

use std::path::Path;

use chrono::Local;
use tracing::{debug, info, instrument};

use bookbuilder_markdown::{level_one_heading, starts_with_heading};
use bookbuilder_shared::{BookError, BuildConfig, ChapterContent, ChapterFile, Result};

use crate::toc::render_toc;

/// Timestamp layout, e.g. `2025/3/7 09:05:01`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// Label of the generation timestamp under the title.
pub const GENERATED_AT_LABEL: &str = "> 生成时间: ";

/// Label of the completion timestamp at the end of the book.
pub const COMPLETED_AT_LABEL: &str = "构建完成时间: ";

/// Separator between chapters.
const SEPARATOR: &str = "\n\n---\n\n";

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of the timestamps embedded in the book.
pub trait Clock: Send + Sync {
    /// Current time, already formatted for display.
    fn timestamp(&self) -> String;
}

/// Wall clock in the local timezone.
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Build the complete book document.
///
/// Layout:
/// ```text
/// # <book title>
/// > <subtitle>
/// > 生成时间: <timestamp>
/// ## 📖 目录            one entry per chapter, readable or not
/// ---
/// # <title>            per readable chapter; only if the body lacks a heading
/// <body>
/// ---
/// ## 📝 版权声明
/// 构建完成时间: <timestamp>
/// ```
#[instrument(skip_all, fields(chapters = chapters.len()))]
pub fn assemble(chapters: &[ChapterContent], config: &BuildConfig, clock: &dyn Clock) -> String {
    let mut book = String::new();

    book.push_str(&format!("# {}\n\n", config.book_title));
    book.push_str(&format!("> {}\n\n", config.book_subtitle));
    book.push_str(&format!("{GENERATED_AT_LABEL}{}\n\n", clock.timestamp()));

    let manifest: Vec<ChapterFile> = chapters.iter().map(|c| c.file.clone()).collect();
    book.push_str(&render_toc(&manifest));

    let mut bodies = 0;
    for chapter in chapters.iter().filter(|c| c.has_body()) {
        book.push_str(SEPARATOR);
        if !starts_with_heading(&chapter.text) {
            book.push_str(&level_one_heading(&chapter.file.title));
        }
        book.push_str(&chapter.text);
        book.push_str("\n\n");
        bodies += 1;
    }

    book.push_str(SEPARATOR);
    book.push_str("## 📝 版权声明\n\n");
    book.push_str(&format!("{}\n\n", config.copyright_notice));
    book.push_str(&format!("{COMPLETED_AT_LABEL}{}\n", clock.timestamp()));

    debug!(bodies, len = book.len(), "book assembled");
    book
}

/// Overwrite `path` with `content`.
///
/// Writes to a temp file next to the target and renames it into place, so
/// readers never see a half-written book.
#[instrument(skip(content), fields(path = %path.display(), len = content.len()))]
pub async fn write_book(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| BookError::validation(format!("{} is not a file path", path.display())))?;

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| BookError::io(parent, e))?;
    }

    let temp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    tokio::fs::write(&temp, content)
        .await
        .map_err(|e| BookError::io(&temp, e))?;

    if let Err(e) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(BookError::io(path, e));
    }

    info!("book written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
