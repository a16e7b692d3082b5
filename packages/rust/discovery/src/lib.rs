//! Chapter discovery and ordering.
//!
//! Lists the chapter directory, keeps the markdown files that look like
//! chapters, and orders them by the `(chapter, section)` key parsed from
//! their filenames.

mod order;

use bookbuilder_markdown::{derive_anchor, derive_title, is_markdown_file};
use bookbuilder_shared::{BookError, BuildConfig, ChapterFile, Result};
use tracing::{debug, info, instrument, warn};

pub use order::{has_numeric_prefix, parse_order_key, sort_manifest};

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

/// Scan the chapter directory and return the ordered manifest.
///
/// Failing to list the directory is fatal: there is nothing to build
/// without it. Names that are not valid UTF-8 are skipped.
#[instrument(skip_all, fields(dir = %config.chapters_dir.display()))]
pub async fn scan_chapters(config: &BuildConfig) -> Result<Vec<ChapterFile>> {
    let dir = &config.chapters_dir;
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| BookError::list_dir(dir, e))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| BookError::list_dir(dir, e))?
    {
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!(name = ?raw, "skipping non UTF-8 filename"),
        }
    }

    debug!(entries = names.len(), "chapter directory listed");

    let manifest = build_manifest(names, config);

    info!(chapters = manifest.len(), "chapter manifest built");
    Ok(manifest)
}

/// Filter directory entry names and sort the survivors into a manifest.
///
/// `names` must be in directory-listing order; unnumbered entries keep that
/// order relative to each other.
pub fn build_manifest<I>(names: I, config: &BuildConfig) -> Vec<ChapterFile>
where
    I: IntoIterator<Item = String>,
{
    let mut manifest: Vec<ChapterFile> = names
        .into_iter()
        .filter(|name| is_chapter_candidate(name, config))
        .map(chapter_file)
        .collect();

    sort_manifest(&mut manifest);
    manifest
}

/// Whether a directory entry name should become a chapter.
pub fn is_chapter_candidate(name: &str, config: &BuildConfig) -> bool {
    if !is_markdown_file(name) {
        return false;
    }
    if config.is_excluded(name) {
        debug!(name, "excluded by name");
        return false;
    }
    if !config.include_unnumbered && !has_numeric_prefix(name) {
        debug!(name, "no numeric prefix, skipping");
        return false;
    }
    true
}

/// Build the manifest entry for one filename.
pub fn chapter_file(filename: String) -> ChapterFile {
    let key = parse_order_key(&filename);
    let title = derive_title(&filename);
    let anchor = derive_anchor(&title);
    ChapterFile {
        filename,
        key,
        title,
        anchor,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
