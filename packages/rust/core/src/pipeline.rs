//! End-to-end `build` pipeline: chapters dir → manifest → content → book file.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use bookbuilder_discovery::scan_chapters;
use bookbuilder_shared::{BuildConfig, ChapterContent, ChapterFile, Result};

use crate::assembler::{self, Clock};
use crate::reader::read_chapter;

/// Result of the `build_book` pipeline.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Path of the written book.
    pub output_file: PathBuf,
    /// Number of chapters in the manifest (and in the TOC).
    pub chapter_count: usize,
    /// Number of chapters that contributed a body section.
    pub body_count: usize,
    /// Chapters whose content was empty or unreadable.
    pub skipped: Vec<String>,
    /// Approximate size of the book in characters.
    pub char_count: usize,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called once the manifest is known.
    fn chapters_found(&self, count: usize);
    /// Called before each chapter is read.
    fn chapter_started(&self, filename: &str, current: usize, total: usize);
    /// Called when a chapter contributes no body.
    fn chapter_skipped(&self, filename: &str);
    /// Called when the pipeline completes.
    fn done(&self, summary: &BuildSummary);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn chapters_found(&self, _count: usize) {}
    fn chapter_started(&self, _filename: &str, _current: usize, _total: usize) {}
    fn chapter_skipped(&self, _filename: &str) {}
    fn done(&self, _summary: &BuildSummary) {}
}

/// Run the full `build` pipeline.
///
/// 1. Discovery: list, filter and order chapter files
/// 2. Read each chapter, one at a time
/// 3. Assemble the book in memory
/// 4. Write the output file
#[instrument(skip_all, fields(dir = %config.chapters_dir.display(), out = %config.output_file.display()))]
pub async fn build_book(
    config: &BuildConfig,
    clock: &dyn Clock,
    progress: &dyn ProgressReporter,
) -> Result<BuildSummary> {
    let start = Instant::now();
    config.validate()?;

    info!("starting book build");

    // --- Phase 1: Discovery ---
    progress.phase("Scanning chapters");
    let manifest = scan_chapters(config).await?;
    progress.chapters_found(manifest.len());

    if manifest.is_empty() {
        warn!("no chapter files found, the book will only contain front and back matter");
    }

    // --- Phase 2: Read ---
    progress.phase("Reading chapters");
    let chapters = load_chapters(config, manifest, progress).await;
    let skipped: Vec<String> = chapters
        .iter()
        .filter(|c| !c.has_body())
        .map(|c| c.file.filename.clone())
        .collect();

    // --- Phase 3: Assemble ---
    progress.phase("Assembling book");
    let book = assembler::assemble(&chapters, config, clock);

    // --- Phase 4: Write ---
    progress.phase("Writing book");
    assembler::write_book(&config.output_file, &book).await?;

    let summary = BuildSummary {
        output_file: config.output_file.clone(),
        chapter_count: chapters.len(),
        body_count: chapters.len() - skipped.len(),
        skipped,
        char_count: book.chars().count(),
        elapsed: start.elapsed(),
    };

    info!(
        chapters = summary.chapter_count,
        bodies = summary.body_count,
        chars = summary.char_count,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "book build complete"
    );

    progress.done(&summary);
    Ok(summary)
}

/// Read every manifest entry in order.
///
/// Unreadable chapters come back with empty text.
pub async fn load_chapters(
    config: &BuildConfig,
    manifest: Vec<ChapterFile>,
    progress: &dyn ProgressReporter,
) -> Vec<ChapterContent> {
    let total = manifest.len();
    let mut chapters = Vec::with_capacity(total);

    for (i, file) in manifest.into_iter().enumerate() {
        progress.chapter_started(&file.filename, i + 1, total);

        let text = read_chapter(&config.chapter_path(&file.filename)).await;
        if text.is_empty() {
            progress.chapter_skipped(&file.filename);
        }
        chapters.push(ChapterContent { file, text });
    }

    chapters
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
