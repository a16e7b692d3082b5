//! Build configuration for BookBuilder.
//!
//! There is no config file: every option has a built-in default, and the CLI
//! may override a few of them with flags. The resolved [`BuildConfig`] is an
//! immutable value passed through discovery, assembly and persistence.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BookError, Result};

/// Default chapter directory, relative to the working directory.
pub const DEFAULT_CHAPTERS_DIR: &str = "./chapters";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "AI编程完整书籍.md";

/// Names that are never treated as chapters.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "AI编程书籍大纲.md",
    "README.md",
    "package.json",
    "build-book.js",
    "node_modules",
    ".git",
    ".DS_Store",
    "文件列表.md",
    "claude code基本介绍.md",
    "智能AI编程效率提升利器.md",
];

// ---------------------------------------------------------------------------
// Config struct
// ---------------------------------------------------------------------------

/// Resolved configuration for one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory holding the chapter files.
    #[serde(default = "default_chapters_dir")]
    pub chapters_dir: PathBuf,

    /// Path of the merged book, overwritten on every build.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// File and directory names skipped during discovery.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Admit markdown files without a numeric prefix; they sort last.
    #[serde(default)]
    pub include_unnumbered: bool,

    /// Level-1 heading at the top of the book.
    #[serde(default = "default_book_title")]
    pub book_title: String,

    /// Blockquote line under the title.
    #[serde(default = "default_book_subtitle")]
    pub book_subtitle: String,

    /// Body of the closing copyright section.
    #[serde(default = "default_copyright_notice")]
    pub copyright_notice: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            chapters_dir: default_chapters_dir(),
            output_file: default_output_file(),
            exclude: default_excludes(),
            include_unnumbered: false,
            book_title: default_book_title(),
            book_subtitle: default_book_subtitle(),
            copyright_notice: default_copyright_notice(),
        }
    }
}

fn default_chapters_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CHAPTERS_DIR)
}
fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}
fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
}
fn default_book_title() -> String {
    "AI编程完整书籍".into()
}
fn default_book_subtitle() -> String {
    "本文件由自动化脚本生成，包含完整的AI编程书籍内容".into()
}
fn default_copyright_notice() -> String {
    "本书为开源项目，遵循相应开源协议。".into()
}

impl BuildConfig {
    /// Whether `name` is in the exclusion set.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }

    /// Full path of a chapter file inside the chapter directory.
    pub fn chapter_path(&self, filename: &str) -> PathBuf {
        self.chapters_dir.join(filename)
    }

    /// Check only the chapter source; enough for commands that never write.
    pub fn validate_source(&self) -> Result<()> {
        if self.chapters_dir.as_os_str().is_empty() {
            return Err(BookError::config("chapters_dir must not be empty"));
        }
        Ok(())
    }

    /// Reject configurations that cannot produce a sane build.
    pub fn validate(&self) -> Result<()> {
        self.validate_source()?;
        if self.output_file.file_name().is_none() {
            return Err(BookError::config(format!(
                "output_file {:?} does not name a file",
                self.output_file
            )));
        }

        let output_parent = self.output_file.parent().unwrap_or(Path::new(""));
        if normalized(output_parent) == normalized(&self.chapters_dir) {
            return Err(BookError::config(format!(
                "output_file {} must not live inside the chapter directory {}",
                self.output_file.display(),
                self.chapters_dir.display()
            )));
        }

        Ok(())
    }
}

/// Lexical normalization: drops `.` components so `./chapters == chapters`.
fn normalized(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
