//! Shared types, error model, and configuration for BookBuilder.
//!
//! This crate is the foundation depended on by all other BookBuilder crates.
//! It provides:
//! - [`BookError`]: the unified error type
//! - Domain types ([`ChapterFile`], [`OrderKey`], [`ChapterContent`])
//! - Configuration ([`BuildConfig`])

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{BuildConfig, DEFAULT_CHAPTERS_DIR, DEFAULT_EXCLUDES, DEFAULT_OUTPUT_FILE};
pub use error::{BookError, Result};
pub use types::{ChapterContent, ChapterFile, FALLBACK_ORDINAL, OrderKey};
