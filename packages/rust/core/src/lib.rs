//! Core pipeline orchestration and domain logic for BookBuilder.
//!
//! This crate ties together chapter discovery, content reading, TOC
//! rendering and book assembly into the end-to-end `build_book` workflow.

pub mod assembler;
pub mod pipeline;
pub mod reader;
pub mod toc;
