//! TOC (Table of Contents) rendering.
//!
//! One bullet per manifest entry, in manifest order, linking the derived
//! title to its heading anchor. Entries are emitted whether or not the
//! chapter body could be read.

use tracing::{debug, instrument};

use bookbuilder_markdown::toc_link;
use bookbuilder_shared::ChapterFile;

/// Heading of the TOC section.
pub const TOC_HEADING: &str = "## 📖 目录";

/// Render the TOC section, including its trailing separator.
#[instrument(skip_all, fields(entries = manifest.len()))]
pub fn render_toc(manifest: &[ChapterFile]) -> String {
    let mut out = format!("{TOC_HEADING}\n\n");
    for chapter in manifest {
        out.push_str(&toc_link(&chapter.title, &chapter.anchor));
    }
    out.push_str("\n---\n\n");

    debug!(len = out.len(), "TOC rendered");
    out
}

/// Count the TOC bullets in an assembled document.
#[cfg(test)]
pub(crate) fn count_entries(document: &str) -> usize {
    let Some(start) = document.find(TOC_HEADING) else {
        return 0;
    };
    document[start..]
        .lines()
        .skip(1)
        .take_while(|line| !line.starts_with("---"))
        .filter(|line| line.starts_with("- ["))
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bookbuilder_discovery::chapter_file;

    #[test]
    fn renders_entries_in_order() {
        let manifest = vec![
            chapter_file("1-intro.md".into()),
            chapter_file("2.1-Getting Started.md".into()),
        ];

        let toc = render_toc(&manifest);
        assert_eq!(
            toc,
            "## 📖 目录\n\n\
             - [intro](#intro)\n\
             - [Getting Started](#getting-started)\n\
             \n---\n\n"
        );
        assert_eq!(count_entries(&toc), 2);
    }

    #[test]
    fn empty_manifest_renders_bare_section() {
        let toc = render_toc(&[]);
        assert_eq!(toc, "## 📖 目录\n\n\n---\n\n");
        assert_eq!(count_entries(&toc), 0);
    }

    #[test]
    fn count_ignores_body_lists() {
        let doc = format!(
            "# Book\n\n{}\n\n---\n\n# intro\n\n- [not toc](#x)\n",
            render_toc(&[chapter_file("1-intro.md".into())])
        );
        assert_eq!(count_entries(&doc), 1);
    }
}
