//! Turns section titles into file names and assigns split file numbers.

use crate::error::{Result, SplitError};
use crate::section::{Section, SectionTitle};

/// Maximum length of a sanitized title.
pub const MAX_NAME_LEN: usize = 50;

/// Index reserved for the preamble.
pub const PREAMBLE_INDEX: usize = 0;

/// Highest index a split file can carry.
pub const MAX_INDEX: usize = 99;

/// Base name used for the preamble split file.
pub const PREAMBLE_NAME: &str = "preamble";

/// Extension of split files.
pub const SPLIT_EXTENSION: &str = "md";

/// A section that has been assigned its position on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFile {
    pub index: usize,
    /// File name, e.g. `01-introduction.md`.
    pub name: String,
    pub content: String,
}

/// Sanitizes a heading title into a safe file name fragment.
///
/// Spaces become hyphens first, then anything outside `[A-Za-z0-9_.-]` is
/// removed, the result is lowercased and cut to [`MAX_NAME_LEN`] characters.
/// The output only contains `[a-z0-9_.-]`, and sanitizing twice is a no-op.
pub fn sanitize(title: &str) -> String {
    title
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .map(|c| c.to_ascii_lowercase())
        .take(MAX_NAME_LEN)
        .collect()
}

/// Returns the numeric prefix used for split file `index`, e.g. `"07-"`.
pub fn index_prefix(index: usize) -> String {
    format!("{index:02}-")
}

/// Builds the split file name for a section at `index`.
pub fn file_name(index: usize, title: &SectionTitle) -> String {
    let base = match title {
        SectionTitle::Preamble => PREAMBLE_NAME.to_string(),
        SectionTitle::Heading(text) => sanitize(text),
    };

    format!("{}{base}.{SPLIT_EXTENSION}", index_prefix(index))
}

/// Numbers parsed sections for writing.
///
/// The preamble always gets index `00`. Headed sections are numbered from `01`
/// in document order with no gaps, whether or not a preamble exists.
pub fn number_sections(sections: Vec<Section>) -> Result<Vec<SplitFile>> {
    let headed = sections.iter().filter(|s| !s.title.is_preamble()).count();
    if headed > MAX_INDEX {
        return Err(SplitError::TooManySections { count: headed });
    }

    let mut files = Vec::with_capacity(sections.len());
    let mut next_index = PREAMBLE_INDEX + 1;

    for section in sections {
        let index = if section.title.is_preamble() {
            PREAMBLE_INDEX
        } else {
            let index = next_index;
            next_index += 1;
            index
        };

        files.push(SplitFile {
            index,
            name: file_name(index, &section.title),
            content: section.content,
        });
    }

    Ok(files)
}
