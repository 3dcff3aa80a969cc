//! Writes the sections of a document into numbered split files.

use crate::error::{Result, SplitError};
use crate::naming::{number_sections, SplitFile};
use crate::report::Reporter;
use crate::section::parse;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory created next to the source document.
pub const SPLITS_DIR_NAME: &str = "splits";

/// Outcome of a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Directory the files were written to.
    pub splits_dir: PathBuf,
    /// File names written, in order.
    pub files: Vec<String>,
}

impl SplitReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Returns the default splits directory for `source`: `splits/` next to it.
pub fn splits_dir_for(source: &Path) -> PathBuf {
    source
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(SPLITS_DIR_NAME)
}

/// Reads the source document.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SplitError::NotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|err| SplitError::Read {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Parses and numbers `content` without touching the filesystem.
///
/// Fails with [`SplitError::NoSections`] when the document is empty or blank.
pub fn plan(content: &str) -> Result<Vec<SplitFile>> {
    let sections = parse(content);
    if sections.is_empty() {
        return Err(SplitError::NoSections);
    }

    number_sections(sections)
}

/// Reads `source` and plans its split files.
pub fn load(source: &Path) -> Result<Vec<SplitFile>> {
    let content = read_source(source)?;
    plan(&content)
}

/// Splits `source` into the `splits/` directory next to it.
pub fn split(source: &Path, reporter: &mut dyn Reporter) -> Result<SplitReport> {
    split_into(source, &splits_dir_for(source), reporter)
}

/// Splits `source` into `splits_dir`, creating the directory if needed.
///
/// Existing files with the same names are overwritten, but other files are
/// never removed: re-splitting a document with fewer sections into the same
/// directory leaves the old higher-numbered files behind, and a later merge
/// picks them up. When a write fails, the files written so far are left in
/// place. In both cases, clean the directory before rerunning.
pub fn split_into(
    source: &Path,
    splits_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Result<SplitReport> {
    let files = load(source)?;

    fs::create_dir_all(splits_dir).map_err(|err| SplitError::CreateDir {
        path: splits_dir.to_path_buf(),
        source: err,
    })?;

    reporter.begin(files.len());

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = splits_dir.join(&file.name);
        fs::write(&path, &file.content).map_err(|err| SplitError::Write {
            path: path.clone(),
            source: err,
        })?;

        log::debug!("Wrote {} ({} bytes)", path.display(), file.content.len());
        reporter.file_written(&file.name);
        written.push(file.name);
    }

    reporter.finish();

    Ok(SplitReport {
        splits_dir: splits_dir.to_path_buf(),
        files: written,
    })
}
