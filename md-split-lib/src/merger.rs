//! Reassembles numbered split files into a single document.

use crate::error::{Result, SplitError};
use crate::naming::{index_prefix, MAX_INDEX, PREAMBLE_INDEX, SPLIT_EXTENSION};
use crate::report::Reporter;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Separator inserted between consecutive split files.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// A merged document together with the files it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedDocument {
    pub content: String,
    /// File names merged, in order.
    pub files: Vec<String>,
}

/// Outcome of a merge run that wrote its result to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub output: PathBuf,
    /// File names merged, in order.
    pub files: Vec<String>,
}

impl MergeReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Lists the markdown files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not searched.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(SplitError::NotFound(dir.to_path_buf()));
    }

    let list_err = |err| SplitError::ListDir {
        path: dir.to_path_buf(),
        source: err,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if path.is_file() && path.extension() == Some(OsStr::new(SPLIT_EXTENSION)) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(SplitError::NoFiles(dir.to_path_buf()));
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Orders split files by their numeric prefix.
///
/// For each index from `00` to `99`, a file whose name starts with that
/// index's prefix (e.g. `"03-"`) is selected. Failing that, the first file
/// without a leading index whose name contains the prefix is taken. A file is
/// selected at most once. Missing indices are skipped and files matching no
/// index are left out.
pub fn order_split_files(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut ordered: Vec<PathBuf> = Vec::new();

    for index in PREAMBLE_INDEX..=MAX_INDEX {
        let prefix = index_prefix(index);
        let taken = &ordered;
        let unused = || files.iter().filter(move |path| !taken.contains(path));

        let found = unused()
            .find(|path| base_name(path).is_some_and(|name| name.starts_with(&prefix)))
            .or_else(|| {
                unused().find(|path| {
                    base_name(path).is_some_and(|name| {
                        leading_index(name).is_none() && name.contains(&prefix)
                    })
                })
            })
            .cloned();

        match found {
            Some(path) => ordered.push(path),
            None => log::trace!("No split file for index {index:02}"),
        }
    }

    for path in files.iter().filter(|path| !ordered.contains(path)) {
        log::warn!("Ignoring {}: no usable numeric prefix", path.display());
    }

    ordered
}

/// Returns the index a file name starts with, e.g. `Some(7)` for `07-x.md`.
fn leading_index(name: &str) -> Option<usize> {
    let digits = name.get(..2)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) || name.as_bytes().get(2) != Some(&b'-') {
        return None;
    }

    digits.parse().ok()
}

/// Joins section contents with exactly [`SECTION_SEPARATOR`] between them.
///
/// Trailing line breaks (`\n` and `\r\n`) of every part except the last are
/// absorbed into the separator, so merging the split of a merged document is
/// a fixed point.
pub fn join_sections<S: AsRef<str>>(parts: &[S]) -> String {
    let mut merged = String::new();

    for (i, part) in parts.iter().enumerate() {
        let part = part.as_ref();
        if i + 1 < parts.len() {
            merged.push_str(part.trim_end_matches(['\r', '\n']));
            merged.push_str(SECTION_SEPARATOR);
        } else {
            merged.push_str(part);
        }
    }

    merged
}

/// Merges the numbered split files found in `splits_dir`.
pub fn merge(splits_dir: &Path, reporter: &mut dyn Reporter) -> Result<MergedDocument> {
    let files = discover(splits_dir)?;
    let ordered = order_split_files(&files);

    if ordered.is_empty() {
        return Err(SplitError::NoNumberedFiles(splits_dir.to_path_buf()));
    }

    reporter.begin(ordered.len());

    let mut parts = Vec::with_capacity(ordered.len());
    let mut names = Vec::with_capacity(ordered.len());
    for path in &ordered {
        let content = fs::read_to_string(path).map_err(|err| SplitError::Read {
            path: path.clone(),
            source: err,
        })?;
        log::debug!("Read {} ({} bytes)", path.display(), content.len());

        let name = base_name(path).unwrap_or_default().to_string();
        reporter.file_merged(&name);
        parts.push(content);
        names.push(name);
    }

    reporter.finish();

    Ok(MergedDocument {
        content: join_sections(&parts),
        files: names,
    })
}

/// Merges `splits_dir` and writes the result to `output`, replacing any
/// existing file.
pub fn merge_to_file(
    splits_dir: &Path,
    output: &Path,
    reporter: &mut dyn Reporter,
) -> Result<MergeReport> {
    let merged = merge(splits_dir, reporter)?;

    fs::write(output, &merged.content).map_err(|err| SplitError::Write {
        path: output.to_path_buf(),
        source: err,
    })?;
    log::debug!("Wrote merged document to {}", output.display());

    Ok(MergeReport {
        output: output.to_path_buf(),
        files: merged.files,
    })
}

fn base_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(OsStr::to_str)
}
