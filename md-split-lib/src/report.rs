//! Progress reporting hooks for split and merge runs.
//!
//! The library never writes to the terminal. Callers that want to show
//! progress pass a [`Reporter`]; everyone else passes [`Silent`].

/// Observer notified while split files are written or merged.
///
/// Every method has a no-op default, so implementors only override the
/// events they care about.
pub trait Reporter {
    /// Called once before any file is processed, with the number of files.
    fn begin(&mut self, _total: usize) {}

    /// Called after a split file has been written.
    fn file_written(&mut self, _name: &str) {}

    /// Called after a split file has been read into the merged document.
    fn file_merged(&mut self, _name: &str) {}

    /// Called once after the last file, only when the run succeeded.
    fn finish(&mut self) {}
}

/// A [`Reporter`] that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {}
