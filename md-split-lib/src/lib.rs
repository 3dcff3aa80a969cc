//! `md-split-lib` splits Markdown documents along their H2 headings and merges
//! the resulting files back together. It powers the `md-split` CLI.
//!
//! A document is cut into [`Section`]s: an optional preamble followed by one
//! section per `## ` heading. Each section is written to a numbered file
//! (`00-preamble.md`, `01-introduction.md`, ...) in a `splits` directory next
//! to the source. Merging reads those files back in numeric order and joins
//! them with a blank line.
//!
//! # Example
//!
//! The parsing and naming steps are pure and can be used without touching the
//! filesystem:
//!
//! ```rust
//! use md_split_lib::{join_sections, plan};
//!
//! # fn demo() -> Result<(), md_split_lib::SplitError> {
//! let files = plan("Intro\n## Getting Started\nRun it.\n## FAQ\nNone yet.")?;
//!
//! let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["00-preamble.md", "01-getting-started.md", "02-faq.md"]);
//!
//! let parts: Vec<&str> = files.iter().map(|f| f.content.as_str()).collect();
//! assert_eq!(
//!     join_sections(&parts),
//!     "Intro\n\n## Getting Started\nRun it.\n\n## FAQ\nNone yet."
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod error;
pub mod merger;
pub mod naming;
pub mod report;
pub mod section;
pub mod splitter;

pub use error::{Result, SplitError};
pub use merger::{
    discover, join_sections, merge, merge_to_file, order_split_files, MergeReport,
    MergedDocument,
};
pub use naming::{sanitize, SplitFile};
pub use report::{Reporter, Silent};
pub use section::{parse, Section, SectionTitle};
pub use splitter::{load, plan, read_source, split, split_into, splits_dir_for, SplitReport};
