//! Defines the command-line interface for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "md-split",
    version,
    about = "Split Markdown files on H2 headings and merge the pieces back together."
)]
pub struct Cli {
    /// Only print errors: no progress bar, per-file lines or summary.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a Markdown file into one numbered file per H2 section.
    Split(SplitArgs),
    /// Merge numbered split files back into a single Markdown file.
    Merge(MergeArgs),
}

/// Arguments for the `split` command.
#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// The Markdown file to split.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory to write the split files to. [default: `splits/` next to FILE]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub splits_dir: Option<PathBuf>,

    /// List the files that would be created without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `merge` command.
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Directory containing the numbered split files (00-*, 01-*, 02-*, ...).
    #[arg(value_name = "SPLITS_DIR")]
    pub splits_dir: PathBuf,

    /// The merged Markdown file to write.
    #[arg(value_name = "OUTPUT", required_unless_present = "dry_run")]
    pub output: Option<PathBuf>,

    /// Print the merged document to stdout instead of writing OUTPUT.
    #[arg(long)]
    pub dry_run: bool,
}
