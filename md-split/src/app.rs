use crate::cli::{Cli, Command, MergeArgs, SplitArgs};
use anyhow::anyhow;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use md_split_lib::report::{Reporter, Silent};
use md_split_lib::{merger, splitter};
use std::io::{self, Write};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli { quiet, command } = Cli::parse();

    match command {
        Command::Split(args) => process_split(args, quiet),
        Command::Merge(args) => process_merge(args, quiet),
    }
}

fn process_split(args: SplitArgs, quiet: bool) -> anyhow::Result<()> {
    let SplitArgs {
        file,
        splits_dir,
        dry_run,
    } = args;

    let splits_dir = splits_dir.unwrap_or_else(|| splitter::splits_dir_for(&file));

    if dry_run {
        let files = splitter::load(&file)?;
        for split_file in &files {
            println!("Would create: {}", split_file.name);
        }
        println!(
            "{} files would be written to {}",
            files.len(),
            splits_dir.display()
        );
        return Ok(());
    }

    let mut reporter = ConsoleReporter::new("Writing split files...", quiet);
    let report = splitter::split_into(&file, &splits_dir, &mut reporter)?;

    reporter.summary(&format!(
        "Successfully split markdown into {} files in {}",
        report.count(),
        report.splits_dir.display()
    ));

    Ok(())
}

fn process_merge(args: MergeArgs, quiet: bool) -> anyhow::Result<()> {
    let MergeArgs {
        splits_dir,
        output,
        dry_run,
    } = args;

    if dry_run {
        let merged = merger::merge(&splits_dir, &mut Silent)?;
        io::stdout().write_all(merged.content.as_bytes())?;
        return Ok(());
    }

    let output =
        output.ok_or_else(|| anyhow!("An OUTPUT path is required unless --dry-run is set"))?;

    let mut reporter = ConsoleReporter::new("Merging split files...", quiet);
    let report = merger::merge_to_file(&splits_dir, &output, &mut reporter)?;

    reporter.summary(&format!(
        "Successfully merged {} files into {}",
        report.count(),
        report.output.display()
    ));

    Ok(())
}

/// Prints per-file progress to the terminal.
///
/// The progress bar goes to stderr and stays hidden when stderr is not a
/// terminal; the per-file lines always go to stdout.
struct ConsoleReporter {
    heading: &'static str,
    quiet: bool,
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    fn new(heading: &'static str, quiet: bool) -> Self {
        Self {
            heading,
            quiet,
            bar: None,
        }
    }

    fn line(&self, text: String) {
        match &self.bar {
            // Clear the bar while printing so the two don't interleave.
            Some(bar) => bar.suspend(|| println!("{text}")),
            None => println!("{text}"),
        }
    }

    fn advance(&self, text: String) {
        if self.quiet {
            return;
        }

        self.line(text);
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn summary(&self, text: &str) {
        if !self.quiet {
            println!("\n{}", style(text).green().bold());
        }
    }
}

impl Reporter for ConsoleReporter {
    fn begin(&mut self, total: usize) {
        if self.quiet {
            return;
        }

        println!("{}", style(format!("ℹ {}", self.heading)).cyan());

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.green/blue} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        self.bar = Some(bar);
    }

    fn file_written(&mut self, name: &str) {
        self.advance(format!("{} {name}", style("✓ Created:").green()));
    }

    fn file_merged(&mut self, name: &str) {
        self.advance(format!("{} {name}", style("📄 Merged:").blue()));
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        // A failed run never reaches `finish`.
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}
