//! Splits raw Markdown text into H2-delimited sections.
//!
//! Parsing is line based: a line is an H2 heading when it starts with exactly
//! `##`, is followed by whitespace, and carries non-empty text. Everything else
//! is body text and is kept verbatim. Text before the first heading becomes the
//! preamble, unless it is blank.

/// The title of a [`Section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionTitle {
    /// Content that appears before the first H2 heading.
    Preamble,
    /// The trimmed text of an H2 heading, without the `##` marker.
    Heading(String),
}

impl SectionTitle {
    /// Returns the heading text, or `None` for the preamble.
    pub fn heading(&self) -> Option<&str> {
        match self {
            SectionTitle::Preamble => None,
            SectionTitle::Heading(text) => Some(text),
        }
    }

    pub fn is_preamble(&self) -> bool {
        matches!(self, SectionTitle::Preamble)
    }
}

/// One logical unit of a document: the preamble or an H2 heading with its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: SectionTitle,
    /// Verbatim text of the section, heading line included.
    pub content: String,
}

impl Section {
    fn preamble(content: String) -> Self {
        Self {
            title: SectionTitle::Preamble,
            content,
        }
    }
}

/// Returns the trimmed heading text if `line` is an H2 heading.
///
/// `###` and deeper headings, indented headings and headings without text
/// are rejected.
pub fn heading_title(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    let first = rest.chars().next()?;
    if !first.is_ascii_whitespace() {
        return None;
    }

    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

/// Parses `content` into its ordered list of sections.
///
/// This never fails: an empty or blank document yields no sections, and a
/// document without headings yields a single preamble section.
pub fn parse(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();

    // `None` while still collecting the preamble.
    let mut current_title: Option<String> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        let Some(title) = heading_title(line) else {
            lines.push(line);
            continue;
        };

        close_section(&mut sections, current_title.take(), &lines);
        current_title = Some(title.to_string());
        lines.clear();
        lines.push(line);
    }

    close_section(&mut sections, current_title, &lines);

    sections
}

fn close_section(sections: &mut Vec<Section>, title: Option<String>, lines: &[&str]) {
    let content = lines.join("\n");

    match title {
        Some(title) => sections.push(Section {
            title: SectionTitle::Heading(title),
            content,
        }),
        None if content.trim().is_empty() => {
            if !content.is_empty() {
                log::debug!("Discarding blank preamble ({} bytes)", content.len());
            }
        }
        None => sections.push(Section::preamble(content)),
    }
}
