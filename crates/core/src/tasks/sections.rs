//! Level-two sections (`## ...`) of a task file.
//!
//! A dated entry is the section whose heading line contains a `YYYY-MM-DD`
//! date. Icons, weekday names or other decoration may surround the date.

const HEADING_PREFIX: &str = "## ";

/// A `## ` heading and everything up to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// The heading line without its trailing newline.
    pub heading: &'a str,
    /// Heading plus body, exactly as in the source.
    pub text: &'a str,
}

impl Section<'_> {
    pub fn is_dated(&self, date: &str) -> bool {
        self.heading.contains(date)
    }
}

/// Split `content` at every line starting with `## `.
///
/// Text before the first heading belongs to no section.
pub fn split_sections(content: &str) -> Vec<Section<'_>> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.starts_with(HEADING_PREFIX) {
            starts.push(offset);
        }
        offset += line.len();
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(content.len());
            let text = &content[start..end];
            let heading = text.lines().next().unwrap_or_default().trim_end_matches('\r');
            Section { heading, text }
        })
        .collect()
}

fn dated_index(sections: &[Section<'_>], date: &str) -> Option<usize> {
    sections.iter().position(|s| s.is_dated(date))
}

/// Whether a dated entry for `date` exists in `content`.
pub fn has_dated_entry(content: &str, date: &str) -> bool {
    content
        .lines()
        .any(|line| line.starts_with(HEADING_PREFIX) && line.contains(date))
}

/// The dated entry for `date`, heading included, trimmed.
pub fn extract_dated_entry<'a>(content: &'a str, date: &str) -> Option<&'a str> {
    let sections = split_sections(content);
    dated_index(&sections, date).map(|i| sections[i].text.trim())
}

/// Whether the entry for `date` already carries a statistics block titled
/// `title`, either inside the entry or as the section right before it.
pub fn statistics_precede_entry(content: &str, date: &str, title: &str) -> bool {
    let sections = split_sections(content);
    let Some(i) = dated_index(&sections, date) else {
        return false;
    };
    let in_entry = sections[i].text.contains(title);
    let just_before = i > 0 && sections[i - 1].heading.contains(title);
    in_entry || just_before
}
