//! Sub-item parsers for the structured sections.
//!
//! Education, Experience and Projects share one shape: a `## Heading` line
//! opens a record seeded from the heading, and `**Label:** value` or `- `
//! lines below it fill the record in. Unknown lines are dropped.
//!
//! About is different: its text is split into blank-line separated blocks
//! (see [`about`]).

pub mod about;
pub mod education;
pub mod experience;
pub mod lists;
pub mod projects;

pub use about::AboutContent;
pub use education::EducationItem;
pub use experience::ExperienceItem;
pub use projects::ProjectItem;

use crate::diagnostics::{Diagnostics, SkipReason};

/// A record parsed from one `## Heading` block.
pub trait SubItem: Sized {
    /// Start a record from the heading text (after `## `, trimmed).
    fn from_heading(heading: &str) -> Self;

    /// Assign or append from one body line. Returns false if no label matched.
    fn apply_line(&mut self, line: &str) -> bool;

    /// Whether every field still holds its default.
    fn is_empty(&self) -> bool;

    /// Headings this record type refuses to open a record on. Refused
    /// headings are treated as ordinary body lines.
    fn accepts_heading(_heading: &str) -> bool {
        true
    }
}

/// Parse every record in a section's text.
pub fn parse_items<T: SubItem>(text: &str) -> Vec<T> {
    parse_items_with_diagnostics(text, &mut Diagnostics::new())
}

pub fn parse_items_with_diagnostics<T: SubItem>(text: &str, diag: &mut Diagnostics) -> Vec<T> {
    let mut items = Vec::new();
    let mut current: Option<T> = None;

    for (idx, line) in text.lines().enumerate() {
        let heading = line
            .strip_prefix("## ")
            .map(str::trim)
            .filter(|h| T::accepts_heading(h));

        if let Some(heading) = heading {
            if let Some(done) = current.take().filter(|item| !item.is_empty()) {
                items.push(done);
            }
            current = Some(T::from_heading(heading));
            continue;
        }

        match current.as_mut() {
            Some(item) => {
                if !item.apply_line(line) {
                    diag.skip(idx + 1, line, SkipReason::UnrecognizedLabel);
                }
            }
            None => diag.skip(idx + 1, line, SkipReason::BeforeFirstItem),
        }
    }

    if let Some(done) = current.filter(|item| !item.is_empty()) {
        items.push(done);
    }
    items
}

/// Value of a `**Label:** value` line, trimmed.
pub(crate) fn label_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_value() {
        assert_eq!(label_value("**Period:**  2020 - 2021 ", "**Period:**"), Some("2020 - 2021"));
        assert_eq!(label_value(" **Period:** x", "**Period:**"), None);
    }

    #[test]
    fn test_text_before_first_item_reported() {
        let mut diag = Diagnostics::new();
        let items: Vec<EducationItem> =
            parse_items_with_diagnostics("intro line\n## School\n**Degree:** BSc", &mut diag);
        assert_eq!(items.len(), 1);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.skipped()[0].reason, SkipReason::BeforeFirstItem);
    }

    #[test]
    fn test_unrecognized_label_reported() {
        let mut diag = Diagnostics::new();
        let items: Vec<ProjectItem> =
            parse_items_with_diagnostics("## Tool\n**Stars:** 10\n**Tech:** Rust", &mut diag);
        assert_eq!(items[0].tech, vec!["Rust"]);
        assert_eq!(diag.skipped()[0].line, 2);
        assert_eq!(diag.skipped()[0].reason, SkipReason::UnrecognizedLabel);
    }

    #[test]
    fn test_empty_heading_record_dropped() {
        let items: Vec<EducationItem> = parse_items("## \n## School");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].institution, "School");
    }
}
