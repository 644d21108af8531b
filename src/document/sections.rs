//! Top-level `# Heading` sections of the markdown body.

use super::Sections;
use crate::diagnostics::{Diagnostics, SkipReason};

/// Section name if `line` is a top-level heading (`# Name`, not `## Name`).
pub fn heading(line: &str) -> Option<&str> {
    let name = line.strip_prefix("# ")?.trim();
    (!name.is_empty()).then_some(name)
}

/// Split a body into sections, keeping their order of appearance.
pub fn parse(body: &str) -> Sections {
    parse_with_diagnostics(body, &mut Diagnostics::new())
}

/// Like [`parse`], recording text that precedes the first heading.
///
/// Every line up to the next heading belongs to the open section, blank lines
/// included; the collected text is trimmed when the section closes. A repeated
/// heading replaces the earlier section's text.
pub fn parse_with_diagnostics(body: &str, diag: &mut Diagnostics) -> Sections {
    locate(body, diag)
        .into_iter()
        .map(|section| (section.name, section.text))
        .collect()
}

/// A section together with where its trimmed text starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSection<'a> {
    pub name: &'a str,
    pub text: &'a str,
    /// Body lines preceding the first line of `text`.
    pub preceding: usize,
}

/// Split a body into sections in order of appearance, duplicates included.
pub fn locate<'a>(body: &'a str, diag: &mut Diagnostics) -> Vec<LocatedSection<'a>> {
    let mut located = Vec::new();
    let mut current: Option<(&str, usize)> = None;
    let mut offset = 0;

    for (idx, line) in body.split_inclusive('\n').enumerate() {
        let content = line.trim_end_matches(['\n', '\r']);
        if let Some(name) = heading(content) {
            if let Some((prev, start)) = current.take() {
                located.push(close(body, prev, start, offset));
            }
            current = Some((name, offset + line.len()));
        } else if current.is_none() {
            diag.skip(idx + 1, content, SkipReason::BeforeFirstSection);
        }
        offset += line.len();
    }

    if let Some((name, start)) = current {
        located.push(close(body, name, start, body.len()));
    }
    located
}

fn close<'a>(body: &'a str, name: &'a str, start: usize, end: usize) -> LocatedSection<'a> {
    let raw = &body[start..end];
    let text = raw.trim();
    let lead = raw.len() - raw.trim_start().len();
    LocatedSection {
        name,
        text,
        preceding: body[..start + lead].matches('\n').count(),
    }
}

/// Whether `text` holds a line that would open a new section.
pub fn contains_heading(text: &str) -> bool {
    text.lines().any(|line| heading(line).is_some())
}

/// Rebuild a body: `# Name`, blank line, text; sections separated by a blank
/// line.
pub fn reconstruct(sections: &Sections) -> String {
    sections
        .iter()
        .map(|(name, text)| format!("# {name}\n\n{text}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_detection() {
        assert_eq!(heading("# About"), Some("About"));
        assert_eq!(heading("#   Spaced  "), Some("Spaced"));
        assert_eq!(heading("## Skills"), None);
        assert_eq!(heading("#NoSpace"), None);
        assert_eq!(heading("# "), None);
        assert_eq!(heading(" # Indented"), None);
    }

    #[test]
    fn test_parse_two_sections() {
        let sections = parse("# About\n\nHello\n\n# Contact\n\nBye");
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["About", "Contact"]);
        assert_eq!(sections.get("About"), Some("Hello"));
        assert_eq!(sections.get("Contact"), Some("Bye"));
    }

    #[test]
    fn test_subheadings_stay_in_section() {
        let sections = parse("# Projects\n\n## Tool\n**Tech:** Rust\n\n## Other\n");
        assert_eq!(
            sections.get("Projects"),
            Some("## Tool\n**Tech:** Rust\n\n## Other")
        );
    }

    #[test]
    fn test_no_headings_yields_empty() {
        let mut diag = Diagnostics::new();
        let sections = parse_with_diagnostics("just text\n\nmore", &mut diag);
        assert!(sections.is_empty());
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.skipped()[1].line, 3);
    }

    #[test]
    fn test_duplicate_heading_overwrites_in_place() {
        let sections = parse("# A\none\n# B\ntwo\n# A\nthree");
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(sections.get("A"), Some("three"));
    }

    #[test]
    fn test_empty_section() {
        let sections = parse("# Empty\n\n# Full\ntext");
        assert_eq!(sections.get("Empty"), Some(""));
    }

    #[test]
    fn test_reconstruct_reparses_identically() {
        let original = parse("# About\n\nHello\n\nWorld\n\n# Experience\n\n## Acme | Dev\n- shipped");
        let rebuilt = reconstruct(&original);
        assert_eq!(
            rebuilt,
            "# About\n\nHello\n\nWorld\n\n# Experience\n\n## Acme | Dev\n- shipped"
        );
        assert_eq!(parse(&rebuilt), original);
    }

    #[test]
    fn test_locate_reports_text_start() {
        let body = "intro\n\n# About\n\n\nHello\n# Contact\nBye";
        let located = locate(body, &mut Diagnostics::new());
        assert_eq!(located.len(), 2);
        assert_eq!((located[0].name, located[0].text), ("About", "Hello"));
        // "Hello" is body line 6
        assert_eq!(located[0].preceding, 5);
        assert_eq!(located[1].preceding, 7);
    }

    #[test]
    fn test_contains_heading() {
        assert!(contains_heading("text\n# Sneaky\nmore"));
        assert!(!contains_heading("## Sub\n#tag"));
    }
}
