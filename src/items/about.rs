//! About section: prose paragraphs plus a skills list.
//!
//! The text is cut into blank-line separated blocks. A block starting with
//! `## Skills` marks the *next* block as the comma-separated skills list;
//! other blocks starting with `##` are ignored and everything else is a
//! paragraph. The split is positional, not label based.

use serde::Serialize;
use typeshare::typeshare;

use super::lists::split_skills;

const SKILLS_HEADING: &str = "## Skills";

#[typeshare]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    pub paragraphs: Vec<String>,
    pub skills: Vec<String>,
}

/// Blank-line separated, trimmed, non-empty blocks.
pub fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            push_block(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    push_block(&mut blocks, &mut current);
    blocks
}

fn push_block(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    let block = current.join("\n");
    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
    current.clear();
}

pub fn parse(text: &str) -> AboutContent {
    let mut about = AboutContent::default();
    let mut skills_text = None;

    let mut iter = blocks(text).into_iter();
    while let Some(block) = iter.next() {
        if block.starts_with(SKILLS_HEADING) {
            if let Some(next) = iter.next() {
                skills_text = Some(next);
            }
        } else if !block.starts_with("##") {
            about.paragraphs.push(block);
        }
    }

    about.skills = skills_text.as_deref().map(split_skills).unwrap_or_default();
    about
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_skills() {
        let about = parse("First para\nstill first.\n\nSecond para.\n\n## Skills\n\nRust, Go, , SQL\n");
        assert_eq!(
            about.paragraphs,
            vec!["First para\nstill first.", "Second para."]
        );
        assert_eq!(about.skills, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_skills_heading_at_end_yields_no_skills() {
        let about = parse("Para.\n\n## Skills");
        assert_eq!(about.paragraphs, vec!["Para."]);
        assert!(about.skills.is_empty());
    }

    #[test]
    fn test_skills_block_consumed_even_if_prose() {
        let about = parse("## Skills\n\nSome sentence, with a comma\n\nTrailing para");
        assert_eq!(about.skills, vec!["Some sentence", "with a comma"]);
        assert_eq!(about.paragraphs, vec!["Trailing para"]);
    }

    #[test]
    fn test_other_subheadings_ignored() {
        let about = parse("## Hobbies\n\nChess");
        assert_eq!(about.paragraphs, vec!["Chess"]);
    }

    #[test]
    fn test_multiple_blank_lines() {
        assert_eq!(blocks("a\n\n\n\nb\n"), vec!["a", "b"]);
    }
}
