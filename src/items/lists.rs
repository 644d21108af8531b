//! Comma-separated list fields.
//!
//! Skills and tech stacks are split differently on purpose: the skills list
//! drops empty entries, the tech list keeps them. `"Rust, , Go"` gives two
//! skills but three tech entries.

/// Split a skills list; entries are trimmed and empty ones dropped.
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split a tech list; entries are trimmed, empty ones kept.
pub fn split_tech(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_string()).collect()
}
