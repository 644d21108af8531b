//! Project entries.
//!
//! Links default to `#` so the frontend always has something to put in an
//! `href`.

use serde::Serialize;
use typeshare::typeshare;

use super::lists::split_tech;
use super::{label_value, SubItem};

/// Placeholder for a missing GitHub or live link.
pub const NO_LINK: &str = "#";

#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub title: String,
    pub tech: Vec<String>,
    pub description: String,
    pub github: String,
    pub live: String,
}

impl Default for ProjectItem {
    fn default() -> Self {
        Self {
            title: String::new(),
            tech: Vec::new(),
            description: String::new(),
            github: NO_LINK.to_string(),
            live: NO_LINK.to_string(),
        }
    }
}

impl SubItem for ProjectItem {
    fn from_heading(heading: &str) -> Self {
        Self {
            title: heading.to_string(),
            ..Default::default()
        }
    }

    fn apply_line(&mut self, line: &str) -> bool {
        if let Some(v) = label_value(line, "**Tech:**") {
            self.tech = split_tech(v);
        } else if let Some(v) = label_value(line, "**Description:**") {
            self.description = v.to_string();
        } else if let Some(v) = label_value(line, "**GitHub:**") {
            self.github = v.to_string();
        } else if let Some(v) = label_value(line, "**Live:**") {
            self.live = v.to_string();
        } else {
            return false;
        }
        true
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse the Projects section.
pub fn parse(text: &str) -> Vec<ProjectItem> {
    super::parse_items(text)
}
