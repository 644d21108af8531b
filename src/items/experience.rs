//! Experience entries. The heading carries company and role: `## Acme | Engineer`.

use serde::Serialize;
use typeshare::typeshare;

use super::{label_value, SubItem};

#[typeshare]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub period: String,
    /// One entry per `- ` bullet, in order.
    pub description: Vec<String>,
}

impl SubItem for ExperienceItem {
    fn from_heading(heading: &str) -> Self {
        let mut parts = heading.split('|').map(str::trim);
        Self {
            company: parts.next().unwrap_or_default().to_string(),
            role: parts.next().unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    fn apply_line(&mut self, line: &str) -> bool {
        if let Some(v) = label_value(line, "**Period:**") {
            self.period = v.to_string();
        } else if let Some(v) = label_value(line, "- ") {
            self.description.push(v.to_string());
        } else {
            return false;
        }
        true
    }

    fn is_empty(&self) -> bool {
        self.company.is_empty()
            && self.role.is_empty()
            && self.period.is_empty()
            && self.description.is_empty()
    }
}

/// Parse the Experience section.
pub fn parse(text: &str) -> Vec<ExperienceItem> {
    super::parse_items(text)
}
