//! Education entries.
//!
//! ```text
//! ## Example University
//! **Degree:** BSc Computer Science
//! **Period:** 2019 - 2023
//! **Proficient In:** #Systems #Compilers
//! ```

use serde::Serialize;
use typeshare::typeshare;

use super::{label_value, SubItem};

#[typeshare]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub proficient_in: String,
}

impl SubItem for EducationItem {
    fn from_heading(heading: &str) -> Self {
        Self {
            institution: heading.to_string(),
            ..Default::default()
        }
    }

    fn apply_line(&mut self, line: &str) -> bool {
        if let Some(v) = label_value(line, "**Degree:**") {
            self.degree = v.to_string();
        } else if let Some(v) = label_value(line, "**Period:**") {
            self.period = v.to_string();
        } else if let Some(v) = label_value(line, "**Proficient In:**") {
            self.proficient_in = v.to_string();
        } else {
            return false;
        }
        true
    }

    fn is_empty(&self) -> bool {
        self.institution.is_empty()
            && self.degree.is_empty()
            && self.period.is_empty()
            && self.proficient_in.is_empty()
    }

    // A stray skills block pasted into Education must not become a school.
    fn accepts_heading(heading: &str) -> bool {
        !heading.contains("Skills")
    }
}

/// Parse the Education section.
pub fn parse(text: &str) -> Vec<EducationItem> {
    super::parse_items(text)
}
