//! The content document: front-matter config plus a markdown body.
//!
//! ```text
//! ---
//! contactEmail: "me@example.com"
//! heroTitle: "Hi, I'm Sam"
//! ---
//!
//! # About
//! ...
//! ```

pub mod front_matter;
pub mod ordered;
pub mod sections;

use serde::Deserialize;

use crate::diagnostics::Diagnostics;

pub use ordered::OrderedMap;
pub use sections::LocatedSection;

/// Flat `key -> value` configuration from the front matter.
pub type Config = OrderedMap;

/// Section name -> trimmed section text, in document order.
pub type Sections = OrderedMap;

/// Front-matter key holding the contact address.
pub const CONTACT_EMAIL_KEY: &str = "contactEmail";

/// A parsed content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub config: Config,
    pub body: String,
    /// Whether the source text carried a front-matter block.
    pub has_front_matter: bool,
    /// File lines preceding the body as parsed. Not updated by edits.
    pub body_offset: usize,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self::parse_with_diagnostics(text, &mut Diagnostics::new())
    }

    /// Without a front-matter block the config is empty and the whole text
    /// is the body.
    pub fn parse_with_diagnostics(text: &str, diag: &mut Diagnostics) -> Self {
        match front_matter::split(text) {
            Some((block, body)) => Self {
                config: front_matter::parse_block(block, diag),
                body: body.to_string(),
                has_front_matter: true,
                body_offset: text[..text.len() - body.len()].matches('\n').count(),
            },
            None => Self {
                config: Config::new(),
                body: text.to_string(),
                has_front_matter: false,
                body_offset: 0,
            },
        }
    }

    /// Stand-in served when the content file cannot be read.
    pub fn fallback(contact_email: &str) -> Self {
        let mut config = Config::new();
        config.insert(CONTACT_EMAIL_KEY, contact_email);
        Self {
            config,
            body: String::new(),
            has_front_matter: false,
            body_offset: 0,
        }
    }

    /// Fill in the contact address if the document does not define one.
    pub fn ensure_contact_email(&mut self, fallback: &str) {
        if !self.config.contains_key(CONTACT_EMAIL_KEY) {
            self.config.insert(CONTACT_EMAIL_KEY, fallback);
        }
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.config.get(CONTACT_EMAIL_KEY).filter(|e| !e.is_empty())
    }

    pub fn sections(&self) -> Sections {
        sections::parse(&self.body)
    }

    pub fn sections_with_diagnostics(&self, diag: &mut Diagnostics) -> Sections {
        diag.within(self.body_offset, |diag| {
            sections::parse_with_diagnostics(&self.body, diag)
        })
    }

    /// Sections in order of appearance, duplicates included, each with the
    /// number of file lines preceding its text.
    pub fn locate_sections(&self, diag: &mut Diagnostics) -> Vec<LocatedSection<'_>> {
        let mut located = diag.within(self.body_offset, |diag| sections::locate(&self.body, diag));
        for section in &mut located {
            section.preceding += self.body_offset;
        }
        located
    }

    /// Replace the body with the reconstruction of `sections`.
    pub fn set_sections(&mut self, sections: &Sections) {
        self.body = sections::reconstruct(sections);
    }

    /// Replace (or append) one section and rebuild the body.
    ///
    /// Text before the first heading does not survive the rebuild. A `# `
    /// line inside `text` is stored as is and reads back as a new section.
    pub fn replace_section(&mut self, name: &str, text: &str) {
        if sections::contains_heading(text) {
            tracing::warn!(
                section = name,
                "new text contains a top-level heading; it will split into its own section"
            );
        }
        let mut sections = self.sections();
        sections.insert(name, text.trim());
        self.set_sections(&sections);
    }

    /// Merge the non-empty fields of `update` into the config.
    pub fn apply_config_update(&mut self, update: &ConfigUpdate) {
        for (key, value) in update.fields() {
            self.config.insert(key, value);
        }
    }

    /// Full file text: quoted front matter, a blank line, then the body.
    pub fn render(&self) -> String {
        format!("{}\n{}", front_matter::render(&self.config), self.body)
    }
}

/// Partial config update accepted by the edit API.
///
/// Only these keys can be changed; an empty string leaves the stored value
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    pub contact_email: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
}

impl ConfigUpdate {
    fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (CONTACT_EMAIL_KEY, &self.contact_email),
            ("heroTitle", &self.hero_title),
            ("heroSubtitle", &self.hero_subtitle),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
    }
}
