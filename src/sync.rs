//! Content synchronizer.
//!
//! Parses the content file once into the typed [`PortfolioData`] tree and
//! emits it as a statically importable module, so the frontend can render
//! without the live API. Meant to run at build time.
//!
//! A missing front matter is reported but does not stop generation unless
//! [`SyncOptions::strict`] is set.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::document::{Config, Document, LocatedSection};
use crate::error::{ContentError, Result};
use crate::items::{about, parse_items_with_diagnostics, SubItem};
use crate::items::{AboutContent, EducationItem, ExperienceItem, ProjectItem};
use crate::persist;

pub const ABOUT: &str = "About";
pub const EDUCATION: &str = "Education";
pub const EXPERIENCE: &str = "Experience";
pub const PROJECTS: &str = "Projects";

/// Everything the frontend renders, in one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioData {
    pub config: Config,
    pub about: AboutContent,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
}

impl PortfolioData {
    /// Skipped lines are recorded with their line numbers in the source file.
    pub fn from_document(doc: &Document, diag: &mut Diagnostics) -> Self {
        let located = doc.locate_sections(diag);

        Self {
            config: doc.config.clone(),
            about: about::parse(section_text(&located, ABOUT)),
            education: parse_section(&located, EDUCATION, diag),
            experience: parse_section(&located, EXPERIENCE, diag),
            projects: parse_section(&located, PROJECTS, diag),
        }
    }
}

// A repeated heading replaces the earlier section, so the last match wins.
fn find<'a, 'b>(located: &'b [LocatedSection<'a>], name: &str) -> Option<&'b LocatedSection<'a>> {
    located.iter().rev().find(|section| section.name == name)
}

fn section_text<'a>(located: &[LocatedSection<'a>], name: &str) -> &'a str {
    find(located, name).map(|section| section.text).unwrap_or_default()
}

fn parse_section<T: SubItem>(
    located: &[LocatedSection<'_>],
    name: &str,
    diag: &mut Diagnostics,
) -> Vec<T> {
    match find(located, name) {
        Some(section) => diag.within(section.preceding, |diag| {
            parse_items_with_diagnostics(section.text, diag)
        }),
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `export const portfolioData = {...};`
    #[default]
    TypeScript,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub format: OutputFormat,
    /// Fail instead of warning when the front matter is missing.
    pub strict: bool,
}

/// Summary of one synchronizer run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub output: PathBuf,
    pub front_matter_found: bool,
    pub education: usize,
    pub experience: usize,
    pub projects: usize,
    pub paragraphs: usize,
    pub skills: usize,
    pub diagnostics: Diagnostics,
}

/// Render the generated TypeScript module.
pub fn render_typescript(data: &PortfolioData, source: &str) -> Result<String> {
    let json = serde_json::to_string_pretty(data)?;
    Ok(format!(
        "// This file is AUTO-GENERATED from {source}\n\
         // DO NOT EDIT THIS FILE DIRECTLY - Edit {source} instead\n\
         // Run `sync_content` to regenerate this file\n\
         \n\
         export const portfolioData = {json};\n"
    ))
}

pub fn render_json(data: &PortfolioData) -> Result<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}

pub fn render(data: &PortfolioData, format: OutputFormat, source: &str) -> Result<String> {
    match format {
        OutputFormat::TypeScript => render_typescript(data, source),
        OutputFormat::Json => render_json(data),
    }
}

/// Parse `text` into portfolio data, collecting diagnostics.
pub fn build(text: &str) -> (PortfolioData, bool, Diagnostics) {
    let mut diag = Diagnostics::new();
    let doc = Document::parse_with_diagnostics(text, &mut diag);
    let data = PortfolioData::from_document(&doc, &mut diag);
    (data, doc.has_front_matter, diag)
}

/// Read `input`, generate the module and write it atomically to `output`.
pub fn sync_file(input: &Path, output: &Path, options: &SyncOptions) -> Result<SyncReport> {
    let text = std::fs::read_to_string(input)?;
    let (data, front_matter_found, diagnostics) = build(&text);

    if !front_matter_found {
        if options.strict {
            return Err(ContentError::MissingFrontMatter(input.display().to_string()));
        }
        tracing::warn!("Could not parse front matter in {}", input.display());
    }

    let rendered = render(&data, options.format, &input.display().to_string())?;
    persist::write_atomic(output, rendered.as_bytes())?;

    Ok(SyncReport {
        output: output.to_path_buf(),
        front_matter_found,
        education: data.education.len(),
        experience: data.experience.len(),
        projects: data.projects.len(),
        paragraphs: data.about.paragraphs.len(),
        skills: data.about.skills.len(),
        diagnostics,
    })
}
