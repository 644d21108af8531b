//! Front-matter block: `---` delimited `key: "value"` lines.
//!
//! Only flat string pairs are understood. Anything else inside the block is
//! skipped and reported through [`Diagnostics`].

use std::sync::LazyLock;

use regex::Regex;

use super::Config;
use crate::diagnostics::{Diagnostics, SkipReason};

pub const DELIMITER: &str = "---";

static CONFIG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+):\s*(.*?)\s*$").unwrap());

/// Split `text` into the front-matter block and the body that follows it.
///
/// Returns `None` when the first line is not exactly `---` or the block is
/// never closed. Leading blank lines of the body are dropped.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            let block = &text[block_start..offset];
            let body = text[offset + line.len()..].trim_start_matches(['\n', '\r']);
            return Some((block, body));
        }
        offset += line.len();
    }
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

/// Parse the lines of a front-matter block. Later duplicate keys win.
pub fn parse_block(block: &str, diag: &mut Diagnostics) -> Config {
    let mut config = Config::new();
    for (idx, line) in block.lines().enumerate() {
        match parse_line(line) {
            Some((key, value)) => {
                config.insert(key, value);
            }
            // Block starts on line 2 of the file
            None => diag.skip(idx + 2, line, SkipReason::MalformedConfigLine),
        }
    }
    config
}

fn parse_line(line: &str) -> Option<(&str, String)> {
    let caps = CONFIG_LINE.captures(line)?;
    let key = caps.get(1)?.as_str();
    let raw = caps.get(2)?.as_str();
    Some((key, unquote(raw)))
}

fn unquote(raw: &str) -> String {
    match raw
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => unescape(inner),
        None => raw.to_string(),
    }
}

fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match (c, chars.clone().next()) {
            ('\\', Some(next @ ('"' | '\\'))) => {
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Render `config` as a complete front-matter block, closing delimiter and
/// trailing newline included. Every value is written quoted.
pub fn render(config: &Config) -> String {
    let mut out = String::from(DELIMITER);
    out.push('\n');
    for (key, value) in config.iter() {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&quote(value));
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let text = "---\ncontactEmail: \"a@b.com\"\n---\n\n# About\n\nHello";
        let (block, body) = split(text).unwrap();
        assert_eq!(block, "contactEmail: \"a@b.com\"\n");
        assert_eq!(body, "# About\n\nHello");
    }

    #[test]
    fn test_split_requires_opening_delimiter() {
        assert!(split("# About\n---\nx: y\n---\n").is_none());
        assert!(split(" ---\nx: y\n---\n").is_none());
    }

    #[test]
    fn test_split_unclosed_block() {
        assert!(split("---\nx: y\n# About\n").is_none());
    }

    #[test]
    fn test_split_crlf() {
        let text = "---\r\nkey: value\r\n---\r\n\r\nbody";
        let (block, body) = split(text).unwrap();
        assert_eq!(block, "key: value\r\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_parse_quoted_and_bare_values() {
        let mut diag = Diagnostics::new();
        let config = parse_block("a: \"quoted\"\nb: bare value\nc:\"tight\"\n", &mut diag);
        assert_eq!(config.get("a"), Some("quoted"));
        assert_eq!(config.get("b"), Some("bare value"));
        assert_eq!(config.get("c"), Some("tight"));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unpaired_quote_kept() {
        let mut diag = Diagnostics::new();
        let config = parse_block("a: \"open\n", &mut diag);
        assert_eq!(config.get("a"), Some("\"open"));
    }

    #[test]
    fn test_malformed_lines_skipped_and_reported() {
        let mut diag = Diagnostics::new();
        let config = parse_block("good: yes\n# comment\n- item\n\nother: 1\n", &mut diag);
        assert_eq!(config.len(), 2);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.skipped()[0].line, 3);
        assert_eq!(diag.skipped()[0].reason, SkipReason::MalformedConfigLine);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let mut diag = Diagnostics::new();
        let config = parse_block("k: first\nk: second\n", &mut diag);
        assert_eq!(config.len(), 1);
        assert_eq!(config.get("k"), Some("second"));
    }

    #[test]
    fn test_render_then_parse_keeps_quotes_in_values() {
        let mut config = Config::new();
        config.insert("heroTitle", "Say \"hi\"");
        config.insert("path", "C:\\temp");
        let rendered = render(&config);
        assert_eq!(
            rendered,
            "---\nheroTitle: \"Say \\\"hi\\\"\"\npath: \"C:\\\\temp\"\n---\n"
        );

        let (block, _) = split(&rendered).unwrap();
        let reparsed = parse_block(block, &mut Diagnostics::new());
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_render_empty_config() {
        let rendered = render(&Config::new());
        assert_eq!(rendered, "---\n---\n");
        let (block, body) = split(&rendered).unwrap();
        assert_eq!(block, "");
        assert_eq!(body, "");
    }
}
