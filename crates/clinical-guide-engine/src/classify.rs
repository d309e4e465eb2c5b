//! Line classification for list content.
//!
//! Both classifiers look at one line at a time and never modify it, so the
//! caller keeps the original order and text.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// How a content or psychotherapy line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListItemKind {
    /// The text starts with its own ordinal (`1.`, `2)`, `(3)`), so no
    /// marker is added.
    SelfNumbered,
    /// Any other line, rendered with a generated bullet.
    Bulleted,
}

/// How a lifestyle line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifestyleKind {
    Subheading,
    Bullet,
}

fn ordinal_regex() -> &'static Regex {
    static ORDINAL_REGEX: OnceLock<Regex> = OnceLock::new();
    ORDINAL_REGEX
        .get_or_init(|| Regex::new(r"^(?:[0-9]+[.)]|\([0-9]+\))").expect("Invalid ordinal regex"))
}

/// Classifies a list line as self-numbered or bulleted.
///
/// Only ASCII digit ordinals count: `(a) ...` and `iv. ...` are bulleted.
pub fn classify_list_item(line: &str) -> ListItemKind {
    if ordinal_regex().is_match(line) {
        ListItemKind::SelfNumbered
    } else {
        ListItemKind::Bulleted
    }
}

/// Classifies a lifestyle line: a trailing colon (ignoring surrounding
/// whitespace) marks a subheading.
pub fn classify_lifestyle_line(line: &str) -> LifestyleKind {
    if line.trim().ends_with(':') {
        LifestyleKind::Subheading
    } else {
        LifestyleKind::Bullet
    }
}
