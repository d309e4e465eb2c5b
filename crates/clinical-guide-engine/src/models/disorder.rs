use super::resource::{Resource, outbound};
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a disorder page. The set is fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisorderId {
    Depression,
    Anxiety,
    SubstanceUse,
}

impl DisorderId {
    pub const ALL: [DisorderId; 3] = [
        DisorderId::Depression,
        DisorderId::Anxiety,
        DisorderId::SubstanceUse,
    ];

    /// Path segment for this disorder's page.
    pub fn slug(self) -> &'static str {
        match self {
            DisorderId::Depression => "depression",
            DisorderId::Anxiety => "anxiety",
            DisorderId::SubstanceUse => "substance-use",
        }
    }

    /// Label used in navigation.
    pub fn label(self) -> &'static str {
        match self {
            DisorderId::Depression => "Depression",
            DisorderId::Anxiety => "Anxiety",
            DisorderId::SubstanceUse => "Substance Use Disorder",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

impl fmt::Display for DisorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A named screening instrument with a link to the instrument itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningTool {
    pub name: String,
    pub link: String,
}

impl ScreeningTool {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    pub fn outbound_link(&self) -> Option<&str> {
        outbound(&self.link)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screening {
    pub title: String,
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ScreeningTool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub title: String,
    pub content: Vec<String>,
}

/// Treatment content for one severity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityContent {
    pub description: String,
    pub psychotherapy: Vec<String>,
    /// Lines ending in `:` are subheadings, everything else is a bullet.
    /// Empty when the tier has no lifestyle guidance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lifestyle: Vec<String>,
    pub resources: Vec<Resource>,
}

/// Treatment content keyed by severity. Every tier is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub mild: SeverityContent,
    pub moderate: SeverityContent,
    pub severe: SeverityContent,
}

impl Treatment {
    pub fn tier(&self, severity: Severity) -> &SeverityContent {
        match severity {
            Severity::Mild => &self.mild,
            Severity::Moderate => &self.moderate,
            Severity::Severe => &self.severe,
        }
    }
}

/// Everything shown on one disorder page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisorderRecord {
    pub title: String,
    pub screening: Screening,
    pub diagnosis: Diagnosis,
    pub treatment: Treatment,
}
