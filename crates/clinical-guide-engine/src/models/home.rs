use super::disorder::DisorderId;
use super::resource::Resource;
use serde::{Deserialize, Serialize};

/// Colour family of a disorder card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub audience: String,
}

/// Home page entry point into a disorder page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisorderCard {
    pub id: DisorderId,
    pub heading: String,
    pub summary: String,
    pub accent: Accent,
}

/// Plain-language explanation of one psychotherapy modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapyExplainer {
    pub name: String,
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_more: Option<String>,
}

/// A titled block of cautionary text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

/// Static content of the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    pub hero: Hero,
    pub disorder_cards: Vec<DisorderCard>,
    pub therapies_heading: String,
    pub therapies: Vec<TherapyExplainer>,
    pub regional_heading: String,
    pub regional_resources: Vec<Resource>,
    pub disclaimer: Notice,
    pub footer: Vec<String>,
}
