use serde::{Deserialize, Serialize};

/// Link value used in place of a real URL when a resource has no web presence.
pub const NO_LINK: &str = "#";

/// Who provides a resource.
///
/// `Both` covers services with public and private streams (e.g. detox
/// programs); only the `All` filter shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Public,
    Private,
    Both,
}

impl ResourceType {
    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Public => "Public",
            ResourceType::Private => "Private",
            ResourceType::Both => "Public & Private",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ResourceType::Public => "public",
            ResourceType::Private => "private",
            ResourceType::Both => "both",
        }
    }
}

/// How a resource is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryFormat {
    InPerson,
    Virtual,
    Both,
}

impl DeliveryFormat {
    pub fn label(self) -> &'static str {
        match self {
            DeliveryFormat::InPerson => "in-person",
            DeliveryFormat::Virtual => "virtual",
            DeliveryFormat::Both => "in-person/virtual",
        }
    }
}

/// A named referral: program, hotline, clinic or private provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DeliveryFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub considerations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

impl Resource {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        resource_type: ResourceType,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            resource_type,
            cost: None,
            format: None,
            considerations: None,
            location: None,
            services: Vec::new(),
        }
    }

    pub fn public(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self::new(title, description, link, ResourceType::Public)
    }

    pub fn private(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self::new(title, description, link, ResourceType::Private)
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    pub fn with_format(mut self, format: DeliveryFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_considerations(mut self, considerations: impl Into<String>) -> Self {
        self.considerations = Some(considerations.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    /// The URL to open, or `None` when the link is the placeholder sentinel
    /// (or blank).
    pub fn outbound_link(&self) -> Option<&str> {
        outbound(&self.link)
    }
}

pub(crate) fn outbound(link: &str) -> Option<&str> {
    let link = link.trim();
    if link.is_empty() || link == NO_LINK {
        None
    } else {
        Some(link)
    }
}
