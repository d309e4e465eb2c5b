use crate::models::{Resource, ResourceType};
use serde::{Deserialize, Serialize};

/// Resource-type selection applied to the current tier's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFilter {
    #[default]
    All,
    Public,
    Private,
}

impl ResourceFilter {
    pub const ALL: [ResourceFilter; 3] = [
        ResourceFilter::All,
        ResourceFilter::Public,
        ResourceFilter::Private,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ResourceFilter::All => "all",
            ResourceFilter::Public => "public",
            ResourceFilter::Private => "private",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceFilter::All => "All",
            ResourceFilter::Public => "Public",
            ResourceFilter::Private => "Private",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.slug() == slug)
    }

    /// Whether a resource of the given type passes this filter.
    /// Mixed public/private resources only show under `All`.
    pub fn admits(self, resource_type: ResourceType) -> bool {
        match self {
            ResourceFilter::All => true,
            ResourceFilter::Public => resource_type == ResourceType::Public,
            ResourceFilter::Private => resource_type == ResourceType::Private,
        }
    }

    /// The admitted resources in their original order.
    pub fn apply<'a>(self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources
            .iter()
            .filter(|resource| self.admits(resource.resource_type))
            .collect()
    }

    /// Text shown in place of the resource list when nothing passes.
    pub fn empty_message(self) -> String {
        match self {
            ResourceFilter::All => "No resources available for this severity level.".to_string(),
            other => format!(
                "No {} resources available for this severity level.",
                other.slug()
            ),
        }
    }
}
