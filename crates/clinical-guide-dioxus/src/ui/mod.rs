mod app;
pub mod components;

pub use app::{App, AppProps};

use clinical_guide_engine::Route;

pub const SITE_CSS: &str = include_str!("../../assets/site.css");

/// Where the component tree ends up.
///
/// Interactive output wires controls to local state. Static output has no
/// event handlers, so controls become links to other routes and expandable
/// sections become `<details>` elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderTarget {
    #[default]
    Interactive,
    StaticSite {
        base_path: String,
    },
}

impl RenderTarget {
    pub fn static_site(base_path: impl Into<String>) -> Self {
        RenderTarget::StaticSite {
            base_path: base_path.into(),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, RenderTarget::StaticSite { .. })
    }

    pub fn href(&self, route: &Route) -> String {
        match self {
            RenderTarget::Interactive => route.path(),
            RenderTarget::StaticSite { base_path } => route.href(base_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinical_guide_engine::{DisorderId, ResourceFilter, Severity};

    #[test]
    fn test_interactive_href_is_plain_path() {
        let route = Route::disorder(DisorderId::Anxiety).with_severity(Severity::Severe);
        assert_eq!(RenderTarget::Interactive.href(&route), "/anxiety/severe/all");
    }

    #[test]
    fn test_static_href_uses_base_path_and_directory_form() {
        let target = RenderTarget::static_site("/guide");
        let route = Route::disorder(DisorderId::Depression).with_filter(ResourceFilter::Private);
        assert_eq!(target.href(&route), "/guide/depression/mild/private/");
        assert_eq!(target.href(&Route::Home), "/guide/");
        assert!(target.is_static());
        assert!(!RenderTarget::Interactive.is_static());
    }
}
