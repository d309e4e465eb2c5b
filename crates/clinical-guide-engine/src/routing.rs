//! Stable paths for every view.
//!
//! Plain paths address the four pages. A disorder path may carry two extra
//! segments, `/<disorder>/<severity>/<filter>`, so a static site can express
//! the severity selector and resource filter as ordinary links.

use crate::filter::ResourceFilter;
use crate::models::{DisorderId, Severity};
use crate::view::TreatmentState;
use relative_path::RelativePathBuf;
use std::fmt;

pub const SITE_NAME: &str = "Mental Health Clinical Guide";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),
    #[error("Unknown resource filter: {0}")]
    UnknownFilter(String),
    #[error("Too many path segments: {0}")]
    TooManySegments(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Disorder {
        id: DisorderId,
        treatment: TreatmentState,
    },
    /// Any path that does not parse; carries the requested path.
    NotFound(String),
}

impl Route {
    pub fn disorder(id: DisorderId) -> Self {
        Route::Disorder {
            id,
            treatment: TreatmentState::default(),
        }
    }

    /// Parse a site path. A trailing `/` or `index.html` is accepted; a
    /// missing filter segment means "all".
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix("index.html").unwrap_or(trimmed);
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        let (page, severity, filter) = match segments.as_slice() {
            [] => return Ok(Route::Home),
            [page] => (*page, None, None),
            [page, severity] => (*page, Some(*severity), None),
            [page, severity, filter] => (*page, Some(*severity), Some(*filter)),
            _ => return Err(RouteError::TooManySegments(path.to_string())),
        };

        let id =
            DisorderId::from_slug(page).ok_or_else(|| RouteError::UnknownPage(page.to_string()))?;
        let severity = match severity {
            Some(slug) => Severity::from_slug(slug)
                .ok_or_else(|| RouteError::UnknownSeverity(slug.to_string()))?,
            None => Severity::default(),
        };
        let filter = match filter {
            Some(slug) => ResourceFilter::from_slug(slug)
                .ok_or_else(|| RouteError::UnknownFilter(slug.to_string()))?,
            None => ResourceFilter::default(),
        };

        Ok(Route::Disorder {
            id,
            treatment: TreatmentState::new(severity, filter),
        })
    }

    /// Like [`Route::parse`], but unparseable paths become [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        match Self::parse(path) {
            Ok(route) => route,
            Err(e) => {
                log::warn!("Falling back to not-found page for '{path}': {e}");
                Route::NotFound(path.to_string())
            }
        }
    }

    /// Canonical path. The default treatment state has no extra segments.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Disorder { id, treatment } if treatment.is_default() => format!("/{}", id.slug()),
            Route::Disorder { id, treatment } => format!(
                "/{}/{}/{}",
                id.slug(),
                treatment.severity.slug(),
                treatment.filter.slug()
            ),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Link target under `base_path` for a static site where every page is a
    /// directory holding `index.html`.
    pub fn href(&self, base_path: &str) -> String {
        let base = base_path.trim_end_matches('/');
        match self {
            Route::Home => format!("{base}/"),
            Route::NotFound(_) => format!("{base}/404.html"),
            _ => format!("{base}{}/", self.path()),
        }
    }

    /// File this route is written to, relative to the output root.
    pub fn output_file(&self) -> RelativePathBuf {
        match self {
            Route::Home => RelativePathBuf::from("index.html"),
            Route::NotFound(_) => RelativePathBuf::from("404.html"),
            _ => RelativePathBuf::from(self.path().trim_start_matches('/')).join("index.html"),
        }
    }

    /// Same route with a different severity, keeping the filter.
    pub fn with_severity(&self, severity: Severity) -> Self {
        match self {
            Route::Disorder { id, treatment } => Route::Disorder {
                id: *id,
                treatment: treatment.with_severity(severity),
            },
            other => other.clone(),
        }
    }

    /// Same route with a different filter, keeping the severity.
    pub fn with_filter(&self, filter: ResourceFilter) -> Self {
        match self {
            Route::Disorder { id, treatment } => Route::Disorder {
                id: *id,
                treatment: treatment.with_filter(filter),
            },
            other => other.clone(),
        }
    }

    /// Whether both routes show the same page, ignoring treatment state.
    pub fn same_page(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::Home, Route::Home) => true,
            (Route::Disorder { id: a, .. }, Route::Disorder { id: b, .. }) => a == b,
            (Route::NotFound(_), Route::NotFound(_)) => true,
            _ => false,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Home => SITE_NAME.to_string(),
            Route::Disorder { id, .. } => format!("{} | {SITE_NAME}", id.label()),
            Route::NotFound(_) => format!("Page Not Found | {SITE_NAME}"),
        }
    }

    /// Every page of the static site: home, then each disorder under every
    /// severity and filter. Duplicates collapse to their canonical form.
    pub fn all_static() -> Vec<Route> {
        let mut routes = vec![Route::Home];
        for id in DisorderId::ALL {
            for severity in Severity::ALL {
                for filter in ResourceFilter::ALL {
                    let route = Route::Disorder {
                        id,
                        treatment: TreatmentState::new(severity, filter),
                    };
                    if !routes.contains(&route) {
                        routes.push(route);
                    }
                }
            }
        }
        routes
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    pub fn all() -> Vec<NavLink> {
        let mut links = vec![NavLink {
            label: "Home",
            route: Route::Home,
        }];
        links.extend(DisorderId::ALL.into_iter().map(|id| NavLink {
            label: id.label(),
            route: Route::disorder(id),
        }));
        links
    }

    pub fn is_active(&self, current: &Route) -> bool {
        self.route.same_page(current)
    }
}
