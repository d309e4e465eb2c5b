use super::components::{DisorderPage, HomePage, Navigation, NotFound};
use super::{RenderTarget, SITE_CSS};
use clinical_guide_engine::Route;
use dioxus::prelude::*;

/// Key for the page subtree. Any route change, treatment state included,
/// remounts the page so its local state starts from the route again.
fn page_key(route: &Route) -> String {
    route.path()
}

#[component]
pub fn App(initial_route: Route, target: RenderTarget) -> Element {
    let mut route = use_signal(|| initial_route.clone());

    let navigate = move |next: Route| {
        log::info!("Navigating to {next}");
        route.set(next);
    };

    let current = route.read().clone();
    let key = page_key(&current);

    let page = match current.clone() {
        Route::Home => rsx! {
            HomePage { target: target.clone(), on_navigate: navigate }
        },
        Route::Disorder { id, treatment } => rsx! {
            DisorderPage {
                key: "{key}",
                id,
                initial: treatment,
                target: target.clone(),
                on_navigate: navigate,
            }
        },
        Route::NotFound(path) => rsx! {
            NotFound { path, target: target.clone(), on_navigate: navigate }
        },
    };

    rsx! {
        if !target.is_static() {
            style { {SITE_CSS} }
        }
        div {
            class: "app-container",
            Navigation {
                current,
                target: target.clone(),
                on_navigate: navigate,
            }
            main {
                class: "page",
                {page}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinical_guide_engine::{DisorderId, ResourceFilter, Severity};
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_app(route: Route, target: RenderTarget) -> String {
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                initial_route: route,
                target,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_interactive_app_embeds_stylesheet() {
        let html = render_app(Route::Home, RenderTarget::Interactive);
        assert!(html.contains("<style>"));
        assert!(html.contains("Types of Psychotherapies Explained"));
    }

    #[test]
    fn test_static_app_leaves_stylesheet_to_document() {
        let html = render_app(Route::Home, RenderTarget::static_site(""));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_app_switches_page_by_route() {
        let html = render_app(
            Route::disorder(DisorderId::SubstanceUse),
            RenderTarget::Interactive,
        );
        assert!(html.contains("Treatment Options"));
        assert!(!html.contains("Types of Psychotherapies Explained"));

        let html = render_app(Route::NotFound("/bipolar".to_string()), RenderTarget::Interactive);
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("/bipolar"));
    }

    #[test]
    fn test_page_key_changes_with_treatment_state() {
        let plain = Route::disorder(DisorderId::Depression);
        let severe = plain.with_severity(Severity::Severe);
        let severe_private = severe.with_filter(ResourceFilter::Private);

        assert_ne!(page_key(&plain), page_key(&severe));
        assert_ne!(page_key(&severe), page_key(&severe_private));
        assert_ne!(page_key(&plain), page_key(&severe_private));
        assert_eq!(page_key(&plain), page_key(&Route::disorder(DisorderId::Depression)));
    }

    #[test]
    fn test_app_starts_disorder_page_from_route_state() {
        let route = Route::disorder(DisorderId::Depression)
            .with_severity(Severity::Severe)
            .with_filter(ResourceFilter::Private);
        let html = render_app(route, RenderTarget::Interactive);
        assert!(html.contains("Severe Severity"));
        assert!(!html.contains("Mild Severity"));
    }
}
