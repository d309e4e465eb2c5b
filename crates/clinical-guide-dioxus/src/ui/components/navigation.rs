use super::RouteLink;
use crate::ui::RenderTarget;
use clinical_guide_engine::{NavLink, Route, SITE_NAME, SectionToggle};
use dioxus::prelude::*;

const REGION: &str = "Annapolis Valley";

fn link_class(link: &NavLink, current: &Route) -> String {
    if link.is_active(current) {
        "nav-link active".to_string()
    } else {
        "nav-link".to_string()
    }
}

#[component]
pub fn Navigation(current: Route, target: RenderTarget, on_navigate: EventHandler<Route>) -> Element {
    let mut menu = use_signal(SectionToggle::new);
    let menu_open = menu.read().is_expanded();
    let links = NavLink::all();

    rsx! {
        nav {
            class: "navigation",
            div {
                class: "nav-inner",
                RouteLink {
                    route: Route::Home,
                    target: target.clone(),
                    class: "brand",
                    on_navigate,
                    span { class: "brand-full", "{SITE_NAME}" }
                    span { class: "brand-short", "MH Guide" }
                }
                div {
                    class: "nav-right",
                    span { class: "region-badge", "{REGION}" }
                    div {
                        class: "nav-links",
                        for link in links.iter() {
                            RouteLink {
                                key: "{link.label}",
                                route: link.route.clone(),
                                target: target.clone(),
                                class: link_class(link, &current),
                                on_navigate,
                                "{link.label}"
                            }
                        }
                    }
                    if !target.is_static() {
                        button {
                            class: "menu-toggle",
                            onclick: move |_| {
                                menu.write().toggle();
                            },
                            if menu_open { "Close" } else { "Menu" }
                        }
                    }
                }
            }

            if target.is_static() {
                details {
                    class: "mobile-menu",
                    summary { class: "menu-toggle", "Menu" }
                    span { class: "region-badge", "{REGION}" }
                    for link in links.iter() {
                        RouteLink {
                            key: "{link.label}",
                            route: link.route.clone(),
                            target: target.clone(),
                            class: link_class(link, &current),
                            on_navigate,
                            "{link.label}"
                        }
                    }
                }
            } else if menu_open {
                div {
                    class: "mobile-menu open",
                    span { class: "region-badge", "{REGION}" }
                    for link in links.iter() {
                        RouteLink {
                            key: "{link.label}",
                            route: link.route.clone(),
                            target: target.clone(),
                            class: link_class(link, &current),
                            on_navigate: move |route: Route| {
                                menu.write().set_expanded(false);
                                on_navigate.call(route);
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinical_guide_engine::{DisorderId, ResourceFilter};
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(current: Route, target: RenderTarget) -> Element {
        rsx! {
            Navigation { current, target, on_navigate: |_: Route| {} }
        }
    }

    fn render_nav(current: Route, target: RenderTarget) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { current, target });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_current_page_link_is_active() {
        let current = Route::disorder(DisorderId::Depression).with_filter(ResourceFilter::Public);
        let html = render_nav(current, RenderTarget::Interactive);

        assert_eq!(html.matches("nav-link active").count(), 1);
        let active = html.find("nav-link active").unwrap();
        let start = html[..active].rfind("<a").unwrap();
        let end = active + html[active..].find('>').unwrap();
        assert!(html[start..end].contains(r#"href="/depression""#));
        assert!(html.contains("Annapolis Valley"));
    }

    #[test]
    fn test_mobile_menu_starts_closed() {
        let html = render_nav(Route::Home, RenderTarget::Interactive);
        assert!(html.contains("menu-toggle"));
        assert!(!html.contains("mobile-menu open"));
    }

    #[test]
    fn test_static_menu_is_details_element() {
        let html = render_nav(Route::Home, RenderTarget::static_site(""));
        assert!(html.contains(r#"<details class="mobile-menu""#));
        assert!(!html.contains("<button"));
        // Desktop and mobile link rows each mark home active
        assert_eq!(html.matches("nav-link active").count(), 2);
    }
}
