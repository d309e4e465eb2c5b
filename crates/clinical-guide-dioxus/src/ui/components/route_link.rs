use crate::ui::RenderTarget;
use clinical_guide_engine::Route;
use dioxus::prelude::*;

/// Link to another view. Interactive targets swap the route in place instead
/// of letting the webview follow the href.
#[component]
pub fn RouteLink(
    route: Route,
    target: RenderTarget,
    #[props(default)] class: String,
    on_navigate: EventHandler<Route>,
    children: Element,
) -> Element {
    let href = target.href(&route);
    let interactive = !target.is_static();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if interactive {
                    evt.prevent_default();
                    on_navigate.call(route.clone());
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinical_guide_engine::DisorderId;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(target: RenderTarget) -> Element {
        rsx! {
            RouteLink {
                route: Route::disorder(DisorderId::Anxiety),
                target,
                class: "nav-link",
                on_navigate: |_: Route| {},
                "Anxiety"
            }
        }
    }

    fn render_link(target: RenderTarget) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { target });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_static_link_points_at_page_directory() {
        let html = render_link(RenderTarget::static_site("/guide"));
        assert!(html.contains(r#"href="/guide/anxiety/""#));
        assert!(html.contains(r#"class="nav-link""#));
        assert!(html.contains("Anxiety"));
    }

    #[test]
    fn test_interactive_link_uses_route_path() {
        let html = render_link(RenderTarget::Interactive);
        assert!(html.contains(r#"href="/anxiety""#));
    }
}
