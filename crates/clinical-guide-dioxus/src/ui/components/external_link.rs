use dioxus::prelude::*;

/// Link that opens outside the guide in a new browsing context.
#[component]
pub fn ExternalLink(href: String, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_external_link_opens_new_context_without_opener() {
        fn wrapper() -> Element {
            rsx! {
                ExternalLink { href: "https://988lifeline.org", class: "tool-link", "988 Lifeline" }
            }
        }
        let mut dom = VirtualDom::new(wrapper);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"href="https://988lifeline.org""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("988 Lifeline"));
    }
}
