use super::ExternalLink;
use clinical_guide_engine::ResourceCard;
use dioxus::prelude::*;

#[component]
pub fn ResourceCardView(card: ResourceCard) -> Element {
    let badge_class = format!("badge badge-{}", card.badge.slug());
    let badge_label = card.badge.label();

    rsx! {
        div {
            class: "resource-card",
            div {
                class: "resource-body",
                div {
                    class: "resource-title-row",
                    h4 { "{card.title}" }
                    span { class: "{badge_class}", "{badge_label}" }
                }
                p { class: "resource-description", "{card.description}" }
                for detail in card.details.iter() {
                    p {
                        key: "{detail.label}",
                        class: "resource-detail",
                        span { class: "detail-label", "{detail.label}:" }
                        " {detail.value}"
                    }
                }
            }
            if let Some(link) = card.link.as_ref() {
                ExternalLink {
                    href: link.clone(),
                    class: "resource-link",
                    "Visit ↗"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinical_guide_engine::{DeliveryFormat, NO_LINK, Resource, ResourceType};
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_card(resource: &Resource) -> String {
        let mut dom = VirtualDom::new_with_props(
            ResourceCardView,
            ResourceCardViewProps {
                card: ResourceCard::from(resource),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_card_shows_details_in_order() {
        let resource = Resource::private("Valley Counselling", "Individual therapy", NO_LINK)
            .with_location("Kentville")
            .with_services(["CBT", "EMDR"])
            .with_cost("$120 per session")
            .with_format(DeliveryFormat::Both)
            .with_considerations("Waitlist varies");
        let html = render_card(&resource);

        let positions: Vec<usize> = ["Location:", "Services:", "Cost:", "Format:", "Considerations:"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("CBT, EMDR"));
        assert!(html.contains("in-person/virtual"));
        assert!(html.contains("badge badge-private"));
    }

    #[test]
    fn test_placeholder_link_renders_no_anchor() {
        let html = render_card(&Resource::public("Family doctor", "Follow-up", NO_LINK));
        assert!(!html.contains("<a"));
        assert!(!html.contains("Location:"));
    }

    #[test]
    fn test_real_link_opens_in_new_context() {
        let html = render_card(&Resource::public(
            "Crisis Text Line",
            "Text HOME to 686868",
            "https://www.crisistextline.ca",
        ));
        assert!(html.contains(r#"href="https://www.crisistextline.ca""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("badge badge-public"));
    }

    #[test]
    fn test_both_type_badge() {
        let resource = Resource::new("MAT Clinic", "Opioid agonist therapy", NO_LINK, ResourceType::Both);
        let html = render_card(&resource);
        assert!(html.contains("badge badge-both"));
    }
}
