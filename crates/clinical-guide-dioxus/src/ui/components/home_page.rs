use super::{NoticeBox, ResourceCardView, RouteLink, TherapyArticle};
use crate::ui::RenderTarget;
use clinical_guide_engine::{ContentStore, DisorderCard, ResourceCard, Route};
use dioxus::prelude::*;

#[component]
pub fn HomePage(target: RenderTarget, on_navigate: EventHandler<Route>) -> Element {
    let home = ContentStore::global().home();

    rsx! {
        div {
            class: "home-page",
            section {
                class: "hero",
                h1 { "{home.hero.title}" }
                p { class: "tagline", "{home.hero.tagline}" }
                p { class: "audience", "{home.hero.audience}" }
            }

            div {
                class: "disorder-cards",
                for card in home.disorder_cards.iter() {
                    DisorderCardView {
                        key: "{card.id}",
                        card: card.clone(),
                        target: target.clone(),
                        on_navigate,
                    }
                }
            }

            section {
                class: "therapies",
                h2 { "{home.therapies_heading}" }
                for therapy in home.therapies.iter() {
                    TherapyArticle { key: "{therapy.name}", therapy: therapy.clone() }
                }
            }

            section {
                class: "regional-resources",
                h2 { "{home.regional_heading}" }
                div {
                    class: "resource-list",
                    for (index, resource) in home.regional_resources.iter().enumerate() {
                        ResourceCardView { key: "{index}", card: ResourceCard::from(resource) }
                    }
                }
            }

            NoticeBox { notice: home.disclaimer.clone(), class: "disclaimer" }

            footer {
                class: "site-footer",
                for line in home.footer.iter() {
                    p { "{line}" }
                }
            }
        }
    }
}

#[component]
fn DisorderCardView(
    card: DisorderCard,
    target: RenderTarget,
    on_navigate: EventHandler<Route>,
) -> Element {
    let class = format!("disorder-card {}", card.accent.css_class());

    rsx! {
        div {
            class: "{class}",
            h2 { "{card.heading}" }
            p { "{card.summary}" }
            RouteLink {
                route: Route::disorder(card.id),
                target,
                class: "card-link",
                on_navigate,
                "View Guidelines →"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(target: RenderTarget) -> Element {
        rsx! {
            HomePage { target, on_navigate: |_: Route| {} }
        }
    }

    fn render_home(target: RenderTarget) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { target });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_home_lists_all_sections() {
        let html = render_home(RenderTarget::Interactive);

        assert!(html.contains("Mental Health Clinical Guide for Primary Care"));
        assert_eq!(html.matches("View Guidelines").count(), 3);
        assert_eq!(html.matches(r#"<article class="therapy""#).count(), 7);
        assert_eq!(html.matches(r#"class="resource-card""#).count(), 15);
        assert!(html.contains("Professional Use Only"));
        assert!(html.contains("CANMAT 2023"));
    }

    #[test]
    fn test_static_cards_link_to_disorder_directories() {
        let html = render_home(RenderTarget::static_site("/guide"));
        assert!(html.contains(r#"href="/guide/depression/""#));
        assert!(html.contains(r#"href="/guide/anxiety/""#));
        assert!(html.contains(r#"href="/guide/substance-use/""#));
    }
}
