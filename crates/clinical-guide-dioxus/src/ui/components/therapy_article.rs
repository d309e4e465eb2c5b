use super::ExternalLink;
use clinical_guide_engine::TherapyExplainer;
use dioxus::prelude::*;

#[component]
pub fn TherapyArticle(therapy: TherapyExplainer) -> Element {
    rsx! {
        article {
            class: "therapy",
            h3 { "{therapy.name}" }
            for (index, paragraph) in therapy.paragraphs.iter().enumerate() {
                p { key: "{index}", "{paragraph}" }
            }
            if let Some(link) = therapy.read_more.as_ref() {
                p {
                    class: "read-more",
                    strong { "READ MORE AT:" }
                    " "
                    ExternalLink { href: link.clone(), class: "read-more-link", "{link}" }
                }
            }
        }
    }
}
