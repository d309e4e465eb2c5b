use clinical_guide_engine::{ListItemKind, ListLine};
use dioxus::prelude::*;

/// Ordered lines; self-numbered lines keep their own marker and everything
/// else gets a coloured bullet.
#[component]
pub fn ContentList(lines: Vec<ListLine>, bullet: &'static str) -> Element {
    rsx! {
        ul {
            class: "content-list",
            for (index, line) in lines.iter().enumerate() {
                li {
                    key: "{index}",
                    class: if line.kind == ListItemKind::SelfNumbered { "numbered" } else { "bulleted" },
                    if line.kind == ListItemKind::Bulleted {
                        span { class: "bullet {bullet}" }
                    }
                    span { class: "line-text", "{line.text}" }
                }
            }
        }
    }
}
