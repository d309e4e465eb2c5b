use super::{ContentList, ExternalLink};
use crate::ui::RenderTarget;
use clinical_guide_engine::{ListLine, SectionId, SectionModel, ToolLink};
use dioxus::prelude::*;

/// Collapsible block of guidance lines, collapsed until opened.
#[component]
pub fn ExpandableSection(
    section: SectionModel,
    target: RenderTarget,
    on_toggle: EventHandler<SectionId>,
) -> Element {
    let id = section.id;

    if target.is_static() {
        return rsx! {
            details {
                class: "expandable-section",
                summary {
                    class: "section-header",
                    h2 { "{section.title}" }
                    span { class: "chevron" }
                }
                SectionBody { lines: section.lines.clone(), tools: section.tools.clone() }
            }
        };
    }

    let chevron = if section.expanded { "▴" } else { "▾" };
    rsx! {
        div {
            class: "expandable-section",
            button {
                class: "section-header",
                onclick: move |_| on_toggle.call(id),
                h2 { "{section.title}" }
                span { class: "chevron", "{chevron}" }
            }
            if section.expanded {
                SectionBody { lines: section.lines.clone(), tools: section.tools.clone() }
            }
        }
    }
}

#[component]
fn SectionBody(lines: Vec<ListLine>, tools: Vec<ToolLink>) -> Element {
    rsx! {
        div {
            class: "section-body",
            ContentList { lines, bullet: "bullet-blue" }
            if !tools.is_empty() {
                div {
                    class: "section-tools",
                    h3 { "Screening Tools & Resources:" }
                    div {
                        class: "tool-links",
                        for (index, tool) in tools.iter().enumerate() {
                            if let Some(href) = tool.href.as_ref() {
                                ExternalLink {
                                    key: "{index}",
                                    href: href.clone(),
                                    class: "tool-link",
                                    "{tool.label}"
                                }
                            } else {
                                span { key: "{index}", class: "tool-link placeholder", "{tool.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
