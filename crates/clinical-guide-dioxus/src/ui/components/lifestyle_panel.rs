use clinical_guide_engine::{LifestyleKind, LifestyleLine};
use dioxus::prelude::*;

#[component]
pub fn LifestylePanel(lines: Vec<LifestyleLine>) -> Element {
    rsx! {
        div {
            class: "lifestyle-panel",
            h3 { "Lifestyle & Evidence-Based Interventions" }
            div {
                class: "lifestyle-lines",
                for (index, line) in lines.iter().enumerate() {
                    if line.kind == LifestyleKind::Subheading {
                        h4 {
                            key: "{index}",
                            class: if line.spaced { "lifestyle-subheading spaced" } else { "lifestyle-subheading" },
                            "{line.text}"
                        }
                    } else {
                        div {
                            key: "{index}",
                            class: "lifestyle-bullet",
                            span { class: "bullet bullet-green" }
                            span { "{line.text}" }
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
    use clinical_guide_engine::classify_lifestyle;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_subheadings_and_bullets() {
        let lines: Vec<String> = [
            "Regular physical activity:",
            "Regular physical activity",
            "Sleep hygiene:",
            "Consistent wake time",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let mut dom = VirtualDom::new_with_props(
            LifestylePanel,
            LifestylePanelProps {
                lines: classify_lifestyle(&lines),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert_eq!(html.matches("<h4").count(), 2);
        assert_eq!(html.matches(r#"class="lifestyle-bullet""#).count(), 2);
        // Only the second subheading gets the gap above it
        assert_eq!(html.matches("lifestyle-subheading spaced").count(), 1);
        assert!(html.contains("Regular physical activity:</h4>"));
    }
}
