use super::{ChoiceControl, ContentList, LifestylePanel, ResourceCardView};
use crate::ui::RenderTarget;
use clinical_guide_engine::{
    DisorderId, ResourceFilter, ResourceListing, Route, Severity, TreatmentModel,
};
use dioxus::prelude::*;

/// Severity selector, the selected tier's guidance, and its filtered resources.
#[component]
pub fn TreatmentSection(
    id: DisorderId,
    model: TreatmentModel,
    target: RenderTarget,
    on_severity: EventHandler<Severity>,
    on_filter: EventHandler<ResourceFilter>,
) -> Element {
    let state = model.state;
    let route = Route::Disorder {
        id,
        treatment: state,
    };

    rsx! {
        div {
            class: "treatment-section",
            h2 { "Treatment Options" }

            div {
                class: "severity-selector",
                for (index, severity) in Severity::ALL.into_iter().enumerate() {
                    ChoiceControl {
                        key: "{index}",
                        label: severity.label(),
                        selected: severity == state.severity,
                        class: "severity-option",
                        route: route.with_severity(severity),
                        target: target.clone(),
                        on_select: move |_: ()| on_severity.call(severity),
                    }
                }
            }

            div {
                class: "severity-description",
                h3 { "{model.heading}" }
                p { "{model.description}" }
            }

            div {
                class: "psychotherapy",
                h3 { "Psychotherapy Options" }
                ContentList { lines: model.psychotherapy.clone(), bullet: "bullet-green" }
            }

            if !model.lifestyle.is_empty() {
                LifestylePanel { lines: model.lifestyle.clone() }
            }

            div {
                class: "resources",
                div {
                    class: "resources-header",
                    h3 { "Resources" }
                    div {
                        class: "filter-controls",
                        for (index, filter) in ResourceFilter::ALL.into_iter().enumerate() {
                            ChoiceControl {
                                key: "{index}",
                                label: filter.label(),
                                selected: filter == state.filter,
                                class: "filter-option",
                                route: route.with_filter(filter),
                                target: target.clone(),
                                on_select: move |_: ()| on_filter.call(filter),
                            }
                        }
                    }
                }
                div {
                    class: "resource-list",
                    match &model.resources {
                        ResourceListing::Cards(cards) => rsx! {
                            for (index, card) in cards.iter().enumerate() {
                                ResourceCardView { key: "{index}", card: card.clone() }
                            }
                        },
                        ResourceListing::Empty(message) => rsx! {
                            p { class: "empty-resources", "{message}" }
                        },
                    }
                }
            }
        }
    }
}
