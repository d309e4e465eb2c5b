use super::{ExpandableSection, NoticeBox, NotFound, TreatmentSection};
use crate::ui::RenderTarget;
use clinical_guide_engine::{
    ContentStore, DisorderId, DisorderView, PageModel, ResourceFilter, Route, SectionId, Severity,
    TreatmentState, compose_page,
};
use dioxus::prelude::*;

#[component]
pub fn DisorderPage(
    id: DisorderId,
    initial: TreatmentState,
    target: RenderTarget,
    on_navigate: EventHandler<Route>,
) -> Element {
    let mut view = use_signal(|| DisorderView::new(initial));

    let page = match compose_page(ContentStore::global(), id, &view.read()) {
        PageModel::Disorder(page) => page,
        PageModel::Missing { requested } => {
            return rsx! {
                NotFound { path: Route::disorder(requested).path(), target, on_navigate }
            };
        }
    };

    rsx! {
        div {
            class: "disorder-page",
            div {
                class: "page-header",
                h1 { "{page.title}" }
                p { class: "subtitle", "{page.subtitle}" }
            }

            ExpandableSection {
                section: page.screening.clone(),
                target: target.clone(),
                on_toggle: move |section: SectionId| {
                    view.write().toggle_section(section);
                },
            }

            ExpandableSection {
                section: page.diagnosis.clone(),
                target: target.clone(),
                on_toggle: move |section: SectionId| {
                    view.write().toggle_section(section);
                },
            }

            TreatmentSection {
                id,
                model: page.treatment.clone(),
                target: target.clone(),
                on_severity: move |severity: Severity| {
                    log::debug!("{id}: severity -> {severity}");
                    view.write().select_severity(severity);
                },
                on_filter: move |filter: ResourceFilter| {
                    view.write().select_filter(filter);
                },
            }

            NoticeBox { notice: page.notice.clone(), class: "important-notice" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(id: DisorderId, initial: TreatmentState) -> Element {
        rsx! {
            DisorderPage { id, initial, target: RenderTarget::Interactive, on_navigate: |_: Route| {} }
        }
    }

    fn render_page(id: DisorderId, initial: TreatmentState) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { id, initial });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_page_has_header_sections_treatment_and_notice() {
        let html = render_page(DisorderId::Anxiety, TreatmentState::default());

        let header = html.find("Clinical guidance for screening, diagnosis, and treatment planning").unwrap();
        let treatment = html.find("Treatment Options").unwrap();
        let notice = html.find("Important Notice").unwrap();
        assert!(header < treatment && treatment < notice);
        assert_eq!(html.matches(r#"class="expandable-section""#).count(), 2);
    }

    #[test]
    fn test_initial_treatment_state_is_honoured() {
        let html = render_page(
            DisorderId::SubstanceUse,
            TreatmentState::new(Severity::Moderate, ResourceFilter::Private),
        );
        assert!(html.contains("Moderate Severity"));
        assert!(!html.contains("badge badge-public\""));
    }
}
