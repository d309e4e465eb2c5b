use clinical_guide_engine::Notice;
use dioxus::prelude::*;

#[component]
pub fn NoticeBox(notice: Notice, #[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "notice {class}",
            h3 { "{notice.title}" }
            p { "{notice.body}" }
        }
    }
}
