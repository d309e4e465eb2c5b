use crate::ui::RenderTarget;
use clinical_guide_engine::Route;
use dioxus::prelude::*;

/// One option of a selector. A button in the window, a link to the route
/// carrying the option on the static site.
#[component]
pub fn ChoiceControl(
    label: &'static str,
    selected: bool,
    class: &'static str,
    route: Route,
    target: RenderTarget,
    on_select: EventHandler<()>,
) -> Element {
    let classes = if selected {
        format!("{class} selected")
    } else {
        class.to_string()
    };

    if target.is_static() {
        let href = target.href(&route);
        rsx! {
            a { class: "{classes}", href: "{href}", "{label}" }
        }
    } else {
        rsx! {
            button {
                class: "{classes}",
                onclick: move |_| on_select.call(()),
                "{label}"
            }
        }
    }
}
