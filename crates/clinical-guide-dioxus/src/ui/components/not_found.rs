use super::RouteLink;
use crate::ui::RenderTarget;
use clinical_guide_engine::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(path: String, target: RenderTarget, on_navigate: EventHandler<Route>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "Page Not Found" }
            p { "Nothing is published at {path}." }
            RouteLink {
                route: Route::Home,
                target,
                class: "card-link",
                on_navigate,
                "Return to the home page"
            }
        }
    }
}
