//! Dioxus components for the clinical guide, plus server-side rendering of
//! whole pages for the static site.

pub mod render;
pub mod ui;

pub use render::render_route;
pub use ui::{App, AppProps, RenderTarget};
