//! Whole-page HTML for the static site.

use crate::ui::{App, AppProps, RenderTarget, SITE_CSS};
use clinical_guide_engine::Route;
use dioxus::dioxus_core::VirtualDom;

/// Render `route` as a standalone HTML document whose links resolve under
/// `base_path`.
pub fn render_route(route: &Route, base_path: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        App,
        AppProps {
            initial_route: route.clone(),
            target: RenderTarget::static_site(base_path),
        },
    );
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);
    log::debug!("Rendered {route} ({} bytes)", body.len());

    let route_title = route.title();
    let title = html_escape::encode_text(&route_title);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n{SITE_CSS}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}
