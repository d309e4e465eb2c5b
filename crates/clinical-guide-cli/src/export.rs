use clinical_guide_dioxus::render_route;
use clinical_guide_engine::{IoError, Route, prepare_output_dir, write_page};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Absolute paths of the files written, in route order.
    pub pages: Vec<PathBuf>,
}

/// Every route the static site serves, plus the not-found page.
pub fn planned_routes() -> Vec<Route> {
    let mut routes = Route::all_static();
    routes.push(Route::NotFound("/404".to_string()));
    routes
}

/// Render every page and write it below `output_root`.
pub fn export_site(output_root: &Path, base_path: &str) -> Result<ExportSummary, IoError> {
    prepare_output_dir(output_root)?;

    let mut summary = ExportSummary::default();
    for route in planned_routes() {
        let html = render_route(&route, base_path);
        let written = write_page(&route.output_file(), output_root, &html)?;
        log::info!("{route} -> {}", written.display());
        summary.pages.push(written);
    }

    log::info!(
        "Exported {} pages to {}",
        summary.pages.len(),
        output_root.display()
    );
    Ok(summary)
}
