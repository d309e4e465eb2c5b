use anyhow::{Context, Result};
use clap::Parser;
use clinical_guide_config::{Config, normalize_base_path};
use clinical_guide_dioxus::render_route;
use clinical_guide_engine::Route;
use std::path::PathBuf;

mod export;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "clinical-guide-cli")]
#[command(about = "Export the mental health clinical guide as a static site")]
struct Cli {
    /// Directory to write the site into (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// URL prefix the site is served under, e.g. /guide
    #[arg(long)]
    base_path: Option<String>,
    /// Print a single page to stdout instead of exporting, e.g. /anxiety/severe/public
    #[arg(long)]
    route: Option<String>,
    /// Remember the output directory and base path in the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    if let Some(path) = cli.route.as_deref() {
        let base_path = normalize_base_path(cli.base_path.as_deref().unwrap_or_default());
        let route = Route::resolve(path);
        log::info!("Rendering single page {route}");
        print!("{}", render_route(&route, &base_path));
        return Ok(());
    }

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    let config = Config::load().context("Failed to load config file")?;

    let Some(settings) = Settings::resolve(cli.output, cli.base_path, config) else {
        anyhow::bail!(
            "No output directory given and no config file found.\n\
             Usage: clinical-guide-cli --output <dir> [--base-path <prefix>]\n\
             Or create a config file at {}",
            config_path.display()
        );
    };

    if cli.save_config {
        settings
            .to_config()
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
        log::info!("Saved settings to {}", config_path.display());
    }

    let summary = export::export_site(&settings.output_path, &settings.base_path).with_context(|| {
        let source = if settings.from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        format!(
            "Failed to export to '{}'{source}",
            settings.output_path.display()
        )
    })?;

    println!(
        "Wrote {} pages to {}",
        summary.pages.len(),
        settings.output_path.display()
    );
    Ok(())
}
