use clinical_guide_dioxus::{App, RenderTarget};
use clinical_guide_engine::Route;
use dioxus::prelude::*;
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("clinical-guide starting up");

    // Optional starting route, e.g. `/anxiety/severe/public`
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        let program_name = args
            .first()
            .cloned()
            .unwrap_or_else(|| "clinical-guide-dioxus".to_string());
        eprintln!("Usage: {program_name} [route]");
        process::exit(1);
    }
    if let Some(path) = args.get(1)
        && let Err(e) = Route::parse(path)
    {
        log::warn!("Starting route '{path}' is invalid: {e}");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    let initial_route = env::args()
        .nth(1)
        .map(|path| Route::resolve(&path))
        .unwrap_or_default();
    log::info!("Opening {initial_route}");

    rsx! {
        App { initial_route, target: RenderTarget::Interactive }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Mental Health Clinical Guide")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
