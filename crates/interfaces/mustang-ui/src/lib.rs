mod app;
mod components;
mod theme;
mod utils;

use mustang_app_core::{FilePersistence, ShellSettings};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const WINDOW_TITLE: &str = "Mustang Head Unit";

/// Startup switches handed over by the binary.
#[derive(Debug, Default, Clone)]
pub struct ShellOptions {
    pub config: Option<PathBuf>,
    pub windowed: bool,
    pub verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_settings(config: Option<PathBuf>) -> ShellSettings {
    let store = FilePersistence::resolve(config);
    match store.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings, using defaults: {e:#}");
            ShellSettings::default()
        }
    }
}

pub fn run(options: ShellOptions) -> eframe::Result<()> {
    setup_logging(options.verbose);

    let settings = load_settings(options.config);
    let fullscreen = settings.fullscreen && !options.windowed;
    tracing::info!(fullscreen, tool_jar = %settings.launch.tool_jar, "Starting shell");

    let native = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([800.0, 480.0])
            .with_decorations(!fullscreen)
            .with_fullscreen(fullscreen)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);
            Ok(Box::new(app::ShellApp::new(cc.egui_ctx.clone(), settings)))
        }),
    )
}
