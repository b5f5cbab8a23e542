// Placement Predictor - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading, then logging initialisation
// 3. One-time model/scaler and home image loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

pub use placement_predictor::app;
pub use placement_predictor::core;
pub use placement_predictor::platform;
pub use placement_predictor::ui;
pub use placement_predictor::util;

use clap::Parser;
use std::path::PathBuf;

/// Placement Predictor - student placement prediction desktop app.
///
/// Enter a student's academic record and skills to get a placed / not
/// placed prediction from a pre-fit scaler and classifier.
#[derive(Parser, Debug)]
#[command(name = "placement-predictor", version, about)]
struct Cli {
    /// Model artifact (JSON). Overrides [artifacts] model_path.
    #[arg(short = 'm', long = "model")]
    model: Option<PathBuf>,

    /// Scaler artifact (JSON). Overrides [artifacts] scaler_path.
    #[arg(short = 's', long = "scaler")]
    scaler: Option<PathBuf>,

    /// Home view image (PNG). Overrides [artifacts] home_image_path.
    #[arg(short = 'i', long = "image")]
    image: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Apply theme and body font size from config.
fn configure_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font) in style.text_styles.iter_mut() {
            font.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.4,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}

fn main() {
    let cli = Cli::parse();

    // Config is read before the subscriber exists so its [logging] level
    // can take part; its warnings are re-emitted once logging is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);
    let config = config.with_overrides(cli.model, cli.scaler, cli.image);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %platform_paths.config_file().display(),
        "Placement Predictor starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Artifacts are loaded once and held for the process lifetime.
    let artifacts =
        platform::artifacts::load_artifacts(&config.model_path, &config.scaler_path);
    if let Err(ref e) = artifacts {
        tracing::error!(error = %e, "Failed to load model artifacts");
    }

    let home_image = platform::fs::load_image(&config.home_image_path);
    if let Err(ref e) = home_image {
        tracing::warn!(error = %e, "Home image unavailable");
    }

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let mut state = app::state::AppState::new(config, artifacts, home_image, cli.debug);
    state.warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "\u{1f393} {} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::PlacementApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Placement Predictor GUI: {e}");
        std::process::exit(1);
    }
}
