// ScanScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config loading (platform config directory)
// 4. Up-front scan loading when a path is given (parse completes, or the
//    process exits non-zero, before any window appears)
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use scanscope::app;
pub use scanscope::core;
pub use scanscope::platform;
pub use scanscope::ui;
pub use scanscope::util;

use clap::Parser;
use std::path::PathBuf;

/// Compile-time-embedded window icon PNG bytes.
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a missing asset.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => {
                    let rgba = img.into_rgba8();
                    egui::IconData {
                        rgba: rgba.into_raw(),
                        width: w,
                        height: h,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// Apply the user's visual preferences to the egui context.
fn apply_ui_config(ctx: &egui::Context, config: &platform::config::ViewerConfig) {
    ctx.set_visuals(if config.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
        body.size = config.font_size;
    }
    if let Some(button) = style.text_styles.get_mut(&egui::TextStyle::Button) {
        button.size = config.font_size;
    }
    ctx.set_style(style);
}

/// ScanScope - desktop viewer for Nmap XML scan output.
///
/// Point ScanScope at an Nmap XML file to browse the discovered services
/// grouped by port and by host, with per-service checked/comment notes.
#[derive(Parser, Debug)]
#[command(name = "ScanScope", version, about)]
struct Cli {
    /// Nmap XML file to open (starts empty if omitted).
    path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load the config before logging init so the
    // configured log level can participate in the priority chain.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config = match platform::config::ViewerConfig::load(&platform_paths.config_file()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}; using default settings");
            platform::config::ViewerConfig::default()
        }
    };

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ScanScope starting"
    );

    // Create application state
    let mut state = app::state::AppState::new(cli.debug);

    // A path on the CLI is loaded before the GUI appears. Malformed or
    // unreadable input is a fatal, user-visible error here; only re-opens
    // from inside the running session degrade to a status message.
    if let Some(ref path) = cli.path {
        match app::loader::load_scan(path) {
            Ok(document) => state.install_document(path.clone(), document),
            Err(e) => {
                tracing::error!(file = %path.display(), error = %e, "Failed to load scan");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    // Launch the GUI
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 420.0])
            .with_icon(icon_data),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            apply_ui_config(&cc.egui_ctx, &config);
            Ok(Box::new(gui::ScanScopeApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ScanScope GUI: {e}");
        std::process::exit(1);
    }
}
