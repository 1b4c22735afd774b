use std::time::Duration;

use log::{error, info};

use crate::config::config::*;
use crate::core::config_store::ConfigStore;
use crate::core::process_launcher::SystemSpawner;
use crate::core::startup::StartupSequence;
use crate::i18n::keys::{LAUNCHER_TITLE, TITLE};
use crate::ui::launcher::LauncherApp;
use crate::ui::opener::MultiOpenerApp;

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn native_options(title: &str, size: [f32; 2]) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size)
            .with_min_inner_size([360.0, 180.0]),
        ..Default::default()
    }
}

fn finish(result: eframe::Result<()>) {
    if let Err(e) = result {
        error!("Failed to start the window: {}", e);
        std::process::exit(1);
    }
}

pub fn run_opener() {
    let store = ConfigStore::open_or_bootstrap(config_file_path());

    let tick = if fast_start() {
        Duration::ZERO
    } else {
        StartupSequence::DEFAULT_TICK
    };
    let startup = StartupSequence::new(tick);

    info!("{} v{} starting ({})", APP_NAME, APP_VERSION, store.current_language());
    let options = native_options(store.resolve(TITLE), [560.0, 200.0]);
    let mut app = MultiOpenerApp::new(store, Box::new(SystemSpawner), startup);

    finish(eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            app.init(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    ));
}

pub fn run_launcher() {
    let store = ConfigStore::open_or_bootstrap(config_file_path());

    info!("{} v{} starting", LAUNCHER_NAME, APP_VERSION);
    let options = native_options(store.resolve(LAUNCHER_TITLE), [500.0, 400.0]);
    let mut app = LauncherApp::new(store, Box::new(SystemSpawner));

    finish(eframe::run_native(
        LAUNCHER_NAME,
        options,
        Box::new(|cc| {
            app.init(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    ));
}
