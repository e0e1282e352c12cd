mod app;

use std::sync::Arc;

use eframe::{egui, NativeOptions};
use folio_core::{load_records, AppConfig, AppState, JsonFileStorage, Storage};
use reqwest::{redirect, ClientBuilder};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use crate::app::{AppInit, FolioApp};

fn main() -> eframe::Result<()> {
    init_tracing();

    let runtime = Runtime::new().expect("failed to initialise Tokio runtime");
    let client = ClientBuilder::new()
        .redirect(redirect::Policy::limited(5))
        .user_agent("Folio/0.1")
        .build()
        .expect("failed to build HTTP client");
    let config = AppConfig::load();
    let state = load_app_state(&config);

    // One fetch per session; a failure leaves the list empty.
    let records = runtime.block_on(load_records(&config.source, &client));
    drop(runtime);

    let [width, height] = config.ui.window_size;
    let init = AppInit {
        config,
        state,
        records,
    };

    eframe::run_native(
        "Folio",
        NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height])
                .with_min_inner_size([600.0, 500.0]),
            ..Default::default()
        },
        Box::new(move |_cc| Box::new(FolioApp::new(init))),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_app_state(config: &AppConfig) -> AppState {
    let path = AppConfig::config_dir().join("storage.json");
    let storage = Storage::new(Arc::new(JsonFileStorage::open(path)));
    AppState::with_default_locale(storage, config.ui.default_locale)
}
