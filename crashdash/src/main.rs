#![warn(clippy::all, rust_2018_idioms)]

use crashdash::{BackendAppState, Config, EguiApp};
use dash_core::backend::BackendEventLoop;

const WINDOW_NAME: &str = "CrashDash >>";
const WINDOW_WIDTH: f32 = 1100.0;
const WINDOW_HEIGHT: f32 = 700.0;

fn main() -> eframe::Result {
    env_logger::init();

    // start backend loop
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let config = if let Ok(config) = Config::from_config_file() {
        config
    } else {
        log::warn!("unable to load config file \".crashdash\" from home directory");
        Config::default()
    };
    let backend_state = BackendAppState::new(config.data_path.clone());
    let eventloop_handle = BackendEventLoop::new(request_rx, backend_state).run();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| {
            Ok(Box::new(EguiApp::new(
                cc,
                config,
                request_tx,
                eventloop_handle,
            )))
        }),
    )
}
