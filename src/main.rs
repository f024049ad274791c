mod app;
mod convert;
mod preview;
mod state;
mod ui;

use app::DcrawApp;
use eframe::egui;

const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "dcraw-egui – Raw Converter",
        options,
        Box::new(|_cc| Ok(Box::new(DcrawApp::default()))),
    )
}
