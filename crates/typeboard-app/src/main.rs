//! Typeboard entry point.

mod app;
mod ui;

use app::TypeboardApp;

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting Typeboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Typeboard")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Typeboard",
        options,
        Box::new(|cc| Ok(Box::new(TypeboardApp::new(cc)))),
    )
}
