//! Reversi GUI
//!
//! Play Reversi against the search AI, a random player or another human.
//! Set `RUST_LOG=reversi=info` to log the moves, `debug` for search summaries.

use reversi::ui::ReversiApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 700.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(|cc| Ok(Box::new(ReversiApp::new(cc)))),
    )
}
