#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use parkdesk_ui::state::State;

fn main() -> eframe::Result {
    // Log to stderr (run with `RUST_LOG=debug` for fetch traces).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_title("Parkdesk")
            .with_inner_size([760.0, 480.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Parkdesk",
        native_options,
        Box::new(move |_cc| {
            let state = State::default();
            Ok(Box::new(parkdesk_ui::ParkdeskApp::new(state)))
        }),
    )
}
