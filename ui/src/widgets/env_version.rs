use egui::{Color32, Response, Ui};

/// Displays the build environment and version in the top bar.
pub fn env_version(ui: &mut Ui) -> Response {
    let env_name = if cfg!(feature = "env_test") {
        "test"
    } else {
        "stable"
    };

    let color = match env_name {
        "test" => Color32::YELLOW,
        _ => Color32::GREEN,
    };

    ui.colored_label(color, format!("{env_name}:{}", env!("CARGO_PKG_VERSION")))
}
