use dot_overlay::gui::ControlPanelApp;
use dot_overlay::logging;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let log_file = std::env::var_os("DOT_OVERLAY_LOG").map(std::path::PathBuf::from);
    logging::init(cfg!(debug_assertions), log_file);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([350.0, 300.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Dot Control Panel",
        native_options,
        Box::new(|_cc| Box::new(ControlPanelApp::default())),
    )
    .map_err(|err| anyhow::anyhow!("control panel exited with an error: {err}"))
}
