use eframe::egui;

use crate::animator::TICK_INTERVAL;
use crate::overlay;
use crate::passthrough;
use crate::session::OverlaySession;
use crate::settings::{
    DotMode, PanelSettings, EDGE_OFFSET_RANGE, RADIUS_RANGE, SPACING_RANGE, SPEED_RANGE,
};
use crate::tracker;

/// Fallback when the window manager does not report a monitor size.
const FALLBACK_SCREEN: egui::Vec2 = egui::Vec2::new(1920.0, 1080.0);

/// The settings panel. Owns the current [`PanelSettings`] and at most one
/// live [`OverlaySession`]; Start always tears the previous session down
/// before constructing the next one from the current slider values.
pub struct ControlPanelApp {
    settings: PanelSettings,
    session: Option<OverlaySession>,
}

impl Default for ControlPanelApp {
    fn default() -> Self {
        Self {
            settings: PanelSettings::default(),
            session: None,
        }
    }
}

impl ControlPanelApp {
    fn start_overlay(&mut self, ctx: &egui::Context) {
        // Tear the previous session down before its replacement exists.
        self.session = None;

        let screen = ctx
            .input(|i| i.viewport().monitor_size)
            .filter(|size| size.x > 0.0 && size.y > 0.0)
            .unwrap_or_else(|| {
                tracing::debug!(
                    "monitor size unknown; assuming {}x{}",
                    FALLBACK_SCREEN.x,
                    FALLBACK_SCREEN.y
                );
                FALLBACK_SCREEN
            });

        tracing::info!(mode = ?self.settings.mode, "starting overlay");
        self.session = Some(OverlaySession::start(
            self.settings.clone(),
            screen,
            tracker::default_backend(),
            passthrough::detect(),
        ));
    }
}

impl eframe::App for ControlPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.radio_value(&mut self.settings.mode, DotMode::Static, "Dot static");
            ui.radio_value(&mut self.settings.mode, DotMode::Active, "Dot active");
            ui.radio_value(&mut self.settings.mode, DotMode::Reverse, "Dot active reverse");

            ui.separator();

            ui.add(egui::Slider::new(&mut self.settings.speed, SPEED_RANGE).text("Speed"));
            ui.add(
                egui::Slider::new(&mut self.settings.edge_offset, EDGE_OFFSET_RANGE)
                    .text("Dot offset"),
            );
            ui.add(egui::Slider::new(&mut self.settings.dot_radius, RADIUS_RANGE).text("Dot size"));
            ui.add(
                egui::Slider::new(&mut self.settings.dot_spacing, SPACING_RANGE)
                    .text("Dot spacing"),
            );

            ui.separator();

            if ui.button("Start").clicked() {
                self.start_overlay(ctx);
            }
        });

        if let Some(session) = &mut self.session {
            overlay::show(ctx, session);
            if session.is_animated() {
                ctx.request_repaint_after(TICK_INTERVAL);
            }
        }
    }

    // The overlay viewport shares this clear colour; the panel paints its
    // own opaque background.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}
