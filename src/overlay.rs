use std::time::Instant;

use eframe::egui::{self, Color32, ViewportBuilder, ViewportId};

use crate::animator::TICK_INTERVAL;
use crate::session::OverlaySession;

/// Title of the overlay window; the click-through provider locates the
/// native window by it.
pub const OVERLAY_TITLE: &str = "dot-overlay-surface";

/// Viewport settings for the overlay window: full screen, borderless,
/// transparent, always on top, hidden from the taskbar, with pointer
/// pass-through requested up front.
pub fn viewport_builder(screen: egui::Vec2) -> ViewportBuilder {
    ViewportBuilder::default()
        .with_title(OVERLAY_TITLE)
        .with_position([0.0, 0.0])
        .with_inner_size(screen)
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_taskbar(false)
        .with_mouse_passthrough(true)
        .with_resizable(false)
}

/// Show the overlay for one frame: pump pointer events, advance the
/// animation clock and paint every visible dot. The caller stops invoking
/// this once the session is gone, which destroys the platform window.
pub fn show(ctx: &egui::Context, session: &mut OverlaySession) {
    let builder = viewport_builder(session.screen());
    ctx.show_viewport_immediate(ViewportId::from_hash_of("dot_overlay"), builder, |ctx, _class| {
        session.apply_click_through(OVERLAY_TITLE);
        session.pump_events();
        session.advance(Instant::now());

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::TRANSPARENT))
            .show(ctx, |ui| {
                let painter = ui.painter();
                for dot in session.dots() {
                    if dot.visible {
                        painter.circle_filled(dot.center, dot.radius, dot.color);
                    }
                }
            });

        if session.is_animated() {
            ctx.request_repaint_after(TICK_INTERVAL);
        }
    });
}
