use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use eframe::egui::{Color32, Pos2, Vec2};

use crate::animator::{DotField, TICK_INTERVAL};
use crate::layout;
use crate::passthrough::ClickThrough;
use crate::settings::PanelSettings;
use crate::tracker::{PointerBackend, PointerEvent};

/// Dot colours, alternating by index parity.
const DOT_COLORS: [Color32; 2] = [Color32::BLACK, Color32::from_rgb(0xe8, 0xe8, 0xe8)];

/// Upper bound on catch-up ticks per frame; the backlog is dropped after a
/// stalled frame instead of replayed.
const MAX_CATCHUP_TICKS: u32 = 16;

/// Render state for one dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
    pub visible: bool,
}

/// A live overlay: the anchors, the animation state and the pointer
/// subscription, captured from [`PanelSettings`] at start.
///
/// Exactly one session is alive at a time; the control panel drops the
/// previous one before starting the next. `close` (also run on drop) tears
/// everything down: the pointer backend is uninstalled and the animation
/// clock stops, so ticks scheduled after teardown are no-ops.
pub struct OverlaySession {
    settings: PanelSettings,
    screen: Vec2,
    anchors: Vec<Pos2>,
    field: DotField,
    backend: Box<dyn PointerBackend>,
    events: Option<Receiver<PointerEvent>>,
    passthrough: Box<dyn ClickThrough>,
    styled: bool,
    last_pointer: Option<(f64, f64)>,
    last_tick: Instant,
    running: bool,
}

impl OverlaySession {
    /// Start a session with the given settings against the given screen.
    ///
    /// Dynamic modes install the pointer backend; if that fails the session
    /// still runs, rendering the dots at their anchors like static mode.
    /// Static mode never touches the backend or the animator.
    pub fn start(
        settings: PanelSettings,
        screen: Vec2,
        mut backend: Box<dyn PointerBackend>,
        passthrough: Box<dyn ClickThrough>,
    ) -> Self {
        let anchors =
            layout::anchor_positions(screen.x, screen.y, settings.edge_offset, settings.dot_spacing);
        let field = DotField::new(anchors.len());

        let mut events = None;
        if settings.mode.is_dynamic() {
            let (tx, rx) = mpsc::channel();
            match backend.install(tx) {
                Ok(()) => events = Some(rx),
                Err(err) => {
                    tracing::warn!(
                        ?err,
                        "global pointer listener unavailable; dots will stay at their anchors"
                    );
                }
            }
        }

        Self {
            settings,
            screen,
            anchors,
            field,
            backend,
            events,
            passthrough,
            styled: false,
            last_pointer: None,
            last_tick: Instant::now(),
            running: true,
        }
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether pointer events are flowing and the animation clock matters.
    pub fn is_animated(&self) -> bool {
        self.running && self.events.is_some()
    }

    pub fn dot_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn current_offset(&self, idx: usize) -> Vec2 {
        self.field.current(idx)
    }

    pub fn target_offset(&self, idx: usize) -> Vec2 {
        self.field.target(idx)
    }

    /// Drain pending pointer events into target-offset increments.
    ///
    /// Consecutive absolute positions become per-event deltas, scaled by
    /// speed and signed by mode; the first event only seeds the stored
    /// position. No deduplication and no rate limiting.
    pub fn pump_events(&mut self) {
        if !self.running {
            return;
        }
        let Some(events) = &self.events else { return };
        let scale = self.settings.speed * self.settings.mode.direction();
        while let Ok(PointerEvent::Moved { x, y }) = events.try_recv() {
            if let Some((px, py)) = self.last_pointer {
                let delta = Vec2::new((x - px) as f32, (y - py) as f32) * scale;
                self.field.apply_delta(delta);
            }
            self.last_pointer = Some((x, y));
        }
    }

    /// Advance the fixed-step animation clock up to `now`: one settle-back
    /// step and one render step per elapsed tick.
    pub fn advance(&mut self, now: Instant) {
        if !self.is_animated() {
            return;
        }
        let mut ticks = 0;
        while now.duration_since(self.last_tick) >= TICK_INTERVAL {
            self.field.step_return();
            self.field.step_render();
            self.last_tick += TICK_INTERVAL;
            ticks += 1;
            if ticks >= MAX_CATCHUP_TICKS {
                self.last_tick = now;
                break;
            }
        }
    }

    /// Render state for every dot under the current mode and offsets.
    ///
    /// Static rendering (static mode, a degraded dynamic session or one
    /// already closed) shows every dot at its anchor; animated sessions
    /// show a dot only while its offset is non-zero.
    pub fn dots(&self) -> Vec<Dot> {
        let radius = self.settings.dot_radius;
        let static_render = !self.is_animated();
        self.anchors
            .iter()
            .enumerate()
            .map(|(idx, &anchor)| {
                let offset = self.field.current(idx);
                Dot {
                    center: anchor + offset,
                    radius,
                    color: DOT_COLORS[idx % 2],
                    visible: static_render || offset != Vec2::ZERO,
                }
            })
            .collect()
    }

    /// Apply the click-through provider to the overlay window, once per
    /// session. Unsupported platforms get a single warning and the overlay
    /// keeps running without pointer transparency.
    pub(crate) fn apply_click_through(&mut self, window_title: &str) {
        if self.styled {
            return;
        }
        self.styled = true;
        if let Err(err) = self.passthrough.apply(window_title) {
            tracing::warn!(
                ?err,
                "click-through unavailable; overlay will intercept pointer input"
            );
        }
    }

    /// Tear the session down: stop the animation clock and drop the pointer
    /// subscription. Idempotent.
    pub fn close(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.events = None;
        if self.backend.is_installed() {
            if let Err(err) = self.backend.uninstall() {
                tracing::error!(?err, "failed to uninstall pointer backend");
            }
        }
    }
}

impl Drop for OverlaySession {
    fn drop(&mut self) {
        self.close();
    }
}
