use std::time::Duration;

use eframe::egui::Vec2;

/// Interval between animation ticks (~125 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(8);

/// Fraction of the remaining distance covered per tick.
pub const LERP_FACTOR: f32 = 0.12;
/// Below this remaining distance a rendered offset snaps onto its target.
pub const RENDER_SNAP: f32 = 0.05;
/// At or below this magnitude a decaying target axis snaps to zero.
pub const RETURN_SNAP: f32 = 0.1;

/// Animation state for the whole set of dots: one current and one target
/// offset per dot, plus the settle-back flag.
///
/// Two loops run over this state, both at [`TICK_INTERVAL`]:
/// [`step_render`](Self::step_render) continuously chases each current
/// offset toward its target, and [`step_return`](Self::step_return) decays
/// the targets back to zero after pointer movement, clearing the flag once
/// every target has settled. Pointer deltas arrive pre-scaled and pre-signed
/// through [`apply_delta`](Self::apply_delta) and hit every dot in lockstep.
#[derive(Debug, Clone)]
pub struct DotField {
    current: Vec<Vec2>,
    target: Vec<Vec2>,
    returning: bool,
}

impl DotField {
    pub fn new(len: usize) -> Self {
        Self {
            current: vec![Vec2::ZERO; len],
            target: vec![Vec2::ZERO; len],
            returning: false,
        }
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn current(&self, idx: usize) -> Vec2 {
        self.current[idx]
    }

    pub fn target(&self, idx: usize) -> Vec2 {
        self.target[idx]
    }

    /// Whether the settle-back loop still has targets to decay.
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    /// Shift every target offset by the same delta and (re)arm the
    /// settle-back loop.
    pub fn apply_delta(&mut self, delta: Vec2) {
        for target in &mut self.target {
            *target += delta;
        }
        self.returning = true;
    }

    /// One step of the settle-back loop: geometrically shrink every target
    /// axis toward zero, snapping small magnitudes to exactly zero. Once no
    /// axis is left to decay the loop disarms itself.
    pub fn step_return(&mut self) {
        if !self.returning {
            return;
        }
        let mut decaying = false;
        for target in &mut self.target {
            decaying |= decay_axis(&mut target.x);
            decaying |= decay_axis(&mut target.y);
        }
        if !decaying {
            self.returning = false;
        }
    }

    /// One render tick: move every current offset a fixed fraction of the
    /// remaining distance toward its target, snapping exactly onto the
    /// target once close enough.
    pub fn step_render(&mut self) {
        for (current, target) in self.current.iter_mut().zip(&self.target) {
            lerp_axis(&mut current.x, target.x);
            lerp_axis(&mut current.y, target.y);
        }
    }
}

fn decay_axis(value: &mut f32) -> bool {
    if value.abs() > RETURN_SNAP {
        *value -= *value * LERP_FACTOR;
        true
    } else {
        *value = 0.0;
        false
    }
}

fn lerp_axis(current: &mut f32, target: f32) {
    let diff = target - *current;
    if diff.abs() > RENDER_SNAP {
        *current += diff * LERP_FACTOR;
    } else {
        *current = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_snaps_at_the_threshold() {
        let mut value = RETURN_SNAP;
        assert!(!decay_axis(&mut value));
        assert_eq!(value, 0.0);

        let mut value = -0.2;
        assert!(decay_axis(&mut value));
        assert!((value + 0.176).abs() < 1e-6);
    }

    #[test]
    fn lerp_snaps_at_the_threshold() {
        let mut current = 0.0;
        lerp_axis(&mut current, RENDER_SNAP);
        assert_eq!(current, RENDER_SNAP);

        let mut current = 0.0;
        lerp_axis(&mut current, -1.0);
        assert!((current + 0.12).abs() < 1e-6);
    }

    #[test]
    fn return_loop_disarms_once_everything_is_zero() {
        let mut field = DotField::new(2);
        field.apply_delta(Vec2::new(0.05, 0.0));
        assert!(field.is_returning());
        field.step_return();
        assert!(!field.is_returning());
        assert_eq!(field.target(0), Vec2::ZERO);
        assert_eq!(field.target(1), Vec2::ZERO);
    }

    #[test]
    fn render_step_without_movement_stays_settled() {
        let mut field = DotField::new(8);
        field.step_render();
        for idx in 0..field.len() {
            assert_eq!(field.current(idx), Vec2::ZERO);
        }
    }
}
