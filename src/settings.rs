use std::ops::RangeInclusive;

/// How the dots react to global pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotMode {
    /// Dots sit at their anchors and never move.
    Static,
    /// Dots drift in the direction of pointer movement.
    Active,
    /// Dots drift against the direction of pointer movement.
    Reverse,
}

impl DotMode {
    /// Modes that subscribe to pointer events and animate offsets.
    pub fn is_dynamic(self) -> bool {
        !matches!(self, DotMode::Static)
    }

    /// Sign applied to pointer deltas before they reach the animator.
    pub fn direction(self) -> f32 {
        match self {
            DotMode::Reverse => -1.0,
            _ => 1.0,
        }
    }
}

pub const SPEED_RANGE: RangeInclusive<f32> = 0.2..=3.0;
pub const EDGE_OFFSET_RANGE: RangeInclusive<f32> = 0.02..=0.40;
pub const RADIUS_RANGE: RangeInclusive<f32> = 4.0..=40.0;
pub const SPACING_RANGE: RangeInclusive<f32> = 0.3..=3.0;

/// Values owned by the control panel and copied into each new overlay
/// session. The sliders clamp every numeric field to its range, so sessions
/// never see out-of-range values.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSettings {
    pub mode: DotMode,
    /// Multiplier applied to raw pointer deltas.
    pub speed: f32,
    /// Horizontal anchor inset, as a fraction of the screen width.
    pub edge_offset: f32,
    /// Dot radius in pixels.
    pub dot_radius: f32,
    /// Vertical spacing factor between dots on one side.
    pub dot_spacing: f32,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            mode: DotMode::Static,
            speed: 1.0,
            edge_offset: 0.10,
            dot_radius: 12.0,
            dot_spacing: 1.0,
        }
    }
}
