use super::constants::{GLOW_SMOOTHING, POINTER_SMOOTHING};
use glam::Vec2;

/// Move `current` a fixed fraction of the way to `target`.
#[inline]
pub fn approach(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Client pixel position → normalised device coordinates (-1..1, y up).
#[inline]
pub fn client_to_ndc(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        client.x / viewport.x * 2.0 - 1.0,
        -(client.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Everything the scene and cursor loops derive from the mouse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Raw client position in CSS px.
    pub client: Vec2,
    /// Raw position in NDC.
    pub ndc_target: Vec2,
    /// Smoothed NDC fed to the scene.
    pub ndc: Vec2,
    /// Smoothed client position of the cursor glow.
    pub glow: Vec2,
}

impl PointerState {
    pub fn moved(&mut self, client: Vec2, viewport: Vec2) {
        self.client = client;
        self.ndc_target = client_to_ndc(client, viewport);
    }

    /// One render frame of scene smoothing.
    pub fn step_scene(&mut self) -> Vec2 {
        self.ndc = approach(self.ndc, self.ndc_target, POINTER_SMOOTHING);
        self.ndc
    }

    /// One cursor frame of glow smoothing.
    pub fn step_glow(&mut self) -> Vec2 {
        self.glow = approach(self.glow, self.client, GLOW_SMOOTHING);
        self.glow
    }
}
