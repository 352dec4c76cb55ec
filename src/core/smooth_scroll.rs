use super::constants::{SMOOTH_SCROLL_SEC, WHEEL_MULTIPLIER};
use super::easing::Ease;

/// Eased wheel scrolling for the window.
///
/// Wheel deltas accumulate into a target; each change restarts a fixed
/// length animation from the current position. Native scrolls (keyboard,
/// scrollbar, touch) resynchronise the state while idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    from: f64,
    elapsed: f32,
    duration: f32,
    limit: f64,
    animating: bool,
}

impl SmoothScroll {
    pub fn new(position: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let position = position.clamp(0.0, limit);
        Self {
            current: position,
            target: position,
            from: position,
            elapsed: 0.0,
            duration: SMOOTH_SCROLL_SEC,
            limit,
            animating: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Largest reachable scroll offset (document height minus viewport).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        if !self.animating {
            self.current = self.current.clamp(0.0, self.limit);
        }
    }

    /// Move the target by a wheel delta. A delta that leaves the target
    /// where it is does not start an animation.
    pub fn wheel(&mut self, delta_y: f64) {
        let next = (self.target + delta_y * WHEEL_MULTIPLIER).clamp(0.0, self.limit);
        if next == self.target {
            return;
        }
        self.target = next;
        self.from = self.current;
        self.elapsed = 0.0;
        self.animating = true;
    }

    /// Adopt a scroll position produced outside this animation.
    pub fn sync(&mut self, native_y: f64) {
        if self.animating {
            return;
        }
        let y = native_y.clamp(0.0, self.limit);
        self.current = y;
        self.target = y;
    }

    /// Advance the animation; returns the position to scroll to, if moving.
    pub fn tick(&mut self, dt: f32) -> Option<f64> {
        if !self.animating {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let p = (self.elapsed / self.duration).min(1.0);
        let eased = Ease::ExpoSettle.apply(p) as f64;
        self.current = self.from + (self.target - self.from) * eased;
        if p >= 1.0 {
            self.current = self.target;
            self.animating = false;
        }
        Some(self.current)
    }
}
