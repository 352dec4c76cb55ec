use super::constants::{MAGNET_FOLLOW_SEC, MAGNET_PULL, MAGNET_RELEASE_SEC};
use super::easing::Ease;
use super::timeline::{Glide, Prop, PropStore, TargetId};
use glam::Vec2;

/// Axis-aligned element box in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Offset a magnetic element should settle at for a pointer position.
#[inline]
pub fn magnet_offset(pointer: Vec2, rect: Rect) -> Vec2 {
    (pointer - rect.center()) * MAGNET_PULL
}

/// Button that leans toward the pointer and springs back on leave.
#[derive(Clone, Copy, Debug)]
pub struct MagneticButton {
    target: TargetId,
    x: Glide,
    y: Glide,
}

impl MagneticButton {
    pub fn new(target: TargetId) -> Self {
        Self {
            target,
            x: Glide::at(0.0),
            y: Glide::at(0.0),
        }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn pointer_moved(&mut self, pointer: Vec2, rect: Rect) {
        let goal = magnet_offset(pointer, rect);
        self.x.retarget(goal.x, MAGNET_FOLLOW_SEC, Ease::Power2Out);
        self.y.retarget(goal.y, MAGNET_FOLLOW_SEC, Ease::Power2Out);
    }

    pub fn pointer_left(&mut self) {
        let release = Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        };
        self.x.retarget(0.0, MAGNET_RELEASE_SEC, release);
        self.y.retarget(0.0, MAGNET_RELEASE_SEC, release);
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn update(&mut self, dt: f32, store: &mut PropStore) {
        if self.x.is_settled() && self.y.is_settled() {
            return;
        }
        store.set(self.target, Prop::X, self.x.advance(dt));
        store.set(self.target, Prop::Y, self.y.advance(dt));
    }
}
