/// Wall-clock accumulator for the animation ticker.
///
/// `tick` takes absolute seconds from any monotonic source and returns the
/// delta since the previous tick. Deltas are not clamped. While asleep
/// nothing accumulates, and the first tick after `wake` yields zero so time
/// spent in a background tab never reaches the animations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    elapsed: f64,
    last: Option<f64>,
    asleep: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_sec: f64) -> Option<f32> {
        if self.asleep {
            return None;
        }
        let dt = match self.last {
            Some(prev) => (now_sec - prev).max(0.0),
            None => 0.0,
        };
        self.last = Some(now_sec);
        self.elapsed += dt;
        Some(dt as f32)
    }

    pub fn sleep(&mut self) {
        self.asleep = true;
    }

    pub fn wake(&mut self) {
        self.asleep = false;
        self.last = None;
    }

    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
