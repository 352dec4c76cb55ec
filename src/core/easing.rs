use std::f32::consts::PI;

/// Easing curves used by the timelines.
///
/// Power curves follow the usual animation-library naming: `power1` is
/// quadratic, `power2` cubic, `power3` quartic and `power4` quintic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    Power2InOut,
    Power3Out,
    Power4Out,
    Power4InOut,
    /// Decaying sine overshoot; `amplitude` >= 1, `period` in progress units.
    ElasticOut { amplitude: f32, period: f32 },
    /// Exponential settle used for smooth scrolling.
    ExpoSettle,
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

impl Ease {
    /// Map linear progress `t` in \[0, 1\] to eased progress.
    ///
    /// Inputs are clamped and both end points are exact, so a finished
    /// animation always lands on its target value.
    pub fn apply(self, t: f32) -> f32 {
        if !(t > 0.0) {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::Power1Out => out_pow(t, 2),
            Ease::Power2Out => out_pow(t, 3),
            Ease::Power3Out => out_pow(t, 4),
            Ease::Power4Out => out_pow(t, 5),
            Ease::Power2InOut => in_out_pow(t, 3),
            Ease::Power4InOut => in_out_pow(t, 5),
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
            Ease::ExpoSettle => (1.001 - 2f32.powf(-10.0 * t)).min(1.0),
        }
    }
}

#[inline]
fn out_pow(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

#[inline]
fn in_out_pow(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(n)
    } else {
        1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    let a = amplitude.max(1.0);
    let p = period.max(1e-3);
    let phase = p / (2.0 * PI) * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * t) * ((t - phase) * (2.0 * PI) / p).sin() + 1.0
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
