use super::constants::*;
use super::easing::Ease;
use super::timeline::{yoyo, Position, Prop, PropStore, Step, TargetId, Timeline};

/// Hero section elements; each one is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroTargets {
    pub eyebrow: Option<TargetId>,
    pub banner: Option<TargetId>,
    pub title: Option<TargetId>,
    /// Per-word `span`s inside the title; animated instead of the title block
    /// when present.
    pub title_words: Vec<TargetId>,
    pub subtitle: Option<TargetId>,
    pub cta: Option<TargetId>,
    pub scroll_indicator: Option<TargetId>,
}

/// One-shot entrance with overlapping steps. Missing elements are skipped
/// and the remaining offsets apply to whatever precedes them.
pub fn hero_timeline(t: &HeroTargets) -> Timeline {
    let mut tl = Timeline::with_delay(HERO_DELAY);

    let rising: Vec<TargetId> = [t.eyebrow, t.subtitle, t.cta]
        .into_iter()
        .flatten()
        .chain(title_targets(t))
        .collect();
    for target in rising {
        tl.initial(target, Prop::Opacity, 0.0);
        tl.initial(target, Prop::Y, HERO_RISE_PX);
    }
    if let Some(banner) = t.banner {
        tl.initial(banner, Prop::Opacity, 0.0);
        tl.initial(banner, Prop::Scale, HERO_BANNER_SCALE_FROM);
    }
    if let Some(indicator) = t.scroll_indicator {
        tl.initial(indicator, Prop::Opacity, 0.0);
    }

    if let Some(eyebrow) = t.eyebrow {
        tl.push(rise(eyebrow, 0.8, Ease::Power3Out));
    }
    if let Some(banner) = t.banner {
        tl.push(
            Step::to(banner)
                .prop(Prop::Opacity, 1.0)
                .prop(Prop::Scale, 1.0)
                .duration(1.2)
                .ease(Ease::Power4Out)
                .at(Position::Relative(-0.4)),
        );
    }
    if t.title.is_some() {
        tl.push(
            Step::to_all(title_targets(t))
                .prop(Prop::Opacity, 1.0)
                .prop(Prop::Y, 0.0)
                .duration(1.0)
                .stagger(HERO_WORD_STAGGER)
                .ease(Ease::Power4Out)
                .at(Position::Relative(-0.8)),
        );
    }
    if let Some(subtitle) = t.subtitle {
        tl.push(rise(subtitle, 0.8, Ease::Power3Out).at(Position::Relative(-0.5)));
    }
    if let Some(cta) = t.cta {
        tl.push(rise(cta, 0.6, Ease::Power3Out).at(Position::Relative(-0.3)));
    }
    if let Some(indicator) = t.scroll_indicator {
        tl.push(
            Step::to(indicator)
                .prop(Prop::Opacity, 1.0)
                .duration(0.8)
                .at(Position::Relative(-0.2)),
        );
    }
    tl
}

fn title_targets(t: &HeroTargets) -> Vec<TargetId> {
    match t.title {
        Some(_) if !t.title_words.is_empty() => t.title_words.clone(),
        Some(title) => vec![title],
        None => Vec::new(),
    }
}

fn rise(target: TargetId, duration: f32, ease: Ease) -> Step {
    Step::to(target)
        .prop(Prop::Opacity, 1.0)
        .prop(Prop::Y, 0.0)
        .duration(duration)
        .ease(ease)
}

/// Endless breathing of the scroll-indicator line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollLinePulse {
    target: TargetId,
    time: f32,
}

impl ScrollLinePulse {
    pub fn new(target: TargetId) -> Self {
        Self { target, time: 0.0 }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn update(&mut self, dt: f32, store: &mut PropStore) {
        self.time += dt.max(0.0);
        let eased = Ease::Power2InOut.apply(yoyo(self.time, SCROLL_LINE_PERIOD));
        let scale = 1.0 + (SCROLL_LINE_MIN_SCALE - 1.0) * eased;
        store.set(self.target, Prop::ScaleY, scale);
    }
}
