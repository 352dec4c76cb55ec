use super::constants::*;
use super::easing::Ease;
use super::timeline::{Glide, Playhead, Prop, PropStore, TargetId};
use smallvec::SmallVec;

// Scroll-bound animations: reveal variants, staggered card groups and
// scrubbed parallax. Geometry is cached in document coordinates and only
// re-measured on `refresh`, so a frame costs one scroll read.

/// Element geometry in document coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    /// Undo an element's own centre-origin `translate(..) scale(..)` on a
    /// measured box, giving the layout box the trigger should use.
    pub fn without_transform(self, store: &PropStore, target: TargetId) -> Bounds {
        let scale = store.get(target, Prop::Scale)
            * store.get(target, Prop::ScaleMul)
            * store.get(target, Prop::ScaleY);
        if scale <= 0.0 {
            return self;
        }
        let height = self.height / scale as f64;
        let shift = store.get(target, Prop::Y) as f64
            + store.get(target, Prop::YPercent) as f64 / 100.0 * height;
        Bounds {
            top: self.top + self.height * 0.5 - shift - height * 0.5,
            height,
        }
    }
}

/// Scroll position and viewport height for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollFrame {
    /// Whether an element's top edge has reached `fraction` of the way down
    /// the viewport.
    pub fn top_reached(&self, bounds: Bounds, fraction: f64) -> bool {
        bounds.top - self.scroll_y <= self.viewport_height * fraction
    }

    /// Progress from "element top at viewport bottom" to "element bottom at
    /// viewport top".
    pub fn pass_through(&self, bounds: Bounds) -> f32 {
        let span = self.viewport_height + bounds.height;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.scroll_y + self.viewport_height - bounds.top) / span).clamp(0.0, 1.0) as f32
    }

    /// Progress from "element top at viewport top" to "element bottom at
    /// viewport top".
    pub fn scroll_out(&self, bounds: Bounds) -> f32 {
        if bounds.height <= 0.0 {
            return 0.0;
        }
        ((self.scroll_y - bounds.top) / bounds.height).clamp(0.0, 1.0) as f32
    }
}

/// Hidden-state presets for scroll reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    Rise,
    SlideLeft,
    SlideRight,
    Scale,
    Fade,
}

impl RevealVariant {
    pub const ALL: [RevealVariant; 5] = [
        RevealVariant::Rise,
        RevealVariant::SlideLeft,
        RevealVariant::SlideRight,
        RevealVariant::Scale,
        RevealVariant::Fade,
    ];

    /// Marker class carried by elements using this variant.
    pub fn class_name(self) -> &'static str {
        match self {
            RevealVariant::Rise => "reveal",
            RevealVariant::SlideLeft => "reveal-left",
            RevealVariant::SlideRight => "reveal-right",
            RevealVariant::Scale => "reveal-scale",
            RevealVariant::Fade => "reveal-fade",
        }
    }

    /// Property values while hidden; visible state is the rest value of each.
    pub fn hidden(self) -> SmallVec<[(Prop, f32); 2]> {
        let mut out = SmallVec::new();
        out.push((Prop::Opacity, 0.0));
        match self {
            RevealVariant::Rise => out.push((Prop::Y, REVEAL_DISTANCE)),
            RevealVariant::SlideLeft => out.push((Prop::X, -REVEAL_DISTANCE)),
            RevealVariant::SlideRight => out.push((Prop::X, REVEAL_DISTANCE)),
            RevealVariant::Scale => out.push((Prop::Scale, REVEAL_SCALE_FROM)),
            RevealVariant::Fade => {}
        }
        out
    }

    pub fn duration(self) -> f32 {
        match self {
            RevealVariant::Fade => REVEAL_FADE_DURATION,
            _ => REVEAL_DURATION,
        }
    }

    pub fn ease(self) -> Ease {
        match self {
            RevealVariant::Fade => Ease::Power2Out,
            _ => Ease::Power4Out,
        }
    }
}

#[derive(Clone, Debug)]
enum Binding {
    Reveal {
        variant: RevealVariant,
        playhead: Playhead,
    },
    Stagger {
        cards: Vec<TargetId>,
        playhead: Playhead,
    },
    Parallax {
        shift: Glide,
    },
    HeroBanner {
        progress: Glide,
    },
    HeroTitle {
        progress: Glide,
    },
}

#[derive(Clone, Debug)]
struct Trigger {
    /// Element whose geometry drives the trigger.
    source: TargetId,
    /// Element receiving the animated values.
    anchor: TargetId,
    bounds: Bounds,
    primed: bool,
    binding: Binding,
}

/// All scroll-bound animations on a page.
#[derive(Default, Debug)]
pub struct ScrollEngine {
    triggers: Vec<Trigger>,
    measured: bool,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Register a reveal and put the element in its hidden state.
    pub fn add_reveal(&mut self, target: TargetId, variant: RevealVariant, store: &mut PropStore) {
        for (prop, value) in variant.hidden() {
            store.set(target, prop, value);
        }
        self.push(
            target,
            Binding::Reveal {
                variant,
                playhead: Playhead::new(variant.duration()),
            },
        );
    }

    /// Register a card group triggered by its container.
    pub fn add_stagger_group(&mut self, group: TargetId, cards: Vec<TargetId>, store: &mut PropStore) {
        if cards.is_empty() {
            return;
        }
        for &card in &cards {
            store.set(card, Prop::Opacity, 0.0);
            store.set(card, Prop::Y, STAGGER_DISTANCE);
        }
        let total = STAGGER_DURATION + STAGGER_EACH * (cards.len() - 1) as f32;
        self.push(
            group,
            Binding::Stagger {
                cards,
                playhead: Playhead::new(total),
            },
        );
    }

    pub fn add_parallax(&mut self, target: TargetId) {
        self.push(target, Binding::Parallax { shift: Glide::at(0.0) });
    }

    /// Bind hero banner/title to scroll progress across the hero section.
    /// `section` supplies the geometry; the bound element receives the values.
    pub fn add_hero_banner(&mut self, section: TargetId, banner: TargetId) {
        self.push_bound(section, banner, Binding::HeroBanner { progress: Glide::at(0.0) });
    }

    pub fn add_hero_title(&mut self, section: TargetId, title: TargetId) {
        self.push_bound(section, title, Binding::HeroTitle { progress: Glide::at(0.0) });
    }

    fn push(&mut self, anchor: TargetId, binding: Binding) {
        self.push_bound(anchor, anchor, binding);
    }

    fn push_bound(&mut self, source: TargetId, anchor: TargetId, binding: Binding) {
        self.triggers.push(Trigger {
            source,
            anchor,
            bounds: Bounds::default(),
            primed: false,
            binding,
        });
        self.measured = false;
    }

    /// Re-measure every trigger. `measure` returns `None` for elements that
    /// are gone; their cached bounds are kept.
    pub fn refresh(&mut self, mut measure: impl FnMut(TargetId) -> Option<Bounds>) {
        for trigger in &mut self.triggers {
            if let Some(bounds) = measure(trigger.source) {
                trigger.bounds = bounds;
            }
        }
        self.measured = true;
    }

    pub fn needs_refresh(&self) -> bool {
        !self.measured
    }

    /// Advance every binding by `dt` seconds against the current scroll.
    pub fn update(&mut self, frame: ScrollFrame, dt: f32, store: &mut PropStore) {
        for trigger in &mut self.triggers {
            let bounds = trigger.bounds;
            let anchor = trigger.anchor;
            let primed = std::mem::replace(&mut trigger.primed, true);
            match &mut trigger.binding {
                Binding::Reveal { variant, playhead } => {
                    steer(playhead, frame.top_reached(bounds, REVEAL_TRIGGER));
                    playhead.advance(dt);
                    let eased = variant.ease().apply(playhead.progress());
                    for (prop, hidden) in variant.hidden() {
                        let visible = prop.rest_value();
                        store.set(anchor, prop, hidden + (visible - hidden) * eased);
                    }
                }
                Binding::Stagger { cards, playhead } => {
                    steer(playhead, frame.top_reached(bounds, STAGGER_TRIGGER));
                    playhead.advance(dt);
                    for (i, &card) in cards.iter().enumerate() {
                        let local = playhead.time() - STAGGER_EACH * i as f32;
                        let p = (local / STAGGER_DURATION).clamp(0.0, 1.0);
                        let eased = Ease::Power4Out.apply(p);
                        store.set(card, Prop::Opacity, eased);
                        store.set(card, Prop::Y, STAGGER_DISTANCE * (1.0 - eased));
                    }
                }
                Binding::Parallax { shift } => {
                    let target = PARALLAX_Y_PERCENT * frame.pass_through(bounds);
                    let y = scrub(shift, target, PARALLAX_SCRUB_SEC, dt, primed);
                    store.set(anchor, Prop::YPercent, y);
                }
                Binding::HeroBanner { progress } => {
                    let p = scrub(progress, frame.scroll_out(bounds), HERO_SCRUB_SEC, dt, primed);
                    store.set(anchor, Prop::YPercent, -20.0 * p);
                    store.set(anchor, Prop::ScaleMul, 1.0 - 0.05 * p);
                    store.set(anchor, Prop::OpacityMul, 1.0 - 0.5 * p);
                }
                Binding::HeroTitle { progress } => {
                    let p = scrub(progress, frame.scroll_out(bounds), HERO_SCRUB_SEC, dt, primed);
                    store.set(anchor, Prop::YPercent, -30.0 * p);
                    store.set(anchor, Prop::OpacityMul, 1.0 - 0.7 * p);
                }
            }
        }
    }
}

// play on enter, reverse when scrolled back above the trigger
#[inline]
fn steer(playhead: &mut Playhead, active: bool) {
    if active {
        playhead.play();
    } else {
        playhead.reverse();
    }
}

/// Follow `target` with a catch-up lag. The first sample snaps so a page
/// loaded mid-scroll starts in place.
fn scrub(glide: &mut Glide, target: f32, lag: f32, dt: f32, primed: bool) -> f32 {
    if !primed {
        glide.snap(target);
        return target;
    }
    if (glide.target() - target).abs() > 1e-4 {
        glide.retarget(target, lag, Ease::Power3Out);
    }
    glide.advance(dt)
}
