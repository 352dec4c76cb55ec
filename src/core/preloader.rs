use super::constants::{FIRST_LOAD_KEY, FIRST_LOAD_VALUE, LOADING_BAR_STOPS, LOADING_TEXTS};
use super::easing::Ease;
use super::timeline::{Cue, Position, Prop, PropStore, Step, TargetId, Timeline, TimelinePlayer};

/// Session-scoped key/value storage (the browser's `sessionStorage`).
pub trait SessionFlags {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Read the first-load marker and set it if absent. Returns `true` when this
/// is the first page load of the browsing session.
pub fn claim_first_load(flags: &mut impl SessionFlags) -> bool {
    if flags.get(FIRST_LOAD_KEY).is_some() {
        return false;
    }
    flags.set(FIRST_LOAD_KEY, FIRST_LOAD_VALUE);
    true
}

/// Preloader elements; only `root` is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreloaderTargets {
    pub root: TargetId,
    pub logo: Option<TargetId>,
    pub text: Option<TargetId>,
    pub bar: Option<TargetId>,
}

/// The fixed loading sequence: logo and status fade in, the bar fills in
/// four stops with the status text swapped between them, then everything
/// fades and the whole preloader slides up and is removed from layout.
pub fn preloader_timeline(t: &PreloaderTargets) -> Timeline {
    let mut tl = Timeline::new();
    for target in [t.logo, t.text].into_iter().flatten() {
        tl.initial(target, Prop::Opacity, 0.0);
    }
    if let Some(bar) = t.bar {
        tl.initial(bar, Prop::WidthPercent, 0.0);
    }
    if let Some(text) = t.text {
        tl.push(Step::set(text).then(Cue::Text {
            target: text,
            text: LOADING_TEXTS[0],
        }));
    }

    tl.push(Step::to_all(t.logo).prop(Prop::Opacity, 1.0).duration(0.5));
    tl.push(
        Step::to_all(t.text)
            .prop(Prop::Opacity, 1.0)
            .duration(0.4)
            .at(Position::Relative(-0.2)),
    );

    let bar_fill = [0.8, 0.6, 0.5, 0.3];
    for (i, (&stop, &fill_sec)) in LOADING_BAR_STOPS.iter().zip(bar_fill.iter()).enumerate() {
        tl.push(
            Step::to_all(t.bar)
                .prop(Prop::WidthPercent, stop)
                .duration(fill_sec)
                .ease(Ease::Power2InOut),
        );
        let Some(&next_text) = LOADING_TEXTS.get(i + 1) else {
            break;
        };
        let mut fade_out = Step::to_all(t.text).prop(Prop::Opacity, 0.0).duration(0.2);
        if let Some(text) = t.text {
            fade_out = fade_out.then(Cue::Text {
                target: text,
                text: next_text,
            });
        }
        tl.push(fade_out);
        tl.push(Step::to_all(t.text).prop(Prop::Opacity, 1.0).duration(0.2));
    }

    tl.push(
        Step::to_all([t.text, t.logo].into_iter().flatten())
            .prop(Prop::Opacity, 0.0)
            .duration(0.4)
            .at(Position::Relative(0.3)),
    );
    tl.push(
        Step::to(t.root)
            .prop(Prop::YPercent, -100.0)
            .duration(1.0)
            .ease(Ease::Power4InOut),
    );
    tl.push(Step::set(t.root).then(Cue::Hide { target: t.root }));
    tl
}

/// A running preloader holding the completion callback until it finishes.
pub struct Preloader<F> {
    player: TimelinePlayer,
    on_complete: Option<F>,
}

/// Outcome of the first-load check.
pub enum Gate<F> {
    Run(Preloader<F>),
    /// Nothing to play; the caller invokes the callback right away.
    Skip(F),
}

/// Decide whether the preloader plays. It runs only on the first load of a
/// session and only when the preloader markup exists.
pub fn gate<F>(first_load: bool, timeline: Option<Timeline>, on_complete: F) -> Gate<F> {
    match timeline {
        Some(timeline) if first_load => Gate::Run(Preloader {
            player: TimelinePlayer::new(timeline),
            on_complete: Some(on_complete),
        }),
        _ => Gate::Skip(on_complete),
    }
}

impl<F> Preloader<F> {
    /// Advance the sequence. Hands back the completion callback on the frame
    /// the timeline ends, and never again.
    pub fn advance(&mut self, dt: f32, store: &mut PropStore, cues: &mut Vec<Cue>) -> Option<F> {
        if self.player.advance(dt, store, cues) {
            return self.on_complete.take();
        }
        None
    }

    pub fn is_finished(&self) -> bool {
        self.player.is_finished()
    }
}
