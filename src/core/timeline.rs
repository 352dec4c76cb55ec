use super::easing::{lerp, Ease};
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Index of an animated element in the web frontend's target registry.
pub type TargetId = usize;

/// Style properties the animation system knows how to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    Opacity,
    /// Translation in CSS pixels.
    X,
    Y,
    /// Translation in percent of the element's own size.
    XPercent,
    YPercent,
    Scale,
    ScaleY,
    WidthPercent,
    /// Multipliers composed on top of `Opacity` / `Scale` by scroll bindings.
    OpacityMul,
    ScaleMul,
}

impl Prop {
    /// Value a property has before anything writes it.
    pub fn rest_value(self) -> f32 {
        match self {
            Prop::Opacity | Prop::Scale | Prop::ScaleY | Prop::OpacityMul | Prop::ScaleMul => 1.0,
            Prop::X | Prop::Y | Prop::XPercent | Prop::YPercent | Prop::WidthPercent => 0.0,
        }
    }
}

/// Current animated value of every (target, property) pair.
///
/// Writers mark targets dirty only when a value actually changes, so the
/// style flush touches the DOM for moving elements only.
#[derive(Default, Debug)]
pub struct PropStore {
    values: FnvHashMap<(TargetId, Prop), f32>,
    dirty: FnvHashSet<TargetId>,
}

impl PropStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: TargetId, prop: Prop) -> f32 {
        self.values
            .get(&(target, prop))
            .copied()
            .unwrap_or_else(|| prop.rest_value())
    }

    pub fn contains(&self, target: TargetId, prop: Prop) -> bool {
        self.values.contains_key(&(target, prop))
    }

    pub fn set(&mut self, target: TargetId, prop: Prop, value: f32) {
        let previous = self.values.insert((target, prop), value);
        if previous != Some(value) {
            self.dirty.insert(target);
        }
    }

    /// Drain the set of targets written since the last call, in id order.
    pub fn take_dirty(&mut self) -> Vec<TargetId> {
        let mut out: Vec<TargetId> = self.dirty.drain().collect();
        out.sort_unstable();
        out
    }
}

/// Side effects fired when a step completes.
#[derive(Clone, Debug, PartialEq)]
pub enum Cue {
    Text { target: TargetId, text: &'static str },
    Hide { target: TargetId },
}

/// Where a step starts relative to the timeline built so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    Sequence,
    /// Offset from the current end: negative overlaps, positive leaves a gap.
    Relative(f32),
    /// Absolute time from the timeline start.
    At(f32),
}

/// One tween in a timeline: every target animates the listed properties from
/// whatever value they hold when the step starts to the `to` values.
#[derive(Clone, Debug)]
pub struct Step {
    pub targets: SmallVec<[TargetId; 2]>,
    pub to: SmallVec<[(Prop, f32); 3]>,
    pub duration: f32,
    pub ease: Ease,
    pub stagger: f32,
    pub position: Position,
    pub cue: Option<Cue>,
}

impl Step {
    pub fn to(target: TargetId) -> Self {
        Self::to_all([target])
    }

    pub fn to_all(targets: impl IntoIterator<Item = TargetId>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            to: SmallVec::new(),
            duration: 0.5,
            ease: Ease::default(),
            stagger: 0.0,
            position: Position::Sequence,
            cue: None,
        }
    }

    /// Zero-length step: a cue (or instant property change) at a point in time.
    pub fn set(target: TargetId) -> Self {
        Self::to(target).duration(0.0)
    }

    pub fn prop(mut self, prop: Prop, value: f32) -> Self {
        self.to.push((prop, value));
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, each: f32) -> Self {
        self.stagger = each.max(0.0);
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn then(mut self, cue: Cue) -> Self {
        self.cue = Some(cue);
        self
    }

    /// Time from the first target starting to the last target finishing.
    pub fn span(&self) -> f32 {
        let extra = self.targets.len().saturating_sub(1) as f32;
        self.duration + self.stagger * extra
    }
}

/// An ordered list of steps with resolved start times.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    delay: f32,
    initial: Vec<(TargetId, Prop, f32)>,
    steps: Vec<Step>,
    starts: Vec<f32>,
    end: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            ..Self::default()
        }
    }

    /// Value written before the first frame so the first step has a defined
    /// starting point.
    pub fn initial(&mut self, target: TargetId, prop: Prop, value: f32) -> &mut Self {
        self.initial.push((target, prop, value));
        self
    }

    pub fn push(&mut self, step: Step) -> &mut Self {
        let start = match step.position {
            Position::Sequence => self.end,
            Position::Relative(offset) => (self.end + offset).max(0.0),
            Position::At(t) => t.max(0.0),
        };
        self.end = self.end.max(start + step.span());
        self.starts.push(start);
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Start time of step `index`, excluding the timeline delay.
    pub fn start_of(&self, index: usize) -> Option<f32> {
        self.starts.get(index).copied()
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Total playing time including the delay.
    pub fn duration(&self) -> f32 {
        self.delay + self.end
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Plays a [`Timeline`] forward, writing into a [`PropStore`].
#[derive(Debug)]
pub struct TimelinePlayer {
    timeline: Timeline,
    time: f32,
    seeded: bool,
    from: Vec<Option<SmallVec<[f32; 6]>>>,
    done: Vec<bool>,
    finished: bool,
}

impl TimelinePlayer {
    pub fn new(timeline: Timeline) -> Self {
        let n = timeline.steps.len();
        Self {
            timeline,
            time: 0.0,
            seeded: false,
            from: vec![None; n],
            done: vec![false; n],
            finished: false,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Advance by `dt` seconds. Cues of steps completing during this call
    /// are appended to `cues` in step order. Returns `true` exactly once, on
    /// the call that finishes the timeline.
    /// Write the timeline's starting values. Runs at most once; `advance`
    /// calls it if nobody did earlier.
    pub fn seed(&mut self, store: &mut PropStore) {
        if self.seeded {
            return;
        }
        for &(target, prop, value) in &self.timeline.initial {
            store.set(target, prop, value);
        }
        self.seeded = true;
    }

    pub fn advance(&mut self, dt: f32, store: &mut PropStore, cues: &mut Vec<Cue>) -> bool {
        if self.finished {
            return false;
        }
        self.seed(store);
        self.time += dt.max(0.0);
        let local = self.time - self.timeline.delay;

        for (i, step) in self.timeline.steps.iter().enumerate() {
            if self.done[i] {
                continue;
            }
            let start = self.timeline.starts[i];
            if local < start {
                continue;
            }
            let from = self.from[i].get_or_insert_with(|| {
                step.targets
                    .iter()
                    .flat_map(|&t| step.to.iter().map(move |&(p, _)| (t, p)))
                    .map(|(t, p)| store.get(t, p))
                    .collect()
            });

            // a step whose elements are missing still occupies its time slot
            let mut complete = !step.targets.is_empty() || local >= start + step.duration;
            for (ti, &target) in step.targets.iter().enumerate() {
                let t0 = start + step.stagger * ti as f32;
                if local < t0 {
                    complete = false;
                    continue;
                }
                let progress = if step.duration <= 0.0 {
                    1.0
                } else {
                    ((local - t0) / step.duration).clamp(0.0, 1.0)
                };
                let eased = step.ease.apply(progress);
                for (pi, &(prop, to)) in step.to.iter().enumerate() {
                    let start_value = from[ti * step.to.len() + pi];
                    store.set(target, prop, lerp(start_value, to, eased));
                }
                if progress < 1.0 {
                    complete = false;
                }
            }

            if complete {
                self.done[i] = true;
                if let Some(cue) = &step.cue {
                    cues.push(cue.clone());
                }
            }
        }

        if local >= self.timeline.end && self.done.iter().all(|d| *d) {
            self.finished = true;
            return true;
        }
        false
    }
}

/// Reversible single-tween playhead, parked at the start until played.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playhead {
    time: f32,
    duration: f32,
    forward: bool,
}

impl Playhead {
    pub fn new(duration: f32) -> Self {
        Self {
            time: 0.0,
            duration: duration.max(0.0),
            forward: false,
        }
    }

    pub fn play(&mut self) {
        self.forward = true;
    }

    pub fn reverse(&mut self) {
        self.forward = false;
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.time = if self.forward {
            (self.time + dt).min(self.duration)
        } else {
            (self.time - dt).max(0.0)
        };
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.forward { 1.0 } else { 0.0 };
        }
        self.time / self.duration
    }
}

/// A scalar that eases toward a target which can change mid-flight; each
/// retarget starts a fresh tween from the current value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glide {
    from: f32,
    to: f32,
    value: f32,
    elapsed: f32,
    duration: f32,
    ease: Ease,
}

impl Glide {
    pub fn at(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            value,
            elapsed: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn retarget(&mut self, to: f32, duration: f32, ease: Ease) {
        self.from = self.value;
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
        self.ease = ease;
    }

    /// Jump straight to `value` with no animation.
    pub fn snap(&mut self, value: f32) {
        *self = Self::at(value);
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        };
        self.value = lerp(self.from, self.to, self.ease.apply(progress));
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Linear progress of an endless back-and-forth loop: 0 → 1 over one
/// `period`, then 1 → 0 over the next.
pub fn yoyo(time: f32, period: f32) -> f32 {
    if period <= 0.0 || time <= 0.0 {
        return 0.0;
    }
    let cycles = time / period;
    let frac = cycles.fract();
    if (cycles.floor() as i64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}
