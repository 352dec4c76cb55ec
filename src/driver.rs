use crate::animate::{self, Targets};
use crate::core::clock::AnimationClock;
use crate::core::hero::ScrollLinePulse;
use crate::core::magnetic::MagneticButton;
use crate::core::preloader::Preloader;
use crate::core::scroll::{ScrollEngine, ScrollFrame};
use crate::core::smooth_scroll::SmoothScroll;
use crate::core::transition::{cover_timeline, uncover_timeline};
use crate::core::{Cue, PropStore, TargetId, Timeline, TimelinePlayer};
use crate::dom;
use web_sys as web;

/// Callback run once the preloader has finished.
pub type ReadyFn = Box<dyn FnOnce()>;

struct PendingNavigation {
    overlay: TargetId,
    cover: TimelinePlayer,
    href: String,
}

/// Everything the shared animation ticker advances each frame.
pub struct AnimationDriver {
    pub targets: Targets,
    pub store: PropStore,
    pub scroll: ScrollEngine,
    pub magnets: Vec<MagneticButton>,
    pub smooth: Option<SmoothScroll>,
    pub clock: AnimationClock,
    cues: Vec<Cue>,
    timelines: Vec<TimelinePlayer>,
    preloader: Option<Preloader<ReadyFn>>,
    scroll_line: Option<ScrollLinePulse>,
    navigation: Option<PendingNavigation>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            targets: Targets::new(),
            store: PropStore::new(),
            scroll: ScrollEngine::new(),
            magnets: Vec::new(),
            smooth: None,
            clock: AnimationClock::new(),
            cues: Vec::new(),
            timelines: Vec::new(),
            preloader: None,
            scroll_line: None,
            navigation: None,
        }
    }

    /// Queue a timeline. Its starting values land in the store right away
    /// so the next flush shows them before the first frame plays.
    pub fn play(&mut self, timeline: Timeline) {
        if timeline.is_empty() {
            return;
        }
        let mut player = TimelinePlayer::new(timeline);
        player.seed(&mut self.store);
        self.timelines.push(player);
    }

    /// Write pending values to the DOM outside the ticker.
    pub fn flush(&mut self) {
        animate::flush(&self.targets, &mut self.store);
    }

    pub fn run_preloader(&mut self, preloader: Preloader<ReadyFn>) {
        self.preloader = Some(preloader);
    }

    pub fn pulse_scroll_line(&mut self, pulse: ScrollLinePulse) {
        self.scroll_line = Some(pulse);
    }

    /// Start covering the page and navigate to `href` when covered. Clicks
    /// while a cover is already running are ignored.
    pub fn cover_and_navigate(&mut self, overlay: TargetId, href: String) {
        if self.navigation.is_some() {
            return;
        }
        log::debug!("page transition to {href}");
        self.navigation = Some(PendingNavigation {
            overlay,
            cover: TimelinePlayer::new(cover_timeline(overlay)),
            href,
        });
    }

    /// Drop a started navigation and slide the overlay away again, for a
    /// page restored from the back/forward cache.
    pub fn cancel_navigation(&mut self) {
        if let Some(nav) = self.navigation.take() {
            self.play(uncover_timeline(nav.overlay));
        }
    }

    /// Re-measure scroll triggers and the scroll limit.
    pub fn refresh(&mut self, window: &web::Window) {
        let scroll_y = dom::scroll_y(window);
        let (targets, store) = (&self.targets, &self.store);
        self.scroll.refresh(|id| {
            targets
                .get(id)
                .map(|el| dom::element_bounds(el, scroll_y).without_transform(store, id))
        });
        if let Some(smooth) = &mut self.smooth {
            smooth.set_limit(dom::scroll_limit(window));
        }
    }

    /// One ticker frame. Returns the preloader's completion callback on the
    /// frame it finishes; the caller runs it after releasing its borrow.
    pub fn tick(&mut self, now_sec: f64, window: &web::Window) -> Option<ReadyFn> {
        let dt = self.clock.tick(now_sec)?;

        let mut scroll_y = dom::scroll_y(window);
        if let Some(smooth) = &mut self.smooth {
            match smooth.tick(dt) {
                Some(y) => {
                    window.scroll_to_with_x_and_y(0.0, y);
                    scroll_y = y;
                }
                None => smooth.sync(scroll_y),
            }
        }

        if self.scroll.needs_refresh() {
            self.refresh(window);
        }
        let frame = ScrollFrame {
            scroll_y,
            viewport_height: dom::viewport(window).height,
        };
        self.scroll.update(frame, dt, &mut self.store);

        for player in &mut self.timelines {
            player.advance(dt, &mut self.store, &mut self.cues);
        }
        self.timelines.retain(|p| !p.is_finished());

        let mut ready = None;
        if let Some(preloader) = &mut self.preloader {
            ready = preloader.advance(dt, &mut self.store, &mut self.cues);
            if preloader.is_finished() {
                self.preloader = None;
            }
        }

        for magnet in &mut self.magnets {
            magnet.update(dt, &mut self.store);
        }
        if let Some(pulse) = &mut self.scroll_line {
            pulse.update(dt, &mut self.store);
        }

        let mut covered = None;
        if let Some(nav) = &mut self.navigation {
            if nav.cover.advance(dt, &mut self.store, &mut self.cues) {
                covered = Some(nav.href.clone());
            }
        }

        animate::run_cues(&self.targets, &mut self.cues);
        animate::flush(&self.targets, &mut self.store);

        if let Some(href) = covered {
            if let Err(e) = window.location().set_href(&href) {
                log::warn!("navigation to {href} failed: {:?}", e);
                self.navigation = None;
            }
        }
        ready
    }
}
