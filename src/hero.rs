use crate::constants::*;
use crate::core::hero::{hero_timeline, HeroTargets, ScrollLinePulse};
use crate::dom;
use crate::driver::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hero entrance timeline, scroll-line pulse and hero scroll bindings.
pub fn install(document: &web::Document, driver: &Rc<RefCell<AnimationDriver>>) {
    let title_el = dom::query(document, HERO_TITLE_SELECTOR);
    let words = title_el
        .as_ref()
        .map(|t| dom::query_all_in(t, HERO_TITLE_WORD_SELECTOR))
        .unwrap_or_default();

    let mut d = driver.borrow_mut();
    let t = HeroTargets {
        eyebrow: d.targets.register_opt(dom::query(document, HERO_EYEBROW_SELECTOR)),
        banner: d.targets.register_opt(dom::query(document, HERO_BANNER_SELECTOR)),
        title: d.targets.register_opt(title_el),
        title_words: words.into_iter().map(|w| d.targets.register(w)).collect(),
        subtitle: d.targets.register_opt(dom::query(document, HERO_SUBTITLE_SELECTOR)),
        cta: d.targets.register_opt(dom::query(document, HERO_CTA_SELECTOR)),
        scroll_indicator: d
            .targets
            .register_opt(dom::query(document, SCROLL_INDICATOR_SELECTOR)),
    };
    let timeline = hero_timeline(&t);
    log::debug!(
        "hero entrance: {} steps over {:.2}s",
        timeline.steps().len(),
        timeline.duration()
    );
    d.play(timeline);

    if t.scroll_indicator.is_some() {
        if let Some(line) = dom::query(document, SCROLL_LINE_SELECTOR) {
            dom::set_style(&line, "transform-origin", "top");
            let id = d.targets.register(line);
            d.pulse_scroll_line(ScrollLinePulse::new(id));
        }
    }

    let Some(section) = dom::query(document, HERO_SECTION_SELECTOR) else {
        return;
    };
    let section = d.targets.register(section);
    if let Some(banner) = t.banner {
        d.scroll.add_hero_banner(section, banner);
    }
    if let Some(title) = t.title {
        d.scroll.add_hero_title(section, title);
    }
}
