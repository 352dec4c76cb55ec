use crate::constants::*;
use crate::core::preloader::{gate, preloader_timeline, Gate, PreloaderTargets};
use crate::dom;
use crate::driver::{AnimationDriver, ReadyFn};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Play the loading sequence on a session's first load, then run `ready`.
/// Without preloader markup, or on later loads, `ready` runs right away
/// and the markup (if any) is hidden.
pub fn start(
    document: &web::Document,
    driver: &Rc<RefCell<AnimationDriver>>,
    first_load: bool,
    ready: ReadyFn,
) {
    let root = dom::query(document, PRELOADER_SELECTOR);
    if !first_load {
        if let Some(root) = &root {
            dom::set_style(root, "display", "none");
        }
    }

    let timeline = root.filter(|_| first_load).map(|root| {
        let mut d = driver.borrow_mut();
        let targets = PreloaderTargets {
            root: d.targets.register(root),
            logo: d
                .targets
                .register_opt(dom::query(document, PRELOADER_LOGO_SELECTOR)),
            text: d
                .targets
                .register_opt(dom::query(document, PRELOADER_TEXT_SELECTOR)),
            bar: d
                .targets
                .register_opt(dom::query(document, PRELOADER_BAR_SELECTOR)),
        };
        preloader_timeline(&targets)
    });

    match gate(first_load, timeline, ready) {
        Gate::Run(preloader) => {
            log::debug!("first load of the session, playing preloader");
            driver.borrow_mut().run_preloader(preloader);
        }
        Gate::Skip(ready) => ready(),
    }
}
