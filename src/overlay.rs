use crate::constants::{PAGE_LINK_SELECTOR, TRANSITION_SELECTOR};
use crate::core::transition::{classify_href, uncover_timeline, LinkKind};
use crate::dom;
use crate::driver::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Page transition overlay: slides away on load and slides back over the
/// page before same-site navigation.
pub fn install(document: &web::Document, driver: &Rc<RefCell<AnimationDriver>>) {
    let Some(overlay) = dom::query(document, TRANSITION_SELECTOR) else {
        log::debug!("no {TRANSITION_SELECTOR} element, page transitions off");
        return;
    };
    let target = {
        let mut d = driver.borrow_mut();
        let target = d.targets.register(overlay);
        d.play(uncover_timeline(target));
        target
    };

    for link in dom::query_all(document, PAGE_LINK_SELECTOR) {
        let href = link.get_attribute("href").unwrap_or_default();
        if classify_href(&href) != LinkKind::Page {
            continue;
        }
        let driver = driver.clone();
        dom::on_mouse(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            driver
                .borrow_mut()
                .cover_and_navigate(target, href.clone());
        });
    }
}
