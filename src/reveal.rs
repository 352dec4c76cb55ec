use crate::constants::{PARALLAX_SELECTOR, STAGGER_CARD_SELECTOR, STAGGER_GROUP_SELECTOR};
use crate::core::scroll::RevealVariant;
use crate::dom;
use crate::driver::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Register every scroll-triggered animation found in the document.
pub fn install(document: &web::Document, driver: &Rc<RefCell<AnimationDriver>>) {
    let mut d = driver.borrow_mut();
    let d = &mut *d;

    for variant in RevealVariant::ALL {
        let selector = format!(".{}", variant.class_name());
        for el in dom::query_all(document, &selector) {
            let id = d.targets.register(el);
            d.scroll.add_reveal(id, variant, &mut d.store);
        }
    }

    for el in dom::query_all(document, PARALLAX_SELECTOR) {
        let id = d.targets.register(el);
        d.scroll.add_parallax(id);
    }

    for group in dom::query_all(document, STAGGER_GROUP_SELECTOR) {
        let cards: Vec<_> = dom::query_all_in(&group, STAGGER_CARD_SELECTOR)
            .into_iter()
            .map(|card| d.targets.register(card))
            .collect();
        let group = d.targets.register(group);
        d.scroll.add_stagger_group(group, cards, &mut d.store);
    }

    log::debug!("{} scroll triggers registered", d.scroll.len());
}
