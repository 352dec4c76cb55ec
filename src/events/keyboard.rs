use crate::core::nav::NavEvent;
use crate::dom;
use web_sys as web;

/// Keys handled anywhere on the page.
#[inline]
pub fn nav_event_for_key(key: &str) -> Option<NavEvent> {
    NavEvent::key(key)
}

pub fn wire_global_keydown(document: &web::Document, mut on_nav: impl FnMut(NavEvent) + 'static) {
    dom::on_key(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        if let Some(event) = nav_event_for_key(&ev.key()) {
            on_nav(event);
        }
    });
}
