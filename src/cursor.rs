use crate::constants::{
    CURSOR_GLOW_SELECTOR, CURSOR_HOVER_CLASS, CURSOR_HOVER_SELECTOR, CURSOR_SELECTOR,
};
use crate::core::pointer::PointerState;
use crate::dom;
use crate::frame::FrameLoop;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Custom cursor: the dot follows the pointer exactly, the glow trails it.
/// Returns the running cursor loop, or `None` without cursor markup.
pub fn install(document: &web::Document, pointer: Rc<RefCell<PointerState>>) -> Option<FrameLoop> {
    let Some(cursor) = dom::query(document, CURSOR_SELECTOR) else {
        log::debug!("no {CURSOR_SELECTOR} element, custom cursor off");
        return None;
    };
    let glow = dom::query(document, CURSOR_GLOW_SELECTOR);

    for el in dom::query_all(document, CURSOR_HOVER_SELECTOR) {
        let enter = cursor.clone();
        dom::on_mouse(&el, "mouseenter", move |_ev: web::MouseEvent| {
            _ = enter.class_list().add_1(CURSOR_HOVER_CLASS);
        });
        let leave = cursor.clone();
        dom::on_mouse(&el, "mouseleave", move |_ev: web::MouseEvent| {
            _ = leave.class_list().remove_1(CURSOR_HOVER_CLASS);
        });
    }

    let frame_loop = FrameLoop::new(move |_ts| {
        let (client, glow_at) = {
            let mut p = pointer.borrow_mut();
            let glow_at = p.step_glow();
            (p.client, glow_at)
        };
        place(&cursor, client);
        if let Some(g) = &glow {
            place(g, glow_at);
        }
    });
    frame_loop.start();
    Some(frame_loop)
}

fn place(el: &web::HtmlElement, at: Vec2) {
    dom::set_style(el, "left", &format!("{}px", at.x));
    dom::set_style(el, "top", &format!("{}px", at.y));
}
