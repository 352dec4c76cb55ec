use crate::constants::*;
use crate::core::nav::{flag_value, ClickTarget, NavEvent, NavState};
use crate::dom;
use crate::events;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attribute-driven mobile menu: `[data-nav-toggle]` flips
/// `body[data-nav-open]` and the toggle's `aria-expanded`.
pub fn install(document: &web::Document) {
    let Some(toggle) = dom::query(document, NAV_TOGGLE_SELECTOR) else {
        log::debug!("no {NAV_TOGGLE_SELECTOR} element, nav toggle off");
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    render(&body, &toggle, false);

    let toggle_target = toggle.clone();
    let state = RefCell::new(NavState::new());
    let dispatch = Rc::new(move |event: NavEvent| {
        let mut s = state.borrow_mut();
        if s.handle(event) {
            render(&body, &toggle, s.is_open());
        }
    });

    let on_toggle = dispatch.clone();
    dom::on_mouse(&toggle_target, "click", move |_ev: web::MouseEvent| {
        on_toggle(NavEvent::ToggleClick);
    });

    let on_key = dispatch.clone();
    events::wire_global_keydown(document, move |event| on_key(event));

    let on_doc = dispatch;
    dom::on_mouse(document, "click", move |ev: web::MouseEvent| {
        on_doc(NavEvent::DocumentClick(click_target(&ev)));
    });
}

fn click_target(ev: &web::MouseEvent) -> ClickTarget {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return ClickTarget::default();
    };
    let within = |sel: &str| el.closest(sel).ok().flatten().is_some();
    ClickTarget {
        on_toggle: within(NAV_TOGGLE_SELECTOR),
        in_menu: within(NAV_MENU_SELECTOR),
        on_menu_link: within(NAV_MENU_LINK_SELECTOR),
    }
}

fn render(body: &web::HtmlElement, toggle: &web::HtmlElement, open: bool) {
    _ = body.set_attribute(NAV_OPEN_ATTR, flag_value(open));
    _ = toggle.set_attribute(ARIA_EXPANDED_ATTR, flag_value(open));
}

/// Class-driven mobile menu: `.nav-toggle` toggles `active` on itself and
/// `.nav-mobile`; a click on any `.nav-link` inside the menu closes both.
pub fn install_mobile(document: &web::Document) {
    let (Some(toggle), Some(menu)) = (
        dom::query(document, MOBILE_TOGGLE_SELECTOR),
        dom::query(document, MOBILE_MENU_SELECTOR),
    ) else {
        return;
    };
    let state = Rc::new(RefCell::new(NavState::new()));

    {
        let (state, toggle_el, menu) = (state.clone(), toggle.clone(), menu.clone());
        dom::on_mouse(&toggle, "click", move |_ev: web::MouseEvent| {
            let mut s = state.borrow_mut();
            s.handle(NavEvent::ToggleClick);
            set_active(&toggle_el, &menu, s.is_open());
        });
    }

    for link in dom::query_all_in(&menu, MOBILE_MENU_LINK_SELECTOR) {
        let (state, toggle, menu) = (state.clone(), toggle.clone(), menu.clone());
        dom::on_mouse(&link, "click", move |_ev: web::MouseEvent| {
            state.borrow_mut().close();
            set_active(&toggle, &menu, false);
        });
    }
}

fn set_active(toggle: &web::HtmlElement, menu: &web::HtmlElement, open: bool) {
    for el in [toggle, menu] {
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
    }
}
