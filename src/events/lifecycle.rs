use crate::constants::WHEEL_LINE_PX;
use crate::dom;
use crate::driver::AnimationDriver;
use crate::runtime::VisualRuntime;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Convert a wheel delta to CSS px according to its `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta: f64, mode: u32, page_px: f64) -> f64 {
    match mode {
        web::WheelEvent::DOM_DELTA_LINE => delta * WHEEL_LINE_PX,
        web::WheelEvent::DOM_DELTA_PAGE => delta * page_px,
        _ => delta,
    }
}

pub fn wire_lifecycle_handlers(runtime: &Rc<VisualRuntime>) {
    wire_resize(runtime);
    wire_visibility(runtime);
    wire_pagehide(runtime);
    wire_pageshow(runtime);
    wire_load(runtime);
}

fn wire_resize(runtime: &Rc<VisualRuntime>) {
    let rt = runtime.clone();
    dom::on_event(runtime.window(), "resize", move |_ev: web::Event| {
        rt.on_resize();
    });
}

fn wire_visibility(runtime: &Rc<VisualRuntime>) {
    let rt = runtime.clone();
    dom::on_event(runtime.document(), "visibilitychange", move |_ev: web::Event| {
        let hidden = rt.document().hidden();
        rt.on_visibility(hidden);
    });
}

fn wire_pagehide(runtime: &Rc<VisualRuntime>) {
    let rt = runtime.clone();
    dom::on_event(runtime.window(), "pagehide", move |_ev: web::Event| {
        rt.teardown();
    });
}

fn wire_pageshow(runtime: &Rc<VisualRuntime>) {
    let rt = runtime.clone();
    dom::on_event(runtime.window(), "pageshow", move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if persisted {
            rt.resume();
        }
    });
}

// Late images and fonts move trigger positions.
fn wire_load(runtime: &Rc<VisualRuntime>) {
    let rt = runtime.clone();
    dom::on_event(runtime.window(), "load", move |_ev: web::Event| {
        rt.on_resize();
    });
}

/// Route vertical wheel input through the smooth scroller. Pinch-zoom
/// gestures (ctrl + wheel) and purely horizontal wheels are left to the
/// browser.
pub fn wire_smooth_wheel(window: &web::Window, driver: &Rc<RefCell<AnimationDriver>>) {
    let driver = driver.clone();
    let win = window.clone();
    dom::on_wheel(window, move |ev: web::WheelEvent| {
        if ev.ctrl_key() || ev.delta_y() == 0.0 {
            return;
        }
        let page = dom::viewport(&win).height;
        let delta = wheel_delta_px(ev.delta_y(), ev.delta_mode(), page);
        let mut d = driver.borrow_mut();
        let Some(smooth) = d.smooth.as_mut() else {
            return;
        };
        ev.prevent_default();
        // content may have grown since the last resize
        smooth.set_limit(dom::scroll_limit(&win));
        smooth.wheel(delta);
    });
}
