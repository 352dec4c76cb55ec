use crate::constants::MAGNETIC_SELECTOR;
use crate::core::magnetic::MagneticButton;
use crate::core::pointer::PointerState;
use crate::dom;
use crate::driver::AnimationDriver;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub pointer: Rc<RefCell<PointerState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousemove(&w);
}

#[inline]
pub fn client_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// One document-level listener feeds both the scene and the cursor.
fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::on_mouse(&document, "mousemove", move |ev: web::MouseEvent| {
        let viewport = dom::viewport(&w.window);
        let size = Vec2::new(viewport.width as f32, viewport.height as f32);
        w.pointer.borrow_mut().moved(client_position(&ev), size);
    });
}

/// Register every magnetic button with the driver and wire its listeners.
pub fn wire_magnetic_buttons(document: &web::Document, driver: &Rc<RefCell<AnimationDriver>>) {
    let buttons = dom::query_all(document, MAGNETIC_SELECTOR);
    for el in buttons {
        let index = {
            let mut d = driver.borrow_mut();
            let target = d.targets.register(el.clone());
            d.magnets.push(MagneticButton::new(target));
            d.magnets.len() - 1
        };

        let driver_move = driver.clone();
        let el_move = el.clone();
        dom::on_mouse(&el, "mousemove", move |ev: web::MouseEvent| {
            let rect = dom::element_rect(&el_move);
            if let Some(magnet) = driver_move.borrow_mut().magnets.get_mut(index) {
                magnet.pointer_moved(client_position(&ev), rect);
            }
        });

        let driver_leave = driver.clone();
        dom::on_mouse(&el, "mouseleave", move |_ev: web::MouseEvent| {
            if let Some(magnet) = driver_leave.borrow_mut().magnets.get_mut(index) {
                magnet.pointer_left();
            }
        });
    }
}
