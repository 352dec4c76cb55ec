#![cfg(target_arch = "wasm32")]
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod animate;
mod constants;
mod core;
mod cursor;
mod dom;
mod driver;
mod events;
mod frame;
mod hero;
mod nav;
mod overlay;
mod preloader;
mod render;
mod reveal;
mod runtime;
mod session;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Claimed before the DOM is ready so the flag is set even if init fails.
    let first_load = core::preloader::claim_first_load(&mut session::BrowserSession::open(&window));

    dom::on_ready(&document, move || {
        if let Err(e) = init(first_load) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init(first_load: bool) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The attribute-driven menu works even when the rest of the page has no
    // effects markup.
    nav::install(&document);

    let runtime = runtime::VisualRuntime::new(window, document);
    runtime.boot(first_load);
    Ok(())
}
