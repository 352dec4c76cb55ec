use crate::constants::CANVAS_ID;
use crate::core::pointer::PointerState;
use crate::core::smooth_scroll::SmoothScroll;
use crate::cursor;
use crate::dom;
use crate::driver::AnimationDriver;
use crate::events::{self, PointerWiring};
use crate::frame::{self, FrameLoop, SceneFrame};
use crate::{hero, nav, overlay, preloader, reveal};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Owns every visual effect on the page and the three frame loops that
/// drive them: the scene renderer, the cursor follower and the animation
/// ticker.
pub struct VisualRuntime {
    window: web::Window,
    document: web::Document,
    pointer: Rc<RefCell<PointerState>>,
    driver: Rc<RefCell<AnimationDriver>>,
    scene: Rc<RefCell<Option<SceneFrame>>>,
    render_loop: RefCell<Option<FrameLoop>>,
    cursor_loop: RefCell<Option<FrameLoop>>,
    ticker: FrameLoop,
    torn_down: Cell<bool>,
}

impl VisualRuntime {
    pub fn new(window: web::Window, document: web::Document) -> Rc<Self> {
        let driver = Rc::new(RefCell::new(AnimationDriver::new()));

        let started = Instant::now();
        let driver_tick = driver.clone();
        let window_tick = window.clone();
        let ticker = FrameLoop::new(move |_ts| {
            let now_sec = started.elapsed().as_secs_f64();
            let ready = driver_tick.borrow_mut().tick(now_sec, &window_tick);
            if let Some(ready) = ready {
                ready();
            }
        });

        Rc::new(Self {
            window,
            document,
            pointer: Rc::new(RefCell::new(PointerState::default())),
            driver,
            scene: Rc::new(RefCell::new(None)),
            render_loop: RefCell::new(None),
            cursor_loop: RefCell::new(None),
            ticker,
            torn_down: Cell::new(false),
        })
    }

    pub fn window(&self) -> &web::Window {
        &self.window
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    /// Start the always-on effects, then the preloader (or skip it) and
    /// finally the content animations.
    pub fn boot(self: &Rc<Self>, first_load: bool) {
        self.init_smooth_scroll();
        self.init_scene();
        *self.cursor_loop.borrow_mut() = cursor::install(&self.document, self.pointer.clone());
        nav::install_mobile(&self.document);
        events::wire_lifecycle_handlers(self);
        events::wire_pointer_handlers(PointerWiring {
            window: self.window.clone(),
            document: self.document.clone(),
            pointer: self.pointer.clone(),
        });

        if self.document.hidden() {
            self.driver.borrow_mut().clock.sleep();
        } else {
            self.ticker.start();
        }

        let rt = self.clone();
        preloader::start(
            &self.document,
            &self.driver,
            first_load,
            Box::new(move || rt.activate()),
        );
    }

    fn activate(&self) {
        log::info!("page ready, starting content animations");
        reveal::install(&self.document, &self.driver);
        hero::install(&self.document, &self.driver);
        events::wire_magnetic_buttons(&self.document, &self.driver);
        overlay::install(&self.document, &self.driver);
        // hidden poses go out before the next paint
        self.driver.borrow_mut().flush();
    }

    fn init_smooth_scroll(&self) {
        let smooth = SmoothScroll::new(
            dom::scroll_y(&self.window),
            dom::scroll_limit(&self.window),
        );
        self.driver.borrow_mut().smooth = Some(smooth);
        events::wire_smooth_wheel(&self.window, &self.driver);
    }

    fn init_scene(self: &Rc<Self>) {
        let Some(canvas) = self
            .document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            log::debug!("no #{CANVAS_ID} canvas, background scene off");
            return;
        };
        let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
        let rt = self.clone();
        spawn_local(async move {
            let Some(scene) = frame::init_scene(canvas, rt.pointer.clone(), seed).await else {
                return;
            };
            *rt.scene.borrow_mut() = Some(scene);

            let scene = rt.scene.clone();
            let render_loop = FrameLoop::new(move |_ts| {
                if let Some(s) = scene.borrow_mut().as_mut() {
                    s.frame();
                }
            });
            if !rt.torn_down.get() {
                render_loop.start();
            }
            *rt.render_loop.borrow_mut() = Some(render_loop);
        });
    }

    /// Re-measure layout-dependent state: canvas size, camera aspect,
    /// scroll trigger positions and the scroll limit.
    pub fn on_resize(&self) {
        let viewport = dom::viewport(&self.window);
        if let Some(scene) = self.scene.borrow_mut().as_mut() {
            scene.resize(&viewport);
        }
        self.driver.borrow_mut().refresh(&self.window);
    }

    /// Pause the animation ticker while the document is hidden.
    pub fn on_visibility(&self, hidden: bool) {
        if hidden {
            self.driver.borrow_mut().clock.sleep();
            self.ticker.stop();
        } else if !self.torn_down.get() {
            self.driver.borrow_mut().clock.wake();
            self.ticker.start();
        }
    }

    /// Stop every loop when the page is being unloaded.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.ticker.stop();
        for slot in [&self.render_loop, &self.cursor_loop] {
            if let Some(lp) = slot.borrow().as_ref() {
                lp.stop();
            }
        }
        log::debug!("visual runtime torn down");
    }

    /// Restart the loops after the page comes back from the back/forward
    /// cache.
    pub fn resume(&self) {
        if !self.torn_down.replace(false) {
            return;
        }
        for slot in [&self.render_loop, &self.cursor_loop] {
            if let Some(lp) = slot.borrow().as_ref().filter(|lp| !lp.is_running()) {
                lp.start();
            }
        }
        self.driver.borrow_mut().cancel_navigation();
        self.on_visibility(self.document.hidden());
        log::debug!("visual runtime resumed");
    }
}
