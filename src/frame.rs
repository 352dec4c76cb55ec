use crate::core::pointer::PointerState;
use crate::core::scene::{SceneMotion, Viewport};
use crate::dom;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A requestAnimationFrame loop that can be stopped and restarted.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    /// Build a stopped loop; `body` receives the rAF timestamp in ms.
    pub fn new(mut body: impl FnMut(f64) + 'static) -> Self {
        let running = Rc::new(Cell::new(false));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            body(ts);
            // body may have stopped us
            if running_tick.get() {
                pending_tick.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut(f64)>));

        Self {
            running,
            pending,
            tick,
        }
    }

    pub fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(handle) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Per-frame state of the background scene.
pub struct SceneFrame {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub motion: SceneMotion,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl SceneFrame {
    pub fn frame(&mut self) {
        let ndc = self.pointer.borrow_mut().step_scene();
        self.motion.step(ndc);
        match self.gpu.render(&self.motion, ndc) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, viewport);
        self.motion.camera.resize(viewport);
        self.gpu.resize(viewport);
    }
}

/// Create the scene on `canvas`, or `None` when WebGPU is unavailable.
pub async fn init_scene(
    canvas: web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    seed: u64,
) -> Option<SceneFrame> {
    use crate::core::scene::generate_particles;
    use crate::core::PARTICLE_COUNT;
    use rand::SeedableRng;

    let window = web::window()?;
    let viewport = dom::viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let particles = generate_particles(&mut rng, PARTICLE_COUNT);
    match render::GpuState::new(&canvas, &viewport, &particles).await {
        Ok(gpu) => Some(SceneFrame {
            canvas,
            gpu,
            motion: SceneMotion::new(&viewport),
            pointer,
        }),
        Err(e) => {
            log::warn!("WebGPU unavailable, background scene disabled: {:?}", e);
            None
        }
    }
}
