use crate::camera::OrbitCamera;
use crate::constants::MAX_FRAME_DT;
use crate::hud::HudState;
use crate::lifecycle::{LoopState, PageEvent};
use crate::overlay::Overlay;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wish_core::TreeScene;

pub struct FrameContext {
    pub scene: Rc<RefCell<TreeScene>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub overlay: Overlay,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;

        let aspect = match &self.gpu {
            Some(g) => g.aspect(),
            None => self.canvas.width() as f32 / self.canvas.height().max(1) as f32,
        };
        let camera = {
            let progress = self.scene.borrow().progress();
            let mut orbit = self.orbit.borrow_mut();
            orbit.auto_rotate(dt_sec, progress);
            orbit.camera(aspect)
        };

        let mut scene = self.scene.borrow_mut();
        scene.tick(dt_sec, &camera.pose());

        let hero = scene.hero_index();
        let hud = HudState::derive(scene.progress(), scene.is_exploded(), hero, scene.photo_count());
        let caption = scene
            .carousel()
            .cards()
            .get(hero)
            .and_then(|c| c.source.caption.as_deref());
        self.overlay.apply(&self.document, hud, caption);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(dt_sec, &scene, &camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[frame] surface lost, reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, scene: &TreeScene) -> Option<render::GpuState> {
    match render::GpuState::new(canvas.clone(), scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Pauses, resumes or stops a running animation loop.
#[derive(Clone)]
pub struct LoopHandle {
    state: Rc<Cell<LoopState>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl LoopHandle {
    /// Apply a page lifecycle event and return the resulting state.
    pub fn on_page_event(&self, event: PageEvent) -> LoopState {
        let before = self.state.get();
        let after = before.on(event);
        if before == after {
            return after;
        }
        self.state.set(after);
        if after.is_running() {
            request_frame(&self.tick, &self.raf_id);
            log::info!("[frame] loop resumed");
        } else {
            if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
                _ = w.cancel_animation_frame(id);
            }
            if after.releases_gpu() {
                // Drops the closure and everything it captured.
                self.tick.borrow_mut().take();
            }
            log::info!("[frame] loop {:?}", after);
        }
        after
    }

    pub fn is_running(&self) -> bool {
        self.state.get().is_running()
    }
}

fn request_frame(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    match w.request_animation_frame(cb.unchecked_ref()) {
        Ok(id) => raf_id.set(Some(id)),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        state: Rc::new(Cell::new(LoopState::Running)),
        raf_id: Rc::new(Cell::new(None)),
        tick: Rc::new(RefCell::new(None)),
    };
    let h = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !h.is_running() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&h.tick, &h.raf_id);
    }) as Box<dyn FnMut()>));
    request_frame(&handle.tick, &handle.raf_id);
    handle
}
