#![cfg(target_arch = "wasm32")]
use instant::Instant;
use lifecycle::PageEvent;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wish_core::{SceneConfig, TreeScene};

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod hud;
mod input;
mod lifecycle;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Suspend the loop on a bfcache `pagehide` and resume it on the matching
/// `pageshow`; a non-persisted `pagehide` stops it and releases the GPU.
fn wire_page_lifecycle(handle: frame::LoopHandle, frame_ctx: Rc<RefCell<frame::FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let hide_handle = handle.clone();
    let on_hide = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        let state = hide_handle.on_page_event(PageEvent::Hide {
            persisted: ev.persisted(),
        });
        if state.releases_gpu() {
            if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
                ctx.gpu = None;
            }
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        handle.on_page_event(PageEvent::Show {
            persisted: ev.persisted(),
        });
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_hide.forget();
    on_show.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wish-tree starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing store must match CSS size * devicePixelRatio before the surface exists.
    wire_canvas_resize(&canvas);

    let scene = TreeScene::new(SceneConfig::default())?;
    let scene = Rc::new(RefCell::new(scene));

    let gpu = frame::init_gpu(&canvas, &scene.borrow()).await;
    if gpu.is_none() {
        overlay::show_fallback(&document, "This page needs a browser with WebGPU enabled.");
    }

    let orbit = Rc::new(RefCell::new(camera::OrbitCamera::default()));

    events::wire_buttons(&scene, &document);
    events::wire_global_keydown(scene.clone(), document.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        scene: scene.clone(),
        orbit: orbit.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
        swipe: Rc::new(RefCell::new(input::SwipeTracker::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        orbit,
        canvas,
        document,
        overlay: overlay::Overlay::default(),
        gpu,
        last_instant: Instant::now(),
    }));
    let handle = frame::start_loop(frame_ctx.clone());
    wire_page_lifecycle(handle, frame_ctx);
    Ok(())
}
