use crate::camera::OrbitCamera;
use crate::input::{PointerState, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wish_core::TreeScene;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub scene: Rc<RefCell<TreeScene>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub swipe: Rc<RefCell<SwipeTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        {
            let mut p = w.pointer.borrow_mut();
            p.move_to(x, y);
            p.down = true;
        }
        w.swipe.borrow_mut().begin(x);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (dx, dy) = {
            let mut p = w.pointer.borrow_mut();
            if !p.down {
                return;
            }
            p.move_to(ev.client_x() as f32, ev.client_y() as f32)
        };
        let progress = w.scene.borrow().progress();
        if OrbitCamera::accepts_input(progress) {
            w.orbit.borrow_mut().drag(dx, dy);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w_up = w.clone();
    let up = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w_up.pointer.borrow_mut().down = false;
        let swipe = w_up.swipe.borrow_mut().end(ev.client_x() as f32);
        if let Some(action) = swipe {
            log::debug!("[swipe] {:?}", action);
            super::apply_action(&w_up.scene, &w_up.document, action);
        }
    }) as Box<dyn FnMut(_)>);

    let w_cancel = w.clone();
    let cancel = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w_cancel.pointer.borrow_mut().down = false;
        w_cancel.swipe.borrow_mut().cancel();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", up.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", cancel.as_ref().unchecked_ref());
    }
    up.forget();
    cancel.forget();
}
