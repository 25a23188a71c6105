use crate::input::{action_for_key, Action};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wish_core::TreeScene;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<TreeScene>>,
    document: &web::Document,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    if matches!(action, Action::Wish | Action::Next | Action::Prev) {
        // Space and arrows would otherwise scroll the page.
        ev.prevent_default();
    }
    log::debug!("[keys] {:?} -> {:?}", key, action);
    super::apply_action(scene, document, action);
}

pub fn wire_global_keydown(scene: Rc<RefCell<TreeScene>>, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
