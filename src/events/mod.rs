pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::input::Action;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;
use wish_core::TreeScene;

/// Route one user action into the scene. Shared by keys, buttons and swipes.
pub fn apply_action(scene: &Rc<RefCell<TreeScene>>, document: &web::Document, action: Action) {
    match action {
        Action::Wish => scene.borrow_mut().trigger(true),
        Action::Reset => scene.borrow_mut().trigger(false),
        Action::Next => {
            let hero = scene.borrow_mut().step_hero(1);
            log::debug!("[input] hero -> {}", hero);
        }
        Action::Prev => {
            let hero = scene.borrow_mut().step_hero(-1);
            log::debug!("[input] hero -> {}", hero);
        }
        Action::Select(i) => {
            let mut s = scene.borrow_mut();
            if i < s.photo_count() {
                s.set_hero_index(i as i64);
            }
        }
        Action::ToggleHud => overlay::toggle_hint(document),
    }
}

/// Hook the overlay's wish and reset buttons.
pub fn wire_buttons(scene: &Rc<RefCell<TreeScene>>, document: &web::Document) {
    let s = scene.clone();
    let doc = document.clone();
    crate::dom::add_click_listener(document, "wish-button", move || {
        apply_action(&s, &doc, Action::Wish);
    });
    let s = scene.clone();
    let doc = document.clone();
    crate::dom::add_click_listener(document, "reset-button", move || {
        apply_action(&s, &doc, Action::Reset);
    });
}
