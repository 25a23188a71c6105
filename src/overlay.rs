use crate::dom;
use crate::hud::HudState;
use wasm_bindgen::JsCast;
use web_sys as web;

const HIDDEN: &str = "hidden";

/// Page overlay: header, wish/reset buttons, dimmer, carousel dots and the
/// hero caption. Writes to the DOM only when the derived state changes.
#[derive(Default)]
pub struct Overlay {
    last: Option<HudState>,
    dots_built_for: usize,
}

impl Overlay {
    pub fn apply(&mut self, document: &web::Document, state: HudState, caption: Option<&str>) {
        if self.last == Some(state) {
            return;
        }
        let prev = self.last.replace(state);

        dom::set_class(document, "wish-header", HIDDEN, !state.header_visible);
        dom::set_class(document, "scene-dim", "active", state.dimmed);
        dom::set_class(document, "wish-button", HIDDEN, !state.wish_button);
        dom::set_class(document, "reset-panel", HIDDEN, !state.reset_button);
        dom::set_class(document, "carousel-indicator", HIDDEN, !state.indicator_visible);

        let rebuilt = self.dots_built_for != state.total;
        if rebuilt {
            self.build_dots(document, state.total);
        }
        if rebuilt || prev.map(|p| p.hero) != Some(state.hero) {
            for i in 0..state.total {
                dom::set_class(document, &dot_id(i), "active", i == state.hero);
            }
            if let Some(el) = document.get_element_by_id("photo-caption") {
                el.set_text_content(caption);
            }
        }
    }

    fn build_dots(&mut self, document: &web::Document, total: usize) {
        let Some(container) = document.get_element_by_id("carousel-indicator") else {
            return;
        };
        container.set_inner_html("");
        for i in 0..total {
            if let Ok(dot) = document.create_element("span") {
                dot.set_id(&dot_id(i));
                dot.set_class_name("dot");
                _ = container.append_child(&dot);
            }
        }
        self.dots_built_for = total;
    }
}

fn dot_id(i: usize) -> String {
    format!("carousel-dot-{}", i)
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(HIDDEN))
        .unwrap_or(false)
}

/// Toggle the keyboard hint panel.
pub fn toggle_hint(document: &web::Document) {
    let hidden = is_hidden(document, "hint-overlay");
    dom::set_class(document, "hint-overlay", HIDDEN, !hidden);
}

/// Replace the page with a short message when WebGPU is unavailable.
pub fn show_fallback(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("fallback-message") {
        el.set_text_content(Some(message));
        if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
            _ = html.class_list().remove_1(HIDDEN);
        }
    }
}
