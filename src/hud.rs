use crate::constants::{HUD_DIM_ABOVE, HUD_HEADER_HIDE_ABOVE, HUD_INDICATOR_ABOVE};

/// Everything the page overlay shows, derived from scene state each frame.
/// The overlay only touches the DOM when this changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudState {
    pub header_visible: bool,
    pub dimmed: bool,
    pub wish_button: bool,
    pub reset_button: bool,
    pub indicator_visible: bool,
    pub hero: usize,
    pub total: usize,
}

impl HudState {
    pub fn derive(progress: f32, exploded: bool, hero: usize, total: usize) -> Self {
        Self {
            header_visible: progress <= HUD_HEADER_HIDE_ABOVE,
            dimmed: progress > HUD_DIM_ABOVE,
            wish_button: !exploded,
            reset_button: exploded,
            indicator_visible: progress > HUD_INDICATOR_ABOVE && total > 0,
            hero,
            total,
        }
    }
}
