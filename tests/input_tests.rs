// Host-side tests for keyboard, swipe and HUD logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}
mod hud {
    include!("../src/hud.rs");
}

use hud::HudState;
use input::*;

#[test]
fn wish_and_reset_keys() {
    assert_eq!(action_for_key(" "), Some(Action::Wish));
    assert_eq!(action_for_key("Enter"), Some(Action::Wish));
    assert_eq!(action_for_key("Escape"), Some(Action::Reset));
    assert_eq!(action_for_key("r"), Some(Action::Reset));
    assert_eq!(action_for_key("R"), Some(Action::Reset));
}

#[test]
fn arrow_keys_step_the_hero() {
    assert_eq!(action_for_key("ArrowRight"), Some(Action::Next));
    assert_eq!(action_for_key("ArrowLeft"), Some(Action::Prev));
    assert_eq!(action_for_key("ArrowUp"), None);
}

#[test]
fn digits_select_photos() {
    assert_eq!(action_for_key("1"), Some(Action::Select(0)));
    assert_eq!(action_for_key("9"), Some(Action::Select(8)));
    assert_eq!(action_for_key("0"), None);
    assert_eq!(digit_index("10"), None);
    assert_eq!(digit_index(""), None);
    assert_eq!(digit_index("x"), None);
}

#[test]
fn hint_toggle_and_unknown_keys() {
    assert_eq!(action_for_key("h"), Some(Action::ToggleHud));
    assert_eq!(action_for_key("H"), Some(Action::ToggleHud));
    assert_eq!(action_for_key("q"), None);
    assert_eq!(action_for_key("Shift"), None);
}

#[test]
fn swipe_left_is_next_and_right_is_prev() {
    let mut swipe = SwipeTracker::default();
    swipe.begin(300.0);
    assert!(swipe.is_active());
    assert_eq!(swipe.end(200.0), Some(Action::Next));
    assert!(!swipe.is_active());

    swipe.begin(100.0);
    assert_eq!(swipe.end(220.0), Some(Action::Prev));
}

#[test]
fn short_swipes_are_ignored() {
    assert_eq!(swipe_action(50.0), None);
    assert_eq!(swipe_action(-50.0), None);
    assert_eq!(swipe_action(50.5), Some(Action::Next));
    assert_eq!(swipe_action(-50.5), Some(Action::Prev));

    let mut swipe = SwipeTracker::default();
    swipe.begin(10.0);
    assert_eq!(swipe.end(30.0), None);
}

#[test]
fn release_without_press_does_nothing() {
    let mut swipe = SwipeTracker::default();
    assert_eq!(swipe.end(500.0), None);
    swipe.begin(500.0);
    swipe.cancel();
    assert_eq!(swipe.end(0.0), None);
}

#[test]
fn pointer_reports_deltas() {
    let mut p = PointerState::default();
    p.move_to(10.0, 20.0);
    let (dx, dy) = p.move_to(15.0, 12.0);
    assert_eq!((dx, dy), (5.0, -8.0));
    assert_eq!((p.x, p.y), (15.0, 12.0));
}

#[test]
fn hud_at_rest_shows_header_and_wish_button() {
    let s = HudState::derive(0.0, false, 0, 8);
    assert!(s.header_visible);
    assert!(!s.dimmed);
    assert!(s.wish_button);
    assert!(!s.reset_button);
    assert!(!s.indicator_visible);
}

#[test]
fn hud_scattered_shows_carousel_controls() {
    let s = HudState::derive(1.0, true, 3, 8);
    assert!(!s.header_visible);
    assert!(s.dimmed);
    assert!(!s.wish_button);
    assert!(s.reset_button);
    assert!(s.indicator_visible);
    assert_eq!((s.hero, s.total), (3, 8));
}

#[test]
fn hud_thresholds_are_strict() {
    assert!(HudState::derive(0.5, true, 0, 8).header_visible);
    assert!(!HudState::derive(0.55, true, 0, 8).header_visible);
    assert!(!HudState::derive(0.8, true, 0, 8).dimmed);
    assert!(!HudState::derive(0.9, true, 0, 8).indicator_visible);
    assert!(HudState::derive(0.95, true, 0, 8).indicator_visible);
}

#[test]
fn hud_hides_indicator_without_photos() {
    assert!(!HudState::derive(1.0, true, 0, 0).indicator_visible);
}

#[test]
fn hud_resetting_swaps_buttons_before_progress_returns() {
    // Reset flips the buttons at once even though progress is still high.
    let s = HudState::derive(0.95, false, 2, 8);
    assert!(s.wish_button);
    assert!(!s.reset_button);
    assert!(s.dimmed);
}
