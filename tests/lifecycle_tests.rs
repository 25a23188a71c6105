// Host-side tests for how page lifecycle events drive the render loop.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::{LoopState, PageEvent};

const BFCACHE_HIDE: PageEvent = PageEvent::Hide { persisted: true };
const FINAL_HIDE: PageEvent = PageEvent::Hide { persisted: false };
const BFCACHE_SHOW: PageEvent = PageEvent::Show { persisted: true };
const FIRST_SHOW: PageEvent = PageEvent::Show { persisted: false };

#[test]
fn bfcache_hide_keeps_the_gpu() {
    let state = LoopState::Running.on(BFCACHE_HIDE);
    assert_eq!(state, LoopState::Suspended);
    assert!(!state.is_running());
    assert!(!state.releases_gpu());
}

#[test]
fn restore_from_bfcache_resumes() {
    let state = LoopState::Running.on(BFCACHE_HIDE).on(BFCACHE_SHOW);
    assert_eq!(state, LoopState::Running);
    // Several round trips through the cache.
    let mut s = LoopState::Running;
    for _ in 0..3 {
        s = s.on(BFCACHE_HIDE);
        assert_eq!(s, LoopState::Suspended);
        s = s.on(BFCACHE_SHOW);
        assert_eq!(s, LoopState::Running);
    }
}

#[test]
fn final_hide_stops_and_releases() {
    assert_eq!(LoopState::Running.on(FINAL_HIDE), LoopState::Stopped);
    assert_eq!(LoopState::Suspended.on(FINAL_HIDE), LoopState::Stopped);
    assert!(LoopState::Stopped.releases_gpu());
}

#[test]
fn stopped_is_terminal() {
    for ev in [BFCACHE_HIDE, FINAL_HIDE, BFCACHE_SHOW, FIRST_SHOW] {
        assert_eq!(LoopState::Stopped.on(ev), LoopState::Stopped);
    }
}

#[test]
fn first_show_and_stray_events_change_nothing() {
    assert_eq!(LoopState::Running.on(FIRST_SHOW), LoopState::Running);
    assert_eq!(LoopState::Running.on(BFCACHE_SHOW), LoopState::Running);
    assert_eq!(LoopState::Suspended.on(FIRST_SHOW), LoopState::Suspended);
    assert_eq!(LoopState::Suspended.on(BFCACHE_HIDE), LoopState::Suspended);
}
