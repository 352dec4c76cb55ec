// Host-side tests for pointer-driven effects, the menu state and the ticker clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
    pub mod magnetic {
        include!("../src/core/magnetic.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod clock {
        include!("../src/core/clock.rs");
    }
}

use crate::core::clock::AnimationClock;
use crate::core::constants::*;
use crate::core::magnetic::{magnet_offset, MagneticButton, Rect};
use crate::core::nav::{flag_value, ClickTarget, NavEvent, NavState};
use crate::core::pointer::{approach, client_to_ndc, PointerState};
use crate::core::timeline::{Prop, PropStore};
use glam::Vec2;

fn button_rect() -> Rect {
    Rect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 40.0,
    }
}

#[test]
fn magnet_pulls_a_quarter_of_the_way() {
    let offset = magnet_offset(Vec2::new(90.0, 40.0), button_rect());
    assert_eq!(offset, Vec2::new(10.0, 5.0));
    assert_eq!(magnet_offset(button_rect().center(), button_rect()), Vec2::ZERO);
}

#[test]
fn magnetic_button_follows_then_springs_back() {
    let mut button = MagneticButton::new(4);
    let mut store = PropStore::new();

    button.pointer_moved(Vec2::new(90.0, 40.0), button_rect());
    button.update(MAGNET_FOLLOW_SEC / 2.0, &mut store);
    let halfway = store.get(4, Prop::X);
    assert!(halfway > 0.0 && halfway < 10.0);

    button.update(MAGNET_FOLLOW_SEC, &mut store);
    assert_eq!(button.offset(), Vec2::new(10.0, 5.0));
    assert_eq!(store.get(4, Prop::Y), 5.0);

    // settled buttons leave the store alone
    store.take_dirty();
    button.update(0.016, &mut store);
    assert!(store.take_dirty().is_empty());

    button.pointer_left();
    button.update(MAGNET_RELEASE_SEC, &mut store);
    assert_eq!(button.offset(), Vec2::ZERO);
    assert_eq!(store.get(4, Prop::X), 0.0);
}

#[test]
fn release_overshoots_the_rest_position() {
    let mut button = MagneticButton::new(0);
    let mut store = PropStore::new();
    button.pointer_moved(Vec2::new(90.0, 20.0), button_rect());
    button.update(1.0, &mut store);
    button.pointer_left();

    let mut crossed = false;
    for _ in 0..50 {
        button.update(0.01, &mut store);
        crossed |= store.get(0, Prop::X) < 0.0;
    }
    assert!(crossed, "elastic release should pass zero");
}

#[test]
fn toggle_click_flips_the_menu() {
    let mut nav = NavState::new();
    assert!(!nav.is_open());
    assert!(nav.handle(NavEvent::ToggleClick));
    assert!(nav.is_open());
    assert!(nav.handle(NavEvent::ToggleClick));
    assert!(!nav.is_open());
}

#[test]
fn toggle_click_bubbling_to_document_keeps_state() {
    let mut nav = NavState::new();
    nav.handle(NavEvent::ToggleClick);
    let on_toggle = ClickTarget {
        on_toggle: true,
        ..ClickTarget::default()
    };
    assert!(!nav.handle(NavEvent::DocumentClick(on_toggle)));
    assert!(nav.is_open());
}

#[test]
fn outside_click_and_link_click_close() {
    let mut nav = NavState::new();
    nav.handle(NavEvent::ToggleClick);
    let inside = ClickTarget {
        in_menu: true,
        ..ClickTarget::default()
    };
    assert!(!nav.handle(NavEvent::DocumentClick(inside)));
    assert!(nav.is_open());

    let link = ClickTarget {
        in_menu: true,
        on_menu_link: true,
        ..ClickTarget::default()
    };
    assert!(nav.handle(NavEvent::DocumentClick(link)));
    assert!(!nav.is_open());

    nav.handle(NavEvent::ToggleClick);
    assert!(nav.handle(NavEvent::DocumentClick(ClickTarget::default())));
    assert!(!nav.is_open());
}

#[test]
fn escape_closes_and_other_keys_do_nothing() {
    assert_eq!(NavEvent::key("Escape"), Some(NavEvent::KeyDown("Escape")));
    assert_eq!(NavEvent::key("Enter"), None);

    let mut nav = NavState::new();
    assert!(!nav.handle(NavEvent::KeyDown("Escape")));
    nav.handle(NavEvent::ToggleClick);
    assert!(!nav.handle(NavEvent::KeyDown("Tab")));
    assert!(nav.handle(NavEvent::KeyDown("Escape")));
    assert!(!nav.close());
    assert_eq!(flag_value(nav.is_open()), "false");
    assert_eq!(flag_value(true), "true");
}

#[test]
fn client_positions_map_to_ndc() {
    let viewport = Vec2::new(200.0, 100.0);
    assert_eq!(client_to_ndc(Vec2::ZERO, viewport), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(Vec2::new(100.0, 50.0), viewport), Vec2::ZERO);
    assert_eq!(client_to_ndc(Vec2::new(200.0, 100.0), viewport), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(Vec2::new(5.0, 5.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn pointer_smoothing_moves_a_fixed_fraction() {
    assert_eq!(approach(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.5), Vec2::new(5.0, 0.0));

    let mut pointer = PointerState::default();
    pointer.moved(Vec2::new(200.0, 0.0), Vec2::new(200.0, 100.0));
    assert_eq!(pointer.ndc_target, Vec2::new(1.0, 1.0));

    let ndc = pointer.step_scene();
    assert!((ndc.x - POINTER_SMOOTHING).abs() < 1e-6);
    let glow = pointer.step_glow();
    assert!((glow.x - 200.0 * GLOW_SMOOTHING).abs() < 1e-4);
    assert_eq!(glow.y, 0.0);
}

#[test]
fn clock_starts_at_zero_and_skips_sleep() {
    let mut clock = AnimationClock::new();
    assert_eq!(clock.tick(10.0), Some(0.0));
    assert_eq!(clock.tick(10.5), Some(0.5));

    clock.sleep();
    assert!(clock.is_asleep());
    assert_eq!(clock.tick(30.0), None);

    clock.wake();
    assert_eq!(clock.tick(60.0), Some(0.0));
    assert_eq!(clock.tick(60.25), Some(0.25));
    assert!((clock.elapsed() - 0.75).abs() < 1e-9);
}

#[test]
fn clock_never_runs_backwards() {
    let mut clock = AnimationClock::new();
    clock.tick(5.0);
    assert_eq!(clock.tick(4.0), Some(0.0));
}
