// Host-side tests for scroll triggers and smooth scrolling.
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
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod smooth_scroll {
        include!("../src/core/smooth_scroll.rs");
    }
}

use crate::core::constants::*;
use crate::core::scroll::{Bounds, RevealVariant, ScrollEngine, ScrollFrame};
use crate::core::smooth_scroll::SmoothScroll;
use crate::core::timeline::{Prop, PropStore};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn at(scroll_y: f64) -> ScrollFrame {
    ScrollFrame {
        scroll_y,
        viewport_height: 800.0,
    }
}

fn bounds(top: f64, height: f64) -> Bounds {
    Bounds { top, height }
}

#[test]
fn trigger_line_is_a_viewport_fraction() {
    let b = bounds(1000.0, 200.0);
    assert!(!at(0.0).top_reached(b, REVEAL_TRIGGER));
    // 1000 - 320 = 680 = 0.85 * 800
    assert!(at(320.0).top_reached(b, REVEAL_TRIGGER));
    assert!(!at(300.0).top_reached(b, STAGGER_TRIGGER));
    assert!(at(360.0).top_reached(b, STAGGER_TRIGGER));
}

#[test]
fn pass_through_and_scroll_out_progress() {
    let b = bounds(800.0, 400.0);
    assert_eq!(at(0.0).pass_through(b), 0.0);
    assert!(approx(at(600.0).pass_through(b), 0.5));
    assert_eq!(at(5000.0).pass_through(b), 1.0);

    let hero = bounds(0.0, 1000.0);
    assert_eq!(at(0.0).scroll_out(hero), 0.0);
    assert!(approx(at(250.0).scroll_out(hero), 0.25));
    assert_eq!(at(2000.0).scroll_out(hero), 1.0);
    assert_eq!(at(100.0).scroll_out(bounds(0.0, 0.0)), 0.0);
}

#[test]
fn every_variant_starts_transparent() {
    for variant in RevealVariant::ALL {
        let hidden = variant.hidden();
        assert_eq!(hidden[0], (Prop::Opacity, 0.0), "{variant:?}");
        assert!(variant.class_name().starts_with("reveal"));
    }
    assert_eq!(RevealVariant::Fade.hidden().len(), 1);
    assert_eq!(RevealVariant::SlideLeft.hidden()[1], (Prop::X, -REVEAL_DISTANCE));
    assert_eq!(RevealVariant::Scale.hidden()[1], (Prop::Scale, REVEAL_SCALE_FROM));
    assert_eq!(RevealVariant::Fade.duration(), REVEAL_FADE_DURATION);
}

#[test]
fn reveal_plays_on_enter_and_reverses_on_leave() {
    let mut store = PropStore::new();
    let mut engine = ScrollEngine::new();
    engine.add_reveal(0, RevealVariant::Rise, &mut store);
    assert_eq!(store.get(0, Prop::Opacity), 0.0);
    assert_eq!(store.get(0, Prop::Y), REVEAL_DISTANCE);

    engine.refresh(|_| Some(bounds(1000.0, 200.0)));
    engine.update(at(0.0), 0.1, &mut store);
    assert_eq!(store.get(0, Prop::Opacity), 0.0);

    engine.update(at(400.0), 0.0, &mut store);
    engine.update(at(400.0), REVEAL_DURATION, &mut store);
    assert_eq!(store.get(0, Prop::Opacity), 1.0);
    assert_eq!(store.get(0, Prop::Y), 0.0);

    // reverses from where it is
    engine.update(at(0.0), 0.5, &mut store);
    let y = store.get(0, Prop::Y);
    assert!(y > 0.0 && y < REVEAL_DISTANCE, "y = {y}");
    engine.update(at(0.0), 1.0, &mut store);
    assert_eq!(store.get(0, Prop::Y), REVEAL_DISTANCE);
    assert_eq!(store.get(0, Prop::Opacity), 0.0);
}

#[test]
fn slide_variants_move_on_the_x_axis() {
    let mut store = PropStore::new();
    let mut engine = ScrollEngine::new();
    engine.add_reveal(1, RevealVariant::SlideLeft, &mut store);
    engine.add_reveal(2, RevealVariant::SlideRight, &mut store);
    assert_eq!(store.get(1, Prop::X), -REVEAL_DISTANCE);
    assert_eq!(store.get(2, Prop::X), REVEAL_DISTANCE);
    assert!(!store.contains(1, Prop::Y));

    engine.refresh(|_| Some(bounds(100.0, 100.0)));
    engine.update(at(0.0), 5.0, &mut store);
    assert_eq!(store.get(1, Prop::X), 0.0);
    assert_eq!(store.get(2, Prop::X), 0.0);
}

#[test]
fn stagger_group_reveals_cards_in_order() {
    let mut store = PropStore::new();
    let mut engine = ScrollEngine::new();
    engine.add_stagger_group(10, vec![11, 12, 13], &mut store);
    for card in [11, 12, 13] {
        assert_eq!(store.get(card, Prop::Y), STAGGER_DISTANCE);
    }

    // 500 <= 0.8 * 800, so it is already in view
    engine.refresh(|_| Some(bounds(500.0, 300.0)));
    engine.update(at(0.0), 0.0, &mut store);
    engine.update(at(0.0), STAGGER_DURATION, &mut store);
    assert_eq!(store.get(11, Prop::Opacity), 1.0);
    let second = store.get(12, Prop::Opacity);
    let third = store.get(13, Prop::Opacity);
    assert!(second < 1.0 && third < second, "{second} {third}");

    engine.update(at(0.0), 2.0 * STAGGER_EACH, &mut store);
    for card in [11, 12, 13] {
        assert_eq!(store.get(card, Prop::Opacity), 1.0);
        assert_eq!(store.get(card, Prop::Y), 0.0);
    }
}

#[test]
fn empty_stagger_group_is_not_registered() {
    let mut store = PropStore::new();
    let mut engine = ScrollEngine::new();
    engine.add_stagger_group(10, Vec::new(), &mut store);
    assert!(engine.is_empty());
}

#[test]
fn parallax_snaps_then_lags_behind_scroll() {
    let mut store = PropStore::new();
    let mut engine = ScrollEngine::new();
    engine.add_parallax(3);
    engine.refresh(|_| Some(bounds(800.0, 400.0)));

    engine.update(at(600.0), 0.016, &mut store);
    assert!(approx(store.get(3, Prop::YPercent), PARALLAX_Y_PERCENT * 0.5));

    engine.update(at(0.0), PARALLAX_SCRUB_SEC / 2.0, &mut store);
    let lagging = store.get(3, Prop::YPercent);
    assert!(lagging < 0.0 && lagging > PARALLAX_Y_PERCENT * 0.5, "{lagging}");

    engine.update(at(0.0), PARALLAX_SCRUB_SEC, &mut store);
    assert_eq!(store.get(3, Prop::YPercent), 0.0);
}

#[test]
fn hero_bindings_read_the_section_and_write_the_element() {
    let mut store = PropStore::new();
    let mut engine = ScrollEngine::new();
    engine.add_hero_banner(0, 1);
    engine.add_hero_title(0, 2);
    engine.refresh(|id| (id == 0).then(|| bounds(0.0, 1000.0)));

    engine.update(at(500.0), 0.016, &mut store);
    assert!(approx(store.get(1, Prop::YPercent), -10.0));
    assert!(approx(store.get(1, Prop::ScaleMul), 0.975));
    assert!(approx(store.get(1, Prop::OpacityMul), 0.75));
    assert!(approx(store.get(2, Prop::YPercent), -15.0));
    assert!(approx(store.get(2, Prop::OpacityMul), 0.65));
    assert!(!store.contains(0, Prop::YPercent));
}

#[test]
fn new_triggers_require_a_refresh() {
    let mut engine = ScrollEngine::new();
    engine.add_parallax(0);
    assert!(engine.needs_refresh());
    engine.refresh(|_| None);
    assert!(!engine.needs_refresh());
    engine.add_parallax(1);
    assert!(engine.needs_refresh());
    assert_eq!(engine.len(), 2);
}

#[test]
fn smooth_scroll_eases_to_the_wheel_target() {
    let mut smooth = SmoothScroll::new(100.0, 1000.0);
    assert_eq!(smooth.tick(0.016), None);

    smooth.wheel(200.0);
    assert!(smooth.is_animating());
    assert_eq!(smooth.target(), 300.0);

    let mid = smooth.tick(SMOOTH_SCROLL_SEC / 2.0).unwrap_or_default();
    assert!(mid > 250.0 && mid < 300.0, "mid = {mid}");

    assert_eq!(smooth.tick(SMOOTH_SCROLL_SEC), Some(300.0));
    assert!(!smooth.is_animating());
    assert_eq!(smooth.tick(0.016), None);
}

#[test]
fn wheel_accumulates_and_clamps_to_the_page() {
    let mut smooth = SmoothScroll::new(0.0, 500.0);
    smooth.wheel(-50.0);
    assert_eq!(smooth.target(), 0.0);
    smooth.wheel(300.0);
    smooth.wheel(300.0);
    assert_eq!(smooth.target(), 500.0);

    smooth.set_limit(200.0);
    assert_eq!(smooth.target(), 200.0);
}

#[test]
fn native_scroll_is_adopted_only_while_idle() {
    let mut smooth = SmoothScroll::new(0.0, 1000.0);
    smooth.sync(400.0);
    assert_eq!(smooth.position(), 400.0);
    assert_eq!(smooth.target(), 400.0);

    smooth.wheel(100.0);
    smooth.sync(0.0);
    assert_eq!(smooth.target(), 500.0);

    smooth.tick(10.0);
    smooth.sync(5000.0);
    assert_eq!(smooth.position(), 1000.0);
}

#[test]
fn zero_wheel_delta_leaves_native_scroll_alone() {
    let mut smooth = SmoothScroll::new(100.0, 1000.0);
    smooth.wheel(0.0);
    assert!(!smooth.is_animating());

    // a scrollbar drag right after is adopted, not overridden
    smooth.sync(500.0);
    assert_eq!(smooth.tick(0.016), None);
    assert_eq!(smooth.position(), 500.0);
}

#[test]
fn wheel_against_the_edge_does_not_start_an_animation() {
    let mut smooth = SmoothScroll::new(0.0, 1000.0);
    smooth.wheel(-120.0);
    assert!(!smooth.is_animating());
    smooth.sync(300.0);
    assert_eq!(smooth.position(), 300.0);
}

#[test]
fn raised_limit_lets_the_wheel_go_further() {
    let mut smooth = SmoothScroll::new(0.0, 500.0);
    smooth.wheel(800.0);
    assert_eq!(smooth.target(), 500.0);
    smooth.tick(10.0);

    // page grew after load
    smooth.set_limit(2000.0);
    smooth.wheel(800.0);
    assert_eq!(smooth.target(), 1300.0);
    assert!(smooth.is_animating());
}

#[test]
fn measured_box_loses_the_elements_own_transform() {
    let mut store = PropStore::new();
    // layout box: top 1000, height 200; rendered 50px lower at 95% scale
    store.set(0, Prop::Y, 50.0);
    store.set(0, Prop::Scale, 0.95);
    let measured = bounds(1055.0, 190.0);
    let layout = measured.without_transform(&store, 0);
    assert!((layout.top - 1000.0).abs() < 1e-3, "top {}", layout.top);
    assert!((layout.height - 200.0).abs() < 1e-3);

    store.set(1, Prop::YPercent, -25.0);
    let layout = bounds(900.0, 400.0).without_transform(&store, 1);
    assert!((layout.top - 1000.0).abs() < 1e-3);

    // untouched elements measure as they are
    assert_eq!(bounds(10.0, 20.0).without_transform(&store, 7), bounds(10.0, 20.0));
}

#[test]
fn hidden_reveal_refreshed_mid_animation_keeps_its_trigger() {
    let mut store = PropStore::new();
    let mut engine = ScrollEngine::new();
    engine.add_reveal(0, RevealVariant::Rise, &mut store);
    // rendered 50px below its layout top while hidden
    engine.refresh(|id| Some(bounds(730.0, 100.0).without_transform(&store, id)));
    // layout top 680 = 0.85 * 800: in view at scroll 0
    engine.update(at(0.0), 5.0, &mut store);
    assert_eq!(store.get(0, Prop::Opacity), 1.0);
}
