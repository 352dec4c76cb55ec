// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_consistent() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_SPAN > 0.0);
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_ACCENT_THRESHOLD > 0.0 && PARTICLE_ACCENT_THRESHOLD < 1.0);

    assert!(RING_OUTER_RADIUS > RING_INNER_RADIUS);
    assert!(RING_BASE_Z < 0.0 && RING_Z_STEP > 0.0);
    assert!(FOG_NEAR < FOG_FAR);

    // the last ring is still visible
    assert!(RING_BASE_OPACITY - RING_OPACITY_STEP * (RING_COUNT - 1) as f32 > 0.0);

    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for f in [POINTER_SMOOTHING, GLOW_SMOOTHING, CAMERA_FOLLOW, MAGNET_PULL] {
        assert!(f > 0.0 && f < 1.0, "{f}");
    }
    // the cursor glow trails the dot but catches up faster than the scene
    assert!(GLOW_SMOOTHING > POINTER_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_triggers_sit_inside_the_viewport() {
    assert!(REVEAL_TRIGGER > 0.0 && REVEAL_TRIGGER <= 1.0);
    assert!(STAGGER_TRIGGER > 0.0 && STAGGER_TRIGGER <= 1.0);
    assert!(REVEAL_SCALE_FROM < 1.0);
    assert!(PARALLAX_Y_PERCENT < 0.0);
    assert!(SCROLL_LINE_MIN_SCALE > 0.0 && SCROLL_LINE_MIN_SCALE < 1.0);
}

#[test]
fn loading_sequence_is_well_formed() {
    assert_eq!(LOADING_TEXTS.len(), LOADING_BAR_STOPS.len());
    assert!(LOADING_BAR_STOPS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(LOADING_BAR_STOPS[LOADING_BAR_STOPS.len() - 1], 100.0);
    assert!(!FIRST_LOAD_KEY.is_empty());
}

#[test]
fn selectors_are_distinct() {
    let selectors = [
        CURSOR_SELECTOR,
        CURSOR_GLOW_SELECTOR,
        PRELOADER_SELECTOR,
        PRELOADER_LOGO_SELECTOR,
        PRELOADER_TEXT_SELECTOR,
        PRELOADER_BAR_SELECTOR,
        PARALLAX_SELECTOR,
        STAGGER_GROUP_SELECTOR,
        HERO_SECTION_SELECTOR,
        HERO_BANNER_SELECTOR,
        HERO_TITLE_SELECTOR,
        SCROLL_INDICATOR_SELECTOR,
        MAGNETIC_SELECTOR,
        TRANSITION_SELECTOR,
        NAV_TOGGLE_SELECTOR,
        NAV_MENU_SELECTOR,
        MOBILE_TOGGLE_SELECTOR,
        MOBILE_MENU_SELECTOR,
    ];
    for (i, a) in selectors.iter().enumerate() {
        for b in &selectors[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(CURSOR_HOVER_SELECTOR.contains(".nav-link"));
    assert!(PAGE_LINK_SELECTOR.contains(".html"));
}

#[test]
fn menu_link_selectors_stay_inside_their_menu() {
    // closing links are looked up under the menu, never page-wide
    assert!(MOBILE_MENU_LINK_SELECTOR.starts_with(&format!("{MOBILE_MENU_SELECTOR} ")));
    assert!(NAV_MENU_LINK_SELECTOR.starts_with(&format!("{NAV_MENU_SELECTOR} ")));
}
