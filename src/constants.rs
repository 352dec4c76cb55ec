// DOM contract between the page markup and the effects.
//
// Every effect looks its elements up through these selectors and quietly
// stays off when they match nothing.

// Background scene
pub const CANVAS_ID: &str = "three-canvas";

// Cursor
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const CURSOR_GLOW_SELECTOR: &str = ".cursor-glow";
pub const CURSOR_HOVER_SELECTOR: &str = "a, button, .card, .bento-cell, .nav-link";
pub const CURSOR_HOVER_CLASS: &str = "hover";

// Preloader
pub const PRELOADER_SELECTOR: &str = ".preloader";
pub const PRELOADER_LOGO_SELECTOR: &str = ".preloader-logo";
pub const PRELOADER_TEXT_SELECTOR: &str = ".preloader-text";
pub const PRELOADER_BAR_SELECTOR: &str = ".preloader-bar-fill";

// Scroll reveals
pub const PARALLAX_SELECTOR: &str = ".parallax-text";
pub const STAGGER_GROUP_SELECTOR: &str = ".cards-stagger";
pub const STAGGER_CARD_SELECTOR: &str = ".card";

// Hero
pub const HERO_SECTION_SELECTOR: &str = ".hero";
pub const HERO_EYEBROW_SELECTOR: &str = ".hero-eyebrow";
pub const HERO_BANNER_SELECTOR: &str = ".hero-banner";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const HERO_TITLE_WORD_SELECTOR: &str = "span";
pub const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle";
pub const HERO_CTA_SELECTOR: &str = ".hero-cta";
pub const SCROLL_INDICATOR_SELECTOR: &str = ".scroll-indicator";
pub const SCROLL_LINE_SELECTOR: &str = ".scroll-line";

// Magnetic buttons and page transitions
pub const MAGNETIC_SELECTOR: &str = ".btn-magnetic";
pub const TRANSITION_SELECTOR: &str = ".page-transition";
pub const PAGE_LINK_SELECTOR: &str = "a[href$=\".html\"]";

// Navigation, attribute flavour
pub const NAV_TOGGLE_SELECTOR: &str = "[data-nav-toggle]";
pub const NAV_MENU_SELECTOR: &str = ".nav-links";
pub const NAV_MENU_LINK_SELECTOR: &str = ".nav-links a";
pub const NAV_OPEN_ATTR: &str = "data-nav-open";
pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";

// Navigation, class flavour
pub const MOBILE_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const MOBILE_MENU_SELECTOR: &str = ".nav-mobile";
pub const MOBILE_MENU_LINK_SELECTOR: &str = ".nav-mobile .nav-link";
pub const ACTIVE_CLASS: &str = "active";

// Wheel delta units (WheelEvent.deltaMode)
pub const WHEEL_LINE_PX: f64 = 16.0;
