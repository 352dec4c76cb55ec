// Scene and animation tuning constants shared by the web frontend.
//
// Everything here is plain data so the host-side tests can include this file
// directly and check the relationships between values.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_RADIUS_MIN: f32 = 3.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 12.0;
pub const PARTICLE_Z_OFFSET: f32 = -8.0; // field centre sits behind the origin
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.5;
pub const PARTICLE_ACCENT_THRESHOLD: f32 = 0.75; // U > threshold picks the accent colour

// Palette (sRGB floats)
pub const GOLD: [f32; 3] = [0.831, 0.686, 0.216]; // #D4AF37
pub const OFF_WHITE: [f32; 3] = [0.961, 0.961, 0.941]; // #F5F5F0
pub const BACKGROUND: [f32; 3] = [0.0196, 0.0196, 0.0196]; // #050505

// Rings
pub const RING_COUNT: usize = 3;
pub const RING_INNER_RADIUS: f32 = 0.5;
pub const RING_OUTER_RADIUS: f32 = 0.52;
pub const RING_SEGMENTS: u32 = 32;
pub const RING_BASE_Z: f32 = -8.0;
pub const RING_Z_STEP: f32 = 3.0;
pub const RING_SCALE_STEP: f32 = 0.8;
pub const RING_BASE_OPACITY: f32 = 0.06;
pub const RING_OPACITY_STEP: f32 = 0.015;
pub const RING_SPIN_RATE: f32 = 0.05;

// Fog (linear, applied to rings)
pub const FOG_NEAR: f32 = 1.0;
pub const FOG_FAR: f32 = 18.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_SWAY_X: f32 = 0.4;
pub const CAMERA_SWAY_Y: f32 = 0.25;
pub const CAMERA_FOLLOW: f32 = 0.015;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Per-frame motion
pub const CLOCK_STEP: f32 = 0.005;
pub const PARTICLE_FLOAT_INTENSITY: f32 = 1.0;
pub const POINTER_SMOOTHING: f32 = 0.04;
pub const GLOW_SMOOTHING: f32 = 0.08;
pub const FIELD_SPIN_Y: f32 = 0.03;
pub const FIELD_WOBBLE_RATE: f32 = 0.08;
pub const FIELD_WOBBLE_AMPLITUDE: f32 = 0.08;

// Scroll triggers (fractions of viewport height)
pub const REVEAL_TRIGGER: f64 = 0.85;
pub const STAGGER_TRIGGER: f64 = 0.80;
pub const REVEAL_DISTANCE: f32 = 50.0;
pub const REVEAL_SCALE_FROM: f32 = 0.95;
pub const REVEAL_DURATION: f32 = 1.0;
pub const REVEAL_FADE_DURATION: f32 = 1.2;
pub const STAGGER_DISTANCE: f32 = 60.0;
pub const STAGGER_DURATION: f32 = 0.8;
pub const STAGGER_EACH: f32 = 0.15;
pub const PARALLAX_Y_PERCENT: f32 = -25.0;
pub const PARALLAX_SCRUB_SEC: f32 = 1.5;

// Hero
pub const HERO_DELAY: f32 = 0.2;
pub const HERO_RISE_PX: f32 = 40.0;
pub const HERO_BANNER_SCALE_FROM: f32 = 1.08;
pub const HERO_WORD_STAGGER: f32 = 0.15;
pub const HERO_SCRUB_SEC: f32 = 1.0;
pub const SCROLL_LINE_PERIOD: f32 = 1.5;
pub const SCROLL_LINE_MIN_SCALE: f32 = 0.5;

// Magnetic buttons
pub const MAGNET_PULL: f32 = 0.25;
pub const MAGNET_FOLLOW_SEC: f32 = 0.3;
pub const MAGNET_RELEASE_SEC: f32 = 0.5;

// Page transitions
pub const TRANSITION_SEC: f32 = 0.6;
pub const TRANSITION_REVEAL_DELAY: f32 = 0.1;

// Smooth scroll
pub const SMOOTH_SCROLL_SEC: f32 = 1.2;
pub const WHEEL_MULTIPLIER: f64 = 1.0;

// Preloader
pub const FIRST_LOAD_KEY: &str = "visited";
pub const FIRST_LOAD_VALUE: &str = "true";
pub const LOADING_TEXTS: [&str; 4] = ["Descending...", "Awakening...", "Unearthing...", "Enter..."];
pub const LOADING_BAR_STOPS: [f32; 4] = [25.0, 50.0, 80.0, 100.0];
