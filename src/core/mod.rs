pub mod clock;
pub mod constants;
pub mod easing;
pub mod hero;
pub mod magnetic;
pub mod nav;
pub mod pointer;
pub mod preloader;
pub mod scene;
pub mod scroll;
pub mod smooth_scroll;
pub mod timeline;
pub mod transition;

pub use constants::*;
pub use easing::Ease;
pub use timeline::{Cue, Prop, PropStore, TargetId, Timeline, TimelinePlayer};

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static RINGS_WGSL: &str = include_str!("../../shaders/rings.wgsl");
