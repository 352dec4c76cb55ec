pub mod keyboard;
pub mod lifecycle;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use lifecycle::{wire_lifecycle_handlers, wire_smooth_wheel};
pub use pointer::{wire_magnetic_buttons, wire_pointer_handlers, PointerWiring};
