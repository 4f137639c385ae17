//! Input snapshot types and device adapters.
//!
//! [`InputSnapshot`] is the platform-agnostic state a host fills each step;
//! the `touch`, `mouse`, and `keyboard` submodules translate it into
//! controller gesture events according to the configured bindings.

mod event;
pub(crate) mod keyboard;
pub(crate) mod mouse;
pub(crate) mod touch;

pub use event::{
    InputSnapshot, KeyState, MouseButton, MouseState, TouchPhase, TouchPoint,
};
