//! Platform-agnostic per-step input state.
//!
//! Hosts fill an [`InputSnapshot`] from whatever window system they use and
//! hand it to [`CameraController::step`](crate::controller::CameraController::step)
//! once per simulation step. Screen coordinates are y-up with the origin at
//! the bottom-left, in physical pixels.

use std::collections::HashSet;

use glam::Vec2;

/// Lifecycle phase of a touch point within the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The finger touched the screen this step.
    Began,
    /// The finger moved since the last step.
    Moved,
    /// The finger is down but has not moved.
    Stationary,
    /// The finger lifted this step.
    Ended,
    /// The system cancelled the touch (e.g. an interrupting dialog).
    Cancelled,
}

impl TouchPhase {
    /// Whether the touch finished this step (ended or cancelled).
    #[must_use]
    pub fn finished(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One touch point in the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Current position in screen coordinates.
    pub position: Vec2,
    /// Movement since the last step.
    pub delta: Vec2,
    /// Phase within the current step.
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Position at the previous step.
    #[must_use]
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Began,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

/// Mouse state for one step: cursor position, scroll delta, and per-button
/// held / just-pressed / just-released flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MouseState {
    /// Cursor position in screen coordinates.
    pub position: Vec2,
    /// Scroll wheel movement this step (positive = away from the user).
    pub scroll_delta: f32,
    held: [bool; 3],
    pressed: [bool; 3],
    released: [bool; 3],
}

impl MouseState {
    /// Empty state: no buttons, no scroll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the button is currently held down.
    #[must_use]
    pub fn held(&self, button: MouseButton) -> bool {
        self.held[button.index()]
    }

    /// Whether the button went down this step.
    #[must_use]
    pub fn pressed(&self, button: MouseButton) -> bool {
        self.pressed[button.index()]
    }

    /// Whether the button went up this step.
    #[must_use]
    pub fn released(&self, button: MouseButton) -> bool {
        self.released[button.index()]
    }

    /// Record a button press (sets both the transient and held flags).
    pub fn press(&mut self, button: MouseButton) {
        self.pressed[button.index()] = true;
        self.held[button.index()] = true;
    }

    /// Record a button release.
    pub fn release(&mut self, button: MouseButton) {
        self.released[button.index()] = true;
        self.held[button.index()] = false;
    }

    /// Clear the per-step transients (press/release edges and scroll).
    /// Hosts call this after each step; held state persists.
    pub fn clear_transient(&mut self) {
        self.pressed = [false; 3];
        self.released = [false; 3];
        self.scroll_delta = 0.0;
    }
}

/// Held-key state for one step.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyW"`,
/// `"ArrowLeft"`, `"Equal"`, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    /// Empty state: no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down.
    pub fn press(&mut self, key: &str) {
        let _ = self.held.insert(key.to_owned());
    }

    /// Record a key going up.
    pub fn release(&mut self, key: &str) {
        let _ = self.held.remove(key);
    }

    /// Whether a key is currently held.
    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}

/// Everything the controller consumes in one simulation step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Active touch points, in a stable order.
    pub touches: Vec<TouchPoint>,
    /// Mouse state.
    pub mouse: MouseState,
    /// Keyboard state.
    pub keys: KeyState,
}

impl InputSnapshot {
    /// An empty snapshot (no input this step).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
