use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

/// Touch gesture bound to the zoom category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TouchZoomBinding {
    /// Touch does not zoom.
    Disabled,
    /// Distance change between two fingers.
    #[default]
    TwoFingerPinch,
    /// Vertical one-finger drag.
    OneFingerDrag,
    /// Vertical two-finger drag.
    TwoFingerDrag,
    /// Vertical three-finger drag.
    ThreeFingerDrag,
}

/// Touch gesture bound to the pan or rotate category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TouchDragBinding {
    /// Touch does not drive this category.
    #[default]
    Disabled,
    /// One-finger drag.
    OneFingerDrag,
    /// Two-finger drag (tracked at the midpoint).
    TwoFingerDrag,
    /// Three-finger drag (tracked at the first touch).
    ThreeFingerDrag,
}

/// Mouse input bound to the zoom category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseZoomBinding {
    /// Mouse does not zoom.
    Disabled,
    /// Scroll wheel, proportional to the current radius.
    #[default]
    Scroll,
    /// Vertical drag with the left button held.
    LeftButtonDrag,
    /// Vertical drag with the right button held.
    RightButtonDrag,
    /// Vertical drag with the middle button held.
    MiddleButtonDrag,
}

impl MouseZoomBinding {
    /// The drag button, if this binding is a button drag.
    #[must_use]
    pub fn button(self) -> Option<MouseButton> {
        match self {
            Self::Disabled | Self::Scroll => None,
            Self::LeftButtonDrag => Some(MouseButton::Left),
            Self::RightButtonDrag => Some(MouseButton::Right),
            Self::MiddleButtonDrag => Some(MouseButton::Middle),
        }
    }
}

/// Mouse button drag bound to the pan or rotate category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseDragBinding {
    /// Mouse does not drive this category.
    #[default]
    Disabled,
    /// Drag with the left button held.
    LeftButtonDrag,
    /// Drag with the right button held.
    RightButtonDrag,
    /// Drag with the middle button held.
    MiddleButtonDrag,
}

impl MouseDragBinding {
    /// The drag button, if bound.
    #[must_use]
    pub fn button(self) -> Option<MouseButton> {
        match self {
            Self::Disabled => None,
            Self::LeftButtonDrag => Some(MouseButton::Left),
            Self::RightButtonDrag => Some(MouseButton::Right),
            Self::MiddleButtonDrag => Some(MouseButton::Middle),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Touch", inline)]
#[serde(default)]
/// Touch device configuration.
pub struct TouchOptions {
    /// Whether touch input drives the camera at all.
    pub enabled: bool,
    /// Gesture bound to zoom.
    pub zoom: TouchZoomBinding,
    /// Gesture bound to pan.
    pub pan: TouchDragBinding,
    /// Gesture bound to rotate.
    pub rotate: TouchDragBinding,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            zoom: TouchZoomBinding::TwoFingerPinch,
            pan: TouchDragBinding::TwoFingerDrag,
            rotate: TouchDragBinding::OneFingerDrag,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Mouse", inline)]
#[serde(default)]
/// Mouse device configuration.
pub struct MouseOptions {
    /// Whether mouse input drives the camera at all.
    pub enabled: bool,
    /// Input bound to zoom.
    pub zoom: MouseZoomBinding,
    /// Button drag bound to pan.
    pub pan: MouseDragBinding,
    /// Button drag bound to rotate.
    pub rotate: MouseDragBinding,
}

impl Default for MouseOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            zoom: MouseZoomBinding::Scroll,
            pan: MouseDragBinding::MiddleButtonDrag,
            rotate: MouseDragBinding::LeftButtonDrag,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Keyboard", inline)]
#[serde(default)]
/// Keyboard device configuration.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyW"`,
/// `"ArrowLeft"`, `"Equal"`, etc.
pub struct KeyboardOptions {
    /// Whether keyboard input drives the camera at all.
    pub enabled: bool,
    /// Key held to zoom in.
    pub zoom_in: String,
    /// Key held to zoom out.
    pub zoom_out: String,
    /// Key held to pan forward along the movement plane.
    pub pan_forward: String,
    /// Key held to pan backward along the movement plane.
    pub pan_backward: String,
    /// Key held to pan left along the movement plane.
    pub pan_left: String,
    /// Key held to pan right along the movement plane.
    pub pan_right: String,
    /// Key held to rotate the azimuth left.
    pub rotate_left: String,
    /// Key held to rotate the azimuth right.
    pub rotate_right: String,
    /// Key held to rotate the inclination up.
    pub rotate_up: String,
    /// Key held to rotate the inclination down.
    pub rotate_down: String,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            zoom_in: "Equal".into(),
            zoom_out: "Minus".into(),
            pan_forward: "KeyW".into(),
            pan_backward: "KeyS".into(),
            pan_left: "KeyA".into(),
            pan_right: "KeyD".into(),
            rotate_left: "ArrowLeft".into(),
            rotate_right: "ArrowRight".into(),
            rotate_up: "ArrowUp".into(),
            rotate_down: "ArrowDown".into(),
        }
    }
}
