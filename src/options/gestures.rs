use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Per-category enable flags and speed multipliers.
///
/// Drag and rotation multipliers apply per pixel of pointer movement;
/// keyboard rates apply per second of held key.
pub struct GestureOptions {
    /// Whether zoom operations are enabled.
    #[schemars(title = "Zoom Enabled")]
    pub zoom_enabled: bool,
    /// Whether pan operations are enabled.
    #[schemars(title = "Pan Enabled")]
    pub pan_enabled: bool,
    /// Whether rotation operations are enabled.
    #[schemars(title = "Rotation Enabled")]
    pub rotation_enabled: bool,
    /// Zoom per pixel of pinch distance change, scaled by the current
    /// radius.
    #[schemars(title = "Pinch Zoom Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub pinch_zoom_speed: f32,
    /// Zoom per scroll line, scaled by the current radius.
    #[schemars(title = "Scroll Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub scroll_zoom_speed: f32,
    /// Zoom per pixel of vertical drag.
    #[schemars(title = "Drag Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub drag_zoom_speed: f32,
    /// Rotation in radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Keyboard zoom rate: fraction of the current radius per second.
    #[schemars(title = "Keyboard Zoom Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub keyboard_zoom_speed: f32,
    /// Keyboard pan rate: fraction of the current radius per second.
    #[schemars(title = "Keyboard Pan Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub keyboard_pan_speed: f32,
    /// Keyboard rotation rate in radians per second.
    #[schemars(title = "Keyboard Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub keyboard_rotate_speed: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            zoom_enabled: true,
            pan_enabled: true,
            rotation_enabled: true,
            pinch_zoom_speed: 0.01,
            scroll_zoom_speed: 0.1,
            drag_zoom_speed: 0.1,
            rotate_speed: 0.01,
            keyboard_zoom_speed: 5.0,
            keyboard_pan_speed: 2.5,
            keyboard_rotate_speed: 0.5,
        }
    }
}
