use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rig::MovementPlaneMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rig", inline)]
#[serde(default)]
/// Orbit geometry, projection, and movement-plane parameters.
pub struct RigOptions {
    /// Minimum orbit radius in world units.
    #[schemars(title = "Minimum Radius", range(min = 0.01))]
    pub min_radius: f32,
    /// Maximum orbit radius in world units.
    #[schemars(title = "Maximum Radius", range(min = 0.01))]
    pub max_radius: f32,
    /// Initial focus position.
    #[schemars(skip)]
    pub initial_focus: [f32; 3],
    /// Normal of the movement plane through the focus.
    #[schemars(skip)]
    pub movement_plane_normal: [f32; 3],
    /// Whether the movement plane stays fixed or rotates with the camera.
    #[schemars(title = "Movement Plane Mode")]
    pub movement_plane_mode: MovementPlaneMode,
    /// Whether to emit the debug grid overlay frame each step.
    #[schemars(title = "Visualize Movement Plane")]
    pub visualize_movement_plane: bool,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            min_radius: 2.0,
            max_radius: 200.0,
            initial_focus: [0.0; 3],
            movement_plane_normal: [0.0, 1.0, 0.0],
            movement_plane_mode: MovementPlaneMode::Static,
            visualize_movement_plane: false,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
