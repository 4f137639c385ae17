//! Spherical camera rig: coordinate transform, pose output, and the
//! movement plane used to convert pointer drags into pan translations.

/// Orbital camera state and the spherical-to-Cartesian transform.
pub mod core;
/// Movement plane, plane modes, and the debug grid overlay.
pub mod plane;
/// Camera pose, projection, viewport, and screen-ray unprojection.
pub mod pose;

pub use self::core::CameraRig;
pub use plane::{GridFrame, GridOverlay, MovementPlane, MovementPlaneMode};
pub use pose::{screen_to_ray, CameraPose, Projection, Ray, Viewport};
