use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::pose::Ray;

/// How the movement plane behaves as the camera rotates.
///
/// `Static` keeps the configured plane normal. `Dynamic` re-orients the
/// normal to track camera rotation, so drags always pan parallel to the
/// screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MovementPlaneMode {
    /// The plane normal stays as configured.
    #[default]
    Static,
    /// The plane normal rotates with the camera.
    Dynamic,
}

/// The focus-centered plane that converts 2D pointer drags into 3D pan
/// translations.
///
/// The plane always passes through the rig focus; only the normal is stored
/// here. In dynamic mode the effective normal is re-derived from the
/// camera's current angles relative to the angles captured when the rig was
/// initialized.
#[derive(Debug, Clone)]
pub struct MovementPlane {
    base_normal: Vec3,
    normal: Vec3,
    mode: MovementPlaneMode,
    /// Azimuth reference captured at rig initialization.
    theta_reference: f32,
    /// Inclination reference captured at rig initialization.
    phi_reference: f32,
}

impl MovementPlane {
    /// Create a plane with the given base normal and mode.
    #[must_use]
    pub fn new(normal: Vec3, mode: MovementPlaneMode) -> Self {
        let base_normal = normal.normalize_or(Vec3::Y);
        Self {
            base_normal,
            normal: base_normal,
            mode,
            theta_reference: FRAC_PI_2,
            phi_reference: 0.0,
        }
    }

    /// Capture the rig's initial angles as the reference orientation for
    /// dynamic re-orientation.
    pub fn set_reference(&mut self, theta: f32, phi: f32) {
        self.theta_reference = FRAC_PI_2 - theta;
        self.phi_reference = -phi;
    }

    /// Current effective plane normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// The configured base normal.
    #[must_use]
    pub fn base_normal(&self) -> Vec3 {
        self.base_normal
    }

    /// The configured mode.
    #[must_use]
    pub fn mode(&self) -> MovementPlaneMode {
        self.mode
    }

    /// Re-derive the effective normal for the camera's current angles.
    ///
    /// Static mode snaps back to the base normal. Dynamic mode yaws about
    /// +Y by the azimuth offset after rolling about +Z by the inclination
    /// offset. The composition is tuned for feel, not derived.
    pub fn sync(&mut self, theta: f32, phi: f32) {
        match self.mode {
            MovementPlaneMode::Static => self.normal = self.base_normal,
            MovementPlaneMode::Dynamic => {
                let yaw = Quat::from_rotation_y(theta + self.theta_reference);
                let roll = Quat::from_rotation_z(phi + self.phi_reference);
                self.normal = yaw * (roll * self.base_normal);
            }
        }
    }

    /// Intersect a ray with the plane through `focus`.
    ///
    /// Returns `None` only when the ray is parallel to the plane. Hits
    /// behind the ray origin are still returned so a pointer dragged past
    /// the horizon keeps producing pan translations.
    #[must_use]
    pub fn intersect(&self, focus: Vec3, ray: &Ray) -> Option<Vec3> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (focus - ray.origin).dot(self.normal) / denom;
        Some(ray.point_at(t))
    }

    /// Orthonormal in-plane basis `(right, up)` for the current normal.
    ///
    /// `up_hint` disambiguates the roll, the way a look-at does: world +Y
    /// for a static plane, the camera up for a dynamic one.
    #[must_use]
    pub fn basis(&self, up_hint: Vec3) -> (Vec3, Vec3) {
        let forward = self.normal;
        let right = up_hint.cross(forward).normalize_or(Vec3::X);
        let up = forward.cross(right);
        (right, up)
    }
}

/// Bookkeeping for the optional debug grid overlay.
///
/// Side-effect-only: the overlay accumulates pan offsets and a
/// radius-driven scale so a renderer can draw a focus-centered grid, but
/// nothing here is read back into the camera transform.
#[derive(Debug, Clone)]
pub struct GridOverlay {
    multiplier: f32,
    pan: Vec2,
}

/// A snapshot of the grid overlay for one step, ready for a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    /// Grid origin (the rig focus).
    pub origin: Vec3,
    /// In-plane right axis.
    pub right: Vec3,
    /// In-plane up axis.
    pub up: Vec3,
    /// Plane normal.
    pub normal: Vec3,
    /// Accumulated pan offset in plane coordinates.
    pub pan: Vec2,
    /// Grid extent along each axis, in world units.
    pub extent: f32,
    /// Spacing between grid lines, in world units.
    pub step: f32,
}

impl GridOverlay {
    /// Create an overlay whose scale starts at the minimum orbit radius.
    #[must_use]
    pub fn new(min_radius: f32) -> Self {
        Self {
            multiplier: min_radius,
            pan: Vec2::ZERO,
        }
    }

    /// Accumulate a world-space pan translation into plane coordinates.
    ///
    /// The angle-offset projection is tuned against the grid shader, not a
    /// plain dot-product decomposition.
    pub fn accumulate_pan(&mut self, translation: Vec3, right: Vec3, up: Vec3) {
        let length = translation.length();
        if length <= f32::EPSILON {
            return;
        }
        let direction = translation / length;
        let angle_right = right.dot(direction) - FRAC_PI_2;
        let angle_up = up.dot(direction) - FRAC_PI_2;
        self.pan.x -= length * angle_right.cos();
        self.pan.y -= length * angle_up.cos();
    }

    /// Step the grid scale toward the current radius with ×5 hysteresis,
    /// floored at the minimum radius.
    pub fn update_scale(&mut self, radius: f32, min_radius: f32) {
        if radius > 5.0 * self.multiplier {
            self.multiplier *= 5.0;
        }
        if radius < self.multiplier / 5.0 {
            self.multiplier /= 5.0;
        }
        if self.multiplier <= min_radius {
            self.multiplier = min_radius;
        }
    }

    /// Build the per-step frame for a renderer.
    #[must_use]
    pub fn frame(&self, focus: Vec3, plane: &MovementPlane, up_hint: Vec3, min_radius: f32) -> GridFrame {
        let (right, up) = plane.basis(up_hint);
        let extent = self.multiplier * min_radius;
        GridFrame {
            origin: focus,
            right,
            up,
            normal: plane.normal(),
            pan: self.pan,
            extent,
            step: extent / 10.0,
        }
    }
}
