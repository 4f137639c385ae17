use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use super::pose::CameraPose;

/// Inclination cutoff (radians) keeping `phi` away from the poles, where
/// the look-at up vector would flip.
pub const POLE_CUTOFF: f32 = 0.01;

/// Orbital camera state in spherical coordinates around a focus point.
///
/// The camera sits at `focus + radius * (cosθ·cosφ, sinφ, -sinθ·cosφ)` and
/// always looks at the focus. `theta` is the azimuth (unclamped, full
/// revolution); `phi` is the inclination, clamped to
/// `(-π/2 + ε, π/2 - ε)` so the orientation never flips at the poles.
///
/// Each mutating operation is guarded by its category enable flag and is a
/// silent no-op when disabled.
#[derive(Debug, Clone)]
pub struct CameraRig {
    focus: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    min_radius: f32,
    max_radius: f32,
    zoom_enabled: bool,
    pan_enabled: bool,
    rotation_enabled: bool,
}

impl CameraRig {
    /// Create a rig at the given focus and orbit radius.
    ///
    /// The radius is clamped into `[min_radius, max_radius]` immediately.
    #[must_use]
    pub fn new(focus: Vec3, radius: f32, min_radius: f32, max_radius: f32) -> Self {
        Self {
            focus,
            radius: radius.clamp(min_radius, max_radius),
            theta: 0.0,
            phi: 0.0,
            min_radius,
            max_radius,
            zoom_enabled: true,
            pan_enabled: true,
            rotation_enabled: true,
        }
    }

    /// Create a rig from an existing camera world position.
    ///
    /// Derives radius, theta, and phi from the focus→camera vector. A
    /// degenerate planar projection (zero-length, producing NaN from the
    /// inverse trig) yields a zero angle rather than propagating.
    #[must_use]
    pub fn from_camera_position(
        focus: Vec3,
        camera_position: Vec3,
        min_radius: f32,
        max_radius: f32,
    ) -> Self {
        let to_camera = camera_position - focus;
        let radius = to_camera.length();

        let phi = (to_camera.y / Vec2::new(to_camera.y, to_camera.z).length()).asin();
        let theta = (-to_camera.z / Vec2::new(to_camera.x, to_camera.z).length()).asin();

        let mut rig = Self::new(focus, radius, min_radius, max_radius);
        rig.theta = if theta.is_nan() { 0.0 } else { theta };
        rig.phi = clamp_phi(if phi.is_nan() { 0.0 } else { phi });
        rig
    }

    /// The focus point the camera orbits and looks at.
    #[must_use]
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Distance from focus to camera.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Azimuth angle in radians.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Inclination angle in radians.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Minimum orbit radius.
    #[must_use]
    pub fn min_radius(&self) -> f32 {
        self.min_radius
    }

    /// Maximum orbit radius.
    #[must_use]
    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Enable or disable zoom operations.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.zoom_enabled = enabled;
    }

    /// Enable or disable pan operations.
    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.pan_enabled = enabled;
    }

    /// Enable or disable rotation operations.
    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        self.rotation_enabled = enabled;
    }

    /// Whether zoom operations are enabled.
    #[must_use]
    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Whether pan operations are enabled.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.pan_enabled
    }

    /// Whether rotation operations are enabled.
    #[must_use]
    pub fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    /// Zoom by a signed distance along the orbit direction.
    pub fn zoom_by(&mut self, amount: f32) {
        self.zoom_to(self.radius + amount);
    }

    /// Zoom to the given distance from the focus, clamped to
    /// `[min_radius, max_radius]`. No-op when zoom is disabled.
    pub fn zoom_to(&mut self, distance: f32) {
        if !self.zoom_enabled {
            return;
        }
        self.radius = distance.clamp(self.min_radius, self.max_radius);
    }

    /// Translate the focus by the given amount.
    pub fn move_by(&mut self, amount: Vec3) {
        self.move_to(self.focus + amount);
    }

    /// Move the focus to the given position. No-op when pan is disabled.
    pub fn move_to(&mut self, position: Vec3) {
        if !self.pan_enabled {
            return;
        }
        self.focus = position;
    }

    /// Rotate the inclination by the given angle in radians.
    pub fn rotate_phi_by(&mut self, angle: f32) {
        self.rotate_phi_to(self.phi + angle);
    }

    /// Set the inclination, clamped away from the poles to avoid the
    /// look-at up vector flipping. No-op when rotation is disabled.
    pub fn rotate_phi_to(&mut self, angle: f32) {
        if !self.rotation_enabled {
            return;
        }
        self.phi = clamp_phi(angle);
    }

    /// Rotate the azimuth by the given angle in radians.
    pub fn rotate_theta_by(&mut self, angle: f32) {
        self.rotate_theta_to(self.theta + angle);
    }

    /// Set the azimuth. Unclamped — full revolutions are fine. No-op when
    /// rotation is disabled.
    pub fn rotate_theta_to(&mut self, angle: f32) {
        if !self.rotation_enabled {
            return;
        }
        self.theta = angle;
    }

    /// Camera world position for the current spherical coordinates.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (st, ct) = self.theta.sin_cos();
        let (sp, cp) = self.phi.sin_cos();
        self.focus + self.radius * Vec3::new(ct * cp, sp, -st * cp)
    }

    /// Camera pose: eye position, look-at target (the focus), and up.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.position(),
            target: self.focus,
            up: Vec3::Y,
        }
    }
}

/// Clamp an inclination angle into `[-π/2 + ε, π/2 - ε]`.
fn clamp_phi(angle: f32) -> f32 {
    angle.clamp(-FRAC_PI_2 + POLE_CUTOFF, FRAC_PI_2 - POLE_CUTOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(Vec3::ZERO, 10.0, 2.0, 200.0)
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut r = rig();
        for amount in [-500.0, -1.0, 0.0, 3.5, 1_000.0, f32::MAX] {
            r.zoom_by(amount);
            assert!(r.radius() >= 2.0 && r.radius() <= 200.0);
        }
    }

    #[test]
    fn zoom_far_below_minimum_clamps_to_minimum() {
        let mut r = rig();
        r.zoom_by(-500.0);
        assert_eq!(r.radius(), 2.0);
    }

    #[test]
    fn phi_clamps_below_pole() {
        let mut r = rig();
        r.rotate_phi_by(10.0);
        assert!((r.phi() - (FRAC_PI_2 - POLE_CUTOFF)).abs() < 1e-6);

        r.rotate_phi_to(-8.0);
        assert!((r.phi() - (-FRAC_PI_2 + POLE_CUTOFF)).abs() < 1e-6);
    }

    #[test]
    fn theta_is_unclamped_and_round_trips() {
        let mut r = rig();
        r.rotate_theta_by(7.5);
        r.rotate_theta_by(-7.5);
        assert!(r.theta().abs() < 1e-6);

        r.rotate_theta_to(12.0);
        assert_eq!(r.theta(), 12.0);
    }

    #[test]
    fn disabled_operations_are_no_ops() {
        let mut r = rig();
        r.set_zoom_enabled(false);
        r.set_pan_enabled(false);
        r.set_rotation_enabled(false);

        r.zoom_by(50.0);
        r.move_by(Vec3::splat(3.0));
        r.rotate_theta_by(1.0);
        r.rotate_phi_by(1.0);

        assert_eq!(r.radius(), 10.0);
        assert_eq!(r.focus(), Vec3::ZERO);
        assert_eq!(r.theta(), 0.0);
        assert_eq!(r.phi(), 0.0);
    }

    #[test]
    fn position_at_origin_angles() {
        let r = rig();
        // theta = phi = 0 puts the camera on +X at the orbit radius.
        let pos = r.position();
        assert!((pos - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn position_is_continuous_in_angles_and_radius() {
        let mut r = rig();
        r.rotate_theta_to(0.7);
        r.rotate_phi_to(0.3);
        let base = r.position();

        let eps = 1e-3;
        let mut nudged = r.clone();
        nudged.rotate_theta_by(eps);
        assert!((nudged.position() - base).length() < 10.0 * 2.0 * eps);

        let mut nudged = r.clone();
        nudged.rotate_phi_by(eps);
        assert!((nudged.position() - base).length() < 10.0 * 2.0 * eps);

        let mut nudged = r.clone();
        nudged.zoom_by(eps);
        assert!((nudged.position() - base).length() < 2.0 * eps);
    }

    #[test]
    fn init_from_camera_position_recovers_angles() {
        // Camera straight along +X: theta = 0, phi = 0.
        let r = CameraRig::from_camera_position(
            Vec3::ZERO,
            Vec3::new(50.0, 0.0, 0.0),
            2.0,
            200.0,
        );
        assert!((r.radius() - 50.0).abs() < 1e-4);
        assert!(r.theta().abs() < 1e-5);
        assert!(r.phi().abs() < 1e-5);
        assert!((r.position() - Vec3::new(50.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn degenerate_init_vector_yields_zero_angles() {
        // Camera straight above the focus: the theta projection is
        // zero-length and the inverse trig would produce NaN.
        let r = CameraRig::from_camera_position(
            Vec3::ZERO,
            Vec3::new(0.0, 30.0, 0.0),
            2.0,
            200.0,
        );
        assert!(!r.theta().is_nan());
        assert_eq!(r.theta(), 0.0);
        assert!(!r.phi().is_nan());
    }

    #[test]
    fn pose_looks_at_focus() {
        let mut r = rig();
        r.move_to(Vec3::new(3.0, 1.0, -2.0));
        let pose = r.pose();
        assert_eq!(pose.target, Vec3::new(3.0, 1.0, -2.0));
        assert!((pose.eye - pose.target).length() > 0.0);
        assert_eq!(pose.up, Vec3::Y);
    }
}
