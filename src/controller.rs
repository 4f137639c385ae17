//! Per-step camera orchestration.
//!
//! [`CameraController`] owns the rig, the gesture state machine, the
//! movement plane, options, and the viewport, and exposes the
//! `on_{zoom,pan,rotate}_{start,update,end}` surface the device adapters
//! drive. Everything is single-threaded: one call to [`CameraController::step`]
//! per simulation tick mutates all state synchronously and yields the new
//! camera pose.

use glam::{Mat4, Vec2, Vec3};

use crate::gesture::{GestureAction, GestureState};
use crate::input::{keyboard, mouse, touch, InputSnapshot};
use crate::options::Options;
use crate::rig::{
    screen_to_ray, CameraPose, CameraRig, GridFrame, GridOverlay,
    MovementPlane, MovementPlaneMode, Projection, Viewport,
};

/// Per-step growth of the follow interpolation ramp.
const FOLLOW_RAMP_STEP: f32 = 0.01;

/// Focus easing state while following a target.
#[derive(Debug, Clone)]
struct FollowState {
    target: Vec3,
    /// Interpolation ramp, grows from 0 toward 1 over roughly a second.
    ramp: f32,
}

/// Orbital camera controller driven by touch, mouse, and keyboard.
///
/// Create one per scene, call [`step`](Self::step) once per tick with the
/// current input snapshot and delta time, and read the returned
/// [`CameraPose`].
#[derive(Debug, Clone)]
pub struct CameraController {
    rig: CameraRig,
    gesture: GestureState,
    plane: MovementPlane,
    grid: Option<GridOverlay>,
    options: Options,
    viewport: Viewport,
    projection: Projection,
    follow: Option<FollowState>,
}

impl CameraController {
    /// Create a controller from options, the viewport, and the initial
    /// camera world position.
    ///
    /// The rig's spherical coordinates are derived from the vector between
    /// the configured initial focus and `camera_position`; the movement
    /// plane captures those angles as its reference orientation.
    #[must_use]
    pub fn new(options: Options, viewport: Viewport, camera_position: Vec3) -> Self {
        let focus = Vec3::from_array(options.rig.initial_focus);
        let mut rig = CameraRig::from_camera_position(
            focus,
            camera_position,
            options.rig.min_radius,
            options.rig.max_radius,
        );
        rig.set_zoom_enabled(options.gestures.zoom_enabled);
        rig.set_pan_enabled(options.gestures.pan_enabled);
        rig.set_rotation_enabled(options.gestures.rotation_enabled);

        let mut plane = MovementPlane::new(
            Vec3::from_array(options.rig.movement_plane_normal),
            options.rig.movement_plane_mode,
        );
        plane.set_reference(rig.theta(), rig.phi());
        plane.sync(rig.theta(), rig.phi());

        let grid = options
            .rig
            .visualize_movement_plane
            .then(|| GridOverlay::new(options.rig.min_radius));

        let projection = Projection {
            fovy: options.rig.fovy,
            znear: options.rig.znear,
            zfar: options.rig.zfar,
        };

        Self {
            rig,
            gesture: GestureState::new(),
            plane,
            grid,
            options,
            viewport,
            projection,
            follow: None,
        }
    }

    /// The underlying rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable access to the rig, for hosts that reposition the camera
    /// directly.
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The viewport the rig projects through.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport after a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current camera pose for the rig state.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.rig.pose()
    }

    /// Combined view-projection matrix for the current pose.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix(self.viewport.aspect()) * self.pose().view_matrix()
    }

    /// Show or hide the debug grid overlay.
    pub fn set_grid_visible(&mut self, visible: bool) {
        if visible && self.grid.is_none() {
            self.grid = Some(GridOverlay::new(self.options.rig.min_radius));
        } else if !visible {
            self.grid = None;
        }
    }

    /// The grid overlay frame for this step, when visualization is on.
    #[must_use]
    pub fn grid_frame(&self) -> Option<GridFrame> {
        let grid = self.grid.as_ref()?;
        Some(grid.frame(
            self.rig.focus(),
            &self.plane,
            self.grid_up_hint(),
            self.options.rig.min_radius,
        ))
    }

    /// Project a screen position onto the movement plane through the focus.
    ///
    /// Returns `None` when the pointer ray is parallel to the plane.
    #[must_use]
    pub fn world_coordinates(&self, screen: Vec2) -> Option<Vec3> {
        let ray = screen_to_ray(screen, self.viewport, self.view_projection());
        self.plane.intersect(self.rig.focus(), &ray)
    }

    // ── Follow mode ─────────────────────────────────────────────────────

    /// Start following a target position. Manual pan is suppressed while
    /// following; each step the focus eases toward the target with a ramp
    /// that grows from zero toward one over roughly a second.
    pub fn follow(&mut self, target: Vec3) {
        log::debug!("following target at {target}");
        self.follow = Some(FollowState { target, ramp: 0.0 });
    }

    /// Update the followed target's position without resetting the ramp.
    /// No-op when not following.
    pub fn update_follow_target(&mut self, target: Vec3) {
        if let Some(follow) = &mut self.follow {
            follow.target = target;
        }
    }

    /// Stop following. No-op when not following.
    pub fn unfollow(&mut self) {
        if self.follow.take().is_some() {
            log::debug!("stopped following");
        }
    }

    /// Whether follow mode is active.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.follow.is_some()
    }

    // ── Zoom events ─────────────────────────────────────────────────────

    /// Begin a zoom gesture with no pointer baseline (e.g. a pinch).
    pub fn on_zoom_start(&mut self) {
        if !self.rig.zoom_enabled() {
            return;
        }
        let _ = self.gesture.start(GestureAction::Zoom, None, None);
    }

    /// Begin a pointer-driven zoom gesture at the given screen position.
    pub fn on_zoom_start_at(&mut self, screen: Vec2) {
        if !self.rig.zoom_enabled() {
            return;
        }
        let _ = self.gesture.start(GestureAction::Zoom, Some(screen), None);
    }

    /// Pointer-driven zoom update: vertical movement against the baseline
    /// changes the radius (dragging up zooms in).
    pub fn on_zoom_update(&mut self, screen: Vec2) {
        if !self.rig.zoom_enabled() {
            return;
        }
        if let Some(delta) = self.gesture.screen_update(screen) {
            self.zoom_by(-(delta.y * self.options.gestures.drag_zoom_speed));
        }
    }

    /// Zoom by a signed distance, clamped to the radius bounds.
    pub fn zoom_by(&mut self, amount: f32) {
        self.rig.zoom_by(amount);
    }

    /// End the zoom gesture. Ignored while another category is active.
    pub fn on_zoom_end(&mut self) {
        if !self.rig.zoom_enabled() {
            return;
        }
        self.gesture.end(GestureAction::Zoom);
    }

    // ── Pan events ──────────────────────────────────────────────────────

    /// Begin a pan gesture: anchor the world point under the pointer.
    pub fn on_pan_start(&mut self, screen: Vec2) {
        if !self.rig.pan_enabled() {
            return;
        }
        let anchor = self.world_coordinates(screen);
        let _ = self.gesture.start(GestureAction::Pan, Some(screen), anchor);
    }

    /// Pointer-driven pan update: translate the focus so the anchored
    /// world point stays under the pointer. Suppressed while following.
    pub fn on_pan_update(&mut self, screen: Vec2) {
        if !self.rig.pan_enabled() || self.follow.is_some() {
            return;
        }
        let world = self.world_coordinates(screen);
        if let Some(translation) = self.gesture.pan_update(screen, world) {
            self.pan_by(translation);
        }
    }

    /// Translate the focus by a world-space amount.
    pub fn pan_by(&mut self, translation: Vec3) {
        if !self.rig.pan_enabled() {
            return;
        }
        if let Some(grid) = &mut self.grid {
            let (right, up) = self.plane.basis(grid_up_hint_for(&self.plane, &self.rig));
            grid.accumulate_pan(translation, right, up);
        }
        self.rig.move_by(translation);
    }

    /// End the pan gesture. Ignored while another category is active.
    pub fn on_pan_end(&mut self) {
        if !self.rig.pan_enabled() {
            return;
        }
        self.gesture.end(GestureAction::Pan);
    }

    // ── Rotate events ───────────────────────────────────────────────────

    /// Begin a rotate gesture with no pointer baseline.
    pub fn on_rotate_start(&mut self) {
        if !self.rig.rotation_enabled() {
            return;
        }
        let _ = self.gesture.start(GestureAction::Rotate, None, None);
    }

    /// Begin a pointer-driven rotate gesture at the given screen position.
    pub fn on_rotate_start_at(&mut self, screen: Vec2) {
        if !self.rig.rotation_enabled() {
            return;
        }
        let _ = self
            .gesture
            .start(GestureAction::Rotate, Some(screen), None);
    }

    /// Pointer-driven rotate update: horizontal movement spins the
    /// azimuth, vertical movement tilts the inclination.
    pub fn on_rotate_update(&mut self, screen: Vec2) {
        if !self.rig.rotation_enabled() {
            return;
        }
        if let Some(delta) = self.gesture.screen_update(screen) {
            let speed = self.options.gestures.rotate_speed;
            self.rotate_by(delta.x * speed, -delta.y * speed);
        }
    }

    /// Rotate by angle deltas in radians. In dynamic movement-plane mode
    /// the plane normal is re-oriented to track the rotation.
    pub fn rotate_by(&mut self, theta_delta: f32, phi_delta: f32) {
        if !self.rig.rotation_enabled() {
            return;
        }
        self.rig.rotate_phi_by(phi_delta);
        self.rig.rotate_theta_by(theta_delta);
        if self.plane.mode() == MovementPlaneMode::Dynamic {
            self.plane.sync(self.rig.theta(), self.rig.phi());
        }
    }

    /// End the rotate gesture. Ignored while another category is active.
    pub fn on_rotate_end(&mut self) {
        if !self.rig.rotation_enabled() {
            return;
        }
        self.gesture.end(GestureAction::Rotate);
    }

    // ── Step ────────────────────────────────────────────────────────────

    /// Advance one simulation step: ease toward the follow target, poll
    /// the device adapters, refresh the movement plane and grid overlay,
    /// and return the new camera pose.
    pub fn step(&mut self, dt: f32, input: &InputSnapshot) -> CameraPose {
        self.step_follow(dt);

        touch::apply(self, input);
        mouse::apply(self, input);
        keyboard::apply(self, input, dt);

        self.plane.sync(self.rig.theta(), self.rig.phi());
        if let Some(grid) = &mut self.grid {
            grid.update_scale(self.rig.radius(), self.options.rig.min_radius);
        }

        self.pose()
    }

    fn step_follow(&mut self, dt: f32) {
        let Some(follow) = &mut self.follow else {
            return;
        };
        let target = follow.target;
        let factor = dt + follow.ramp;
        if follow.ramp < 1.0 - dt {
            follow.ramp += FOLLOW_RAMP_STEP;
        }
        let diff = (target - self.rig.focus()) * factor;
        self.pan_by(diff);
    }

    /// The movement plane the focus is constrained to.
    #[must_use]
    pub fn plane(&self) -> &MovementPlane {
        &self.plane
    }

    /// In-plane (right, up) directions used for keyboard pan and the grid
    /// overlay.
    #[must_use]
    pub fn pan_basis(&self) -> (Vec3, Vec3) {
        self.plane.basis(self.grid_up_hint())
    }

    /// In-plane basis disambiguation: world up for a static plane, the
    /// camera's up for a dynamic one.
    fn grid_up_hint(&self) -> Vec3 {
        grid_up_hint_for(&self.plane, &self.rig)
    }
}

fn grid_up_hint_for(plane: &MovementPlane, rig: &CameraRig) -> Vec3 {
    match plane.mode() {
        MovementPlaneMode::Static => Vec3::Y,
        MovementPlaneMode::Dynamic => {
            let pose = rig.pose();
            let forward = pose.forward();
            let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
            right.cross(forward)
        }
    }
}
