//! Keyboard adapter: held keys drive continuous zoom, pan, and rotation,
//! scaled by the step's delta time so the rates are frame-rate independent.

use crate::controller::CameraController;
use crate::input::InputSnapshot;

/// Feed one step of keyboard input into the controller.
pub(crate) fn apply(
    controller: &mut CameraController,
    input: &InputSnapshot,
    dt: f32,
) {
    let options = controller.options().keyboard.clone();
    if !options.enabled {
        return;
    }
    let gestures = controller.options().gestures.clone();
    let radius = controller.rig().radius();

    if input.keys.is_held(&options.zoom_in) {
        controller.zoom_by(-gestures.keyboard_zoom_speed * radius * dt);
    } else if input.keys.is_held(&options.zoom_out) {
        controller.zoom_by(gestures.keyboard_zoom_speed * radius * dt);
    }

    let (plane_right, plane_up) = controller.pan_basis();
    let forward = plane_up;
    let right = -plane_right;
    let pan_step = radius * gestures.keyboard_pan_speed * dt;
    if input.keys.is_held(&options.pan_forward) {
        controller.pan_by(forward * pan_step);
    } else if input.keys.is_held(&options.pan_backward) {
        controller.pan_by(-forward * pan_step);
    }
    if input.keys.is_held(&options.pan_right) {
        controller.pan_by(right * pan_step);
    } else if input.keys.is_held(&options.pan_left) {
        controller.pan_by(-right * pan_step);
    }

    let rotate_step = gestures.keyboard_rotate_speed * dt;
    if input.keys.is_held(&options.rotate_left) {
        controller.rotate_by(rotate_step, 0.0);
    } else if input.keys.is_held(&options.rotate_right) {
        controller.rotate_by(-rotate_step, 0.0);
    }
    if input.keys.is_held(&options.rotate_up) {
        controller.rotate_by(0.0, rotate_step);
    } else if input.keys.is_held(&options.rotate_down) {
        controller.rotate_by(0.0, -rotate_step);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::controller::CameraController;
    use crate::input::InputSnapshot;
    use crate::options::Options;
    use crate::rig::Viewport;

    fn controller() -> CameraController {
        let mut options = Options::default();
        options.keyboard.enabled = true;
        CameraController::new(
            options,
            Viewport::new(800.0, 600.0),
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn held_zoom_key_scales_with_dt_and_radius() {
        let mut c = controller();
        let mut input = InputSnapshot::new();
        input.keys.press("Equal");

        let _ = c.step(0.016, &input);
        // 5.0/s * radius 10 * 0.016 s = 0.8 inward.
        assert!((c.rig().radius() - 9.2).abs() < 1e-4);
    }

    #[test]
    fn zoom_out_key_moves_away() {
        let mut c = controller();
        let mut input = InputSnapshot::new();
        input.keys.press("Minus");

        let _ = c.step(0.016, &input);
        assert!((c.rig().radius() - 10.8).abs() < 1e-4);
    }

    #[test]
    fn pan_keys_translate_within_the_plane() {
        let mut c = controller();
        let focus = c.rig().focus();
        let mut input = InputSnapshot::new();
        input.keys.press("KeyW");

        let _ = c.step(0.016, &input);
        let moved = c.rig().focus();
        assert!(moved != focus);
        // The default movement plane normal is +Y.
        assert!((moved.y - focus.y).abs() < 1e-5);
        assert!(((moved - focus).length() - 0.4).abs() < 1e-4);
    }

    #[test]
    fn arrow_keys_rotate_at_a_fixed_rate() {
        let mut c = controller();
        let mut input = InputSnapshot::new();
        input.keys.press("ArrowLeft");
        input.keys.press("ArrowUp");

        let _ = c.step(0.016, &input);
        assert!((c.rig().theta() - 0.008).abs() < 1e-5);
        assert!((c.rig().phi() - 0.008).abs() < 1e-5);
    }

    #[test]
    fn opposing_keys_prefer_the_first_binding() {
        let mut c = controller();
        let mut input = InputSnapshot::new();
        input.keys.press("Equal");
        input.keys.press("Minus");

        let _ = c.step(0.016, &input);
        assert!(c.rig().radius() < 10.0);
    }

    #[test]
    fn keyboard_disabled_by_default() {
        let mut c = CameraController::new(
            Options::default(),
            Viewport::new(800.0, 600.0),
            Vec3::new(10.0, 0.0, 0.0),
        );
        let mut input = InputSnapshot::new();
        input.keys.press("Equal");

        let _ = c.step(0.016, &input);
        assert!((c.rig().radius() - 10.0).abs() < 1e-4);
    }
}
