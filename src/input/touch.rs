//! Touch adapter: translates touch points into gesture events per the
//! configured [`TouchOptions`](crate::options::TouchOptions) bindings.

use glam::Vec2;

use crate::controller::CameraController;
use crate::input::{InputSnapshot, TouchPhase, TouchPoint};
use crate::options::{TouchDragBinding, TouchZoomBinding};

/// Minimum scaled pinch delta (pixels) before a zoom is applied, to
/// filter out finger jitter.
const PINCH_TOLERANCE: f32 = 0.1;

/// Lifecycle of a tracked drag within one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragPhase {
    Start,
    Update,
    End,
}

/// Which position a two-finger drag is tracked at. Pan and rotate use the
/// midpoint; zoom drags follow the first touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTrack {
    FirstTouch,
    Midpoint,
}

/// Feed one step of touch input into the controller.
pub(crate) fn apply(controller: &mut CameraController, input: &InputSnapshot) {
    let options = controller.options().touch.clone();
    if !options.enabled || input.touches.is_empty() {
        return;
    }

    apply_zoom(controller, input, options.zoom);

    if let Some((position, phase)) =
        drag_sample(&input.touches, options.pan, DragTrack::Midpoint)
    {
        match phase {
            DragPhase::Start => controller.on_pan_start(position),
            DragPhase::Update => controller.on_pan_update(position),
            DragPhase::End => controller.on_pan_end(),
        }
    }

    if let Some((position, phase)) =
        drag_sample(&input.touches, options.rotate, DragTrack::Midpoint)
    {
        match phase {
            DragPhase::Start => controller.on_rotate_start_at(position),
            DragPhase::Update => controller.on_rotate_update(position),
            DragPhase::End => controller.on_rotate_end(),
        }
    }
}

fn apply_zoom(
    controller: &mut CameraController,
    input: &InputSnapshot,
    binding: TouchZoomBinding,
) {
    let drag_binding = match binding {
        TouchZoomBinding::Disabled => return,
        TouchZoomBinding::TwoFingerPinch => {
            apply_pinch(controller, &input.touches);
            return;
        }
        TouchZoomBinding::OneFingerDrag => TouchDragBinding::OneFingerDrag,
        TouchZoomBinding::TwoFingerDrag => TouchDragBinding::TwoFingerDrag,
        TouchZoomBinding::ThreeFingerDrag => TouchDragBinding::ThreeFingerDrag,
    };

    if let Some((position, phase)) =
        drag_sample(&input.touches, drag_binding, DragTrack::FirstTouch)
    {
        match phase {
            DragPhase::Start => controller.on_zoom_start_at(position),
            DragPhase::Update => controller.on_zoom_update(position),
            DragPhase::End => controller.on_zoom_end(),
        }
    }
}

/// Two-finger pinch: the change in finger separation, scaled by screen
/// size and the current radius, zooms directly. The pinch is stateless
/// (no pointer baseline), so it never claims the gesture slot and can run
/// concurrently with a two-finger pan.
fn apply_pinch(controller: &mut CameraController, touches: &[TouchPoint]) {
    let [first, second] = touches else {
        return;
    };

    if first.phase == TouchPhase::Began
        || second.phase == TouchPhase::Began
        || first.phase.finished()
        || second.phase.finished()
    {
        return;
    }
    if first.phase != TouchPhase::Moved
        && second.phase != TouchPhase::Moved
    {
        return;
    }

    let previous_separation =
        (first.previous_position() - second.previous_position()).length();
    let separation = (first.position - second.position).length();
    let delta = (previous_separation - separation)
        * controller.viewport().pinch_scale();
    if delta.abs() <= PINCH_TOLERANCE {
        return;
    }

    let amount = delta
        * controller.rig().radius()
        * controller.options().gestures.pinch_zoom_speed;
    controller.zoom_by(amount);
}

/// The tracked screen position and drag phase for a binding, when the
/// touch count matches.
fn drag_sample(
    touches: &[TouchPoint],
    binding: TouchDragBinding,
    track: DragTrack,
) -> Option<(Vec2, DragPhase)> {
    let count = match binding {
        TouchDragBinding::Disabled => return None,
        TouchDragBinding::OneFingerDrag => 1,
        TouchDragBinding::TwoFingerDrag => 2,
        TouchDragBinding::ThreeFingerDrag => 3,
    };
    if touches.len() != count {
        return None;
    }

    let position = if count == 2 && track == DragTrack::Midpoint {
        (touches[0].position + touches[1].position) / 2.0
    } else {
        touches[0].position
    };

    let phase = if touches
        .iter()
        .any(|t| t.phase == TouchPhase::Began)
    {
        DragPhase::Start
    } else if touches.iter().any(|t| t.phase.finished()) {
        DragPhase::End
    } else if touches
        .iter()
        .any(|t| t.phase == TouchPhase::Moved)
    {
        DragPhase::Update
    } else {
        return None;
    };

    Some((position, phase))
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use crate::controller::CameraController;
    use crate::input::{InputSnapshot, TouchPhase, TouchPoint};
    use crate::options::{Options, TouchDragBinding, TouchZoomBinding};
    use crate::rig::Viewport;

    fn controller_at(camera: Vec3) -> CameraController {
        CameraController::new(
            Options::default(),
            Viewport::new(800.0, 600.0),
            camera,
        )
    }

    fn touch(position: Vec2, delta: Vec2, phase: TouchPhase) -> TouchPoint {
        TouchPoint {
            position,
            delta,
            phase,
        }
    }

    #[test]
    fn pinch_zooms_proportionally_to_radius() {
        let mut c = controller_at(Vec3::new(50.0, 0.0, 0.0));
        // Fingers close by 5 px in total: separation 10 -> 5.
        let mut input = InputSnapshot::new();
        input.touches = vec![
            touch(
                Vec2::new(402.5, 300.0),
                Vec2::new(-2.5, 0.0),
                TouchPhase::Moved,
            ),
            touch(
                Vec2::new(397.5, 300.0),
                Vec2::new(2.5, 0.0),
                TouchPhase::Moved,
            ),
        ];

        let _ = c.step(0.016, &input);
        // 5 px * radius 50 * 0.01/px = 2.5 world units outward.
        assert!((c.rig().radius() - 52.5).abs() < 1e-3);
    }

    #[test]
    fn pinch_jitter_below_tolerance_is_ignored() {
        let mut c = controller_at(Vec3::new(50.0, 0.0, 0.0));
        let mut input = InputSnapshot::new();
        input.touches = vec![
            touch(
                Vec2::new(400.04, 300.0),
                Vec2::new(0.04, 0.0),
                TouchPhase::Moved,
            ),
            touch(Vec2::new(395.0, 300.0), Vec2::ZERO, TouchPhase::Stationary),
        ];

        let _ = c.step(0.016, &input);
        assert!((c.rig().radius() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn one_finger_drag_rotates() {
        let mut c = controller_at(Vec3::new(10.0, 0.0, 0.0));

        let mut began = InputSnapshot::new();
        began.touches = vec![touch(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            TouchPhase::Began,
        )];
        let _ = c.step(0.016, &began);

        let mut moved = InputSnapshot::new();
        moved.touches = vec![touch(
            Vec2::new(150.0, 100.0),
            Vec2::new(50.0, 0.0),
            TouchPhase::Moved,
        )];
        let _ = c.step(0.016, &moved);

        assert!((c.rig().theta() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn two_finger_drag_pans_at_the_midpoint() {
        let mut c = controller_at(Vec3::new(10.0, 0.0, 0.0));
        c.rotate_by(0.0, 0.8);
        let focus = c.rig().focus();

        let mut began = InputSnapshot::new();
        began.touches = vec![
            touch(Vec2::new(380.0, 300.0), Vec2::ZERO, TouchPhase::Began),
            touch(Vec2::new(420.0, 300.0), Vec2::ZERO, TouchPhase::Began),
        ];
        let _ = c.step(0.016, &began);

        // Both fingers translate together: constant separation, no zoom.
        let radius = c.rig().radius();
        let mut moved = InputSnapshot::new();
        moved.touches = vec![
            touch(
                Vec2::new(410.0, 300.0),
                Vec2::new(30.0, 0.0),
                TouchPhase::Moved,
            ),
            touch(
                Vec2::new(450.0, 300.0),
                Vec2::new(30.0, 0.0),
                TouchPhase::Moved,
            ),
        ];
        let _ = c.step(0.016, &moved);

        let new_focus = c.rig().focus();
        assert!(new_focus != focus);
        assert!((new_focus.y - focus.y).abs() < 1e-4);
        assert!((c.rig().radius() - radius).abs() < 1e-4);
    }

    #[test]
    fn two_finger_zoom_drag_tracks_the_first_touch() {
        let mut options = Options::default();
        options.touch.zoom = TouchZoomBinding::TwoFingerDrag;
        options.touch.pan = TouchDragBinding::Disabled;
        let mut c = CameraController::new(
            options,
            Viewport::new(800.0, 600.0),
            Vec3::new(10.0, 0.0, 0.0),
        );

        let mut began = InputSnapshot::new();
        began.touches = vec![
            touch(Vec2::new(100.0, 100.0), Vec2::ZERO, TouchPhase::Began),
            touch(Vec2::new(200.0, 300.0), Vec2::ZERO, TouchPhase::Began),
        ];
        let _ = c.step(0.016, &began);

        // The first finger drags down 10 px while the second shoots up
        // 100 px; only the first finger's motion feeds the zoom, so the
        // midpoint's upward swing must not pull the camera in.
        let mut moved = InputSnapshot::new();
        moved.touches = vec![
            touch(
                Vec2::new(100.0, 90.0),
                Vec2::new(0.0, -10.0),
                TouchPhase::Moved,
            ),
            touch(
                Vec2::new(200.0, 400.0),
                Vec2::new(0.0, 100.0),
                TouchPhase::Moved,
            ),
        ];
        let _ = c.step(0.016, &moved);

        // -10 px of drag at 0.1/px, negated: one world unit outward.
        assert!((c.rig().radius() - 11.0).abs() < 1e-4);
    }

    #[test]
    fn lifting_a_finger_ends_the_gesture() {
        let mut c = controller_at(Vec3::new(10.0, 0.0, 0.0));

        let mut began = InputSnapshot::new();
        began.touches = vec![touch(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            TouchPhase::Began,
        )];
        let _ = c.step(0.016, &began);

        let mut ended = InputSnapshot::new();
        ended.touches = vec![touch(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            TouchPhase::Ended,
        )];
        let _ = c.step(0.016, &ended);

        // A fresh drag re-seeds rather than jumping from the old baseline.
        let mut moved = InputSnapshot::new();
        moved.touches = vec![touch(
            Vec2::new(500.0, 100.0),
            Vec2::new(1.0, 0.0),
            TouchPhase::Moved,
        )];
        let _ = c.step(0.016, &moved);
        assert_eq!(c.rig().theta(), 0.0);
    }

    #[test]
    fn disabled_touch_is_ignored() {
        let mut options = Options::default();
        options.touch.enabled = false;
        let mut c = CameraController::new(
            options,
            Viewport::new(800.0, 600.0),
            Vec3::new(50.0, 0.0, 0.0),
        );

        let mut input = InputSnapshot::new();
        input.touches = vec![
            touch(
                Vec2::new(402.5, 300.0),
                Vec2::new(-2.5, 0.0),
                TouchPhase::Moved,
            ),
            touch(
                Vec2::new(397.5, 300.0),
                Vec2::new(2.5, 0.0),
                TouchPhase::Moved,
            ),
        ];
        let _ = c.step(0.016, &input);
        assert!((c.rig().radius() - 50.0).abs() < 1e-4);
    }
}
