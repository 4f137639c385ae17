//! Mouse adapter: translates button drags and scroll into gesture events
//! per the configured [`MouseOptions`](crate::options::MouseOptions)
//! bindings.

use crate::controller::CameraController;
use crate::input::{InputSnapshot, MouseButton};
use crate::options::{MouseDragBinding, MouseZoomBinding};

/// Feed one step of mouse input into the controller.
pub(crate) fn apply(controller: &mut CameraController, input: &InputSnapshot) {
    let options = controller.options().mouse.clone();
    if !options.enabled {
        return;
    }

    match options.zoom {
        MouseZoomBinding::Disabled => {}
        MouseZoomBinding::Scroll => apply_scroll(controller, input),
        binding => {
            if let Some(button) = binding.button() {
                if input.mouse.pressed(button) {
                    controller.on_zoom_start_at(input.mouse.position);
                } else if input.mouse.released(button) {
                    controller.on_zoom_end();
                } else if input.mouse.held(button) {
                    controller.on_zoom_update(input.mouse.position);
                }
            }
        }
    }

    if let Some(button) = options.pan.button() {
        apply_drag(controller, input, button, DragCategory::Pan);
    }
    if let Some(button) = options.rotate.button() {
        apply_drag(controller, input, button, DragCategory::Rotate);
    }
}

/// Scroll wheel zoom, proportional to the current radius so the zoom feels
/// uniform at every distance.
fn apply_scroll(controller: &mut CameraController, input: &InputSnapshot) {
    let scroll = input.mouse.scroll_delta;
    if scroll.abs() <= f32::EPSILON {
        return;
    }
    let amount = -scroll
        * controller.options().gestures.scroll_zoom_speed
        * controller.rig().radius();
    controller.zoom_by(amount);
}

#[derive(Debug, Clone, Copy)]
enum DragCategory {
    Pan,
    Rotate,
}

fn apply_drag(
    controller: &mut CameraController,
    input: &InputSnapshot,
    button: MouseButton,
    category: DragCategory,
) {
    let position = input.mouse.position;
    if input.mouse.pressed(button) {
        match category {
            DragCategory::Pan => controller.on_pan_start(position),
            DragCategory::Rotate => controller.on_rotate_start_at(position),
        }
    } else if input.mouse.released(button) {
        match category {
            DragCategory::Pan => controller.on_pan_end(),
            DragCategory::Rotate => controller.on_rotate_end(),
        }
    } else if input.mouse.held(button) {
        match category {
            DragCategory::Pan => controller.on_pan_update(position),
            DragCategory::Rotate => controller.on_rotate_update(position),
        }
    }
}
