//! Gesture state machine shared by all input devices.
//!
//! One gesture is active at a time: `Idle -> {Zoom, Pan, Rotate} -> Idle`.
//! While active, the machine holds the last pointer position (screen space)
//! and, for pan, the world-space anchor under the pointer at gesture start.
//! Updates compute deltas against those baselines; the very first update
//! after an unseeded start only records the baseline, so a gesture never
//! jumps on its first frame.

use glam::{Vec2, Vec3};

/// The gesture categories a device can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureAction {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Changing the orbit radius.
    Zoom,
    /// Translating the focus along the movement plane.
    Pan,
    /// Changing the orbit angles.
    Rotate,
}

/// Baseline state for the active gesture.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    action: GestureAction,
    last_screen: Option<Vec2>,
    /// World-space anchor under the pointer at pan start. Deliberately not
    /// advanced during updates: panning keeps the grabbed point under the
    /// cursor.
    anchor: Option<Vec3>,
}

impl GestureState {
    /// Create an idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active gesture.
    #[must_use]
    pub fn action(&self) -> GestureAction {
        self.action
    }

    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.action == GestureAction::Idle
    }

    /// Begin a gesture, recording optional baselines.
    ///
    /// Ignored (returns `false`) while another gesture is active, which
    /// prevents re-entrant starts when two devices fire in the same step.
    pub fn start(
        &mut self,
        action: GestureAction,
        screen: Option<Vec2>,
        anchor: Option<Vec3>,
    ) -> bool {
        if self.action != GestureAction::Idle || action == GestureAction::Idle {
            return false;
        }
        self.action = action;
        self.last_screen = screen;
        self.anchor = anchor;
        true
    }

    /// Screen-space update for zoom and rotate gestures.
    ///
    /// Returns the delta against the last recorded position and advances
    /// the baseline. Returns `None` when this update only seeded the
    /// baseline.
    pub fn screen_update(&mut self, position: Vec2) -> Option<Vec2> {
        let delta = self.last_screen.map(|last| position - last);
        self.last_screen = Some(position);
        delta
    }

    /// World-space update for pan gestures.
    ///
    /// `world` is the current pointer position projected onto the movement
    /// plane (or `None` when the ray missed). Returns the translation that
    /// keeps the anchored world point under the pointer: anchor minus
    /// current. Returns `None` when the baseline was only (re-)seeded or
    /// the pointer has not moved in screen space.
    pub fn pan_update(&mut self, screen: Vec2, world: Option<Vec3>) -> Option<Vec3> {
        let Some(anchor) = self.anchor else {
            self.last_screen = Some(screen);
            self.anchor = world;
            return None;
        };

        // A stationary pointer must not re-apply the translation even if
        // the plane moved underneath it (e.g. while also zooming).
        if self.last_screen == Some(screen) {
            return None;
        }
        self.last_screen = Some(screen);

        let Some(current) = world else {
            // Ray parallel to the plane: drop the anchor so the next
            // usable position re-seeds it.
            self.anchor = None;
            return None;
        };

        Some(anchor - current)
    }

    /// End the active gesture and clear all baselines.
    ///
    /// Ignored unless `action` matches the active gesture, so a release
    /// event from a category that never started cannot cancel another
    /// device's drag mid-gesture.
    pub fn end(&mut self, action: GestureAction) {
        if self.action != action {
            return;
        }
        self.action = GestureAction::Idle;
        self.last_screen = None;
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_start_then_update_at_same_position_is_zero_motion() {
        let mut g = GestureState::new();
        assert!(g.start(GestureAction::Rotate, Some(Vec2::new(5.0, 5.0)), None));
        let delta = g.screen_update(Vec2::new(5.0, 5.0));
        assert_eq!(delta, Some(Vec2::ZERO));
    }

    #[test]
    fn unseeded_start_seeds_on_first_update() {
        let mut g = GestureState::new();
        assert!(g.start(GestureAction::Zoom, None, None));
        // First update only records a baseline.
        assert_eq!(g.screen_update(Vec2::new(10.0, 20.0)), None);
        // Second update produces a delta against it.
        assert_eq!(
            g.screen_update(Vec2::new(10.0, 25.0)),
            Some(Vec2::new(0.0, 5.0))
        );
    }

    #[test]
    fn re_entrant_start_is_ignored() {
        let mut g = GestureState::new();
        assert!(g.start(GestureAction::Pan, Some(Vec2::ZERO), Some(Vec3::ZERO)));
        assert!(!g.start(GestureAction::Rotate, Some(Vec2::ONE), None));
        assert_eq!(g.action(), GestureAction::Pan);
    }

    #[test]
    fn end_returns_to_idle_and_clears_baselines() {
        let mut g = GestureState::new();
        assert!(g.start(GestureAction::Rotate, Some(Vec2::ONE), None));
        g.end(GestureAction::Rotate);
        assert!(g.is_idle());
        // Next update seeds from scratch.
        assert_eq!(g.screen_update(Vec2::new(3.0, 3.0)), None);
    }

    #[test]
    fn end_from_another_category_is_ignored() {
        let mut g = GestureState::new();
        assert!(g.start(GestureAction::Rotate, Some(Vec2::ZERO), None));
        g.end(GestureAction::Pan);
        assert_eq!(g.action(), GestureAction::Rotate);
        g.end(GestureAction::Rotate);
        assert!(g.is_idle());
    }

    #[test]
    fn pan_translation_pulls_anchor_toward_pointer() {
        let mut g = GestureState::new();
        let anchor = Vec3::new(1.0, 0.0, 1.0);
        assert!(g.start(GestureAction::Pan, Some(Vec2::ZERO), Some(anchor)));

        // Pointer moved; the world point under it is now elsewhere.
        let current = Vec3::new(3.0, 0.0, 1.0);
        let translation = g.pan_update(Vec2::new(10.0, 0.0), Some(current));
        assert_eq!(translation, Some(anchor - current));
    }

    #[test]
    fn pan_with_stationary_pointer_is_ignored() {
        let mut g = GestureState::new();
        assert!(g.start(
            GestureAction::Pan,
            Some(Vec2::new(4.0, 4.0)),
            Some(Vec3::ZERO)
        ));
        let translation = g.pan_update(Vec2::new(4.0, 4.0), Some(Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(translation, None);
    }

    #[test]
    fn pan_reseeds_after_parallel_ray() {
        let mut g = GestureState::new();
        assert!(g.start(GestureAction::Pan, Some(Vec2::ZERO), Some(Vec3::ZERO)));

        // Ray missed the plane: anchor is dropped.
        assert_eq!(g.pan_update(Vec2::new(1.0, 0.0), None), None);

        // Next usable position re-seeds, producing no motion yet.
        assert_eq!(
            g.pan_update(Vec2::new(2.0, 0.0), Some(Vec3::new(5.0, 0.0, 0.0))),
            None
        );

        // And motion resumes against the new anchor.
        let translation = g.pan_update(Vec2::new(3.0, 0.0), Some(Vec3::new(6.0, 0.0, 0.0)));
        assert_eq!(translation, Some(Vec3::new(-1.0, 0.0, 0.0)));
    }
}
