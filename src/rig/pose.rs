use glam::{Mat4, Vec2, Vec3, Vec4};

/// Camera pose produced by the rig each step: eye position, look-at target,
/// and up direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position (the rig focus).
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Build the view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Normalized direction from eye toward target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Projection {
    /// Build the projection matrix for the given aspect ratio.
    ///
    /// `perspective_rh` already uses [0,1] depth range (wgpu/Vulkan
    /// convention).
    #[must_use]
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }
}

/// Screen dimensions the rig projects through.
///
/// An explicit field on the controller rather than ambient global state.
/// `dpi` is optional; when present it scales pinch-zoom gestures by the
/// physical screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in physical pixels.
    pub width: f32,
    /// Height in physical pixels.
    pub height: f32,
    /// Dots per inch, if known.
    pub dpi: Option<f32>,
}

impl Viewport {
    /// Create a viewport with unknown DPI.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            dpi: None,
        }
    }

    /// Width / height aspect ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Screen diagonal in inches, when DPI is known.
    #[must_use]
    pub fn diagonal_inches(&self) -> Option<f32> {
        self.dpi
            .map(|dpi| (self.width * self.width + self.height * self.height).sqrt() / dpi)
    }

    /// Scale factor applied to pinch-gesture magnitudes: diagonal inches
    /// over ten, or 1.0 when the DPI is unknown.
    #[must_use]
    pub fn pinch_scale(&self) -> f32 {
        self.diagonal_inches().map_or(1.0, |d| d / 10.0)
    }
}

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized ray direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point along the ray at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Convert a screen position to a world-space ray by unprojecting through
/// the inverse view-projection matrix.
///
/// Screen coordinates are y-up with the origin at the bottom-left.
#[must_use]
pub fn screen_to_ray(screen: Vec2, viewport: Viewport, view_proj: Mat4) -> Ray {
    let ndc_x = (screen.x / viewport.width) * 2.0 - 1.0;
    let ndc_y = (screen.y / viewport.height) * 2.0 - 1.0;

    let inv_view_proj = view_proj.inverse();

    // Unproject near and far points ([0,1] depth range).
    let world_near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
    let world_far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

    let origin = world_near.truncate() / world_near.w;
    let far = world_far.truncate() / world_far.w;

    Ray {
        origin,
        direction: (far - origin).normalize_or_zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_screen_unprojects_along_view_direction() {
        let pose = CameraPose {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        let viewport = Viewport::new(800.0, 600.0);
        let view_proj = Projection::default().matrix(viewport.aspect()) * pose.view_matrix();

        let ray = screen_to_ray(Vec2::new(400.0, 300.0), viewport, view_proj);
        // The center ray points straight from the eye toward the target.
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
        assert!((ray.origin.x).abs() < 1e-3);
        assert!((ray.origin.y).abs() < 1e-3);
    }

    #[test]
    fn upper_half_of_screen_tilts_the_ray_up() {
        let pose = CameraPose {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        };
        let viewport = Viewport::new(800.0, 600.0);
        let view_proj = Projection::default().matrix(viewport.aspect()) * pose.view_matrix();

        // y-up screen coordinates: y above center means a ray tilted up.
        let ray = screen_to_ray(Vec2::new(400.0, 500.0), viewport, view_proj);
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn pinch_scale_defaults_to_one_without_dpi() {
        let viewport = Viewport::new(1920.0, 1080.0);
        assert_eq!(viewport.pinch_scale(), 1.0);

        let with_dpi = Viewport {
            dpi: Some(220.26),
            ..viewport
        };
        // 1920x1080 at ~220 dpi is a 10-inch diagonal: scale 1.0.
        let scale = with_dpi.pinch_scale();
        assert!((scale - 1.0).abs() < 0.01);
    }
}
