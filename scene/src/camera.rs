use glam::{Mat4, Vec2, Vec3};

use crate::ray::Ray;

/// Perspective camera used to turn pointer coordinates into world rays.
///
/// Screen coordinates are in pixels with the origin at the top-left corner,
/// matching the cursor coordinates reported by the window layer.
#[derive(Debug, Clone)]
pub struct Camera {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 60f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self
    }

    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        // Depth maps to [0, 1]; the near plane sits at z = 0 in NDC.
        let projection = Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far);
        let view = Mat4::look_at_rh(self.position, self.target, self.up);
        projection * view
    }

    /// Builds the ray that starts on the near plane under `screen` and points
    /// into the scene. Returns `None` for a degenerate viewport.
    pub fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        let ndc = Vec2::new(
            (screen.x / self.width) * 2.0 - 1.0,
            1.0 - (screen.y / self.height) * 2.0,
        );
        let inverse = self.build_view_projection_matrix().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));

        let direction = (far - near).try_normalize()?;
        Some(Ray::new(near, direction))
    }

    /// Projects a world point back to pixel coordinates.
    pub fn world_to_screen(&self, point: Vec3) -> Vec2 {
        let ndc = self.build_view_projection_matrix().project_point3(point);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }

    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
