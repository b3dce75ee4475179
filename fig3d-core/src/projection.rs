/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

use crate::angle::to_radians;
use crate::config::ProjectionConfig;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
        }
    }
}

/// Camera shared by every figure in a scene.
///
/// Looks down -Z at the origin from `camera_distance`, which matches pushing
/// the whole scene back along -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(config: &ProjectionConfig, aspect: f32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, config.camera_distance),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: to_radians(config.fov_deg),
            aspect,
            near: config.near,
            far: config.far,
            mode: ProjectionMode::Perspective,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                // frame the same height the perspective view shows at the target
                let distance = (self.position - self.target).norm();
                let height = 2.0 * distance * (self.fov / 2.0).tan();
                let width = height * self.aspect;
                Matrix4::new_orthographic(
                    -width / 2.0,
                    width / 2.0,
                    -height / 2.0,
                    height / 2.0,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Projection and view combined; the one matrix shared by every draw
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Map a model-space point through `mvp` to screen pixels.
///
/// Returns `(x, y, depth)` with depth in normalized device units, or `None`
/// when the point falls behind the eye or outside the view volume.
pub fn project_to_screen(
    point: &Point3<f32>,
    mvp: &Matrix4<f32>,
    width: u32,
    height: u32,
) -> Option<(f32, f32, f32)> {
    let clip = mvp * point.to_homogeneous();

    // Prevent division by near-zero or negative w (behind the eye)
    if clip.w < 1e-6 {
        return None;
    }

    let ndc = clip.xyz() / clip.w;
    if ndc.z < -1.0 || ndc.z > 1.0 {
        return None;
    }

    let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
    let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

    Some((screen_x, screen_y, ndc.z))
}
