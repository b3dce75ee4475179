//! Configuration constants for figure generation, animation and projection.
//!
//! Everything here is fixed at compile time. Hosts may override the
//! animation values per run by constructing their own [`AnimationConfig`].

use std::time::Duration;

// =============================================================================
// ANIMATION
// =============================================================================

/// Time for one full revolution of a figure about its rotation axis.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Vertical distance a bouncing figure travels per tick.
///
/// Applied once per `update` call regardless of elapsed time, unlike the
/// rotation which is scaled by elapsed time.
pub const BOUNCE_SPEED: f32 = 0.01;

/// Absolute Y translation at which a bouncing figure turns around.
pub const BOUNCE_LIMIT: f32 = 1.5;

// =============================================================================
// PROJECTION
// =============================================================================

/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEG: f32 = 45.0;

pub const NEAR_PLANE: f32 = 1.0;

pub const FAR_PLANE: f32 = 10000.0;

/// Distance the scene is pushed away from the eye along -Z.
pub const CAMERA_DISTANCE: f32 = 5.0;

// =============================================================================
// SCUTOID
// =============================================================================

/// Height of each scutoid ring above/below the figure origin, as a multiple
/// of the radius.
pub const SCUTOID_RING_OFFSET: f32 = 1.5;

/// Angular offset of the pentagon ring relative to the hexagon ring.
pub const SCUTOID_PENTAGON_OFFSET_DEG: f32 = 90.0;

/// Auxiliary junction point shared by the two front wedges of the scutoid.
pub const SCUTOID_JUNCTION: [f32; 3] = [0.0, 0.375, 0.5];

/// Animation parameters shared by every figure built from one context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub period: Duration,
    pub bounce_speed: f32,
    pub bounce_limit: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period: ROTATION_PERIOD,
            bounce_speed: BOUNCE_SPEED,
            bounce_limit: BOUNCE_LIMIT,
        }
    }
}

/// Fixed inputs for the shared perspective projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub camera_distance: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_deg: FIELD_OF_VIEW_DEG,
            near: NEAR_PLANE,
            far: FAR_PLANE,
            camera_distance: CAMERA_DISTANCE,
        }
    }
}
