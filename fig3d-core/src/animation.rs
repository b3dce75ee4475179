/// Per-figure animation state advanced once per frame
use std::f32::consts::TAU;
use std::time::Duration;

use nalgebra::{Matrix4, Unit, Vector3};

use crate::config::AnimationConfig;
use crate::error::FigureError;
use crate::transform::Transform;

/// The closed set of motions a figure can perform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationVariant {
    /// Spin about the rotation axis, one turn per period
    SimpleRotate,
    /// Spin, then bob up and down between `-limit` and `+limit`.
    ///
    /// `speed` is a per-tick step, not scaled by elapsed time.
    BouncingRotate {
        speed: f32,
        limit: f32,
        direction: f32,
    },
}

impl AnimationVariant {
    pub fn bouncing(config: &AnimationConfig) -> Self {
        Self::BouncingRotate {
            speed: config.bounce_speed,
            limit: config.bounce_limit,
            direction: 1.0,
        }
    }

    /// Current travel direction, `None` for non-bouncing variants
    pub fn direction(&self) -> Option<f32> {
        match self {
            Self::SimpleRotate => None,
            Self::BouncingRotate { direction, .. } => Some(*direction),
        }
    }
}

/// Model transform plus the timestamp it was last advanced at.
///
/// Timestamps are offsets from whatever epoch the driving clock uses; only
/// their differences matter.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAnimationState {
    model: Matrix4<f32>,
    axis: Unit<Vector3<f32>>,
    last_update: Duration,
    period: Duration,
    variant: AnimationVariant,
}

impl MeshAnimationState {
    pub fn new(
        translation: Vector3<f32>,
        axis: Vector3<f32>,
        variant: AnimationVariant,
        period: Duration,
        started_at: Duration,
    ) -> Result<Self, FigureError> {
        FigureError::check_finite("translation.x", translation.x)?;
        FigureError::check_finite("translation.y", translation.y)?;
        FigureError::check_finite("translation.z", translation.z)?;

        let axis = Unit::try_new(axis, f32::EPSILON)
            .filter(|unit| unit.iter().all(|c| c.is_finite()))
            .ok_or(FigureError::DegenerateAxis([axis.x, axis.y, axis.z]))?;

        Ok(Self {
            model: Transform::placement(&translation),
            axis,
            last_update: started_at,
            period,
            variant,
        })
    }

    /// Advance the transform to `now`.
    ///
    /// A `now` earlier than the last update counts as zero elapsed time.
    pub fn update(&mut self, now: Duration) {
        let delta = now.saturating_sub(self.last_update);
        self.last_update = now;

        let angle = if self.period.is_zero() {
            0.0
        } else {
            TAU * (delta.as_secs_f32() / self.period.as_secs_f32())
        };
        Transform::rotate(&mut self.model, angle, &self.axis);

        if let AnimationVariant::BouncingRotate {
            speed,
            limit,
            direction,
        } = &mut self.variant
        {
            let height = self.model[(1, 3)];
            if (height > *limit && *direction > 0.0) || (height < -*limit && *direction < 0.0) {
                *direction = -*direction;
                log::trace!("bounce at y={:.3}, direction now {}", height, direction);
            }
            Transform::translate(&mut self.model, &Vector3::new(0.0, *speed * *direction, 0.0));
        }
    }

    #[inline]
    pub fn model(&self) -> &Matrix4<f32> {
        &self.model
    }

    #[inline]
    pub fn axis(&self) -> &Unit<Vector3<f32>> {
        &self.axis
    }

    #[inline]
    pub fn last_update(&self) -> Duration {
        self.last_update
    }

    #[inline]
    pub fn variant(&self) -> &AnimationVariant {
        &self.variant
    }
}
