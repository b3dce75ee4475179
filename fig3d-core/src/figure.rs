/// Figures: a mesh paired with the animation state that moves it
use std::fmt;
use std::time::Duration;

use nalgebra::{Matrix4, Vector3};

use crate::animation::{AnimationVariant, MeshAnimationState};
use crate::config::AnimationConfig;
use crate::error::FigureError;
use crate::geometry::Mesh;
use crate::palette::ColorPalette;

/// Which generator produced a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Pyramid,
    Octahedron,
    Scutoid,
    /// The two scutoid end caps, pulled apart
    ScutoidCaps,
}

impl FigureKind {
    pub const ALL: [FigureKind; 4] = [
        FigureKind::Pyramid,
        FigureKind::Octahedron,
        FigureKind::Scutoid,
        FigureKind::ScutoidCaps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Pyramid => "pyramid",
            FigureKind::Octahedron => "octahedron",
            FigureKind::Scutoid => "scutoid",
            FigureKind::ScutoidCaps => "scutoid-caps",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the generators share: the palette, animation settings and
/// the timestamp new animation states start from.
///
/// Generators take it by `&mut` because building a composite figure
/// rotates the palette for every figure built after it.
#[derive(Debug, Clone)]
pub struct FigureContext {
    palette: ColorPalette,
    animation: AnimationConfig,
    now: Duration,
}

impl FigureContext {
    pub fn new(palette: ColorPalette, animation: AnimationConfig, now: Duration) -> Self {
        Self {
            palette,
            animation,
            now,
        }
    }

    #[inline]
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    #[inline]
    pub fn palette_mut(&mut self) -> &mut ColorPalette {
        &mut self.palette
    }

    #[inline]
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock new figures start from
    pub fn set_now(&mut self, now: Duration) {
        self.now = now;
    }

    /// Fresh animation state placed at `translation`, starting now
    pub fn animation_state(
        &self,
        translation: Vector3<f32>,
        axis: Vector3<f32>,
        variant: AnimationVariant,
    ) -> Result<MeshAnimationState, FigureError> {
        MeshAnimationState::new(translation, axis, variant, self.animation.period, self.now)
    }
}

impl Default for FigureContext {
    fn default() -> Self {
        Self::new(ColorPalette::default(), AnimationConfig::default(), Duration::ZERO)
    }
}

/// A generated mesh and its own animation state
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub kind: FigureKind,
    pub mesh: Mesh,
    pub animation: MeshAnimationState,
}

impl Figure {
    pub fn new(kind: FigureKind, mesh: Mesh, animation: MeshAnimationState) -> Self {
        Self {
            kind,
            mesh,
            animation,
        }
    }

    pub fn update(&mut self, now: Duration) {
        self.animation.update(now);
    }

    #[inline]
    pub fn model(&self) -> &Matrix4<f32> {
        self.animation.model()
    }
}
