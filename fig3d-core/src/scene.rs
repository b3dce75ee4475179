/// A set of figures animated and drawn together
use std::time::Duration;

use nalgebra::Vector3;

use crate::config::ProjectionConfig;
use crate::error::FigureError;
use crate::figure::{Figure, FigureContext, FigureKind};
use crate::projection::{Camera, ProjectionMode};
use crate::renderer::Renderer;
use crate::scutoid::build_scutoid;
use crate::shapes::{build_octahedron, build_pyramid, build_scutoid_caps};

/// Where and how big to build one figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: FigureKind,
    pub radius: f32,
    pub translation: Vector3<f32>,
    pub axis: Vector3<f32>,
}

impl Placement {
    pub fn new(kind: FigureKind, radius: f32, translation: [f32; 3], axis: [f32; 3]) -> Self {
        Self {
            kind,
            radius,
            translation: translation.into(),
            axis: axis.into(),
        }
    }

    /// Stock placement for `kind` in the demo layout
    pub fn demo(kind: FigureKind) -> Self {
        match kind {
            FigureKind::Pyramid => Self::new(kind, 0.5, [-2.0, -0.6, 0.0], [0.0, 1.0, 0.0]),
            FigureKind::Octahedron => Self::new(kind, 0.5, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            FigureKind::Scutoid => Self::new(kind, 0.5, [2.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            FigureKind::ScutoidCaps => Self::new(kind, 0.5, [2.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
        }
    }
}

/// Build every figure `placement` describes, in generator order
pub fn build_figures(
    ctx: &mut FigureContext,
    placement: &Placement,
) -> Result<Vec<Figure>, FigureError> {
    let Placement {
        kind,
        radius,
        translation,
        axis,
    } = *placement;

    let figures = match kind {
        FigureKind::Pyramid => Vec::from(build_pyramid(ctx, radius, translation, axis)?),
        FigureKind::Octahedron => Vec::from(build_octahedron(ctx, radius, translation, axis)?),
        FigureKind::Scutoid => vec![build_scutoid(ctx, radius, translation, axis)?],
        FigureKind::ScutoidCaps => Vec::from(build_scutoid_caps(ctx, radius, translation, axis)?),
    };
    Ok(figures)
}

/// Figures plus the projection they share
#[derive(Debug, Clone)]
pub struct Scene {
    figures: Vec<Figure>,
    projection: ProjectionConfig,
    mode: ProjectionMode,
}

impl Scene {
    pub fn new(projection: ProjectionConfig) -> Self {
        Self {
            figures: Vec::new(),
            projection,
            mode: ProjectionMode::Perspective,
        }
    }

    /// Build `placements` in order; palette rotations carry from one
    /// placement to the next.
    pub fn build(
        ctx: &mut FigureContext,
        placements: &[Placement],
        projection: ProjectionConfig,
    ) -> Result<Self, FigureError> {
        let mut scene = Self::new(projection);
        for placement in placements {
            scene.figures.extend(build_figures(ctx, placement)?);
        }
        log::info!(
            "scene built: {} figures from {} placements",
            scene.figures.len(),
            placements.len()
        );
        Ok(scene)
    }

    /// Pyramid, bouncing octahedron and scutoid side by side
    pub fn demo(now: Duration) -> Result<Self, FigureError> {
        let mut ctx = FigureContext::default();
        ctx.set_now(now);
        let placements = [FigureKind::Pyramid, FigureKind::Octahedron, FigureKind::Scutoid]
            .map(Placement::demo);
        Self::build(&mut ctx, &placements, ProjectionConfig::default())
    }

    #[inline]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figure(&self, index: usize) -> Option<&Figure> {
        self.figures.get(index)
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn projection_config(&self) -> &ProjectionConfig {
        &self.projection
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    /// Camera for a render target with the given aspect ratio
    pub fn camera(&self, aspect: f32) -> Camera {
        let mut camera = Camera::new(&self.projection, aspect);
        camera.mode = self.mode;
        camera
    }

    /// Advance every figure to `now`
    pub fn update(&mut self, now: Duration) {
        for figure in &mut self.figures {
            figure.update(now);
        }
    }

    /// Hand every figure to `renderer`, one draw per figure
    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        let view_projection = self.camera(renderer.aspect()).view_projection();
        renderer.begin_frame(&view_projection)?;
        for figure in &self.figures {
            renderer.draw_mesh(&figure.mesh, figure.model())?;
        }
        renderer.end_frame()
    }
}
