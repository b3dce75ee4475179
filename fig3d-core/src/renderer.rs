/// The seam between the core and whatever draws the figures
use nalgebra::Matrix4;

use crate::geometry::Mesh;

/// A backend that turns mesh buffers and transforms into pixels.
///
/// [`Scene::draw`](crate::scene::Scene::draw) calls `begin_frame` once,
/// `draw_mesh` once per figure, then `end_frame`.
pub trait Renderer {
    type Error;

    /// Width over height of the render target
    fn aspect(&self) -> f32;

    /// Start a frame with the projection shared by every mesh in it
    fn begin_frame(&mut self, view_projection: &Matrix4<f32>) -> Result<(), Self::Error>;

    fn draw_mesh(&mut self, mesh: &Mesh, model: &Matrix4<f32>) -> Result<(), Self::Error>;

    fn end_frame(&mut self) -> Result<(), Self::Error>;
}
