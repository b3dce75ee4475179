//! fig3d Core Library - procedural figures and their animation
//!
//! Generates radial-fan pyramids and octahedra and a fixed-topology scutoid,
//! colors their faces from a rotating palette, and advances each figure's
//! model transform from elapsed time. Drawing and frame scheduling belong to
//! the host; see [`Renderer`] and [`Scene::update`].

pub mod angle;
pub mod animation;
pub mod config;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod palette;
pub mod projection;
pub mod renderer;
pub mod scene;
pub mod scutoid;
pub mod shapes;
pub mod transform;

// Re-export commonly used types
pub use animation::{AnimationVariant, MeshAnimationState};
pub use config::{AnimationConfig, ProjectionConfig};
pub use error::FigureError;
pub use figure::{Figure, FigureContext, FigureKind};
pub use geometry::{Mesh, PrimitiveKind, Triangle, Vertex};
pub use palette::{ColorPalette, Rgb};
pub use projection::{project_to_screen, Camera, ProjectionMode};
pub use renderer::Renderer;
pub use scene::{build_figures, Placement, Scene};
pub use scutoid::{build_scutoid, scutoid_vertex_ring};
pub use shapes::{build_octahedron, build_pyramid, build_scutoid_caps, generic_fan};
pub use transform::Transform;
