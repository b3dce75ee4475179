/// Mesh buffers handed from the generators to a renderer
use nalgebra::Point3;

use crate::error::FigureError;
use crate::palette::Rgb;

/// How a renderer should assemble `indices` into triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Every three indices form an independent triangle
    Triangles,
    /// The first index is shared by every triangle; the rest walk the rim
    TriangleFan,
}

impl PrimitiveKind {
    /// The matching WebGL/OpenGL draw mode enum
    pub fn gl_mode(self) -> u32 {
        match self {
            PrimitiveKind::Triangles => 0x0004,
            PrimitiveKind::TriangleFan => 0x0006,
        }
    }
}

/// A vertex resolved through the index buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub color: Rgb,
}

/// One resolved triangle, ready for rasterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// True when all three corners share one color
    pub fn is_flat_colored(&self) -> bool {
        let [a, b, c] = &self.vertices;
        a.color == b.color && b.color == c.color
    }
}

/// Generated geometry: positions, per-vertex colors and an index buffer.
///
/// Immutable once built. The constructor enforces that colors and positions
/// line up and that every index points inside the vertex buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Point3<f32>>,
    colors: Vec<Rgb>,
    indices: Vec<u16>,
    primitive: PrimitiveKind,
}

impl Mesh {
    pub fn new(
        positions: Vec<Point3<f32>>,
        colors: Vec<Rgb>,
        indices: Vec<u16>,
        primitive: PrimitiveKind,
    ) -> Result<Self, FigureError> {
        let mesh = Self {
            positions,
            colors,
            indices,
            primitive,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Build a triangle list that draws its vertex stream in order
    pub fn from_triangle_stream(
        positions: Vec<Point3<f32>>,
        colors: Vec<Rgb>,
    ) -> Result<Self, FigureError> {
        let count = u16::try_from(positions.len()).map_err(|_| {
            FigureError::invalid_mesh(format!(
                "{} vertices do not fit a 16-bit index buffer",
                positions.len()
            ))
        })?;
        let indices = (0..count).collect();
        Self::new(positions, colors, indices, PrimitiveKind::Triangles)
    }

    /// Check the structural invariants of the buffers
    pub fn validate(&self) -> Result<(), FigureError> {
        if self.colors.len() != self.positions.len() {
            return Err(FigureError::invalid_mesh(format!(
                "{} colors for {} vertices",
                self.colors.len(),
                self.positions.len()
            )));
        }

        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&index| index as usize >= self.positions.len())
        {
            return Err(FigureError::invalid_mesh(format!(
                "index {} out of range for {} vertices",
                index,
                self.positions.len()
            )));
        }

        match self.primitive {
            PrimitiveKind::Triangles if self.indices.len() % 3 != 0 => {
                Err(FigureError::invalid_mesh(format!(
                    "triangle list has {} indices, not a multiple of 3",
                    self.indices.len()
                )))
            }
            PrimitiveKind::TriangleFan if self.indices.len() < 3 => Err(
                FigureError::invalid_mesh("triangle fan needs at least 3 indices"),
            ),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    pub fn primitive(&self) -> PrimitiveKind {
        self.primitive
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        match self.primitive {
            PrimitiveKind::Triangles => self.indices.len() / 3,
            PrimitiveKind::TriangleFan => self.indices.len().saturating_sub(2),
        }
    }

    /// Positions as `x, y, z` triples for buffer upload
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Colors as `r, g, b` triples for buffer upload
    pub fn flat_colors(&self) -> Vec<f32> {
        self.colors.iter().flatten().copied().collect()
    }

    /// Resolve the index buffer into triangles according to the primitive kind
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        let corners: Box<dyn Iterator<Item = [u16; 3]> + '_> = match self.primitive {
            PrimitiveKind::Triangles => Box::new(
                self.indices
                    .chunks_exact(3)
                    .map(|tri| [tri[0], tri[1], tri[2]]),
            ),
            PrimitiveKind::TriangleFan => {
                let hub = self.indices.first().copied().unwrap_or_default();
                Box::new(
                    self.indices
                        .windows(2)
                        .skip(1)
                        .map(move |rim| [hub, rim[0], rim[1]]),
                )
            }
        };

        corners.map(move |[a, b, c]| Triangle::new(self.vertex(a), self.vertex(b), self.vertex(c)))
    }

    fn vertex(&self, index: u16) -> Vertex {
        let index = index as usize;
        Vertex {
            position: self.positions[index],
            color: self.colors[index],
        }
    }
}
