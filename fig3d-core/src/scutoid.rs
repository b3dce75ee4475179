//! # Scutoid
//!
//! A solid with a hexagonal top and a pentagonal bottom, joined by side
//! walls and a Y-shaped junction at the front.
//!
//! The vertex pool has fourteen points:
//!
//! ```text
//!  0       hexagon center (y = +1.5r)
//!  1..=6   hexagon rim at 0, 60, 120, 180, 240, 300 degrees
//!  7       pentagon center (y = -1.5r)
//!  8..=12  pentagon rim at 90, 162, 234, 306, 18 degrees
//!  13      junction point
//! ```
//!
//! The triangle table is fixed; only radius, placement and rotation axis
//! are parameters. The outer hull uses 24 of the 27 triangles. The other
//! three lie inside the solid: two seal the left wedge against the
//! front-left wall and one separates the two wedges under the junction.

use nalgebra::{Point3, Vector3};

use crate::angle::{cos_deg, sin_deg, wrap_degrees};
use crate::animation::AnimationVariant;
use crate::config::{SCUTOID_JUNCTION, SCUTOID_PENTAGON_OFFSET_DEG, SCUTOID_RING_OFFSET};
use crate::error::FigureError;
use crate::figure::{Figure, FigureContext, FigureKind};
use crate::geometry::Mesh;
use crate::shapes::check_fan_params;

pub const HEXAGON_SEGMENTS: u32 = 6;
pub const PENTAGON_SEGMENTS: u32 = 5;

/// Number of points in the shared vertex pool
pub const POOL_SIZE: usize = 14;

/// Junction point index in the pool
pub const JUNCTION: u16 = 13;

/// A run of triangles drawn in one palette color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGroup {
    pub name: &'static str,
    /// Palette slot, relative to the palette's current rotation
    pub color: usize,
    pub triangles: &'static [[u16; 3]],
}

impl TriangleGroup {
    const fn new(name: &'static str, color: usize, triangles: &'static [[u16; 3]]) -> Self {
        Self {
            name,
            color,
            triangles,
        }
    }
}

/// The scutoid triangle table, in draw order
pub const GROUPS: [TriangleGroup; 9] = [
    TriangleGroup::new(
        "hexagon",
        0,
        &[[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5], [0, 5, 6], [0, 6, 1]],
    ),
    TriangleGroup::new(
        "pentagon",
        1,
        &[[7, 8, 9], [7, 9, 10], [7, 10, 11], [7, 11, 12], [7, 12, 8]],
    ),
    TriangleGroup::new("back-left wall", 2, &[[4, 5, 10], [4, 10, 9]]),
    TriangleGroup::new("back wall", 3, &[[5, 6, 11], [5, 11, 10]]),
    TriangleGroup::new("right wall", 4, &[[6, 1, 12], [6, 12, 11]]),
    TriangleGroup::new("front-left wall", 5, &[[3, 4, 9], [3, 9, 8]]),
    TriangleGroup::new("right wedge", 3, &[[1, 2, 13], [1, 13, 12], [12, 13, 8]]),
    TriangleGroup::new("left wedge", 4, &[[3, 8, 13], [3, 13, 9], [9, 13, 8]]),
    TriangleGroup::new("closing", 2, &[[2, 3, 13], [2, 13, 8]]),
];

/// Total triangles in [`GROUPS`]
pub const TRIANGLE_COUNT: usize = 27;

/// Center point followed by `segment_count` rim points, all at `y_level`.
///
/// Unlike [`generic_fan`](crate::shapes::generic_fan) the rim is not
/// closed: the last point stops one step short of `end_angle`. Rim angles
/// past 360 degrees are wrapped back by one turn.
pub fn scutoid_vertex_ring(
    y_level: f32,
    start_angle: f32,
    end_angle: f32,
    segment_count: u32,
    radius: f32,
) -> Result<Vec<Point3<f32>>, FigureError> {
    check_fan_params(start_angle, end_angle, segment_count, radius)?;
    let y_level = FigureError::check_finite("ring height", y_level)?;

    let step = (end_angle - start_angle) / segment_count as f32;
    let mut ring = Vec::with_capacity(segment_count as usize + 1);
    ring.push(Point3::new(0.0, y_level, 0.0));
    ring.extend((0..segment_count).map(|i| {
        let angle = wrap_degrees(start_angle + step * i as f32);
        Point3::new(cos_deg(angle) * radius, y_level, sin_deg(angle) * radius)
    }));

    Ok(ring)
}

/// The fourteen-point pool: hexagon ring, pentagon ring, junction
pub fn scutoid_pool(radius: f32) -> Result<Vec<Point3<f32>>, FigureError> {
    let lift = radius * SCUTOID_RING_OFFSET;
    let hexagon = scutoid_vertex_ring(lift, 0.0, 360.0, HEXAGON_SEGMENTS, radius)?;
    let pentagon = scutoid_vertex_ring(
        -lift,
        SCUTOID_PENTAGON_OFFSET_DEG,
        SCUTOID_PENTAGON_OFFSET_DEG + 360.0,
        PENTAGON_SEGMENTS,
        radius,
    )?;

    let mut pool = Vec::with_capacity(POOL_SIZE);
    pool.extend(hexagon);
    pool.extend(pentagon);
    pool.push(Point3::from(SCUTOID_JUNCTION));
    Ok(pool)
}

/// Expand the triangle table over the pool into a flat, colored triangle
/// stream. No vertex is shared, so every face keeps a flat color.
///
/// Reads the palette without rotating it.
pub fn build_scutoid(
    ctx: &FigureContext,
    radius: f32,
    translation: Vector3<f32>,
    axis: Vector3<f32>,
) -> Result<Figure, FigureError> {
    let pool = scutoid_pool(radius)?;
    let palette = ctx.palette();

    let mut positions = Vec::with_capacity(TRIANGLE_COUNT * 3);
    let mut colors = Vec::with_capacity(TRIANGLE_COUNT * 3);
    for group in &GROUPS {
        let color = palette.color(group.color);
        for triangle in group.triangles {
            positions.extend(triangle.iter().map(|&index| pool[index as usize]));
        }
        colors.extend(std::iter::repeat(color).take(group.triangles.len() * 3));
    }

    let mesh = Mesh::from_triangle_stream(positions, colors)?;
    let animation = ctx.animation_state(translation, axis, AnimationVariant::SimpleRotate)?;

    log::debug!(
        "built scutoid r={} at {:?}: {} vertices",
        radius,
        translation.as_slice(),
        mesh.vertex_count()
    );
    Ok(Figure::new(FigureKind::Scutoid, mesh, animation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PrimitiveKind;
    use crate::palette::ColorPalette;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    #[test]
    fn test_ring_layout() {
        let ring = scutoid_vertex_ring(1.5, 0.0, 360.0, 6, 1.0).unwrap();
        assert_eq!(ring.len(), 7);
        assert_eq!(ring[0], Point3::new(0.0, 1.5, 0.0));
        assert_relative_eq!(ring[1], Point3::new(1.0, 1.5, 0.0), epsilon = 1e-6);
        assert_relative_eq!(ring[4], Point3::new(-1.0, 1.5, 0.0), epsilon = 1e-6);
        for point in &ring[1..] {
            assert_eq!(point.y, 1.5);
            assert_relative_eq!(point.x.hypot(point.z), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ring_wraps_past_full_turn() {
        let ring = scutoid_vertex_ring(0.0, 90.0, 450.0, 5, 1.0).unwrap();
        assert_eq!(ring.len(), 6);
        assert_relative_eq!(ring[1], Point3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
        // 90 + 4 * 72 = 378 wraps to 18 degrees
        assert_relative_eq!(ring[5].x, cos_deg(18.0), epsilon = 1e-6);
        assert_relative_eq!(ring[5].z, sin_deg(18.0), epsilon = 1e-6);
    }

    #[test]
    fn test_ring_rejects_zero_segments() {
        assert_eq!(
            scutoid_vertex_ring(0.0, 0.0, 360.0, 0, 1.0),
            Err(FigureError::InvalidSegmentCount(0))
        );
    }

    #[test]
    fn test_pool() {
        let pool = scutoid_pool(2.0).unwrap();
        assert_eq!(pool.len(), POOL_SIZE);
        assert_eq!(pool[0], Point3::new(0.0, 3.0, 0.0));
        assert_eq!(pool[7], Point3::new(0.0, -3.0, 0.0));
        assert_eq!(pool[JUNCTION as usize], Point3::new(0.0, 0.375, 0.5));
        assert!(pool[1..7].iter().all(|p| p.y == 3.0));
        assert!(pool[8..13].iter().all(|p| p.y == -3.0));
    }

    #[test]
    fn test_table_shape() {
        let counts: Vec<usize> = GROUPS.iter().map(|g| g.triangles.len()).collect();
        assert_eq!(counts, vec![6, 5, 2, 2, 2, 2, 3, 3, 2]);
        assert_eq!(counts.iter().sum::<usize>(), TRIANGLE_COUNT);

        for group in &GROUPS {
            for triangle in group.triangles {
                assert!(triangle.iter().all(|&i| (i as usize) < POOL_SIZE));
                let [a, b, c] = *triangle;
                assert!(a != b && b != c && a != c);
            }
        }
        // both wedges meet at the junction
        for group in &GROUPS[6..8] {
            assert!(group.triangles.iter().all(|t| t.contains(&JUNCTION)));
        }
    }

    #[test]
    fn test_no_duplicate_triangles() {
        let mut seen = std::collections::HashSet::new();
        for group in &GROUPS {
            for triangle in group.triangles {
                let mut key = *triangle;
                key.sort_unstable();
                assert!(seen.insert(key), "duplicate triangle {:?}", triangle);
            }
        }
    }

    #[test]
    fn test_hull_is_closed() {
        // interior triangles excluded, every hull edge has exactly two faces
        let interior: [[u16; 3]; 3] = [[3, 13, 9], [9, 13, 8], [2, 13, 8]];
        let mut edges: HashMap<(u16, u16), usize> = HashMap::new();
        for group in &GROUPS {
            for triangle in group.triangles.iter().filter(|t| !interior.contains(*t)) {
                for k in 0..3 {
                    let (a, b) = (triangle[k], triangle[(k + 1) % 3]);
                    *edges.entry((a.min(b), a.max(b))).or_default() += 1;
                }
            }
        }
        assert!(edges.values().all(|&n| n == 2), "{:?}", edges);
    }

    #[test]
    fn test_build_scutoid() {
        let ctx = FigureContext::default();
        let figure = build_scutoid(&ctx, 1.0, Vector3::zeros(), Vector3::y()).unwrap();

        assert_eq!(figure.kind, FigureKind::Scutoid);
        assert_eq!(figure.mesh.vertex_count(), 81);
        assert_eq!(figure.mesh.colors().len(), 81);
        assert_eq!(figure.mesh.flat_positions().len(), 81 * 3);
        assert_eq!(figure.mesh.primitive(), PrimitiveKind::Triangles);
        assert_eq!(figure.mesh.indices(), (0..81).collect::<Vec<u16>>().as_slice());
        assert!(figure.mesh.triangles().all(|t| t.is_flat_colored()));
    }

    #[test]
    fn test_scutoid_colors_follow_groups() {
        let mut ctx = FigureContext::default();
        ctx.palette_mut().rotate(1);
        let figure = build_scutoid(&ctx, 1.0, Vector3::zeros(), Vector3::y()).unwrap();

        let palette = ctx.palette();
        let mut offset = 0;
        for group in &GROUPS {
            let len = group.triangles.len() * 3;
            for color in &figure.mesh.colors()[offset..offset + len] {
                assert_eq!(*color, palette.color(group.color));
            }
            offset += len;
        }
        // hexagon cap picks up the rotated palette
        assert_eq!(figure.mesh.colors()[0], ColorPalette::default().color(5));
    }

    #[test]
    fn test_build_leaves_palette_alone() {
        let ctx = FigureContext::default();
        let first = build_scutoid(&ctx, 1.0, Vector3::zeros(), Vector3::y()).unwrap();
        let second = build_scutoid(&ctx, 1.0, Vector3::zeros(), Vector3::y()).unwrap();
        assert_eq!(first.mesh, second.mesh);
        assert_eq!(ctx.palette(), &ColorPalette::default());
    }

    #[test]
    fn test_scutoid_positions_expand_pool() {
        let ctx = FigureContext::default();
        let figure = build_scutoid(&ctx, 1.5, Vector3::zeros(), Vector3::y()).unwrap();
        let pool = scutoid_pool(1.5).unwrap();

        let expected: Vec<Point3<f32>> = GROUPS
            .iter()
            .flat_map(|g| g.triangles.iter())
            .flat_map(|t| t.iter().map(|&i| pool[i as usize]))
            .collect();
        assert_eq!(figure.mesh.positions(), expected.as_slice());
    }
}
