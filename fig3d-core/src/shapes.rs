/// Radial fan generator and the solids built from pairs of fans
use nalgebra::{Point3, Vector3};

use crate::angle::{cos_deg, sin_deg};
use crate::animation::AnimationVariant;
use crate::error::FigureError;
use crate::figure::{Figure, FigureContext, FigureKind};
use crate::geometry::Mesh;

pub const PYRAMID_SEGMENTS: u32 = 5;
pub const OCTAHEDRON_SEGMENTS: u32 = 4;

/// Vertex stream for a fan of `segment_count` triangles.
///
/// Each triangle is `(apex, rim(θ), rim(θ + step))` with the apex at
/// `(0, apex_height, 0)` and the rim on the `y = 0` circle of `radius`.
/// A single segment is a degenerate cap whose apex sits at `radius / 2`.
/// Angles are in degrees and are not normalized.
pub fn generic_fan(
    apex_height: f32,
    start_angle: f32,
    end_angle: f32,
    segment_count: u32,
    radius: f32,
) -> Result<Vec<Point3<f32>>, FigureError> {
    check_fan_params(start_angle, end_angle, segment_count, radius)?;
    let apex_height = FigureError::check_finite("apex height", apex_height)?;

    let apex_height = if segment_count == 1 {
        radius / 2.0
    } else {
        apex_height
    };
    let apex = Point3::new(0.0, apex_height, 0.0);
    let step = (end_angle - start_angle) / segment_count as f32;
    let rim = |angle: f32| Point3::new(cos_deg(angle) * radius, 0.0, sin_deg(angle) * radius);

    let mut vertices = Vec::with_capacity(segment_count as usize * 3);
    for i in 0..segment_count {
        let angle = start_angle + step * i as f32;
        vertices.push(apex);
        vertices.push(rim(angle));
        vertices.push(rim(angle + step));
    }

    Ok(vertices)
}

/// Color a fan vertex stream by cycling over the first `color_count`
/// palette entries, one flat color per triangle.
pub fn fan_mesh(
    ctx: &FigureContext,
    vertices: Vec<Point3<f32>>,
    color_count: usize,
) -> Result<Mesh, FigureError> {
    let colors = ctx.palette().face_colors(vertices.len() / 3, color_count)?;
    Mesh::from_triangle_stream(vertices, colors)
}

/// Parameters for one full-circle fan figure
#[derive(Debug, Clone, Copy)]
struct FanSpec {
    apex_height: f32,
    segments: u32,
    color_count: usize,
}

fn fan_figure(
    ctx: &FigureContext,
    kind: FigureKind,
    fan: FanSpec,
    radius: f32,
    translation: Vector3<f32>,
    axis: Vector3<f32>,
    variant: AnimationVariant,
) -> Result<Figure, FigureError> {
    let vertices = generic_fan(fan.apex_height, 0.0, 360.0, fan.segments, radius)?;
    let mesh = fan_mesh(ctx, vertices, fan.color_count)?;
    let animation = ctx.animation_state(translation, axis, variant)?;
    Ok(Figure::new(kind, mesh, animation))
}

/// Five-sided pyramid as two fans: the sloped sides (apex at `3r`, five
/// colors) and the flat base (one color), with the palette rotated by one
/// in between.
pub fn build_pyramid(
    ctx: &mut FigureContext,
    radius: f32,
    translation: Vector3<f32>,
    axis: Vector3<f32>,
) -> Result<[Figure; 2], FigureError> {
    let sides = FanSpec {
        apex_height: radius * 3.0,
        segments: PYRAMID_SEGMENTS,
        color_count: 5,
    };
    let base = FanSpec {
        apex_height: 0.0,
        segments: PYRAMID_SEGMENTS,
        color_count: 1,
    };

    let variant = AnimationVariant::SimpleRotate;
    let sides = fan_figure(ctx, FigureKind::Pyramid, sides, radius, translation, axis, variant)?;
    ctx.palette_mut().rotate(1);
    let base = fan_figure(ctx, FigureKind::Pyramid, base, radius, translation, axis, variant)?;

    log::debug!("built pyramid r={} at {:?}", radius, translation.as_slice());
    Ok([sides, base])
}

/// Octahedron as two four-segment fans with apexes at `+r` and `-r`,
/// palette rotated by two in between. Both halves bounce together.
pub fn build_octahedron(
    ctx: &mut FigureContext,
    radius: f32,
    translation: Vector3<f32>,
    axis: Vector3<f32>,
) -> Result<[Figure; 2], FigureError> {
    let upper = FanSpec {
        apex_height: radius,
        segments: OCTAHEDRON_SEGMENTS,
        color_count: 4,
    };
    let lower = FanSpec {
        apex_height: -radius,
        ..upper
    };

    let variant = AnimationVariant::bouncing(ctx.animation());
    let upper = fan_figure(ctx, FigureKind::Octahedron, upper, radius, translation, axis, variant)?;
    ctx.palette_mut().rotate(2);
    let lower = fan_figure(ctx, FigureKind::Octahedron, lower, radius, translation, axis, variant)?;

    log::debug!("built octahedron r={} at {:?}", radius, translation.as_slice());
    Ok([upper, lower])
}

/// The scutoid's two end caps as separate flat fans: a hexagon lifted by
/// `1.5r` and a pentagon lowered by `1.5r`.
pub fn build_scutoid_caps(
    ctx: &mut FigureContext,
    radius: f32,
    translation: Vector3<f32>,
    axis: Vector3<f32>,
) -> Result<[Figure; 2], FigureError> {
    let offset = Vector3::new(0.0, radius * crate::config::SCUTOID_RING_OFFSET, 0.0);
    let hexagon = FanSpec {
        apex_height: 0.0,
        segments: 6,
        color_count: 6,
    };
    let pentagon = FanSpec {
        apex_height: 0.0,
        segments: 5,
        color_count: 5,
    };

    let variant = AnimationVariant::SimpleRotate;
    let top = fan_figure(
        ctx,
        FigureKind::ScutoidCaps,
        hexagon,
        radius,
        translation + offset,
        axis,
        variant,
    )?;
    let bottom = fan_figure(
        ctx,
        FigureKind::ScutoidCaps,
        pentagon,
        radius,
        translation - offset,
        axis,
        variant,
    )?;

    log::debug!("built scutoid caps r={} at {:?}", radius, translation.as_slice());
    Ok([top, bottom])
}

pub(crate) fn check_fan_params(
    start_angle: f32,
    end_angle: f32,
    segment_count: u32,
    radius: f32,
) -> Result<(), FigureError> {
    if segment_count == 0 {
        return Err(FigureError::InvalidSegmentCount(segment_count));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(FigureError::InvalidRadius(radius));
    }
    FigureError::check_finite("start angle", start_angle)?;
    FigureError::check_finite("end angle", end_angle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorPalette;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    // Fan topology over `[apex, ring...]`; the pyramid's last face closes back
    // onto rim point 1, the octahedron's rim point 5 sits on top of rim point 1.
    const PYRAMID_FAN: [u16; 15] = [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 1];
    const OCTAHEDRON_FAN: [u16; 12] = [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5];

    fn color_key(color: &[f32; 3]) -> [u32; 3] {
        color.map(f32::to_bits)
    }

    fn distinct_face_colors(mesh: &Mesh) -> HashSet<[u32; 3]> {
        mesh.triangles()
            .map(|tri| color_key(&tri.vertices[0].color))
            .collect()
    }

    #[test]
    fn test_fan_vertex_count() {
        for n in 1..=12 {
            let fan = generic_fan(2.0, 0.0, 360.0, n, 1.5).unwrap();
            assert_eq!(fan.len(), 3 * n as usize);
        }
    }

    #[test]
    fn test_fan_rim_on_circle() {
        let radius = 2.5;
        let fan = generic_fan(4.0, 0.0, 360.0, 7, radius).unwrap();
        for tri in fan.chunks_exact(3) {
            assert_eq!(tri[0], Point3::new(0.0, 4.0, 0.0));
            for rim in &tri[1..] {
                assert_eq!(rim.y, 0.0);
                assert_relative_eq!(rim.x.hypot(rim.z), radius, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_fan_triangles_are_consecutive() {
        let fan = generic_fan(1.0, 0.0, 360.0, 4, 1.0).unwrap();
        // each triangle starts where the previous one ended
        for pair in fan.chunks_exact(3).collect::<Vec<_>>().windows(2) {
            assert_relative_eq!(pair[0][2], pair[1][1], epsilon = 1e-6);
        }
        assert_relative_eq!(fan[1], Point3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(fan[2], Point3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_partial_arc() {
        let fan = generic_fan(1.0, 90.0, 180.0, 2, 1.0).unwrap();
        assert_relative_eq!(fan[1], Point3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
        assert_relative_eq!(fan[5], Point3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_single_segment_apex() {
        let fan = generic_fan(10.0, 0.0, 360.0, 1, 3.0).unwrap();
        assert_eq!(fan.len(), 3);
        assert_eq!(fan[0], Point3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_fan_rejects_bad_params() {
        assert_eq!(
            generic_fan(1.0, 0.0, 360.0, 0, 1.0),
            Err(FigureError::InvalidSegmentCount(0))
        );
        assert!(matches!(
            generic_fan(1.0, 0.0, 360.0, 3, -1.0),
            Err(FigureError::InvalidRadius(_))
        ));
        assert!(generic_fan(f32::NAN, 0.0, 360.0, 3, 1.0).is_err());
        assert!(generic_fan(1.0, 0.0, f32::INFINITY, 3, 1.0).is_err());
    }

    #[test]
    fn test_fixed_fans_match_generated_stream() {
        for (segments, apex, table) in [
            (PYRAMID_SEGMENTS, 3.0, &PYRAMID_FAN[..]),
            (OCTAHEDRON_SEGMENTS, 1.0, &OCTAHEDRON_FAN[..]),
        ] {
            let step = 360.0 / segments as f32;
            let mut pool = vec![Point3::new(0.0, apex, 0.0)];
            pool.extend((0..=segments).map(|k| {
                let angle = step * k as f32;
                Point3::new(cos_deg(angle), 0.0, sin_deg(angle))
            }));

            let fan = generic_fan(apex, 0.0, 360.0, segments, 1.0).unwrap();
            assert_eq!(table.len(), fan.len());
            for (&index, vertex) in table.iter().zip(&fan) {
                assert_relative_eq!(pool[index as usize], *vertex, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_pyramid_end_to_end() {
        let mut ctx = FigureContext::default();
        let [sides, base] =
            build_pyramid(&mut ctx, 1.0, Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0)).unwrap();

        assert_eq!(sides.mesh.triangle_count(), 5);
        assert_eq!(base.mesh.triangle_count(), 5);
        assert!(!sides.mesh.indices().is_empty());
        assert_eq!(distinct_face_colors(&sides.mesh).len(), 5);

        let base_colors: HashSet<_> = base.mesh.colors().iter().map(color_key).collect();
        assert_eq!(base_colors.len(), 1);
        // the base uses the palette after one rotation
        assert_eq!(base.mesh.colors()[0], ColorPalette::default().color(5));
        assert!(!sides.mesh.colors().contains(&base.mesh.colors()[0]));

        assert_eq!(sides.mesh.positions()[0], Point3::new(0.0, 3.0, 0.0));
        assert_eq!(base.mesh.positions()[0], Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_octahedron_halves() {
        let mut ctx = FigureContext::default();
        let [upper, lower] =
            build_octahedron(&mut ctx, 2.0, Vector3::zeros(), Vector3::y()).unwrap();

        assert_eq!(upper.mesh.triangle_count(), 4);
        assert_eq!(lower.mesh.triangle_count(), 4);
        assert_eq!(upper.mesh.positions()[0].y, 2.0);
        assert_eq!(lower.mesh.positions()[0].y, -2.0);

        // rotated by two: the lower half starts at the fifth stock color
        let stock = ColorPalette::default();
        assert_eq!(upper.mesh.colors()[0], stock.color(0));
        assert_eq!(lower.mesh.colors()[0], stock.color(4));
        assert_eq!(lower.mesh.colors()[3], stock.color(5));
        assert_eq!(distinct_face_colors(&lower.mesh).len(), 4);

        assert!(matches!(
            upper.animation.variant(),
            AnimationVariant::BouncingRotate { .. }
        ));
    }

    #[test]
    fn test_palette_rotation_carries_across_figures() {
        let mut ctx = FigureContext::default();
        build_pyramid(&mut ctx, 1.0, Vector3::zeros(), Vector3::y()).unwrap();
        let [upper, _] = build_octahedron(&mut ctx, 1.0, Vector3::zeros(), Vector3::y()).unwrap();
        assert_eq!(upper.mesh.colors()[0], ColorPalette::default().color(5));
        assert_eq!(ctx.palette().color(0), ColorPalette::default().color(3));
    }

    #[test]
    fn test_halves_share_placement_but_not_state() {
        let mut ctx = FigureContext::default();
        let translation = Vector3::new(-1.0, 0.5, 0.0);
        let [mut sides, base] = build_pyramid(&mut ctx, 1.0, translation, Vector3::y()).unwrap();
        assert_eq!(sides.model(), base.model());

        sides.update(std::time::Duration::from_millis(500));
        assert_ne!(sides.model(), base.model());
    }

    #[test]
    fn test_scutoid_caps_offsets() {
        let mut ctx = FigureContext::default();
        let [top, bottom] =
            build_scutoid_caps(&mut ctx, 2.0, Vector3::new(1.0, 0.0, 0.0), Vector3::y()).unwrap();
        assert_eq!(top.mesh.triangle_count(), 6);
        assert_eq!(bottom.mesh.triangle_count(), 5);
        assert_eq!(top.model()[(1, 3)], 3.0);
        assert_eq!(bottom.model()[(1, 3)], -3.0);
        assert_eq!(top.model()[(0, 3)], 1.0);
    }

    #[test]
    fn test_invalid_axis_propagates() {
        let mut ctx = FigureContext::default();
        let result = build_pyramid(&mut ctx, 1.0, Vector3::zeros(), Vector3::zeros());
        assert!(matches!(result, Err(FigureError::DegenerateAxis(_))));
    }
}
