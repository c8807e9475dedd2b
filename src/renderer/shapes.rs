//! Shape generation for 2D primitives
//!
//! All shapes are in screen pixels with y pointing down.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for the upper half of a ring (band between two radii)
pub fn half_ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let point = |r: f32, theta: f32| Vec2::new(center.x + r * theta.cos(), center.y - r * theta.sin());

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * PI;

        let inner1 = point(inner_radius, theta1);
        let outer1 = point(outer_radius, theta1);
        let inner2 = point(inner_radius, theta2);
        let outer2 = point(outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Segment count that keeps chords under ~4px for an arc of `radius`
pub fn segments_for_radius(radius: f32) -> u32 {
    ((PI * radius / 4.0).ceil() as u32).clamp(8, 256)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_ring_stays_above_center() {
        let center = Vec2::new(640.0, 620.0);
        let verts = half_ring(center, 98.0, 102.0, [1.0; 4], 32);
        assert_eq!(verts.len(), 32 * 6);
        for v in &verts {
            assert!(v.position[1] <= center.y + 1e-3);
            let r = (Vec2::from(v.position) - center).length();
            assert!((98.0 - 1e-3..=102.0 + 1e-3).contains(&r));
        }
    }

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
    }

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(60.0, 622.0), Vec2::new(1160.0, 4.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[5].position, [1220.0, 626.0]);
    }

    #[test]
    fn test_segments_scale_with_radius() {
        assert_eq!(segments_for_radius(1.0), 8);
        assert!(segments_for_radius(555.0) > segments_for_radius(55.0));
        assert_eq!(segments_for_radius(10_000.0), 256);
    }
}
