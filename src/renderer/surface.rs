//! CPU tessellating surface

use glam::Vec2;

use super::Surface;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Average glyph advance as a fraction of font size
const GLYPH_ADVANCE: f32 = 0.5;
/// Circle segments for ringer points
const POINT_SEGMENTS: u32 = 24;
const CLEAR_EXTENT: Vec2 = Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);

/// Text queued for a glyph renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub position: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Surface that turns draw calls into one triangle list per frame
#[derive(Debug, Default)]
pub struct VertexSurface {
    vertices: Vec<Vertex>,
    texts: Vec<TextItem>,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data as raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }
}

impl Surface for VertexSurface {
    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.texts.clear();
        // Full-window backdrop so uploads carry the clear colour too
        self.vertices.extend(shapes::rect(Vec2::ZERO, CLEAR_EXTENT, color));
    }

    fn draw_rect(&mut self, origin: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(origin, size, color));
    }

    fn draw_arc(&mut self, center: Vec2, inner_radius: f32, outer_radius: f32, color: [f32; 4]) {
        let segments = shapes::segments_for_radius(outer_radius);
        self.vertices
            .extend(shapes::half_ring(center, inner_radius, outer_radius, color, segments));
    }

    fn draw_point(&mut self, position: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(position, radius, color, POINT_SEGMENTS));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: [f32; 4]) {
        self.texts.push(TextItem {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * GLYPH_ADVANCE
    }
}
