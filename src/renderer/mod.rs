//! Rendering module
//!
//! The scene talks to a [`Surface`]; a window backend implements it with its
//! own primitives. [`VertexSurface`] tessellates everything on the CPU into
//! a flat triangle list ready for upload.

pub mod shapes;
pub mod surface;
pub mod vertex;

pub use surface::{TextItem, VertexSurface};
pub use vertex::{Vertex, colors};

use glam::Vec2;

/// Stateless drawing primitives, called once per entity per frame
pub trait Surface {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);

    fn draw_rect(&mut self, origin: Vec2, size: Vec2, color: [f32; 4]);

    /// Upper half of the band between the two radii
    fn draw_arc(&mut self, center: Vec2, inner_radius: f32, outer_radius: f32, color: [f32; 4]);

    fn draw_point(&mut self, position: Vec2, radius: f32, color: [f32; 4]);

    /// `position` is the top-left corner of the text
    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: [f32; 4]);

    /// Width in pixels `text` would take at `size`
    fn measure_text(&self, text: &str, size: f32) -> f32;
}
