//! Drawing contract between the simulation and a rasterizing backend.
//!
//! The engine never touches pixels. Every frame it describes the scene as a
//! stream of filled circles, rectangles and points in logical canvas
//! coordinates; a backend (a window, a recording buffer, a test double)
//! turns them into output.

use glam::Vec2;

use crate::components::color::Rgba;
use crate::components::layer::RenderLayer;

/// A surface the scene can be drawn onto.
///
/// # Example Implementation
///
/// ```ignore
/// struct Framebuffer { pixels: Vec<u32>, width: usize }
///
/// impl Canvas for Framebuffer {
///     fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) { /* ... */ }
///     fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) { /* ... */ }
///     fn draw_point(&mut self, pos: Vec2, color: Rgba) { /* ... */ }
/// }
/// ```
pub trait Canvas {
    /// Following primitives belong to `layer`. Layers arrive in draw order.
    fn begin_layer(&mut self, _layer: RenderLayer) {}

    /// Filled disc: every point within `radius` of `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Axis-aligned filled rectangle with its top-left corner at `origin`.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);

    /// A single pixel.
    fn draw_point(&mut self, pos: Vec2, color: Rgba);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn begin_layer(&mut self, layer: RenderLayer) {
        (**self).begin_layer(layer)
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        (**self).fill_circle(center, radius, color)
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        (**self).fill_rect(origin, size, color)
    }

    fn draw_point(&mut self, pos: Vec2, color: Rgba) {
        (**self).draw_point(pos, color)
    }
}
