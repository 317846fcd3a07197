use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::color::Rgba;
use crate::components::layer::RenderLayer;
use crate::renderer::traits::Canvas;

/// Primitive kind stored in a [`DrawCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Primitive {
    Circle = 0,
    Rect = 1,
    Point = 2,
}

impl Primitive {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Circle),
            1 => Some(Self::Rect),
            2 => Some(Self::Point),
            _ => None,
        }
    }
}

/// One recorded draw call. 28 bytes, tightly packed.
///
/// `x`/`y` are the circle center, rectangle origin or point position.
/// `w` is the circle radius or rectangle width, `h` the rectangle height.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    pub kind: u32,
    pub layer: u32,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgba,
}

impl DrawCommand {
    pub const STRIDE_BYTES: usize = 28;

    pub fn primitive(&self) -> Option<Primitive> {
        Primitive::from_u32(self.kind)
    }

    pub fn render_layer(&self) -> Option<RenderLayer> {
        u8::try_from(self.layer).ok().and_then(RenderLayer::from_u8)
    }
}

/// A canvas that records the draw stream instead of rasterizing it.
///
/// The runner records each frame here and replays it onto the window;
/// tests inspect it directly.
pub struct DrawBuffer {
    commands: Vec<DrawCommand>,
    layer: RenderLayer,
}

impl DrawBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            commands: Vec::with_capacity(max),
            layer: RenderLayer::default(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.layer = RenderLayer::default();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands recorded for `layer`.
    pub fn count_in(&self, layer: RenderLayer) -> usize {
        self.commands
            .iter()
            .filter(|c| c.layer == layer.as_u8() as u32)
            .count()
    }

    /// Number of commands recorded for simulated entities (every layer but scenery).
    pub fn entity_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| c.render_layer().is_some_and(RenderLayer::is_entity))
            .count()
    }

    /// Raw bytes of the command stream.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.commands)
    }

    /// Send the recorded stream to another canvas, layer hints included.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        let mut current: Option<u32> = None;
        for cmd in &self.commands {
            if current != Some(cmd.layer) {
                if let Some(layer) = cmd.render_layer() {
                    canvas.begin_layer(layer);
                }
                current = Some(cmd.layer);
            }
            match cmd.primitive() {
                Some(Primitive::Circle) => canvas.fill_circle(Vec2::new(cmd.x, cmd.y), cmd.w, cmd.color),
                Some(Primitive::Rect) => {
                    canvas.fill_rect(Vec2::new(cmd.x, cmd.y), Vec2::new(cmd.w, cmd.h), cmd.color)
                }
                Some(Primitive::Point) => canvas.draw_point(Vec2::new(cmd.x, cmd.y), cmd.color),
                None => log::warn!("skipping draw command with unknown kind {}", cmd.kind),
            }
        }
    }

    fn record(&mut self, kind: Primitive, pos: Vec2, w: f32, h: f32, color: Rgba) {
        self.commands.push(DrawCommand {
            kind: kind as u32,
            layer: self.layer.as_u8() as u32,
            x: pos.x,
            y: pos.y,
            w,
            h,
            color,
        });
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for DrawBuffer {
    fn begin_layer(&mut self, layer: RenderLayer) {
        self.layer = layer;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.record(Primitive::Circle, center, radius, radius, color);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.record(Primitive::Rect, origin, size.x, size.y, color);
    }

    fn draw_point(&mut self, pos: Vec2, color: Rgba) {
        self.record(Primitive::Point, pos, 0.0, 0.0, color);
    }
}
