use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::surface::SparkSurface;
use crate::systems::sparks::SparkColor;

/// Per-instance render data for a GPU spark renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SparkInstance {
    /// X of the circle center, or of the square's top-left corner.
    pub x: f32,
    /// Y of the circle center, or of the square's top-left corner.
    pub y: f32,
    /// Circle radius or square side length.
    pub size: f32,
    /// 0.0 = circle, 1.0 = rect.
    pub shape: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SparkInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const SHAPE_CIRCLE: f32 = 0.0;
    pub const SHAPE_RECT: f32 = 1.0;

    fn new(pos: Vec2, size: f32, shape: f32, color: SparkColor) -> Self {
        let [r, g, b, a] = color.to_f32();
        Self {
            x: pos.x,
            y: pos.y,
            size,
            shape,
            r,
            g,
            b,
            a,
        }
    }
}

/// Instance buffer that records spark draws for upload to the GPU.
/// Clear it at the start of each frame, then pass it to `render_sparks`.
pub struct SparkBuffer {
    pub instances: Vec<SparkInstance>,
}

impl SparkBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SparkInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as raw bytes, ready for a vertex buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for SparkBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SparkSurface for SparkBuffer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: SparkColor) {
        self.push(SparkInstance::new(center, radius, SparkInstance::SHAPE_CIRCLE, color));
    }

    fn fill_rect(&mut self, top_left: Vec2, side: f32, color: SparkColor) {
        self.push(SparkInstance::new(top_left, side, SparkInstance::SHAPE_RECT, color));
    }
}
