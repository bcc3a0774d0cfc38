//! Render surface contract for sparks.
//!
//! The host's rendering component owns the real drawing target (a window,
//! a canvas, an offscreen texture). Sparks only need two filled primitives,
//! so that is all this trait asks for.
//!
//! # Example Implementation
//!
//! ```ignore
//! struct CanvasSurface<'a> {
//!     canvas: &'a mut Canvas,
//! }
//!
//! impl SparkSurface for CanvasSurface<'_> {
//!     fn fill_circle(&mut self, center: Vec2, radius: f32, color: SparkColor) {
//!         self.canvas.circle(center.x, center.y, radius, color.to_f32());
//!     }
//!
//!     fn fill_rect(&mut self, top_left: Vec2, side: f32, color: SparkColor) {
//!         self.canvas.rect(top_left.x, top_left.y, side, side, color.to_f32());
//!     }
//! }
//! ```

use glam::Vec2;

use crate::systems::sparks::SparkColor;

/// Drawable target supporting the filled primitives sparks render with.
pub trait SparkSurface {
    /// Draw a filled circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: SparkColor);

    /// Draw a filled axis-aligned square with its top-left corner at `top_left`.
    fn fill_rect(&mut self, top_left: Vec2, side: f32, color: SparkColor);
}
