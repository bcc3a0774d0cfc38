//! A single spark particle.

use glam::Vec2;

use super::color::SparkColor;
use super::properties::SparkProperties;
use super::rng::Rng;
use crate::renderer::surface::SparkSurface;

/// How a spark is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SparkShape {
    /// Filled circle of radius `size` centered on the position.
    #[default]
    Circle,
    /// Filled square of side `size` with its top-left corner on the position.
    Rect,
}

/// A single spark with physics and rendering state.
#[derive(Debug, Clone)]
pub struct Spark {
    position: Vec2,
    velocity: Vec2,
    size: f32,
    fade_rate: f32,
    velocity_rate: f32,
    gravity: f32,
    base_color: SparkColor,
    color: SparkColor,
    swade: bool,
    swade_direction: bool,
    swade_accumulator: f32,
    fade_accumulator: f32,
    alive: bool,
    shape: SparkShape,
}

impl Spark {
    /// Maximum swade increment per step.
    pub const SWADE_STEP: f32 = 0.01;
    /// Per-step probability of reversing the swade drift.
    pub const SWADE_FLIP_CHANCE: f32 = 0.05;

    /// Create a spark that takes its tunables from the current property values.
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        color: SparkColor,
        properties: &SparkProperties,
        rng: &mut Rng,
    ) -> Self {
        Self {
            position,
            velocity,
            size: properties.size,
            fade_rate: properties.fade_rate,
            velocity_rate: properties.velocity_rate,
            gravity: properties.gravity,
            base_color: color,
            color,
            swade: properties.swade,
            swade_direction: rng.next_bool(),
            swade_accumulator: 0.0,
            fade_accumulator: 0.0,
            alive: true,
            shape: SparkShape::Circle,
        }
    }

    pub fn with_shape(mut self, shape: SparkShape) -> Self {
        self.shape = shape;
        self
    }

    /// Advance one fixed step. `_delta_time` is accepted for symmetry with the
    /// frame loop but not used: every call moves the spark by the same amount.
    pub fn update(&mut self, _delta_time: f32, viewport_width: f32, viewport_height: f32, rng: &mut Rng) {
        if !self.alive {
            return;
        }

        self.velocity.y += self.gravity;
        self.position += self.velocity;

        if self.swade {
            let step = rng.range_f32(0.0, Self::SWADE_STEP);
            if self.swade_direction {
                self.swade_accumulator += step;
            } else {
                self.swade_accumulator -= step;
            }
            if rng.chance(Self::SWADE_FLIP_CHANCE) {
                self.swade_direction = !self.swade_direction;
                self.swade_accumulator = 0.0;
            }
        }
        // Same drift on both axes.
        self.position += Vec2::splat(self.swade_accumulator);

        self.fade_accumulator += self.fade_rate;
        self.color = self.base_color.faded(self.fade_accumulator);

        let p = self.position;
        let outside = p.x < 0.0 || p.x > viewport_width || p.y < 0.0 || p.y > viewport_height;
        if outside || self.color.is_black() {
            self.alive = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.alive
    }

    pub fn render(&self, surface: &mut dyn SparkSurface) {
        match self.shape {
            SparkShape::Circle => surface.fill_circle(self.position, self.size, self.color),
            SparkShape::Rect => surface.fill_rect(self.position, self.size, self.color),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn color(&self) -> SparkColor {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn shape(&self) -> SparkShape {
        self.shape
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn fade_rate(&self) -> f32 {
        self.fade_rate
    }

    /// Velocity multiplier captured at creation. Recorded only; motion ignores it.
    pub fn velocity_rate(&self) -> f32 {
        self.velocity_rate
    }

    pub fn swade(&self) -> bool {
        self.swade
    }

    pub fn swade_accumulator(&self) -> f32 {
        self.swade_accumulator
    }

    pub fn fade_accumulator(&self) -> f32 {
        self.fade_accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::instance::{SparkBuffer, SparkInstance};

    fn spark_at(x: f32, y: f32, vx: f32, vy: f32, props: &SparkProperties) -> Spark {
        let mut rng = Rng::new(42);
        Spark::new(Vec2::new(x, y), Vec2::new(vx, vy), SparkColor::WHITE, props, &mut rng)
    }

    #[test]
    fn single_step_with_defaults() {
        let props = SparkProperties::default();
        let mut s = spark_at(10.0, 10.0, 0.0, 0.0, &props);
        let mut rng = Rng::new(1);
        s.update(0.016, 800.0, 800.0, &mut rng);

        assert_eq!(s.position(), Vec2::new(10.0, 10.0));
        assert_eq!(s.color(), SparkColor::WHITE, "ceil(254.95) is 255");
        assert!(s.is_active());
    }

    #[test]
    fn gravity_accumulates_every_step() {
        let mut props = SparkProperties::default();
        props.gravity = 0.5;
        let mut s = spark_at(100.0, 0.0, 0.0, 1.0, &props);
        let mut rng = Rng::new(1);
        for _ in 0..10 {
            s.update(0.016, 10_000.0, 10_000.0, &mut rng);
        }
        assert_eq!(s.velocity().y, 1.0 + 10.0 * 0.5);
        assert!(s.is_active());
    }

    #[test]
    fn delta_time_does_not_scale_motion() {
        let props = SparkProperties::default();
        let mut a = spark_at(10.0, 10.0, 2.0, 3.0, &props);
        let mut b = a.clone();
        let mut rng = Rng::new(1);
        a.update(0.001, 800.0, 800.0, &mut rng);
        b.update(5.0, 800.0, 800.0, &mut rng);
        assert_eq!(a.position(), b.position());
        assert_eq!(a.position(), Vec2::new(12.0, 13.0));
    }

    #[test]
    fn deactivates_on_exact_step_leaving_viewport() {
        let props = SparkProperties::default();
        // 90 -> 95 -> 100 (edge, still inside) -> 105 (outside)
        let mut s = spark_at(90.0, 50.0, 5.0, 0.0, &props);
        let mut rng = Rng::new(1);
        s.update(0.0, 100.0, 100.0, &mut rng);
        assert!(s.is_active());
        s.update(0.0, 100.0, 100.0, &mut rng);
        assert!(s.is_active(), "x == width is inside");
        s.update(0.0, 100.0, 100.0, &mut rng);
        assert!(!s.is_active());
    }

    #[test]
    fn deactivates_when_crossing_zero() {
        let props = SparkProperties::default();
        let mut s = spark_at(50.0, 0.5, 0.0, -1.0, &props);
        let mut rng = Rng::new(1);
        s.update(0.0, 100.0, 100.0, &mut rng);
        assert!(!s.is_active());
    }

    #[test]
    fn fades_to_black_on_exact_step() {
        let mut props = SparkProperties::default();
        props.fade_rate = 1.0;
        let mut s = spark_at(10.0, 10.0, 0.0, 0.0, &props);
        let mut rng = Rng::new(1);
        for step in 1..255 {
            s.update(0.0, 800.0, 800.0, &mut rng);
            assert!(s.is_active(), "died early at step {}", step);
        }
        assert_eq!(s.color(), SparkColor::rgba(1, 1, 1, 255));
        s.update(0.0, 800.0, 800.0, &mut rng);
        assert!(!s.is_active());
        assert_eq!(s.color(), SparkColor::rgba(0, 0, 0, 255));
    }

    #[test]
    fn default_fade_blacks_out_on_step_5100() {
        let props = SparkProperties::default();
        let mut s = spark_at(10.0, 10.0, 0.0, 0.0, &props);
        let mut rng = Rng::new(1);
        let mut last_accumulator = 0.0;
        for step in 1..5100 {
            s.update(0.016, 800.0, 800.0, &mut rng);
            assert!(s.fade_accumulator() >= last_accumulator);
            last_accumulator = s.fade_accumulator();
            assert!(s.is_active(), "died early at step {}", step);
            assert!(!s.color().is_black(), "black early at step {}", step);
        }
        assert_eq!(s.color(), SparkColor::rgba(1, 1, 1, 255));

        s.update(0.016, 800.0, 800.0, &mut rng);
        assert!(!s.is_active());
        assert!(s.color().is_black());
    }

    #[test]
    fn partially_colored_spark_lives_until_every_channel_is_zero() {
        let mut props = SparkProperties::default();
        props.fade_rate = 10.0;
        let mut rng = Rng::new(3);
        let mut s = Spark::new(
            Vec2::new(5.0, 5.0),
            Vec2::ZERO,
            SparkColor::rgba(255, 20, 0, 255),
            &props,
            &mut rng,
        );
        s.update(0.0, 800.0, 800.0, &mut rng);
        s.update(0.0, 800.0, 800.0, &mut rng);
        assert_eq!(s.color().g, 0);
        assert!(s.is_active(), "red channel still lit");
    }

    #[test]
    fn swade_drifts_both_axes_equally() {
        let mut props = SparkProperties::default();
        props.swade = true;
        props.fade_rate = 0.0;
        let mut s = spark_at(400.0, 400.0, 0.0, 0.0, &props);
        let mut rng = Rng::new(99);
        for _ in 0..50 {
            s.update(0.0, 800.0, 800.0, &mut rng);
        }
        let p = s.position();
        assert_eq!(p.x - 400.0, p.y - 400.0);
    }

    #[test]
    fn swade_flips_direction_and_restarts_from_zero() {
        let mut props = SparkProperties::default();
        props.swade = true;
        props.fade_rate = 0.0;
        let mut s = spark_at(400.0, 400.0, 0.0, 0.0, &props);
        let mut rng = Rng::new(2024);

        let mut previous = 0.0f32;
        // Sign of the drift before the latest run of resets, and resets since.
        let mut last_sign = 0.0f32;
        let mut resets_since = 0;
        let mut flips = 0;
        for _ in 0..400 {
            s.update(0.0, 800.0, 800.0, &mut rng);
            let current = s.swade_accumulator();
            if current == 0.0 {
                resets_since += 1;
                if previous != 0.0 {
                    flips += 1;
                }
            } else {
                assert!(
                    (current - previous).abs() <= Spark::SWADE_STEP,
                    "step moved drift by {}",
                    current - previous
                );
                if previous == 0.0 && last_sign != 0.0 && resets_since > 0 {
                    let expected = if resets_since % 2 == 1 { -last_sign } else { last_sign };
                    assert_eq!(current.signum(), expected, "drift must reverse after a flip");
                }
                last_sign = current.signum();
                resets_since = 0;
            }
            previous = current;
        }
        assert!(flips >= 3, "only {} flips in 400 steps", flips);
    }

    #[test]
    fn no_swade_means_no_drift() {
        let props = SparkProperties::default();
        let mut s = spark_at(400.0, 400.0, 0.0, 0.0, &props);
        let mut rng = Rng::new(99);
        for _ in 0..20 {
            s.update(0.0, 800.0, 800.0, &mut rng);
        }
        assert_eq!(s.swade_accumulator(), 0.0);
        assert_eq!(s.position(), Vec2::new(400.0, 400.0));
    }

    #[test]
    fn dead_spark_is_not_advanced() {
        let props = SparkProperties::default();
        let mut s = spark_at(50.0, 50.0, 100.0, 0.0, &props);
        let mut rng = Rng::new(1);
        s.update(0.0, 100.0, 100.0, &mut rng);
        assert!(!s.is_active());
        let frozen = s.position();
        s.update(0.0, 100.0, 100.0, &mut rng);
        assert_eq!(s.position(), frozen);
    }

    #[test]
    fn render_uses_shape_primitive() {
        let props = SparkProperties::default();
        let circle = spark_at(10.0, 20.0, 0.0, 0.0, &props);
        let rect = spark_at(30.0, 40.0, 0.0, 0.0, &props).with_shape(SparkShape::Rect);

        let mut buf = SparkBuffer::new();
        circle.render(&mut buf);
        rect.render(&mut buf);

        assert_eq!(buf.instances[0].shape, SparkInstance::SHAPE_CIRCLE);
        assert_eq!((buf.instances[0].x, buf.instances[0].y), (10.0, 20.0));
        assert_eq!(buf.instances[0].size, 1.5);
        assert_eq!(buf.instances[1].shape, SparkInstance::SHAPE_RECT);
        assert_eq!((buf.instances[1].x, buf.instances[1].y), (30.0, 40.0));
    }
}
