//! Spark particle system: spark lifecycle, tunable properties, and the
//! runtime control protocol.
//!
//! `SparkManager` is the facade the frame loop talks to. Each frame the host
//! calls `update_sparks` and `render_sparks`, creates sparks at its own spawn
//! points, and forwards control input to `change_spark_property`.

mod color;
mod properties;
mod rng;
mod spark;

pub use color::SparkColor;
pub use properties::{Baseline, RandomModes, SparkProperties, Tunable};
pub use rng::Rng;
pub use spark::{Spark, SparkShape};

use glam::Vec2;

use crate::api::config::SparkConfig;
use crate::input::control::{ControlQueue, SparkOption};
use crate::renderer::surface::SparkSurface;

/// Owns the spark properties and the live spark collection.
pub struct SparkManager {
    properties: SparkProperties,
    sparks: Vec<Spark>,
    generation_enabled: bool,
    /// Spawn cadence timer. Reserved: nothing reads it yet.
    spark_ticks: f32,
    rng: Rng,
}

impl SparkManager {
    pub fn new(config: &SparkConfig) -> Self {
        let properties = SparkProperties::default();
        SparkManager {
            spark_ticks: properties.spawn_rate,
            properties,
            sparks: Vec::with_capacity(config.initial_capacity),
            generation_enabled: false,
            rng: Rng::new(config.seed),
        }
    }

    /// Create a manager with default config and the given RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&SparkConfig::default().with_seed(seed))
    }

    /// Randomize any properties in random mode, then add a circle spark.
    /// The `limit` property is not enforced here.
    pub fn create_spark(&mut self, x: f32, y: f32, vx: f32, vy: f32, color: impl Into<SparkColor>) {
        self.create_spark_with_shape(x, y, vx, vy, color, SparkShape::Circle);
    }

    pub fn create_spark_with_shape(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        color: impl Into<SparkColor>,
        shape: SparkShape,
    ) {
        self.properties.randomize_properties(&mut self.rng);
        let spark = Spark::new(
            Vec2::new(x, y),
            Vec2::new(vx, vy),
            color.into(),
            &self.properties,
            &mut self.rng,
        )
        .with_shape(shape);
        self.sparks.push(spark);
    }

    /// Advance every spark one step and drop the ones that died.
    /// Does nothing while generation is disabled.
    pub fn update_sparks(&mut self, delta_time: f32, viewport_width: f32, viewport_height: f32) {
        if !self.generation_enabled {
            return;
        }
        let rng = &mut self.rng;
        self.sparks.retain_mut(|spark| {
            spark.update(delta_time, viewport_width, viewport_height, rng);
            spark.is_active()
        });
    }

    /// Draw every live spark in collection order.
    /// Does nothing while generation is disabled.
    pub fn render_sparks(&self, surface: &mut dyn SparkSurface) {
        if !self.generation_enabled {
            return;
        }
        for spark in &self.sparks {
            spark.render(surface);
        }
    }

    /// Apply one control command.
    ///
    /// For the numeric tunables a `value` of zero turns random mode on; any
    /// other value leaves random mode (restoring the baseline first) and adds
    /// `value`. For swade, a nonzero value turns random mode on and zero
    /// flips or clears it.
    pub fn change_spark_property(&mut self, option: SparkOption, value: f32) {
        match option {
            SparkOption::Limit => self.change_tunable(Tunable::Limit, value),
            SparkOption::Spawn => self.change_tunable(Tunable::SpawnRate, value),
            SparkOption::Velocity => self.change_tunable(Tunable::VelocityRate, value),
            SparkOption::Gravity => self.change_tunable(Tunable::Gravity, value),
            SparkOption::Size => self.change_tunable(Tunable::Size, value),
            SparkOption::Fade => self.change_tunable(Tunable::FadeRate, value),
            SparkOption::Swade => {
                if value != 0.0 {
                    self.properties.random.swade = true;
                    log::debug!("Swade: random mode on");
                } else {
                    self.properties.toggle_swade();
                    log::debug!("Swade: {}", self.properties.swade);
                }
            }
            SparkOption::Threshold => {
                self.properties.adjust_threshold(value);
                log::debug!("Threshold: {}", self.properties.threshold);
            }
            SparkOption::Reset => self.reset(),
            SparkOption::Spark => {
                self.generation_enabled = !self.generation_enabled;
                log::info!("spark generation {}", if self.generation_enabled { "on" } else { "off" });
            }
        }
    }

    fn change_tunable(&mut self, tunable: Tunable, value: f32) {
        if value == 0.0 {
            self.properties.set_random(tunable);
            log::debug!("{:?}: random mode on", tunable);
        } else {
            self.properties.adjust(tunable, value);
            log::debug!("{:?}: {} ({:+})", tunable, self.properties.get(tunable), value);
        }
    }

    /// String form of `change_spark_property` for token-based callers.
    /// Tokens that match no option are ignored.
    pub fn change_spark_property_str(&mut self, option: &str, value: f32) {
        match SparkOption::from_token(option) {
            Some(option) => self.change_spark_property(option, value),
            None => log::debug!("ignoring control token {:?}", option),
        }
    }

    /// Apply every queued control event in order.
    pub fn apply_controls(&mut self, queue: &mut ControlQueue) {
        for event in queue.drain() {
            self.change_spark_property(event.option, event.value);
        }
    }

    /// Restore default properties, clear all sparks and disable generation.
    pub fn reset(&mut self) {
        self.properties.reset();
        self.sparks.clear();
        self.generation_enabled = false;
        log::info!("sparks reset");
    }

    pub fn properties(&self) -> &SparkProperties {
        &self.properties
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn spark_count(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_generating(&self) -> bool {
        self.generation_enabled
    }

    pub fn spark_ticks(&self) -> f32 {
        self.spark_ticks
    }
}

impl Default for SparkManager {
    fn default() -> Self {
        Self::new(&SparkConfig::default())
    }
}
