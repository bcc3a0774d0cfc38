pub mod api;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::SparkConfig;
pub use systems::sparks::{
    SparkManager, Spark, SparkShape, SparkColor,
    SparkProperties, Tunable, Baseline, RandomModes, Rng,
};
pub use input::control::{SparkOption, UnknownOption, ControlEvent, ControlQueue};
pub use renderer::surface::SparkSurface;
pub use renderer::instance::{SparkInstance, SparkBuffer};
