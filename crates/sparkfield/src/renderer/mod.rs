pub mod instance;
pub mod surface;

// Re-export key types for convenient access
pub use instance::{SparkInstance, SparkBuffer};
pub use surface::SparkSurface;
