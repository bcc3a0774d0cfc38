pub mod sparks;
