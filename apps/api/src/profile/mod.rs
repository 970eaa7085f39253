// Profile engine: classification of (name, location) and synthetic profile generation.
// Everything here is stateless; the only shared data is the static lookup tables.

pub mod generator;
pub mod handlers;
pub mod industry;
pub mod models;
pub mod tables;
pub mod validation;
