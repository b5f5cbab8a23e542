// Placement Predictor - core/mod.rs
//
// Core business logic layer.
// Dependencies: util, serde.
// Must NOT depend on: ui, platform, app, or filesystem access.

pub mod features;
pub mod inference;
pub mod model;
pub mod summary;
pub mod validate;
