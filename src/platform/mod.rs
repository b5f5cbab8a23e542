// Placement Predictor - platform/mod.rs
//
// Platform abstraction layer: configuration, file access, artifact loading.
// Dependencies: core (artifact types), util, directories crate.
// Must NOT depend on: app, ui.

pub mod artifacts;
pub mod config;
pub mod fs;
