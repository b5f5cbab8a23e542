// Placement Predictor - app/mod.rs
//
// Application layer: state management and the prediction workflow.
// Dependencies: core layer, platform data types.
// Must NOT depend on: ui, direct I/O.

pub mod predict;
pub mod state;
