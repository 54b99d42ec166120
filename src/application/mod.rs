//! Application layer: the pacing engine and the controller that drives it.
//!
//! [`engine::PacingEngine`] is a stateless validate-and-compute pipeline.
//! [`controller::PacingController`] owns one form's entries and result and
//! decides when the engine runs.

pub mod controller;
pub mod engine;
