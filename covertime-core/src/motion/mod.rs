//! Position estimation
//!
//! Turns elapsed travel time into a cover position by walking the travel
//! profile.

pub mod estimator;

pub use estimator::{estimate_position, interpolate_position, TravelRange, Traversal};
