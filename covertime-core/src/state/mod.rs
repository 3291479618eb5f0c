//! Travel state
//!
//! Tracks what the calculator knows about the cover: how confident the
//! position is, which way it is moving and where it is heading.

pub mod calculator;
pub mod types;

pub use calculator::TravelCalculator;
pub use types::{PositionType, TravelDirection, TravelSnapshot};
