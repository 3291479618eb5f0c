//! Travel profiles
//!
//! A profile stores, for each travel direction, how long the cover takes to
//! cross each part of its range.

pub mod error;
pub mod segment;
pub mod travel;

pub use error::ConfigError;
pub use segment::{
    Position, Segment, SegmentList, MAX_PROFILE_SEGMENTS, POSITION_CLOSED, POSITION_OPEN,
};
pub use travel::{DirectionProfile, TravelProfile};
