//! Board-agnostic travel calculator for motorized covers
//!
//! Covers driven by plain up/down relays have no position feedback. This
//! crate estimates where such a cover is from the time travel started and a
//! per-direction travel profile:
//!
//! - Travel profiles (multi-segment speed tables for up and down travel)
//! - Position estimation by walking the profile against elapsed time
//! - The travel state machine (unknown / calculated / confirmed positions)
//! - A clock seam so tests and firmware supply their own notion of "now"
//! - Configuration type definitions
//!
//! Positions are percentages: 0 is fully closed, 100 is fully open.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

#[macro_use]
pub mod logging;

pub mod clock;
pub mod config;
pub mod motion;
pub mod profile;
pub mod state;

pub use clock::{Clock, ManualClock};
pub use config::CoverConfig;
pub use profile::{ConfigError, DirectionProfile, Position, Segment, TravelProfile};
pub use state::{PositionType, TravelCalculator, TravelDirection, TravelSnapshot};
