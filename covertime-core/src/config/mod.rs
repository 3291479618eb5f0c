//! Configuration types
//!
//! Board-agnostic cover configuration. Integrations fill this in from TOML
//! or from postcard-encoded flash data (see the `covertime-config` crate)
//! and turn it into a [`TravelProfile`](crate::profile::TravelProfile).

pub mod types;

pub use types::*;
