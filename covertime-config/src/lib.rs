//! Configuration loading for covertime travel profiles
//!
//! Covers are configured in TOML and may be persisted as postcard binary:
//!
//! ```toml
//! # Flat travel times in seconds
//! travel_time_up = 32.5
//! travel_time_down = 30.0
//!
//! # Optional speed segments: [end_position, seconds]
//! segments_up = [[50, 10.0], [100, 40.0]]
//! ```
//!
//! - [`parse_config`] / [`load_profile`] read the TOML form
//! - [`encode_config`] / [`decode_config`] handle the binary form

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
extern crate covertime_core;

pub mod binary;
pub mod error;
pub mod toml;

pub use binary::{decode_config, decode_profile, encode_config, MAX_CONFIG_SIZE};
pub use error::LoadError;
pub use crate::toml::{load_profile, parse_config};
