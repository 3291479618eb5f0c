//! TOML configuration parsing

use covertime_core::{CoverConfig, TravelProfile};

use crate::error::LoadError;

/// Parse a cover configuration from TOML text
///
/// Missing keys are left empty; whether the result is usable is decided by
/// [`CoverConfig::to_profile`].
pub fn parse_config(input: &str) -> Result<CoverConfig, LoadError> {
    let config: CoverConfig = ::toml::from_str(input).map_err(|_e| {
        log_warn!("TOML parse error");
        LoadError::Toml
    })?;

    log_config_summary(&config);
    Ok(config)
}

/// Parse TOML text and build the travel profile it describes
pub fn load_profile(input: &str) -> Result<TravelProfile, LoadError> {
    let config = parse_config(input)?;
    Ok(config.to_profile()?)
}

fn log_config_summary(config: &CoverConfig) {
    log_debug!(
        "cover config v{}: up {} segments, down {} segments",
        config.version,
        config.segments_up.as_ref().map_or(0, |s| s.len()),
        config.segments_down.as_ref().map_or(0, |s| s.len())
    );
}
