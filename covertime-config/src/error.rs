//! Configuration loading errors

use covertime_core::ConfigError;

/// Errors raised while loading a cover configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// TOML text could not be parsed
    Toml,
    /// Configuration could not be serialized
    Encode,
    /// Binary data could not be deserialized
    Decode,
    /// Binary data has an unsupported format version
    VersionMismatch {
        /// Version found in the data
        found: u8,
    },
    /// Configuration was read but describes no usable profile
    Profile(ConfigError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Profile(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covertime_core::TravelDirection;

    #[test]
    fn test_from_config_error() {
        let error: LoadError = ConfigError::MissingTravelTime(TravelDirection::Up).into();
        assert_eq!(
            error,
            LoadError::Profile(ConfigError::MissingTravelTime(TravelDirection::Up))
        );
    }
}
