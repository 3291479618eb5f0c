//! Binary configuration persistence
//!
//! Configurations are stored in flash as postcard-encoded bytes. The
//! format version is checked on decode so that stale data from an older
//! firmware is rejected instead of misread.

use alloc::vec::Vec;

use covertime_core::config::CONFIG_VERSION;
use covertime_core::{CoverConfig, TravelProfile};

use crate::error::LoadError;

/// Maximum serialized config size (binary)
pub const MAX_CONFIG_SIZE: usize = 512;

/// Encode a configuration as postcard bytes
pub fn encode_config(config: &CoverConfig) -> Result<Vec<u8>, LoadError> {
    let bytes = postcard::to_allocvec(config).map_err(|_| LoadError::Encode)?;
    if bytes.len() > MAX_CONFIG_SIZE {
        log_warn!("encoded config too large: {} bytes", bytes.len());
        return Err(LoadError::Encode);
    }
    Ok(bytes)
}

/// Decode a configuration from postcard bytes
pub fn decode_config(bytes: &[u8]) -> Result<CoverConfig, LoadError> {
    log_debug!("decoding {} bytes of binary config", bytes.len());

    let config: CoverConfig = postcard::from_bytes(bytes).map_err(|_| LoadError::Decode)?;

    if config.version != CONFIG_VERSION {
        log_warn!(
            "config version mismatch: found {}, expected {}",
            config.version,
            CONFIG_VERSION
        );
        return Err(LoadError::VersionMismatch {
            found: config.version,
        });
    }

    Ok(config)
}

/// Decode a configuration and build its travel profile
pub fn decode_profile(bytes: &[u8]) -> Result<TravelProfile, LoadError> {
    let config = decode_config(bytes)?;
    Ok(config.to_profile()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covertime_core::profile::SegmentList;
    use covertime_core::{ConfigError, Segment, TravelDirection};
    use proptest::prelude::*;

    fn garage_door() -> CoverConfig {
        let mut segments_up = SegmentList::new();
        segments_up.push(Segment::new(10, 6.0)).unwrap();
        segments_up.push(Segment::new(90, 12.0)).unwrap();
        segments_up.push(Segment::new(100, 4.0)).unwrap();

        CoverConfig {
            travel_time_up: Some(22.0),
            travel_time_down: Some(18.5),
            segments_up: Some(segments_up),
            ..Default::default()
        }
    }

    #[test]
    fn test_binary_round_trip() {
        let config = garage_door();
        let bytes = encode_config(&config).unwrap();
        assert!(bytes.len() <= MAX_CONFIG_SIZE);

        let decoded = decode_config(&bytes).unwrap();
        assert_eq!(decoded, config);

        let profile = decode_profile(&bytes).unwrap();
        assert_eq!(profile.total_duration_s(TravelDirection::Up), 22.0);
        assert_eq!(profile.segments(TravelDirection::Down), &[Segment::new(100, 18.5)]);
    }

    #[test]
    fn test_version_mismatch() {
        let config = CoverConfig {
            version: CONFIG_VERSION + 1,
            ..garage_door()
        };
        let bytes = encode_config(&config).unwrap();

        assert_eq!(
            decode_config(&bytes),
            Err(LoadError::VersionMismatch {
                found: CONFIG_VERSION + 1
            })
        );
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = encode_config(&garage_door()).unwrap();
        assert_eq!(
            decode_config(&bytes[..bytes.len() / 2]),
            Err(LoadError::Decode)
        );
        assert_eq!(decode_config(&[]), Err(LoadError::Decode));
    }

    #[test]
    fn test_decode_profile_missing_direction() {
        let config = CoverConfig {
            travel_time_down: None,
            ..garage_door()
        };
        let bytes = encode_config(&config).unwrap();

        assert_eq!(
            decode_profile(&bytes),
            Err(LoadError::Profile(ConfigError::MissingTravelTime(
                TravelDirection::Down
            )))
        );
    }

    proptest! {
        #[test]
        fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let _ = decode_config(&bytes);
        }
    }
}
