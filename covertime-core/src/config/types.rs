//! Cover configuration definitions

use crate::profile::{ConfigError, DirectionProfile, Segment, SegmentList, TravelProfile};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

#[cfg(feature = "serde")]
fn default_version() -> u8 {
    CONFIG_VERSION
}

/// Travel configuration for one cover
///
/// Each direction needs either a flat travel time or a segment list. When
/// both are present the segments are used and the flat time is kept for
/// reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoverConfig {
    /// Format version
    #[cfg_attr(feature = "serde", serde(default = "default_version"))]
    pub version: u8,
    /// Seconds for a full 0 to 100 travel
    #[cfg_attr(feature = "serde", serde(default))]
    pub travel_time_up: Option<f32>,
    /// Seconds for a full 100 to 0 travel
    #[cfg_attr(feature = "serde", serde(default))]
    pub travel_time_down: Option<f32>,
    /// Upward speed segments, listed from closed to open
    #[cfg_attr(feature = "serde", serde(default))]
    pub segments_up: Option<SegmentList>,
    /// Downward speed segments, also listed from closed to open
    #[cfg_attr(feature = "serde", serde(default))]
    pub segments_down: Option<SegmentList>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            travel_time_up: None,
            travel_time_down: None,
            segments_up: None,
            segments_down: None,
        }
    }
}

impl CoverConfig {
    /// Configuration with flat travel times for both directions
    pub fn from_times(travel_time_up: f32, travel_time_down: f32) -> Self {
        Self {
            travel_time_up: Some(travel_time_up),
            travel_time_down: Some(travel_time_down),
            ..Default::default()
        }
    }

    /// Upward part of the configuration
    pub fn up(&self) -> DirectionProfile<'_> {
        DirectionProfile {
            segments: self.segments_up.as_deref(),
            travel_time_s: self.travel_time_up,
        }
    }

    /// Downward part of the configuration
    pub fn down(&self) -> DirectionProfile<'_> {
        DirectionProfile {
            segments: self.segments_down.as_deref(),
            travel_time_s: self.travel_time_down,
        }
    }

    /// Build the travel profile described by this configuration
    pub fn to_profile(&self) -> Result<TravelProfile, ConfigError> {
        TravelProfile::new(self.up(), self.down())
    }
}

impl From<&TravelProfile> for CoverConfig {
    fn from(profile: &TravelProfile) -> Self {
        use crate::state::TravelDirection::{Down, Up};

        let segments = |direction| -> Option<SegmentList> {
            let list: &[Segment] = profile.segments(direction);
            SegmentList::from_slice(list).ok()
        };

        Self {
            version: CONFIG_VERSION,
            travel_time_up: profile.travel_time_s(Up),
            travel_time_down: profile.travel_time_s(Down),
            segments_up: segments(Up),
            segments_down: segments(Down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TravelDirection;

    #[test]
    fn test_config_from_times() {
        let config = CoverConfig::from_times(30.0, 28.0);
        assert_eq!(config.version, CONFIG_VERSION);

        let profile = config.to_profile().unwrap();
        assert_eq!(profile.total_duration_s(TravelDirection::Up), 30.0);
        assert_eq!(profile.total_duration_s(TravelDirection::Down), 28.0);
    }

    #[test]
    fn test_config_requires_both_directions() {
        let config = CoverConfig {
            travel_time_up: Some(30.0),
            ..Default::default()
        };
        assert_eq!(
            config.to_profile(),
            Err(ConfigError::MissingTravelTime(TravelDirection::Down))
        );
    }

    #[test]
    fn test_config_with_segments() {
        let mut segments = SegmentList::new();
        segments.push(Segment::new(50, 10.0)).unwrap();
        segments.push(Segment::new(100, 40.0)).unwrap();

        let config = CoverConfig {
            travel_time_down: Some(45.0),
            segments_up: Some(segments),
            ..Default::default()
        };

        let profile = config.to_profile().unwrap();
        assert_eq!(profile.segments(TravelDirection::Up).len(), 2);
        assert_eq!(profile.travel_time_s(TravelDirection::Up), None);
        assert_eq!(profile.travel_time_s(TravelDirection::Down), Some(45.0));
    }

    #[test]
    fn test_config_from_profile() {
        let profile = TravelProfile::from_times(12.0, 10.0);
        let config = CoverConfig::from(&profile);

        assert_eq!(config.travel_time_up, Some(12.0));
        assert_eq!(config.travel_time_down, Some(10.0));
        assert_eq!(config.to_profile().unwrap(), profile);
    }
}
