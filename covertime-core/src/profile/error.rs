//! Profile construction errors

use crate::state::TravelDirection;

/// Errors raised while building a travel profile
///
/// These are the only failures the crate reports. Once a profile exists,
/// every calculator operation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Neither a segment list nor a total travel time was given
    MissingTravelTime(TravelDirection),
    /// More segments than [`MAX_PROFILE_SEGMENTS`](super::MAX_PROFILE_SEGMENTS)
    TooManySegments(TravelDirection),
}

impl ConfigError {
    /// Direction whose configuration was rejected
    pub fn direction(&self) -> TravelDirection {
        match self {
            Self::MissingTravelTime(direction) | Self::TooManySegments(direction) => *direction,
        }
    }
}
