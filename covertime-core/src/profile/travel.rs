//! Per-direction travel profiles

use super::error::ConfigError;
use super::segment::{Position, Segment, SegmentList};
use crate::motion::Traversal;
use crate::state::TravelDirection;

/// Configuration input for one travel direction
///
/// If both fields are set, the explicit segments win. A direction with
/// neither is rejected by [`TravelProfile::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionProfile<'a> {
    /// Explicit segments, listed from closed to open
    pub segments: Option<&'a [Segment]>,
    /// Total time for a full 0 to 100 travel at constant speed
    pub travel_time_s: Option<f32>,
}

impl<'a> DirectionProfile<'a> {
    /// Constant speed over the whole range
    pub const fn from_time(travel_time_s: f32) -> Self {
        Self {
            segments: None,
            travel_time_s: Some(travel_time_s),
        }
    }

    /// Explicit speed segments
    pub const fn from_segments(segments: &'a [Segment]) -> Self {
        Self {
            segments: Some(segments),
            travel_time_s: None,
        }
    }
}

/// Travel profile for both directions
///
/// Both segment lists describe travel from 0 to 100. Downward estimates
/// read the down list from the open end back to the closed end, so the same
/// representation serves both directions. A profile never changes after
/// construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelProfile {
    segments_up: SegmentList,
    segments_down: SegmentList,
    travel_time_up_s: Option<f32>,
    travel_time_down_s: Option<f32>,
}

impl TravelProfile {
    /// Build a profile from per-direction configuration
    pub fn new(up: DirectionProfile<'_>, down: DirectionProfile<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            segments_up: build_segments(TravelDirection::Up, &up)?,
            segments_down: build_segments(TravelDirection::Down, &down)?,
            travel_time_up_s: up.travel_time_s,
            travel_time_down_s: down.travel_time_s,
        })
    }

    /// Constant-speed profile from full travel times
    pub fn from_times(travel_time_up_s: f32, travel_time_down_s: f32) -> Self {
        Self {
            segments_up: single_segment(travel_time_up_s),
            segments_down: single_segment(travel_time_down_s),
            travel_time_up_s: Some(travel_time_up_s),
            travel_time_down_s: Some(travel_time_down_s),
        }
    }

    /// Profile from explicit segment lists
    pub fn from_segments(up: &[Segment], down: &[Segment]) -> Result<Self, ConfigError> {
        Self::new(
            DirectionProfile::from_segments(up),
            DirectionProfile::from_segments(down),
        )
    }

    /// Segments used for travel in `direction`
    ///
    /// A stopped cover has no travel segments of its own; the down list is
    /// returned for it.
    pub fn segments(&self, direction: TravelDirection) -> &[Segment] {
        match direction {
            TravelDirection::Up => &self.segments_up,
            TravelDirection::Down | TravelDirection::Stopped => &self.segments_down,
        }
    }

    /// Flat travel time the profile was configured with, if any
    pub fn travel_time_s(&self, direction: TravelDirection) -> Option<f32> {
        match direction {
            TravelDirection::Up => self.travel_time_up_s,
            TravelDirection::Down => self.travel_time_down_s,
            TravelDirection::Stopped => None,
        }
    }

    /// Time for a full travel in `direction`
    pub fn total_duration_s(&self, direction: TravelDirection) -> f32 {
        match direction {
            TravelDirection::Stopped => 0.0,
            _ => self.segments(direction).iter().map(|s| s.duration_s).sum(),
        }
    }

    /// Time needed to travel from `start` to `target`
    ///
    /// Zero when no motion is needed.
    pub fn travel_duration_s(&self, start: Position, target: Position) -> f32 {
        let direction = TravelDirection::between(start, target);
        Traversal::new(self.segments(direction), start, target, direction)
            .map(|range| range.duration_s)
            .sum()
    }
}

fn single_segment(travel_time_s: f32) -> SegmentList {
    SegmentList::from_slice(&[Segment::full_travel(travel_time_s)]).unwrap_or_default()
}

fn build_segments(
    direction: TravelDirection,
    profile: &DirectionProfile<'_>,
) -> Result<SegmentList, ConfigError> {
    match (profile.segments, profile.travel_time_s) {
        (Some(segments), _) => {
            SegmentList::from_slice(segments).map_err(|_| ConfigError::TooManySegments(direction))
        }
        (None, Some(travel_time_s)) => Ok(single_segment(travel_time_s)),
        (None, None) => Err(ConfigError::MissingTravelTime(direction)),
    }
}
