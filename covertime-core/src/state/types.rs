//! Travel state types

use crate::profile::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Confidence in the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionType {
    /// No position has ever been set
    #[default]
    Unknown,
    /// Estimated from a travel command and elapsed time
    Calculated,
    /// Reported by an authoritative source
    Confirmed,
}

/// Travel direction of the cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TravelDirection {
    /// Opening (towards 100)
    Up,
    /// Closing (towards 0)
    Down,
    /// Not moving
    #[default]
    Stopped,
}

impl TravelDirection {
    /// Direction needed to get from `start` to `target`
    pub fn between(start: Position, target: Position) -> Self {
        match target.cmp(&start) {
            core::cmp::Ordering::Greater => Self::Up,
            core::cmp::Ordering::Less => Self::Down,
            core::cmp::Ordering::Equal => Self::Stopped,
        }
    }

    /// Reverse direction (stopped stays stopped)
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Stopped => Self::Stopped,
        }
    }

    /// Check if this direction means the cover is moving
    pub fn is_moving(&self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

/// Persistable view of the calculator state
///
/// Integrations store this across restarts and hand it back to
/// [`TravelCalculator::restore`](super::TravelCalculator::restore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TravelSnapshot {
    /// Confidence of `position`
    pub position_type: PositionType,
    /// Position at the time of the snapshot
    pub position: Position,
}
