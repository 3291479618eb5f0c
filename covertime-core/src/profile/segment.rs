//! Speed segments

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cover position in percent (0 = closed, 100 = open)
pub type Position = u8;

/// Fully closed position
pub const POSITION_CLOSED: Position = 0;

/// Fully open position
pub const POSITION_OPEN: Position = 100;

/// Maximum segments per travel direction
pub const MAX_PROFILE_SEGMENTS: usize = 16;

/// Segment list for one travel direction
pub type SegmentList = heapless::Vec<Segment, MAX_PROFILE_SEGMENTS>;

/// One stretch of a travel profile
///
/// A segment covers the range from the previous segment's end (or 0 for the
/// first segment) up to `end_position`. Segments are always listed from
/// closed to open, also for the downward profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Position where this segment ends
    pub end_position: Position,
    /// Seconds needed to cross the whole segment
    pub duration_s: f32,
}

impl Segment {
    /// Create a segment
    pub const fn new(end_position: Position, duration_s: f32) -> Self {
        Self {
            end_position,
            duration_s,
        }
    }

    /// Single segment spanning the whole range at constant speed
    pub const fn full_travel(duration_s: f32) -> Self {
        Self::new(POSITION_OPEN, duration_s)
    }
}

impl From<(Position, f32)> for Segment {
    fn from((end_position, duration_s): (Position, f32)) -> Self {
        Self::new(end_position, duration_s)
    }
}

/// A segment resolved to its position range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRange {
    /// Lower bound of the range
    pub start: f32,
    /// Upper bound of the range
    pub end: f32,
    /// Seconds to cross the range
    pub duration_s: f32,
}

impl SegmentRange {
    /// Width of the range in percent
    pub fn span(&self) -> f32 {
        self.end - self.start
    }
}

/// Resolve the segment at `index` to its range
///
/// Returns `None` when `index` is out of bounds.
pub fn segment_range(segments: &[Segment], index: usize) -> Option<SegmentRange> {
    let segment = segments.get(index)?;
    let start = match index {
        0 => POSITION_CLOSED,
        _ => segments[index - 1].end_position,
    };

    Some(SegmentRange {
        start: start as f32,
        end: segment.end_position as f32,
        duration_s: segment.duration_s,
    })
}
