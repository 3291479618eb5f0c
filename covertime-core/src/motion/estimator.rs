//! Multi-segment time to position interpolation
//!
//! Travel from `start` to `target` crosses a run of profile segments. The
//! [`Traversal`] iterator clips those segments to the travelled stretch and
//! scales their durations to match. Walking the clipped ranges against the
//! elapsed time yields the position.
//!
//! Up and down travel share one code path. Positions are mapped into "travel
//! coordinates" where the cover always moves towards larger values: identity
//! for up, negation for down. Reading the down profile backwards in those
//! coordinates is the same problem as reading the up profile forwards.

use crate::profile::segment::{segment_range, Position, Segment};
use crate::state::TravelDirection;

/// Part of a travel, with the time it takes to cross
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelRange {
    /// Position where this range is entered
    pub from: f32,
    /// Position where this range is left
    pub to: f32,
    /// Seconds spent in this range
    pub duration_s: f32,
}

impl TravelRange {
    /// Position after `offset_s` seconds inside this range
    ///
    /// Never leaves the range, even when rounding pushes the fraction past 1.
    fn position_at(&self, offset_s: f32) -> f32 {
        let position = self.from + (self.to - self.from) * offset_s / self.duration_s;
        if self.to >= self.from {
            position.clamp(self.from, self.to)
        } else {
            position.clamp(self.to, self.from)
        }
    }
}

/// Iterator over the profile ranges crossed between two positions
///
/// Yields ranges in travel order. Segments entirely behind the start are
/// skipped, the rest are clipped to `[start, target]` and their duration is
/// scaled by the clipped share of the segment. Iteration ends with the
/// segment that reaches the target. A stopped direction yields nothing.
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    segments: &'a [Segment],
    direction: TravelDirection,
    /// Segments not yet visited
    remaining: usize,
    /// Start in travel coordinates
    start: f32,
    /// Target in travel coordinates
    target: f32,
    done: bool,
}

impl<'a> Traversal<'a> {
    /// Walk `segments` from `start` towards `target` in `direction`
    pub fn new(
        segments: &'a [Segment],
        start: Position,
        target: Position,
        direction: TravelDirection,
    ) -> Self {
        let sign = travel_sign(direction);
        Self {
            segments,
            direction,
            remaining: segments.len(),
            start: sign * start as f32,
            target: sign * target as f32,
            done: direction == TravelDirection::Stopped,
        }
    }

    /// Index of the next segment in travel order
    fn next_index(&mut self) -> Option<usize> {
        if self.done || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match self.direction {
            TravelDirection::Up => Some(self.segments.len() - 1 - self.remaining),
            _ => Some(self.remaining),
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = TravelRange;

    fn next(&mut self) -> Option<TravelRange> {
        let sign = travel_sign(self.direction);

        while let Some(index) = self.next_index() {
            let range = segment_range(self.segments, index)?;

            // Segment bounds in travel coordinates (entry <= exit)
            let (entry, exit) = match self.direction {
                TravelDirection::Up => (range.start, range.end),
                _ => (-range.end, -range.start),
            };

            if exit <= self.start {
                continue;
            }
            if exit >= self.target {
                self.done = true;
            }

            let from = entry.max(self.start);
            let to = exit.min(self.target);
            let span = exit - entry;
            if to > from && span > 0.0 {
                return Some(TravelRange {
                    from: sign * from,
                    to: sign * to,
                    duration_s: range.duration_s * (to - from) / span,
                });
            }
        }

        None
    }
}

fn travel_sign(direction: TravelDirection) -> f32 {
    match direction {
        TravelDirection::Up | TravelDirection::Stopped => 1.0,
        TravelDirection::Down => -1.0,
    }
}

/// Unclamped position after `elapsed_s` seconds of travel
///
/// Returns the end of the last range once the elapsed time exceeds the
/// total travel time, and `start` when no range is crossed at all.
pub fn interpolate_position(
    segments: &[Segment],
    start: Position,
    target: Position,
    direction: TravelDirection,
    elapsed_s: f32,
) -> f32 {
    let mut accumulated_s = 0.0;
    let mut position = start as f32;

    for range in Traversal::new(segments, start, target, direction) {
        if range.duration_s > 0.0 && elapsed_s <= accumulated_s + range.duration_s {
            return range.position_at(elapsed_s - accumulated_s);
        }
        accumulated_s += range.duration_s;
        position = range.to;
    }

    position
}

/// Estimated position after `elapsed_s` seconds of travel
///
/// Travel that is already complete, or a direction that does not lead to
/// the target, returns the target without looking at the time. The result
/// never passes the target and is truncated towards the start.
pub fn estimate_position(
    segments: &[Segment],
    start: Position,
    target: Position,
    direction: TravelDirection,
    elapsed_s: f32,
) -> Position {
    let already_there = match direction {
        TravelDirection::Up => target <= start,
        TravelDirection::Down => target >= start,
        TravelDirection::Stopped => true,
    };
    if already_there {
        return target;
    }

    let position = interpolate_position(segments, start, target, direction, elapsed_s);
    log_trace!(
        "estimate {} -> {} after {}s: {}",
        start,
        target,
        elapsed_s,
        position
    );

    match direction {
        TravelDirection::Up if position >= target as f32 => target,
        TravelDirection::Down if position <= target as f32 => target,
        _ => position as Position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FLAT_100: [Segment; 1] = [Segment::new(100, 100.0)];
    const FAST_THEN_SLOW: [Segment; 2] = [Segment::new(50, 10.0), Segment::new(100, 40.0)];

    fn ranges(segments: &[Segment], start: Position, target: Position) -> Vec<TravelRange> {
        let direction = TravelDirection::between(start, target);
        Traversal::new(segments, start, target, direction).collect()
    }

    #[test]
    fn test_up_traversal_clips_and_scales() {
        let crossed = ranges(&FAST_THEN_SLOW, 20, 80);
        assert_eq!(
            crossed,
            vec![
                TravelRange {
                    from: 20.0,
                    to: 50.0,
                    duration_s: 6.0
                },
                TravelRange {
                    from: 50.0,
                    to: 80.0,
                    duration_s: 24.0
                },
            ]
        );
    }

    #[test]
    fn test_down_traversal_reads_profile_backwards() {
        let crossed = ranges(&FAST_THEN_SLOW, 80, 20);
        assert_eq!(
            crossed,
            vec![
                TravelRange {
                    from: 80.0,
                    to: 50.0,
                    duration_s: 24.0
                },
                TravelRange {
                    from: 50.0,
                    to: 20.0,
                    duration_s: 6.0
                },
            ]
        );
    }

    #[test]
    fn test_traversal_stops_at_target_segment() {
        let segments = [
            Segment::new(25, 5.0),
            Segment::new(50, 5.0),
            Segment::new(100, 10.0),
        ];
        let crossed = ranges(&segments, 0, 50);
        assert_eq!(crossed.len(), 2);
        assert_eq!(crossed[1].to, 50.0);

        let crossed = ranges(&segments, 100, 50);
        assert_eq!(crossed.len(), 1);
        assert_eq!(crossed[0].duration_s, 10.0);
    }

    #[test]
    fn test_traversal_skips_zero_width_segments() {
        let segments = [
            Segment::new(0, 3.0),
            Segment::new(50, 10.0),
            Segment::new(50, 7.0),
            Segment::new(100, 10.0),
        ];
        let total: f32 = ranges(&segments, 0, 100).iter().map(|r| r.duration_s).sum();
        assert_eq!(total, 20.0);
    }

    #[test]
    fn test_stopped_traversal_is_empty() {
        let traversal = Traversal::new(&FLAT_100, 30, 60, TravelDirection::Stopped);
        assert_eq!(traversal.count(), 0);
    }

    #[test]
    fn test_flat_profile_down() {
        // 100 s profile, 90 -> 60
        let at = |t| estimate_position(&FLAT_100, 90, 60, TravelDirection::Down, t);
        assert_eq!(at(0.0), 90);
        assert_eq!(at(10.0), 80);
        assert_eq!(at(20.0), 70);
        assert_eq!(at(30.0), 60);
        assert_eq!(at(45.0), 60);
    }

    #[test]
    fn test_multi_segment_up() {
        let at = |t| estimate_position(&FAST_THEN_SLOW, 0, 100, TravelDirection::Up, t);
        assert_eq!(at(5.0), 25);
        assert_eq!(at(10.0), 50);
        assert_eq!(at(30.0), 75);
        assert_eq!(at(50.0), 100);
    }

    #[test]
    fn test_multi_segment_down_uses_reversed_speeds() {
        // Down: slow segment (100 -> 50) comes first
        let at = |t| estimate_position(&FAST_THEN_SLOW, 100, 0, TravelDirection::Down, t);
        assert_eq!(at(20.0), 75);
        assert_eq!(at(40.0), 50);
        assert_eq!(at(45.0), 25);
        assert_eq!(at(50.0), 0);
    }

    #[test]
    fn test_estimate_truncates() {
        // 30 s profile: one percent every 0.3 s
        let segments = [Segment::new(100, 30.0)];
        assert_eq!(
            estimate_position(&segments, 0, 100, TravelDirection::Up, 0.5),
            1
        );
        assert_eq!(
            estimate_position(&segments, 100, 0, TravelDirection::Down, 0.5),
            98
        );
    }

    #[test]
    fn test_degenerate_direction_returns_target() {
        assert_eq!(
            estimate_position(&FLAT_100, 40, 60, TravelDirection::Down, 1.0),
            60
        );
        assert_eq!(
            estimate_position(&FLAT_100, 60, 40, TravelDirection::Up, 1.0),
            40
        );
        assert_eq!(
            estimate_position(&FLAT_100, 40, 40, TravelDirection::Down, 0.0),
            40
        );
        assert_eq!(
            estimate_position(&FLAT_100, 40, 70, TravelDirection::Stopped, 5.0),
            70
        );
    }

    #[test]
    fn test_empty_profile_stays_at_start() {
        assert_eq!(interpolate_position(&[], 30, 80, TravelDirection::Up, 10.0), 30.0);
        assert_eq!(estimate_position(&[], 30, 80, TravelDirection::Up, 10.0), 30);
    }

    #[test]
    fn test_zero_duration_segment_is_instant() {
        let segments = [Segment::new(50, 0.0), Segment::new(100, 10.0)];
        assert_eq!(
            estimate_position(&segments, 0, 100, TravelDirection::Up, 0.0),
            50
        );
        assert_eq!(
            estimate_position(&segments, 0, 100, TravelDirection::Up, 5.0),
            75
        );
    }

    fn profile_strategy() -> impl Strategy<Value = Vec<Segment>> {
        prop::collection::vec((1u8..=100, 0.5f32..60.0), 1..6).prop_map(|mut raw| {
            raw.sort_by_key(|(end, _)| *end);
            let mut segments: Vec<Segment> = raw
                .into_iter()
                .map(|(end, duration)| Segment::new(end, duration))
                .collect();
            if let Some(last) = segments.last_mut() {
                last.end_position = 100;
            }
            segments
        })
    }

    proptest! {
        #[test]
        fn prop_estimate_stays_between_start_and_target(
            segments in profile_strategy(),
            start in 0u8..=100,
            target in 0u8..=100,
            elapsed_s in 0.0f32..400.0,
        ) {
            let direction = TravelDirection::between(start, target);
            let position = estimate_position(&segments, start, target, direction, elapsed_s);
            prop_assert!(position >= start.min(target));
            prop_assert!(position <= start.max(target));
        }

        #[test]
        fn prop_estimate_is_monotonic(
            segments in profile_strategy(),
            start in 0u8..=100,
            target in 0u8..=100,
            t1 in 0.0f32..400.0,
            dt in 0.0f32..400.0,
        ) {
            let direction = TravelDirection::between(start, target);
            let earlier = estimate_position(&segments, start, target, direction, t1);
            let later = estimate_position(&segments, start, target, direction, t1 + dt);
            match direction {
                TravelDirection::Up => prop_assert!(later >= earlier),
                TravelDirection::Down => prop_assert!(later <= earlier),
                TravelDirection::Stopped => prop_assert_eq!(later, earlier),
            }
        }

        #[test]
        fn prop_arrives_after_total_duration(
            segments in profile_strategy(),
            start in 0u8..=100,
            target in 0u8..=100,
        ) {
            let direction = TravelDirection::between(start, target);
            let total: f32 = Traversal::new(&segments, start, target, direction)
                .map(|range| range.duration_s)
                .sum();
            let position = estimate_position(&segments, start, target, direction, total + 1.0);
            prop_assert_eq!(position, target);
        }

        #[test]
        fn prop_flat_down_mirrors_flat_up(
            start in 0u8..=100,
            target in 0u8..=100,
            elapsed_s in 0.0f32..120.0,
        ) {
            prop_assume!(start < target);
            let up = interpolate_position(&FLAT_100, start, target, TravelDirection::Up, elapsed_s);
            let down = interpolate_position(
                &FLAT_100,
                100 - start,
                100 - target,
                TravelDirection::Down,
                elapsed_s,
            );
            prop_assert!((up - (100.0 - down)) < 1e-3 && ((100.0 - down) - up) < 1e-3);
        }
    }
}
