//! Travel calculator
//!
//! The calculator owns the state of one cover. Integrations call
//! [`start_travel`](TravelCalculator::start_travel) when they switch the
//! motor on, [`stop`](TravelCalculator::stop) when they switch it off and
//! poll [`current_position`](TravelCalculator::current_position) in between.
//!
//! ```
//! use covertime_core::{ManualClock, TravelCalculator, TravelProfile};
//!
//! let clock = ManualClock::new(0);
//! let mut cover = TravelCalculator::new(TravelProfile::from_times(100.0, 100.0), &clock);
//!
//! cover.set_position(90);
//! cover.start_travel(60);
//! clock.advance_s(10.0);
//! assert_eq!(cover.current_position(), 80);
//! clock.advance_s(20.0);
//! assert!(cover.position_reached());
//! ```

use super::types::{PositionType, TravelDirection, TravelSnapshot};
use crate::clock::{ms_to_s, Clock};
use crate::motion::{estimate_position, Traversal};
use crate::profile::{Position, TravelProfile, POSITION_CLOSED, POSITION_OPEN};

/// Time-based position tracker for a single cover
#[derive(Debug, Clone)]
pub struct TravelCalculator<C> {
    profile: TravelProfile,
    clock: C,
    position_type: PositionType,
    /// Position as of `travel_started_ms`, or as of now when stopped
    last_known_position: Position,
    /// Current target, equal to `last_known_position` when stopped
    travel_to_position: Position,
    travel_direction: TravelDirection,
    travel_started_ms: u64,
}

impl<C: Clock> TravelCalculator<C> {
    /// Create a calculator with an unknown position at 0
    pub fn new(profile: TravelProfile, clock: C) -> Self {
        Self {
            profile,
            clock,
            position_type: PositionType::Unknown,
            last_known_position: POSITION_CLOSED,
            travel_to_position: POSITION_CLOSED,
            travel_direction: TravelDirection::Stopped,
            travel_started_ms: 0,
        }
    }

    /// Set an externally confirmed position
    ///
    /// Replaces any running estimate. The travel direction is left alone.
    pub fn set_position(&mut self, position: Position) {
        log_debug!("confirmed position {}", position);
        self.last_known_position = position;
        self.travel_to_position = position;
        self.position_type = PositionType::Confirmed;
    }

    /// Freeze the estimate where the cover is now
    pub fn stop(&mut self) {
        let position = self.current_position();
        self.last_known_position = position;
        self.travel_to_position = position;
        self.position_type = PositionType::Calculated;
        self.travel_direction = TravelDirection::Stopped;
        log_debug!("stopped at {}", position);
    }

    /// Start travelling towards `target`
    ///
    /// A cover that is already moving is first stopped at its estimated
    /// position, so redirecting mid-travel starts from where it is now.
    /// A target equal to the current position selects `Down`; no time
    /// passes in that case and the travel is reached immediately.
    pub fn start_travel(&mut self, target: Position) {
        self.stop();
        self.travel_started_ms = self.clock.now_ms();
        self.travel_to_position = target;
        self.position_type = PositionType::Calculated;
        self.travel_direction = if target > self.last_known_position {
            TravelDirection::Up
        } else {
            TravelDirection::Down
        };

        log_debug!(
            "travel {} -> {} ({:?})",
            self.last_known_position,
            target,
            self.travel_direction
        );
    }

    /// Start travelling to fully open
    pub fn start_travel_up(&mut self) {
        self.start_travel(POSITION_OPEN);
    }

    /// Start travelling to fully closed
    pub fn start_travel_down(&mut self) {
        self.start_travel(POSITION_CLOSED);
    }

    /// Current position, estimated if the cover is travelling
    pub fn current_position(&self) -> Position {
        if self.position_type != PositionType::Calculated {
            return self.last_known_position;
        }

        estimate_position(
            self.profile.segments(self.travel_direction),
            self.last_known_position,
            self.travel_to_position,
            self.travel_direction,
            self.elapsed_s(),
        )
    }

    /// Check if the cover has not reached its target yet
    pub fn is_traveling(&self) -> bool {
        self.current_position() != self.travel_to_position
    }

    /// Check if the target has been reached or passed
    pub fn position_reached(&self) -> bool {
        let position = self.current_position();
        match self.travel_direction {
            TravelDirection::Up => position >= self.travel_to_position,
            TravelDirection::Down => position <= self.travel_to_position,
            TravelDirection::Stopped => position == self.travel_to_position,
        }
    }

    /// Check if the cover is fully open
    pub fn is_open(&self) -> bool {
        self.current_position() == POSITION_OPEN
    }

    /// Check if the cover is fully closed
    pub fn is_closed(&self) -> bool {
        self.current_position() == POSITION_CLOSED
    }

    /// Seconds until the current travel reaches its target
    ///
    /// Zero when stopped, when the position is not an estimate, or when the
    /// travel time has already run out.
    pub fn remaining_travel_s(&self) -> f32 {
        if self.position_type != PositionType::Calculated || !self.travel_direction.is_moving() {
            return 0.0;
        }

        let total_s: f32 = Traversal::new(
            self.profile.segments(self.travel_direction),
            self.last_known_position,
            self.travel_to_position,
            self.travel_direction,
        )
        .map(|range| range.duration_s)
        .sum();

        (total_s - self.elapsed_s()).max(0.0)
    }

    /// Capture the current position for persistence
    pub fn snapshot(&self) -> TravelSnapshot {
        TravelSnapshot {
            position_type: self.position_type,
            position: self.current_position(),
        }
    }

    /// Restore a persisted position
    ///
    /// A snapshot of an unknown position carries no information and is
    /// ignored. Anything else is taken as the confirmed position.
    pub fn restore(&mut self, snapshot: TravelSnapshot) {
        if snapshot.position_type == PositionType::Unknown {
            log_debug!("ignoring snapshot without a position");
            return;
        }
        self.set_position(snapshot.position);
    }

    /// Seconds since travel started (zero if the clock went backwards)
    fn elapsed_s(&self) -> f32 {
        ms_to_s(self.clock.now_ms().saturating_sub(self.travel_started_ms))
    }
}

impl<C> TravelCalculator<C> {
    /// Confidence in the current position
    pub fn position_type(&self) -> PositionType {
        self.position_type
    }

    /// Current travel direction
    pub fn travel_direction(&self) -> TravelDirection {
        self.travel_direction
    }

    /// Position at travel start, or the frozen position when stopped
    pub fn last_known_position(&self) -> Position {
        self.last_known_position
    }

    /// Current target position
    pub fn travel_to_position(&self) -> Position {
        self.travel_to_position
    }

    /// Clock reading when the current travel started
    pub fn travel_started_ms(&self) -> u64 {
        self.travel_started_ms
    }

    /// Travel profile of this cover
    pub fn profile(&self) -> &TravelProfile {
        &self.profile
    }

    /// Time source
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable time source
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

/// Calculators are equal when their state and profile match; the clock is
/// not compared.
impl<C> PartialEq for TravelCalculator<C> {
    fn eq(&self, other: &Self) -> bool {
        self.profile == other.profile
            && self.position_type == other.position_type
            && self.last_known_position == other.last_known_position
            && self.travel_to_position == other.travel_to_position
            && self.travel_direction == other.travel_direction
            && self.travel_started_ms == other.travel_started_ms
    }
}
