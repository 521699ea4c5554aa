use serde::Serialize;

use crate::error::InvalidTimeWindow;

pub type Time = f64;

/// Sentinel for "no upper bound" in computed times. Subtracting finite leg
/// times keeps it unbounded and `min` against a finite bound yields the bound,
/// so it propagates through the backward pass without overflow or NaN.
pub const UNBOUNDED: Time = Time::INFINITY;

/// Feasible interval `[start, end]` for starting an activity. `end == None`
/// means there is no upper constraint.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: Time,
    end: Option<Time>,
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow {
            start: 0.0,
            end: None,
        }
    }
}

impl TimeWindow {
    /// Infinite ends and `f64::MAX` are normalised to an unbounded window. The
    /// start must be finite.
    pub fn new(start: Time, end: Option<Time>) -> Result<Self, InvalidTimeWindow> {
        let end = end.filter(|&end| !is_unbounded(end));
        let invalid = InvalidTimeWindow {
            earliest: start,
            latest: end.unwrap_or(UNBOUNDED),
        };

        if !start.is_finite() {
            return Err(invalid);
        }

        match end {
            Some(end) if end.is_nan() || end < start => Err(invalid),
            _ => Ok(TimeWindow { start, end }),
        }
    }

    pub fn bounded(start: Time, end: Time) -> Result<Self, InvalidTimeWindow> {
        TimeWindow::new(start, Some(end))
    }

    pub fn from_start(start: Time) -> Result<Self, InvalidTimeWindow> {
        TimeWindow::new(start, None)
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Option<Time> {
        self.end
    }

    pub fn end_or_unbounded(&self) -> Time {
        self.end.unwrap_or(UNBOUNDED)
    }

    pub fn is_bounded(&self) -> bool {
        self.end.is_some()
    }

    /// Operation start for a vehicle arriving at `arrival`: it waits until the
    /// window opens.
    pub fn earliest_start_on_arrival(&self, arrival: Time) -> Time {
        arrival.max(self.start)
    }
}

fn is_unbounded(time: Time) -> bool {
    time == Time::INFINITY || time == Time::MAX
}

/// Latest operation start at an activity given the latest start of its
/// successor, the leg between them and its own service time, clamped by the
/// activity's own window.
pub fn latest_start_before(
    time_window: &TimeWindow,
    next_latest_start: Time,
    travel_time: Time,
    service_time: Time,
) -> Time {
    let propagated = if next_latest_start == UNBOUNDED {
        UNBOUNDED
    } else {
        next_latest_start - travel_time - service_time
    };

    propagated.min(time_window.end_or_unbounded())
}
