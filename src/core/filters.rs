//! The built-in flight filters.
//!
//! Each filter is independent of the others and holds no mutable state, so a
//! single instance can be shared across threads and reused for any number of
//! flights.

use crate::adapters::clock::SystemClock;
use crate::domain::model::Flight;
use crate::domain::ports::{Clock, FlightFilter};

/// Default upper bound on total ground time, in minutes.
pub const MAX_GROUND_MINUTES: i64 = 120;

/// Rejects a flight if any segment departs before "now".
///
/// A departure exactly at "now" passes. "Now" comes from the clock, read once
/// per [`FlightFilter::is_valid`] call. With the default [`SystemClock`] this
/// is a wall-clock read, so two calls straddling a departure instant can
/// disagree.
#[derive(Debug, Clone, Default)]
pub struct DepartureBeforeNowFilter<C: Clock = SystemClock> {
    clock: C,
}

impl DepartureBeforeNowFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> DepartureBeforeNowFilter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> FlightFilter for DepartureBeforeNowFilter<C> {
    fn is_valid(&self, flight: &Flight) -> bool {
        let now = self.clock.now();
        flight
            .segments()
            .iter()
            .all(|segment| segment.departure() >= now)
    }

    fn name(&self) -> &'static str {
        "departure-before-now"
    }
}

/// Rejects a flight if any segment arrives before it departs.
///
/// Zero-length segments pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalBeforeDepartureFilter;

impl ArrivalBeforeDepartureFilter {
    pub fn new() -> Self {
        Self
    }
}

impl FlightFilter for ArrivalBeforeDepartureFilter {
    fn is_valid(&self, flight: &Flight) -> bool {
        flight
            .segments()
            .iter()
            .all(|segment| segment.arrival() >= segment.departure())
    }

    fn name(&self) -> &'static str {
        "arrival-before-departure"
    }
}

/// Rejects a flight whose total time on the ground exceeds a limit.
///
/// Ground time is the signed gap from each segment's arrival to the next
/// segment's departure, truncated to whole minutes per gap. Gaps are summed
/// as-is: an overlapping pair contributes negative minutes and can offset a
/// long layover elsewhere. Out-of-order itineraries are not rejected here.
#[derive(Debug, Clone, Copy)]
pub struct GroundTimeFilter {
    limit_minutes: i64,
}

impl Default for GroundTimeFilter {
    fn default() -> Self {
        Self::with_limit_minutes(MAX_GROUND_MINUTES)
    }
}

impl GroundTimeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit_minutes(limit_minutes: i64) -> Self {
        Self { limit_minutes }
    }

    pub fn limit_minutes(&self) -> i64 {
        self.limit_minutes
    }
}

impl FlightFilter for GroundTimeFilter {
    fn is_valid(&self, flight: &Flight) -> bool {
        total_ground_minutes(flight) <= self.limit_minutes
    }

    fn name(&self) -> &'static str {
        "ground-time"
    }
}

/// Sum of the signed whole-minute gaps between consecutive segments.
pub fn total_ground_minutes(flight: &Flight) -> i64 {
    flight
        .segments()
        .windows(2)
        .map(|pair| (pair[1].departure() - pair[0].arrival()).num_minutes())
        .sum()
}
