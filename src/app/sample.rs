use crate::domain::model::{Flight, Segment};
use crate::utils::error::{FlightError, Result};
use chrono::{DateTime, Duration, Utc};

/// Pairs consecutive instants into segments: `[d0, a0, d1, a1, ...]`.
pub fn flight_from_instants(instants: &[DateTime<Utc>]) -> Result<Flight> {
    if instants.len() % 2 != 0 {
        return Err(FlightError::invalid_argument(format!(
            "an even number of instants is required, got {}",
            instants.len()
        )));
    }
    Ok(instants
        .chunks_exact(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect())
}

/// Reference itineraries anchored three days after `now`.
pub fn sample_flights(now: DateTime<Utc>) -> Result<Vec<Flight>> {
    sample_flights_from(now + Duration::days(3))
}

/// Reference itineraries anchored at `anchor`.
///
/// In order: a plain two hour flight, a two-leg flight with one hour on the
/// ground, a flight departing six days before the anchor, a flight landing
/// before it departs, and two itineraries with three hours on the ground.
pub fn sample_flights_from(anchor: DateTime<Utc>) -> Result<Vec<Flight>> {
    let h = |hours: i64| anchor + Duration::hours(hours);

    let flights = vec![
        flight_from_instants(&[anchor, h(2)])?,
        flight_from_instants(&[anchor, h(2), h(3), h(5)])?,
        flight_from_instants(&[anchor - Duration::days(6), anchor])?,
        flight_from_instants(&[anchor, h(-6)])?,
        flight_from_instants(&[anchor, h(2), h(5), h(6)])?,
        flight_from_instants(&[anchor, h(2), h(3), h(4), h(6), h(7)])?,
    ];
    tracing::debug!(count = flights.len(), %anchor, "Built sample flights");
    Ok(flights)
}
