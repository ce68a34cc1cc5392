use crate::utils::error::{FlightError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A single leg of travel.
///
/// No ordering is enforced between `departure` and `arrival`; rejecting a
/// segment that lands before it takes off is a filter's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSegment")]
pub struct Segment {
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawSegment {
    departure: Option<DateTime<Utc>>,
    arrival: Option<DateTime<Utc>>,
}

impl TryFrom<RawSegment> for Segment {
    type Error = FlightError;

    fn try_from(raw: RawSegment) -> Result<Self> {
        Segment::try_new(raw.departure, raw.arrival)
    }
}

impl Segment {
    pub fn new(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Self {
        Self { departure, arrival }
    }

    /// Builds a segment from timestamps that may be absent.
    ///
    /// Fails with [`FlightError::InvalidArgument`] when either side is `None`.
    pub fn try_new(
        departure: Option<DateTime<Utc>>,
        arrival: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let departure = departure
            .ok_or_else(|| FlightError::invalid_argument("segment departure is missing"))?;
        let arrival =
            arrival.ok_or_else(|| FlightError::invalid_argument("segment arrival is missing"))?;
        Ok(Self::new(departure, arrival))
    }

    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Signed time in the air; negative for a malformed segment.
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure.format(DISPLAY_FORMAT),
            self.arrival.format(DISPLAY_FORMAT)
        )
    }
}

/// An itinerary: segments in travel order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Segment>> for Flight {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl FromIterator<Segment> for Flight {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_segment_accessors() {
        let segment = Segment::new(at(8, 0), at(10, 30));
        assert_eq!(segment.departure(), at(8, 0));
        assert_eq!(segment.arrival(), at(10, 30));
        assert_eq!(segment.duration(), Duration::minutes(150));
    }

    #[test]
    fn test_segment_allows_arrival_before_departure() {
        let segment = Segment::new(at(10, 0), at(8, 0));
        assert_eq!(segment.duration(), Duration::hours(-2));
    }

    #[test]
    fn test_try_new_rejects_missing_timestamps() {
        assert!(Segment::try_new(Some(at(8, 0)), Some(at(9, 0))).is_ok());

        let err = Segment::try_new(None, Some(at(9, 0))).unwrap_err();
        assert!(matches!(err, FlightError::InvalidArgument { .. }));
        assert!(err.to_string().contains("departure"));

        let err = Segment::try_new(Some(at(8, 0)), None).unwrap_err();
        assert!(err.to_string().contains("arrival"));
    }

    #[test]
    fn test_display_format() {
        let flight = Flight::new(vec![
            Segment::new(at(8, 0), at(10, 5)),
            Segment::new(at(11, 0), at(12, 45)),
        ]);
        assert_eq!(
            flight.to_string(),
            "[2025-03-14T08:00|2025-03-14T10:05] [2025-03-14T11:00|2025-03-14T12:45]"
        );
        assert_eq!(Flight::default().to_string(), "");
    }

    #[test]
    fn test_segments_keep_order() {
        let first = Segment::new(at(8, 0), at(9, 0));
        let second = Segment::new(at(10, 0), at(11, 0));
        let flight: Flight = vec![first, second].into_iter().collect();

        assert_eq!(flight.len(), 2);
        assert_eq!(flight.segments(), &[first, second]);
        assert!(!flight.is_empty());
        assert!(Flight::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_deserialize_rejects_null_timestamp() {
        let ok: Flight = serde_json::from_str(
            r#"{"segments":[{"departure":"2025-03-14T08:00:00Z","arrival":"2025-03-14T09:00:00Z"}]}"#,
        )
        .unwrap();
        assert_eq!(ok.segments()[0].departure(), at(8, 0));

        let missing = serde_json::from_str::<Segment>(r#"{"departure":"2025-03-14T08:00:00Z"}"#);
        assert!(missing.is_err());

        let null = serde_json::from_str::<Segment>(
            r#"{"departure":null,"arrival":"2025-03-14T09:00:00Z"}"#,
        );
        assert!(null.unwrap_err().to_string().contains("departure is missing"));
    }
}
