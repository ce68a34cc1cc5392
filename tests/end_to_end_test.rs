use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use flight_filter::app::sample::sample_flights;
use flight_filter::{
    filter_all, total_ground_minutes, ArrivalBeforeDepartureFilter, DepartureBeforeNowFilter,
    FixedClock, Flight, FlightError, FlightFilter, GroundTimeFilter, Segment,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

fn segment(dep: Duration, arr: Duration) -> Segment {
    Segment::new(now() + dep, now() + arr)
}

fn departure() -> DepartureBeforeNowFilter<FixedClock> {
    DepartureBeforeNowFilter::with_clock(FixedClock::new(now()))
}

#[test]
fn test_future_single_segment_passes_every_filter() {
    let flight = Flight::new(vec![segment(Duration::hours(1), Duration::hours(2))]);

    assert!(departure().is_valid(&flight));
    assert!(ArrivalBeforeDepartureFilter::new().is_valid(&flight));
    assert!(GroundTimeFilter::new().is_valid(&flight));
}

#[test]
fn test_past_departure_rejected() {
    let flight = Flight::new(vec![segment(Duration::hours(-1), Duration::hours(1))]);
    assert!(!departure().is_valid(&flight));
}

#[test]
fn test_inverted_segment_rejected() {
    let flight = Flight::new(vec![segment(Duration::hours(3), Duration::hours(1))]);
    assert!(!ArrivalBeforeDepartureFilter::new().is_valid(&flight));
}

#[test]
fn test_ground_time_scenarios() {
    let short = Flight::new(vec![
        segment(Duration::zero(), Duration::hours(1)),
        segment(Duration::minutes(90), Duration::hours(3)),
    ]);
    let long = Flight::new(vec![
        segment(Duration::zero(), Duration::hours(1)),
        segment(Duration::hours(4), Duration::hours(5)),
    ]);

    assert_eq!(total_ground_minutes(&short), 30);
    assert!(GroundTimeFilter::new().is_valid(&short));
    assert_eq!(total_ground_minutes(&long), 180);
    assert!(!GroundTimeFilter::new().is_valid(&long));
}

#[test]
fn test_departure_equal_to_now_is_valid() {
    let flight = Flight::new(vec![segment(Duration::zero(), Duration::hours(1))]);
    assert!(departure().is_valid(&flight));

    let earlier = Flight::new(vec![segment(Duration::microseconds(-1), Duration::hours(1))]);
    assert!(!departure().is_valid(&earlier));
}

#[test]
fn test_wall_clock_departure_filter() {
    let ahead = Flight::new(vec![Segment::new(
        Utc::now() + Duration::hours(1),
        Utc::now() + Duration::hours(2),
    )]);
    let behind = Flight::new(vec![Segment::new(
        Utc::now() - Duration::hours(1),
        Utc::now() + Duration::hours(1),
    )]);

    let filter = DepartureBeforeNowFilter::new();
    assert!(filter.is_valid(&ahead));
    assert!(!filter.is_valid(&behind));
}

#[test]
fn test_sample_flights_through_all_filters() -> Result<()> {
    let flights = sample_flights(now())?;
    let filters: Vec<Box<dyn FlightFilter>> = vec![
        Box::new(departure()),
        Box::new(ArrivalBeforeDepartureFilter::new()),
        Box::new(GroundTimeFilter::new()),
    ];

    let passed = filter_all(&flights, &filters);
    assert_eq!(passed, vec![&flights[0], &flights[1]]);
    Ok(())
}

#[test]
fn test_deserialize_rejects_missing_arrival() {
    let err = serde_json::from_str::<Flight>(
        r#"{"segments":[{"departure":"2026-01-15T13:00:00Z","arrival":null}]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("arrival is missing"));

    let direct = Segment::try_new(Some(now()), None).unwrap_err();
    assert!(matches!(direct, FlightError::InvalidArgument { .. }));
}
