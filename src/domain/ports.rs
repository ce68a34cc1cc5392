use crate::domain::model::Flight;
use chrono::{DateTime, Utc};

/// A pure pass/fail check over a [`Flight`].
pub trait FlightFilter: Send + Sync {
    fn is_valid(&self, flight: &Flight) -> bool;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;
}

impl<F: FlightFilter + ?Sized> FlightFilter for Box<F> {
    fn is_valid(&self, flight: &Flight) -> bool {
        (**self).is_valid(flight)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<F: FlightFilter + ?Sized> FlightFilter for &F {
    fn is_valid(&self, flight: &Flight) -> bool {
        (**self).is_valid(flight)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
