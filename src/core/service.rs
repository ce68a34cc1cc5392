//! Applying filters to collections of flights.
//!
//! Both free functions accept anything that borrows as a [`Flight`], so the
//! same code narrows an owned `Vec<Flight>` or a `Vec<&Flight>` view without
//! cloning. Relative order of the input is always preserved.

use crate::domain::model::Flight;
use crate::domain::ports::FlightFilter;
use std::borrow::Borrow;

/// Keeps the flights that pass `filter`, in input order.
pub fn filter_one<T, I, F>(flights: I, filter: &F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Borrow<Flight>,
    F: FlightFilter + ?Sized,
{
    flights
        .into_iter()
        .filter(|item| {
            let flight: &Flight = item.borrow();
            let valid = filter.is_valid(flight);
            if !valid {
                tracing::trace!(filter = filter.name(), %flight, "Flight rejected");
            }
            valid
        })
        .collect()
}

/// Narrows `flights` by each filter in turn.
///
/// Every stage only sees the survivors of the previous one. The final set is
/// the conjunction of all filters; with no filters the input comes back
/// unchanged.
pub fn filter_all<T, I, F>(flights: I, filters: &[F]) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Borrow<Flight>,
    F: FlightFilter,
{
    let mut remaining: Vec<T> = flights.into_iter().collect();
    for filter in filters {
        let before = remaining.len();
        remaining = filter_one(remaining, filter);
        tracing::debug!(
            filter = filter.name(),
            before,
            after = remaining.len(),
            "Filter stage applied"
        );
    }
    remaining
}

/// An ordered chain of filters applied with [`filter_all`].
#[derive(Default)]
pub struct FilterService {
    filters: Vec<Box<dyn FlightFilter>>,
}

impl FilterService {
    /// An empty chain lets every flight through.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: Box<dyn FlightFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn add_filter(&mut self, filter: Box<dyn FlightFilter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[Box<dyn FlightFilter>] {
        &self.filters
    }

    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn apply<T, I>(&self, flights: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        T: Borrow<Flight>,
    {
        filter_all(flights, &self.filters)
    }
}

impl std::fmt::Debug for FilterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterService")
            .field("filters", &self.filter_names())
            .finish()
    }
}
