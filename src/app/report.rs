use crate::core::service::{filter_all, filter_one};
use crate::domain::model::Flight;
use crate::domain::ports::FlightFilter;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection<'a> {
    pub title: String,
    pub flights: Vec<&'a Flight>,
}

/// Sections for every flight, each filter alone, then the whole chain.
pub fn build_report<'a, F: FlightFilter>(
    flights: &'a [Flight],
    filters: &[F],
) -> Vec<ReportSection<'a>> {
    let mut sections = vec![ReportSection {
        title: "All flights".to_string(),
        flights: flights.iter().collect(),
    }];

    for filter in filters {
        sections.push(ReportSection {
            title: format!("Passing {}", filter.name()),
            flights: filter_one(flights, filter),
        });
    }

    let names: Vec<&str> = filters.iter().map(|f| f.name()).collect();
    sections.push(ReportSection {
        title: format!("Passing all filters [{}]", names.join(", ")),
        flights: filter_all(flights, filters),
    });
    sections
}

pub fn render_text(sections: &[ReportSection<'_>]) -> String {
    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "{} ({})", section.title, section.flights.len());
        for flight in &section.flights {
            let _ = writeln!(out, "  {}", flight);
        }
    }
    out
}

pub fn render_json(sections: &[ReportSection<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sections)?)
}
