use crate::core::filters::{
    ArrivalBeforeDepartureFilter, DepartureBeforeNowFilter, GroundTimeFilter, MAX_GROUND_MINUTES,
};
use crate::domain::ports::FlightFilter;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_range, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    DepartureBeforeNow,
    ArrivalBeforeDeparture,
    GroundTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flight-filter")]
#[command(about = "Filter sample flight itineraries by departure, segment order and ground time")]
pub struct CliConfig {
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [
            FilterKind::DepartureBeforeNow,
            FilterKind::ArrivalBeforeDeparture,
            FilterKind::GroundTime,
        ]
    )]
    pub filters: Vec<FilterKind>,

    #[arg(long, default_value_t = MAX_GROUND_MINUTES, help = "Maximum total ground time in minutes")]
    pub max_ground_minutes: i64,

    #[arg(long, default_value_t = 3, help = "Days between now and the sample departures")]
    pub days_ahead: i64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the selected filters, in the order given on the command line.
    pub fn build_filters(&self) -> Vec<Box<dyn FlightFilter>> {
        self.filters
            .iter()
            .map(|kind| -> Box<dyn FlightFilter> {
                match kind {
                    FilterKind::DepartureBeforeNow => Box::new(DepartureBeforeNowFilter::new()),
                    FilterKind::ArrivalBeforeDeparture => {
                        Box::new(ArrivalBeforeDepartureFilter::new())
                    }
                    FilterKind::GroundTime => {
                        Box::new(GroundTimeFilter::with_limit_minutes(self.max_ground_minutes))
                    }
                }
            })
            .collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("filters", &self.filters)?;
        validate_range("max_ground_minutes", self.max_ground_minutes, 0, 1440)?;
        validate_range("days_ahead", self.days_ahead, 1, 365)?;
        Ok(())
    }
}
