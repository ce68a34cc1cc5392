pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, FilterKind, OutputFormat};

pub use crate::adapters::clock::{FixedClock, SystemClock};
pub use crate::core::filters::{
    total_ground_minutes, ArrivalBeforeDepartureFilter, DepartureBeforeNowFilter,
    GroundTimeFilter, MAX_GROUND_MINUTES,
};
pub use crate::core::service::{filter_all, filter_one, FilterService};
pub use crate::domain::model::{Flight, Segment};
pub use crate::domain::ports::{Clock, FlightFilter};
pub use crate::utils::error::{FlightError, Result};
