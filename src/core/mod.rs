pub mod filters;
pub mod service;

pub use crate::domain::model::{Flight, Segment};
pub use crate::domain::ports::{Clock, FlightFilter};
pub use crate::utils::error::Result;
