use crate::utils::error::{FlightError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FlightError::config(format!(
            "{} = {}: value must be between {} and {}",
            field_name, value, min, max
        )));
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(FlightError::config(format!(
            "{}: at least one value is required",
            field_name
        )));
    }
    Ok(())
}
