//! Client-side form checks. Anything rejected here never reaches the backend.

use thiserror::Error;

use crate::models::{FrequentFlyer, Plane};

pub const MIN_HOURS_AHEAD: u32 = 1;
pub const MAX_HOURS_AHEAD: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Please select valid departure and destination airports")]
    InvalidAirports,

    #[error("Please enter a valid year.")]
    InvalidYear,

    #[error("Hours ahead must be between 1 and 5, got {0}")]
    HoursAheadOutOfRange(u32),

    #[error("Invalid {field} id: {value}")]
    InvalidId { field: &'static str, value: i32 },
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub fn require_id(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::InvalidId { field, value });
    }
    Ok(())
}

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    require("Username", username)?;
    require("Password", password)
}

pub fn validate_hours_ahead(hours: u32) -> Result<u32, ValidationError> {
    if !(MIN_HOURS_AHEAD..=MAX_HOURS_AHEAD).contains(&hours) {
        return Err(ValidationError::HoursAheadOutOfRange(hours));
    }
    Ok(hours)
}

/// Parses the free-text year box of the plane form.
pub fn parse_year(input: &str) -> Result<i32, ValidationError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidYear)
}

pub fn validate_plane(plane: &Plane) -> Result<(), ValidationError> {
    require("Manufacturer", &plane.manufacturer)
}

pub fn validate_registration(profile: &FrequentFlyer) -> Result<(), ValidationError> {
    require("Username", &profile.username)?;
    require("Password", &profile.password)?;
    require("First name", &profile.first_name)?;
    require("Last name", &profile.last_name)?;
    require("Email", &profile.email)
}
