use chrono::NaiveDate;

use crate::models::Flight;
use crate::validation::ValidationError;

/// Search form state. Airports are optional until the user picks one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSearchCriteria {
    pub from_airport: Option<i32>,
    pub to_airport: Option<i32>,
    pub departure_date: NaiveDate, // Date only, departure time is ignored
}

impl FlightSearchCriteria {
    pub fn validate(&self) -> Result<(i32, i32), ValidationError> {
        match (self.from_airport, self.to_airport) {
            (Some(from), Some(to)) if from != to => Ok((from, to)),
            _ => Err(ValidationError::InvalidAirports),
        }
    }

    fn matches(&self, flight: &Flight, from: i32, to: i32) -> bool {
        flight.departure_airport_id == from
            && flight.arrival_airport_id == to
            && flight.departure_time.date() == self.departure_date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub flights: Vec<Flight>,
    /// False when nothing matched and every flight is being offered instead.
    pub exact_match: bool,
}

pub fn search_flights(
    flights: &[Flight],
    criteria: &FlightSearchCriteria,
) -> Result<SearchOutcome, ValidationError> {
    let (from, to) = criteria.validate()?;

    let matched: Vec<Flight> = flights
        .iter()
        .filter(|flight| criteria.matches(flight, from, to))
        .cloned()
        .collect();

    if matched.is_empty() {
        return Ok(SearchOutcome {
            flights: flights.to_vec(),
            exact_match: false,
        });
    }

    Ok(SearchOutcome {
        flights: matched,
        exact_match: true,
    })
}
