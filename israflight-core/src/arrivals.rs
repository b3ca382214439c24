//! Live arrivals board.
//!
//! The backend proxies a third-party feed and is loose about key casing, so
//! every field accepts the camelCase, PascalCase and snake_case spellings.

use serde::Deserialize;

use crate::timestamp::parse_timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Arrival {
    #[serde(default, rename = "flightNumber", alias = "FlightNumber", alias = "flight_number")]
    pub flight_number: Option<String>,
    #[serde(default, rename = "airline", alias = "Airline")]
    pub airline: Option<String>,
    #[serde(default, rename = "origin", alias = "Origin")]
    pub origin: Option<String>,
    #[serde(default, rename = "scheduledArrival", alias = "ScheduledArrival", alias = "scheduled_arrival")]
    pub scheduled_arrival: Option<String>,
    #[serde(default, rename = "terminal", alias = "Terminal")]
    pub terminal: Option<String>,
    #[serde(default, rename = "status", alias = "Status")]
    pub status: Option<String>,
}

/// `GET flights/arrivals` answers with either a bare list or `{"data": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArrivalsPayload {
    List(Vec<Arrival>),
    Wrapped {
        #[serde(default)]
        data: Vec<Arrival>,
    },
}

impl ArrivalsPayload {
    pub fn into_arrivals(self) -> Vec<Arrival> {
        match self {
            ArrivalsPayload::List(arrivals) => arrivals,
            ArrivalsPayload::Wrapped { data } => data,
        }
    }
}

/// How the status cell is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Active,
    Delayed,
    Neutral,
}

impl StatusTone {
    pub fn of(status: &str) -> Self {
        if status.eq_ignore_ascii_case("active") {
            StatusTone::Active
        } else if status.eq_ignore_ascii_case("delayed") {
            StatusTone::Delayed
        } else {
            StatusTone::Neutral
        }
    }
}

/// One board row, every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRow {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub scheduled_arrival: String,
    pub terminal: String,
    pub status: String,
    pub tone: StatusTone,
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// `YYYY-MM-DD HH:MM` when the value parses, otherwise the value as sent.
pub fn format_scheduled(raw: &str) -> String {
    match parse_timestamp(raw) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

impl From<&Arrival> for ArrivalRow {
    fn from(arrival: &Arrival) -> Self {
        let status = cell(&arrival.status);
        Self {
            flight_number: cell(&arrival.flight_number),
            airline: cell(&arrival.airline),
            origin: cell(&arrival.origin),
            scheduled_arrival: arrival
                .scheduled_arrival
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .map(format_scheduled)
                .unwrap_or_default(),
            terminal: cell(&arrival.terminal),
            tone: StatusTone::of(&status),
            status,
        }
    }
}

pub fn board_rows(arrivals: &[Arrival]) -> Vec<ArrivalRow> {
    arrivals.iter().map(ArrivalRow::from).collect()
}
