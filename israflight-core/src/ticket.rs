use chrono::NaiveDateTime;

use crate::models::{Airport, Booking, Flight};

pub const UNKNOWN_AIRPORT: &str = "Unknown Airport";

const TITLE: &str = "IsraFlight \u{2014} Boarding Pass";
const SCHEDULE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Everything printed on a boarding pass, resolved to display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardingPass {
    pub booking_id: Option<i32>,
    pub traveler_id: i32,
    pub traveler_name: Option<String>,
    pub flight_id: i32,
    pub seat: Option<String>,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub issued_at: NaiveDateTime,
}

/// Airport name by id, `Unknown Airport` when the list does not have it.
pub fn airport_name(airports: &[Airport], id: i32) -> String {
    airports
        .iter()
        .find(|airport| airport.id == Some(id))
        .map(|airport| airport.name.clone())
        .unwrap_or_else(|| UNKNOWN_AIRPORT.to_string())
}

impl BoardingPass {
    pub fn new(
        booking: &Booking,
        flight: &Flight,
        airports: &[Airport],
        traveler_name: Option<String>,
        issued_at: NaiveDateTime,
    ) -> Self {
        Self {
            booking_id: booking.id,
            traveler_id: booking.frequent_flyer_id,
            traveler_name,
            flight_id: booking.flight_id,
            seat: booking.seat.clone(),
            departure_airport: airport_name(airports, flight.departure_airport_id),
            arrival_airport: airport_name(airports, flight.arrival_airport_id),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            issued_at,
        }
    }

    pub fn file_name(&self) -> String {
        match self.booking_id {
            Some(id) => format!("ticket_{id}.txt"),
            None => "ticket_unknown.txt".to_string(),
        }
    }

    pub fn render(&self) -> String {
        let booking_id = self
            .booking_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let traveler = match &self.traveler_name {
            Some(name) if !name.is_empty() => format!("{name} (#{})", self.traveler_id),
            _ => format!("#{}", self.traveler_id),
        };

        let lines = [
            TITLE.to_string(),
            String::new(),
            format!("Booking ID: {booking_id}"),
            format!("Traveler:   {traveler}"),
            format!("Flight ID:  {}", self.flight_id),
            format!("Seat:       {}", self.seat.as_deref().unwrap_or("N/A")),
            format!(
                "Departure:  {} at {}",
                self.departure_airport,
                self.departure_time.format(SCHEDULE_FORMAT)
            ),
            format!(
                "Landing:    {} at {}",
                self.arrival_airport,
                self.arrival_time.format(SCHEDULE_FORMAT)
            ),
            String::new(),
            format!("Issued: {}", self.issued_at.format("%Y-%m-%dT%H:%M:%S")),
        ];

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
