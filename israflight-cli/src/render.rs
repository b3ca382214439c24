//! Plain-text tables for the terminal.

use israflight_core::arrivals::{ArrivalRow, StatusTone};
use israflight_core::models::{Airport, Booking, Flight, Plane};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn id_cell(id: Option<i32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn airports(airports: &[Airport]) {
    println!("{:<5} {:<6} {:<30} {:<20} {}", "ID", "CODE", "NAME", "CITY", "COUNTRY");
    for airport in airports {
        println!(
            "{:<5} {:<6} {:<30} {:<20} {}",
            id_cell(airport.id),
            airport.code,
            airport.name,
            airport.city,
            airport.country
        );
    }
}

pub fn flights(flights: &[Flight]) {
    if flights.is_empty() {
        println!("No flights available.");
        return;
    }
    println!(
        "{:<5} {:<6} {:<5} {:<5} {:<17} {:<17} {:>9}",
        "ID", "PLANE", "FROM", "TO", "DEPARTURE", "ARRIVAL", "PRICE"
    );
    for flight in flights {
        println!(
            "{:<5} {:<6} {:<5} {:<5} {:<17} {:<17} {:>9.2}",
            id_cell(flight.id),
            flight.plane_id,
            flight.departure_airport_id,
            flight.arrival_airport_id,
            flight.departure_time.format(TIME_FORMAT),
            flight.arrival_time.format(TIME_FORMAT),
            flight.price
        );
    }
}

pub fn planes(planes: &[Plane]) {
    println!("{:<5} {:<20} {:<20} {:<6} {}", "ID", "MANUFACTURER", "NICKNAME", "YEAR", "IMAGE");
    for plane in planes {
        println!(
            "{:<5} {:<20} {:<20} {:<6} {}",
            id_cell(plane.id),
            plane.manufacturer,
            plane.nickname,
            plane.year,
            plane.image_url.as_deref().unwrap_or("")
        );
    }
}

pub fn bookings(bookings: &[Booking]) {
    if bookings.is_empty() {
        println!("No bookings found.");
        return;
    }
    println!("{:<8} {:<8} {:<6} {}", "BOOKING", "FLIGHT", "SEAT", "BOOKED");
    for booking in bookings {
        let booked = booking
            .booking_date
            .map(|date| date.format(TIME_FORMAT).to_string())
            .unwrap_or_default();
        println!(
            "{:<8} {:<8} {:<6} {}",
            id_cell(booking.id),
            booking.flight_id,
            booking.seat.as_deref().unwrap_or("N/A"),
            booked
        );
    }
}

fn tone_marker(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Active => "[ACTIVE] ",
        StatusTone::Delayed => "[DELAYED]",
        StatusTone::Neutral => "         ",
    }
}

pub fn arrivals(rows: &[ArrivalRow]) {
    if rows.is_empty() {
        println!("No arrivals in this window.");
        return;
    }
    println!(
        "{:<9} {:<9} {:<20} {:<8} {:<17} {:<9} {}",
        "", "FLIGHT", "AIRLINE", "FROM", "SCHEDULED", "TERMINAL", "STATUS"
    );
    for row in rows {
        println!(
            "{} {:<9} {:<20} {:<8} {:<17} {:<9} {}",
            tone_marker(row.tone),
            row.flight_number,
            row.airline,
            row.origin,
            row.scheduled_arrival,
            row.terminal,
            row.status
        );
    }
}
