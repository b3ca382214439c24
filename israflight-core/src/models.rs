use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::timestamp;

// ============================================================================
// Catalog resources (airports, planes, flights)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    #[serde(default, alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(default, alias = "City")]
    pub city: String,
    #[serde(default, alias = "Country")]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plane {
    #[serde(default, alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(alias = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, alias = "Nickname")]
    pub nickname: String,
    #[serde(alias = "Year")]
    pub year: i32,
    #[serde(default, alias = "ImageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default, alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(alias = "PlaneId")]
    pub plane_id: i32,
    #[serde(alias = "DepartureAirportId")]
    pub departure_airport_id: i32,
    #[serde(alias = "ArrivalAirportId")]
    pub arrival_airport_id: i32,
    #[serde(alias = "DepartureTime", with = "timestamp::naive")]
    pub departure_time: NaiveDateTime,
    #[serde(alias = "ArrivalTime", with = "timestamp::naive")]
    pub arrival_time: NaiveDateTime,
    #[serde(default, alias = "Price")]
    pub price: f64,
}

/// The two instants the booking rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightTiming {
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

impl Flight {
    pub fn timing(&self) -> FlightTiming {
        FlightTiming {
            departure: self.departure_time,
            arrival: self.arrival_time,
        }
    }
}

// ============================================================================
// Bookings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(alias = "FrequentFlyerId", alias = "passengerId", alias = "userId")]
    pub frequent_flyer_id: i32,
    #[serde(alias = "FlightId")]
    pub flight_id: i32,
    #[serde(default, alias = "BookingDate", with = "timestamp::option_naive")]
    pub booking_date: Option<NaiveDateTime>,
    #[serde(default, alias = "Seat")]
    pub seat: Option<String>,
}

/// Built by the front end for a single booking attempt, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub frequent_flyer_id: i32,
    pub flight_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
}

impl BookingRequest {
    pub fn new(frequent_flyer_id: i32, flight_id: i32) -> Self {
        Self {
            frequent_flyer_id,
            flight_id,
            seat: None,
        }
    }

    pub fn with_seat(mut self, seat: impl Into<String>) -> Self {
        self.seat = Some(seat.into());
        self
    }
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequentFlyer {
    #[serde(default, alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(default, alias = "Password")]
    pub password: String,
    #[serde(alias = "FirstName")]
    pub first_name: String,
    #[serde(alias = "LastName")]
    pub last_name: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(default, alias = "PhoneNumber")]
    pub phone_number: String,
    #[serde(alias = "DateOfBirth", with = "timestamp::date")]
    pub date_of_birth: NaiveDate,
    #[serde(default, alias = "PassportNumber")]
    pub passport_number: String,
}

impl FrequentFlyer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Login form payload. The backend binds it case-insensitively; the login
/// form has always sent PascalCase keys.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Account row created alongside a frequent flyer profile.
#[derive(Debug, Clone, Serialize)]
pub struct AuthAccount {
    pub username: String,
    pub password: String,
    pub role: String,
}

pub const FREQUENT_FLYER_ROLE: &str = "frequentFlyer";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Role")]
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_deserialization() {
        let json = r#"
            {
                "id": 7,
                "planeId": 2,
                "departureAirportId": 1,
                "arrivalAirportId": 3,
                "departureTime": "2024-10-11T14:00:00",
                "arrivalTime": "2024-10-11T19:30:00",
                "price": 420.5
            }
        "#;
        let flight: Flight = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(flight.id, Some(7));
        assert_eq!(flight.arrival_airport_id, 3);
        assert_eq!(flight.timing().arrival.format("%H:%M").to_string(), "19:30");
    }

    #[test]
    fn test_pascal_case_plane() {
        let json = r#"{"Id": 4, "Manufacturer": "Boeing", "Nickname": "Dreamliner", "Year": 2015}"#;
        let plane: Plane = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(plane.id, Some(4));
        assert_eq!(plane.manufacturer, "Boeing");
        assert_eq!(plane.image_url, None);
    }

    #[test]
    fn test_booking_request_wire_shape() {
        let body = serde_json::to_value(BookingRequest::new(12, 7)).unwrap();
        assert_eq!(body, serde_json::json!({"frequentFlyerId": 12, "flightId": 7}));

        let with_seat = serde_json::to_value(BookingRequest::new(12, 7).with_seat("14C")).unwrap();
        assert_eq!(with_seat["seat"], "14C");
    }

    #[test]
    fn test_unsaved_booking_omits_id() {
        let booking = Booking {
            id: None,
            frequent_flyer_id: 12,
            flight_id: 7,
            booking_date: None,
            seat: None,
        };
        let body = serde_json::to_value(&booking).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["frequentFlyerId"], 12);
    }

    #[test]
    fn test_frequent_flyer_date_round_trip() {
        let json = r#"{
            "id": 3, "username": "dana", "firstName": "Dana", "lastName": "Levi",
            "email": "dana@example.com", "dateOfBirth": "1990-05-04T00:00:00"
        }"#;
        let flyer: FrequentFlyer = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(flyer.full_name(), "Dana Levi");

        let out = serde_json::to_value(&flyer).unwrap();
        assert_eq!(out["dateOfBirth"], "1990-05-04");
    }

    #[test]
    fn test_credentials_are_pascal_case() {
        let creds = Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };
        let body = serde_json::to_value(creds).unwrap();
        assert_eq!(body, serde_json::json!({"Username": "admin", "Password": "secret"}));
    }
}
