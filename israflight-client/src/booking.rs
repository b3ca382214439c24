//! The booking attempt: local eligibility check, submission, and turning
//! whatever comes back into something the user can read.

use std::sync::Arc;

use async_trait::async_trait;
use israflight_core::envelope::{format_rejection, parse_error_body};
use israflight_core::models::{Booking, BookingRequest, Flight};
use israflight_core::validation::require_id;
use israflight_core::{eligibility, DisplayMessage, EligibilityResult, RejectionDetails, RejectionReason};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::resources::{BookingsApi, FlightsApi};

/// The two backend calls a booking attempt needs.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn flight(&self, flight_id: i32) -> Result<Flight, ApiError>;

    async fn submit_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError>;
}

/// [`BookingGateway`] backed by the REST accessors.
pub struct RestBookingGateway {
    flights: FlightsApi,
    bookings: BookingsApi,
}

impl RestBookingGateway {
    pub fn new(flights: FlightsApi, bookings: BookingsApi) -> Self {
        Self { flights, bookings }
    }
}

#[async_trait]
impl BookingGateway for RestBookingGateway {
    async fn flight(&self, flight_id: i32) -> Result<Flight, ApiError> {
        self.flights.get(flight_id).await
    }

    async fn submit_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        self.bookings.create(request).await
    }
}

#[derive(Debug)]
pub enum BookingOutcome {
    Confirmed {
        booking: Booking,
        flight: Flight,
    },
    /// Refused by the local rule or by the backend (4xx).
    Rejected {
        result: EligibilityResult,
        message: DisplayMessage,
    },
    /// Transport trouble, a 5xx, or an unreadable answer.
    Failed {
        error: ApiError,
        message: DisplayMessage,
    },
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed { .. })
    }

    /// What to show the user. Confirmations list the booking and flight ids.
    pub fn message(&self) -> DisplayMessage {
        match self {
            BookingOutcome::Confirmed { booking, .. } => DisplayMessage::new(format!(
                "Booking ID: {}\nFlight: {}",
                booking
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "pending".to_string()),
                booking.flight_id
            )),
            BookingOutcome::Rejected { message, .. } | BookingOutcome::Failed { message, .. } => {
                message.clone()
            }
        }
    }

    fn failed(error: ApiError) -> Self {
        let message = error.display_message();
        BookingOutcome::Failed { error, message }
    }
}

pub struct BookingService {
    gateway: Arc<dyn BookingGateway>,
}

impl BookingService {
    pub fn new(gateway: Arc<dyn BookingGateway>) -> Self {
        Self { gateway }
    }

    /// Runs one booking attempt. Never retries; every path ends in an
    /// outcome carrying user text.
    pub async fn book(&self, request: BookingRequest) -> BookingOutcome {
        if let Err(e) = require_id("traveler", request.frequent_flyer_id)
            .and_then(|_| require_id("flight", request.flight_id))
        {
            return BookingOutcome::failed(ApiError::Validation(e));
        }

        let flight = match self.gateway.flight(request.flight_id).await {
            Ok(flight) => flight,
            Err(e) => {
                warn!(flight_id = request.flight_id, "Could not load flight: {}", e);
                return BookingOutcome::failed(e);
            }
        };

        let result = eligibility::evaluate(&flight.timing());
        if !result.is_allowed() {
            info!(
                flight_id = request.flight_id,
                arrival = %flight.arrival_time,
                "Booking refused locally: arrival inside Shabbat window"
            );
            let message = result.display_message();
            return BookingOutcome::Rejected { result, message };
        }

        match self.gateway.submit_booking(&request).await {
            Ok(booking) => {
                info!(booking_id = ?booking.id, flight_id = booking.flight_id, "Booking confirmed");
                BookingOutcome::Confirmed { booking, flight }
            }
            Err(e) if e.is_client_error() => {
                info!(flight_id = request.flight_id, status = ?e.status(), "Booking refused by backend");
                match e {
                    ApiError::Status { body, .. } => Self::rejection(&body),
                    other => BookingOutcome::failed(other),
                }
            }
            Err(e) => {
                warn!(flight_id = request.flight_id, "Booking failed: {}", e);
                BookingOutcome::failed(e)
            }
        }
    }

    fn rejection(body: &str) -> BookingOutcome {
        match parse_error_body(body) {
            Ok(envelope) => {
                let message = format_rejection(&envelope);
                BookingOutcome::Rejected {
                    result: EligibilityResult::from(envelope),
                    message,
                }
            }
            Err(raw) => {
                let reason = RejectionReason::Backend(Some(raw.as_str().to_string()));
                BookingOutcome::Rejected {
                    result: EligibilityResult::Rejected {
                        reason,
                        details: RejectionDetails::default(),
                    },
                    message: raw.into_display(),
                }
            }
        }
    }
}
