//! Shabbat landing restriction.
//!
//! The client decides from the arrival timestamp alone: Friday from 18:00
//! through the end of Saturday is restricted. No timezone conversion and no
//! calendar lookup happen here; the backend runs its own calendar check and
//! reports its findings through [`ApiErrorEnvelope`].

use std::fmt;

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike, Weekday};
use tracing::debug;

use crate::envelope::{observance_line, ApiErrorEnvelope, DisplayMessage, GENERIC_BOOKING_FAILURE};
use crate::models::FlightTiming;

/// Hour on Friday from which arrivals are refused.
pub const SHABBAT_ENTRY_HOUR: u32 = 18;

const SHABBAT_LANDING_MESSAGE: &str = "Flight arrival time is on shabbat";
const WINDOW_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn is_restricted(arrival: &NaiveDateTime) -> bool {
    match arrival.weekday() {
        Weekday::Fri => arrival.hour() >= SHABBAT_ENTRY_HOUR,
        Weekday::Sat => true,
        _ => false,
    }
}

/// `[entry, exit)` bounds, kept as display strings because backend-supplied
/// windows are opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictedWindow {
    pub entry: String,
    pub exit: String,
}

impl RestrictedWindow {
    /// The Friday 18:00 to Sunday 00:00 window containing `arrival`, if any.
    pub fn containing(arrival: &NaiveDateTime) -> Option<Self> {
        if !is_restricted(arrival) {
            return None;
        }

        let date = arrival.date();
        let friday = match date.weekday() {
            Weekday::Sat => date - Duration::days(1),
            _ => date,
        };
        let entry = friday.and_time(NaiveTime::MIN) + Duration::hours(i64::from(SHABBAT_ENTRY_HOUR));
        let exit = (friday + Duration::days(2)).and_time(NaiveTime::MIN);

        Some(Self {
            entry: entry.format(WINDOW_FORMAT).to_string(),
            exit: exit.format(WINDOW_FORMAT).to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Refused locally before anything was sent.
    ShabbatArrival,
    /// Refused by the backend, with its message if it sent one.
    Backend(Option<String>),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::ShabbatArrival => f.write_str(SHABBAT_LANDING_MESSAGE),
            RejectionReason::Backend(Some(message)) if !message.trim().is_empty() => {
                f.write_str(message)
            }
            RejectionReason::Backend(_) => f.write_str(GENERIC_BOOKING_FAILURE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionDetails {
    pub parasha: Option<String>,
    pub window: Option<RestrictedWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityResult {
    Allowed,
    Rejected {
        reason: RejectionReason,
        details: RejectionDetails,
    },
}

impl EligibilityResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, EligibilityResult::Allowed)
    }

    pub fn display_message(&self) -> DisplayMessage {
        let (reason, details) = match self {
            EligibilityResult::Allowed => return DisplayMessage::new("Booking allowed"),
            EligibilityResult::Rejected { reason, details } => (reason, details),
        };

        let mut text = reason.to_string();
        let line = match (&details.parasha, &details.window, reason) {
            (Some(parasha), Some(window), _) => {
                Some(observance_line(Some(parasha), &window.entry, &window.exit))
            }
            (None, Some(window), RejectionReason::ShabbatArrival) => {
                Some(observance_line(None, &window.entry, &window.exit))
            }
            _ => None,
        };
        if let Some(line) = line {
            text.push('\n');
            text.push_str(&line);
        }

        DisplayMessage::new(text)
    }
}

impl From<ApiErrorEnvelope> for EligibilityResult {
    fn from(envelope: ApiErrorEnvelope) -> Self {
        let window = match (envelope.shabbat_entry, envelope.shabbat_exit) {
            (Some(entry), Some(exit)) => Some(RestrictedWindow { entry, exit }),
            _ => None,
        };

        EligibilityResult::Rejected {
            reason: RejectionReason::Backend(envelope.message),
            details: RejectionDetails {
                parasha: envelope.parasha,
                window,
            },
        }
    }
}

/// Decision for a bare arrival time, with the local window attached on
/// refusal.
pub fn evaluate_arrival(arrival: &NaiveDateTime) -> EligibilityResult {
    if !is_restricted(arrival) {
        return EligibilityResult::Allowed;
    }

    let window = RestrictedWindow::containing(arrival);
    debug!(%arrival, entry = ?window.as_ref().map(|w| &w.entry), "Arrival falls in restricted window");
    EligibilityResult::Rejected {
        reason: RejectionReason::ShabbatArrival,
        details: RejectionDetails {
            parasha: None,
            window,
        },
    }
}

/// Only the arrival matters; departure is carried for callers that log it.
pub fn evaluate(timing: &FlightTiming) -> EligibilityResult {
    evaluate_arrival(&timing.arrival)
}
