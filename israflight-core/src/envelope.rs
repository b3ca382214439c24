//! The backend's JSON error body and how it is turned into text for the user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown when a failure carries nothing more specific.
pub const GENERIC_BOOKING_FAILURE: &str = "Booking failed";

/// Error body returned by the backend when it refuses a request.
///
/// Every field is optional. The observance line is only rendered when
/// `parasha`, `shabbat_entry` and `shabbat_exit` are all present; entry and
/// exit are opaque strings and are shown exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parasha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shabbat_entry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shabbat_exit: Option<String>,
}

impl ApiErrorEnvelope {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// The `(parasha, entry, exit)` triple, only when all three are present.
    pub fn observance(&self) -> Option<(&str, &str, &str)> {
        match (&self.parasha, &self.shabbat_entry, &self.shabbat_exit) {
            (Some(parasha), Some(entry), Some(exit)) => {
                Some((parasha.as_str(), entry.as_str(), exit.as_str()))
            }
            _ => None,
        }
    }
}

/// A failure body that was not a JSON error envelope, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText(pub String);

impl RawText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_display(self) -> DisplayMessage {
        if self.0.trim().is_empty() {
            return DisplayMessage::new(GENERIC_BOOKING_FAILURE);
        }
        DisplayMessage(self.0)
    }
}

/// Plain, possibly multi-line, text for a dialog or terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage(String);

impl DisplayMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for DisplayMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DisplayMessage> for String {
    fn from(message: DisplayMessage) -> Self {
        message.0
    }
}

/// Decodes a failure body. Anything that is not a JSON object with the
/// envelope's field types comes back as `Err(RawText)`.
pub fn parse_error_body(text: &str) -> Result<ApiErrorEnvelope, RawText> {
    serde_json::from_str::<ApiErrorEnvelope>(text).map_err(|_| RawText(text.to_string()))
}

/// Renders the observance window line. `parasha` is omitted when the window
/// was computed locally.
pub(crate) fn observance_line(parasha: Option<&str>, entry: &str, exit: &str) -> String {
    match parasha {
        Some(parasha) => format!("Parasha: {parasha} | Shabbat: {entry} \u{2192} {exit}"),
        None => format!("Shabbat: {entry} \u{2192} {exit}"),
    }
}

pub fn format_rejection(envelope: &ApiErrorEnvelope) -> DisplayMessage {
    let mut text = envelope
        .message
        .as_deref()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(GENERIC_BOOKING_FAILURE)
        .to_string();

    if let Some((parasha, entry, exit)) = envelope.observance() {
        text.push('\n');
        text.push_str(&observance_line(Some(parasha), entry, exit));
    }

    DisplayMessage(text)
}

/// Full path from a failure body to user text: envelope when it parses, the
/// raw body otherwise.
pub fn display_failure_body(text: &str) -> DisplayMessage {
    match parse_error_body(text) {
        Ok(envelope) => format_rejection(&envelope),
        Err(raw) => raw.into_display(),
    }
}
