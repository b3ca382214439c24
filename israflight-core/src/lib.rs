pub mod arrivals;
pub mod eligibility;
pub mod envelope;
pub mod models;
pub mod search;
pub mod ticket;
pub mod timestamp;
pub mod validation;

pub use eligibility::{evaluate, evaluate_arrival, is_restricted, EligibilityResult, RejectionDetails, RejectionReason, RestrictedWindow};
pub use envelope::{format_rejection, parse_error_body, ApiErrorEnvelope, DisplayMessage, RawText};
pub use validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Could not parse {what}: {input}")]
    Parse { what: &'static str, input: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
