//! Error Types

use thiserror::Error;

use crate::contact::FormField;
use crate::notice::Notice;

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, SoftSellError>;

/// Landing page error types
///
/// Everything except [`SoftSellError::Config`] and [`SoftSellError::Json`]
/// is a validation rejection: the operation was refused and no state changed.
#[derive(Error, Debug)]
pub enum SoftSellError {
    /// Chat input was empty or whitespace-only
    #[error("Message is empty")]
    EmptyMessage,

    /// A reply is already in flight
    #[error("Reply already pending for ticket {0}")]
    ReplyPending(u64),

    /// Completion fired with nothing pending
    #[error("No reply pending")]
    NoPendingReply,

    /// Completion fired for a ticket that is no longer pending
    #[error("Stale reply ticket {got} (pending: {pending})")]
    StaleReply { got: u64, pending: u64 },

    /// Required contact form field left empty
    #[error("Missing required field: {0}")]
    MissingField(FormField),

    /// Email does not look like an address
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Contact form submitted while a submission is in flight
    #[error("Submission already in flight")]
    SubmissionInFlight,

    /// Submission finished with nothing in flight
    #[error("No submission in flight")]
    NoSubmission,

    /// Submission finished for a ticket that is no longer in flight
    #[error("Stale submission ticket {got} (in flight: {in_flight})")]
    StaleSubmission { got: u64, in_flight: u64 },

    /// Configuration error (e.g. a malformed FAQ table)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SoftSellError {
    /// Check if the error is a user-input rejection rather than a setup fault
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Json(_))
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill in all required fields",
            Self::InvalidEmail(_) => "Please enter a valid email address",
            Self::SubmissionInFlight => "Your message is already being sent.",
            Self::EmptyMessage => "Please type a question first.",
            Self::ReplyPending(_) => "Please wait for the assistant to finish replying.",
            Self::NoPendingReply | Self::StaleReply { .. } => "That reply is no longer needed.",
            Self::NoSubmission | Self::StaleSubmission { .. } => "That submission is no longer in progress.",
            Self::Config(_) | Self::Json(_) => "An unexpected error occurred.",
        }
    }

    /// Toast to show for this error
    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(SoftSellError::EmptyMessage.is_validation());
        assert!(SoftSellError::MissingField(FormField::Name).is_validation());
        assert!(!SoftSellError::Config("bad".into()).is_validation());
    }

    #[test]
    fn test_every_variant_has_text() {
        let generic = "An unexpected error occurred.";
        assert_ne!(SoftSellError::NoPendingReply.user_message(), generic);
        assert_ne!(SoftSellError::StaleReply { got: 1, pending: 2 }.user_message(), generic);
        assert_ne!(SoftSellError::NoSubmission.user_message(), generic);
        assert_ne!(SoftSellError::StaleSubmission { got: 1, in_flight: 2 }.user_message(), generic);
        assert_eq!(SoftSellError::Config("bad".into()).user_message(), generic);
    }

    #[test]
    fn test_notice_text() {
        let notice = SoftSellError::InvalidEmail("x".into()).notice();
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description, "Please enter a valid email address");
    }
}
