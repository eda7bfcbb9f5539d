//! Contact Form
//!
//! Client-side validation and the simulated submission flow for the
//! "Get in Touch" form. Nothing is sent anywhere: a successful submission
//! just waits out the configured delay and produces a success notice.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ContactConfig;
use crate::delay::Delay;
use crate::error::{Result, SoftSellError};
use crate::notice::Notice;

/// One `@`, no whitespace, and a dot somewhere after the `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Your message has been sent. We'll be in touch soon!";

/// Check an address against the form's email pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Required form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Email,
    Company,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Company => write!(f, "company"),
        }
    }
}

/// Software vendor the visitor wants to sell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseType {
    Microsoft,
    Adobe,
    Oracle,
    #[serde(rename = "SAP")]
    Sap,
    Other,
}

impl LicenseType {
    pub const ALL: [Self; 5] = [Self::Microsoft, Self::Adobe, Self::Oracle, Self::Sap, Self::Other];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Microsoft => "Microsoft",
            Self::Adobe => "Adobe",
            Self::Oracle => "Oracle",
            Self::Sap => "SAP",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseType {
    type Err = SoftSellError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SoftSellError::Config(format!("Unknown license type: {s:?}")))
    }
}

/// Contents of the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub license_type: Option<LicenseType>,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Check required fields, then the email format
    ///
    /// A field counts as missing only when it is empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Company, &self.company),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(SoftSellError::MissingField(*field));
        }

        if !is_valid_email(&self.email) {
            return Err(SoftSellError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Handle for one in-flight submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Submission state for the contact form
#[derive(Debug)]
pub struct ContactDesk {
    config: ContactConfig,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl ContactDesk {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub const fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate the form and start a submission
    ///
    /// On a validation failure the desk stays idle so the visitor can fix
    /// the form and retry; the form itself is left untouched.
    pub fn begin(&mut self, form: &ContactForm) -> Result<SubmissionTicket> {
        if self.in_flight.is_some() {
            return Err(SoftSellError::SubmissionInFlight);
        }

        if let Err(err) = form.validate() {
            tracing::debug!(error = %err, "Contact form rejected");
            return Err(err);
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);

        tracing::info!(ticket = ticket.0, license_type = ?form.license_type, "Contact submission started");
        Ok(ticket)
    }

    /// Finish the in-flight submission
    pub fn finish(&mut self, ticket: SubmissionTicket) -> Result<Notice> {
        match self.in_flight {
            None => Err(SoftSellError::NoSubmission),
            Some(current) if current != ticket => Err(SoftSellError::StaleSubmission {
                got: ticket.0,
                in_flight: current.0,
            }),
            Some(_) => {
                self.in_flight = None;
                tracing::info!(ticket = ticket.0, "Contact submission sent");
                Ok(Notice::success(SUCCESS_MESSAGE))
            }
        }
    }

    /// Abandon the in-flight submission
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        self.in_flight.take()
    }

    /// Run the whole flow: validate, wait, finish
    ///
    /// Always yields the notice to show. The form is reset only on success.
    /// Dropping the future during the wait abandons the submission.
    pub async fn submit(&mut self, form: &mut ContactForm, delay: &dyn Delay) -> Notice {
        let ticket = match self.begin(form) {
            Ok(ticket) => ticket,
            Err(err) => return err.notice(),
        };
        let pause = self.config.submit_delay();

        let mut guard = InFlightGuard {
            desk: &mut *self,
            armed: true,
        };
        delay.wait(pause).await;
        guard.armed = false;
        drop(guard);

        match self.finish(ticket) {
            Ok(notice) => {
                form.reset();
                notice
            }
            Err(err) => err.notice(),
        }
    }
}

/// Cancels the in-flight submission unless disarmed before drop
struct InFlightGuard<'a> {
    desk: &'a mut ContactDesk,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.desk.cancel();
        }
    }
}

impl Default for ContactDesk {
    fn default() -> Self {
        Self::new(ContactConfig::default())
    }
}
