//! Waitlist form submission simulation
//!
//! There is no backend; a valid submission waits out a simulated network
//! delay, logs the signup record, shows a confirmation, and resets the form.

use serde::Serialize;

/// Simulated network latency after a valid submission
pub const SUBMIT_LATENCY_MS: u32 = 1500;

/// How long the success confirmation stays up before the form resets
pub const SUCCESS_RESET_MS: u32 = 3000;

/// How long a validation error stays visible
pub const ERROR_VISIBLE_MS: u32 = 5000;

/// Lifecycle of one waitlist form instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Interactive, waiting for input
    #[default]
    Idle,
    /// Simulated request in flight, control disabled
    Submitting,
    /// Confirmation visible, reset pending
    Success,
}

/// Signup logged to the developer console in place of a real API call.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SignupRecord {
    pub email: String,
    /// Which of the page's forms produced the signup ("hero" or "footer")
    pub source: &'static str,
}

impl SignupRecord {
    pub fn new(email: impl Into<String>, source: &'static str) -> Self {
        Self {
            email: email.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_starts_idle() {
        assert_eq!(FormPhase::default(), FormPhase::Idle);
    }

    #[test]
    fn test_signup_record_serializes_to_json() {
        let record = SignupRecord::new("admin@corp.example.com", "hero");
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(
            json,
            r#"{"email":"admin@corp.example.com","source":"hero"}"#
        );
    }
}
