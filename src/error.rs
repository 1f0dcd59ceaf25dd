//! Submission errors.
//!
//! Field-level validation failures live in `forms::schema::FieldErrors` and
//! never leave the form. Everything that goes wrong after the user presses
//! submit collapses into [`SubmitError`] and is shown as one alert.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Prefix of the blocking alert shown when a submission fails.
pub const ALERT_PREFIX: &str = "Під час надсилання даних сталася помилка: ";

/// Errors produced by a submit attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The pre-send re-validation found invalid fields.
    #[error("дані форми не пройшли перевірку: {0}")]
    Rejected(String),

    /// The request could not be encoded, sent, or its body read.
    #[error("помилка мережі: {0}")]
    Transport(#[from] reqwest::Error),

    /// The auth service answered with a non-success status.
    #[error("запит завершився зі статусом {status}")]
    Status { status: u16 },
}

impl SubmitError {
    /// Text for the user-facing alert.
    #[must_use]
    pub fn alert_message(&self) -> String {
        format!("{ALERT_PREFIX}{self}")
    }
}
