//! Errors raised while submitting the OTP login form.

use reqwest::StatusCode;
use thiserror::Error;

/// Rejections shown to the user through the alert. The `Display` text is the
/// exact message put in `otp-alert-msg`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a otp username")]
    MissingUsername,
    #[error("Please enter a otp passcode")]
    MissingPasscode,
}

/// Failures of the verification request. These are logged, never shown.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode credentials: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("request to server failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server rejected verification with status {0}")]
    Status(StatusCode),
    #[error("server response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_alert_text() {
        assert_eq!(
            ValidationError::MissingUsername.to_string(),
            "Please enter a otp username"
        );
        assert_eq!(
            ValidationError::MissingPasscode.to_string(),
            "Please enter a otp passcode"
        );
    }

    #[test]
    fn status_error_names_the_code() {
        let err = SubmitError::Status(StatusCode::FORBIDDEN);
        assert!(err.to_string().contains("403"));
    }
}
