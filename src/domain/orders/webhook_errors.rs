//! Webhook processing error types.

use thiserror::Error;

/// Errors raised while verifying or parsing a Yampi webhook delivery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// The signature header was absent from the request.
    #[error("Missing signature header")]
    MissingSignature,

    /// The signature did not match the payload.
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// The header or payload could not be parsed.
    #[error("Webhook parse error: {0}")]
    ParseError(String),
}

impl WebhookError {
    /// Creates a parse error with a message.
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_error_displays_messages() {
        assert_eq!(
            format!("{}", WebhookError::MissingSignature),
            "Missing signature header"
        );
        assert_eq!(
            format!("{}", WebhookError::parse_error("bad json")),
            "Webhook parse error: bad json"
        );
    }
}
